use serde_json::Value;
use tracing::debug;

use crate::core::persistence::meta::meta_api_repository_trait::MetaApiRepository;
use crate::core::persistence::meta::meta_entity::MetaEntity;
use crate::core::resource::resource_key::{substitute_type_segment, ResourceKey};
use crate::core::resource::resource_kind::ResourceKind;
use crate::core::resource::source_document::parse_object;
use crate::errors::{AppError, AppResult};

use super::resource_type::ResourceType;

/// Namespace scoping applied while scanning.
#[derive(Debug, Clone, Copy)]
pub struct QueryScope<'a> {
    pub namespace: &'a str,
    pub all_namespaces: bool,
}

impl QueryScope<'_> {
    fn admits(&self, key: &ResourceKey<'_>) -> bool {
        self.all_namespaces || key.namespace == self.namespace
    }
}

/// Loads every record of `resource_type` visible in `scope` whose key
/// contains one of `names` (all records when `names` is empty).
///
/// Pods and nodes come back with their status record merged in.
pub fn query_resources<R: MetaApiRepository + ?Sized>(
    repo: &R,
    resource_type: ResourceType,
    names: &[String],
    scope: QueryScope<'_>,
) -> AppResult<Vec<MetaEntity>> {
    let mut records = Vec::new();

    for kind in resource_type.kinds() {
        let found = query_kind(repo, kind, names, scope)?;
        debug!("Found {} {} record(s)", found.len(), kind);
        records.extend(found);
    }

    Ok(records)
}

fn query_kind<R: MetaApiRepository + ?Sized>(
    repo: &R,
    kind: ResourceKind,
    names: &[String],
    scope: QueryScope<'_>,
) -> AppResult<Vec<MetaEntity>> {
    let mut selected = Vec::new();

    for entity in repo.scan_by_type(kind.as_str())? {
        let key = ResourceKey::parse(&entity.key)?;
        if !scope.admits(&key) || !name_matches(names, &entity.key) {
            continue;
        }

        let entity = match kind.status_type() {
            Some(status_type) => merge_status(repo, kind, status_type, entity)?,
            None => entity,
        };
        selected.push(entity);
    }

    Ok(selected)
}

/// Substring match against the full key; no names selects everything.
pub fn name_matches(names: &[String], key: &str) -> bool {
    names.is_empty() || names.iter().any(|name| key.contains(name.as_str()))
}

/// Replaces the base document's `status` with the one from its status record.
///
/// Without a status record the base row is returned untouched.
fn merge_status<R: MetaApiRepository + ?Sized>(
    repo: &R,
    kind: ResourceKind,
    status_type: &str,
    base: MetaEntity,
) -> AppResult<MetaEntity> {
    let status_key = substitute_type_segment(&base.key, kind.as_str(), status_type);
    let Some(status_record) = repo.get_by_key(&status_key)? else {
        return Ok(base);
    };

    let mut document = parse_object(&base.value)
        .map_err(|e| AppError::DecodeError(format!("{}: {}", base.key, e)))?;
    let mut status_document = parse_object(&status_record.value)
        .map_err(|e| AppError::DecodeError(format!("{}: {}", status_key, e)))?;

    let status = status_document.remove("status").unwrap_or(Value::Null);
    document.insert("status".to_string(), status);

    let value = serde_json::to_string(&Value::Object(document))
        .map_err(|e| AppError::DecodeError(format!("{}: {}", base.key, e)))?;

    debug!("Merged status record {} into {}", status_key, base.key);
    Ok(base.with_value(value))
}
