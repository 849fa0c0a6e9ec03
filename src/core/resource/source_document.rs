use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::core::persistence::meta::meta_entity::MetaEntity;
use crate::errors::{decode_error, AppError, AppResult};

use super::resource_kind::ResourceKind;

/// API version stamped on every reconstructed object.
pub const API_VERSION_V1: &str = "v1";

/// Generic decoded form of a stored record.
///
/// Both typed projections are built from this, one section at a time, so a
/// section that is never read cannot fail decoding of the others.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    kind: ResourceKind,
    key: String,
    body: Map<String, Value>,
}

impl SourceDocument {
    pub fn from_entity(entity: &MetaEntity) -> AppResult<Self> {
        let kind = ResourceKind::from_record_type(&entity.type_)?;
        let body = parse_object(&entity.value)
            .map_err(|e| AppError::DecodeError(format!("{}: {}", entity.key, e)))?;

        Ok(Self {
            kind,
            key: entity.key.clone(),
            body,
        })
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Decodes one top-level section; absent and `null` sections yield `None`.
    pub fn section<T: DeserializeOwned>(&self, name: &str) -> AppResult<Option<T>> {
        match self.body.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(raw) => serde_json::from_value(raw.clone()).map(Some).map_err(|e| {
                AppError::DecodeError(format!("{} section of {}: {}", name, self.key, e))
            }),
        }
    }

    pub fn section_or_default<T: DeserializeOwned + Default>(&self, name: &str) -> AppResult<T> {
        Ok(self.section(name)?.unwrap_or_default())
    }
}

/// Parses a stored document, which must be a JSON object.
pub fn parse_object(value: &str) -> AppResult<Map<String, Value>> {
    match serde_json::from_str::<Value>(value) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(AppError::DecodeError(format!(
            "expected a JSON object, found {}",
            json_type_name(&other)
        ))),
        Err(e) => Err(decode_error(e)),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
