use std::io::Write;

use chrono::{DateTime, Utc};
use tracing::debug;
use validator::Validate;

use crate::api::output::{render, OutputFormat, RenderOptions};
use crate::core::persistence::meta::meta_api_repository_trait::MetaApiRepository;
use crate::core::persistence::meta::meta_repository::MetaRepository;
use crate::domain::get::dto::get_request::GetRequest;
use crate::errors::{AppError, AppResult};

use super::query_service::{query_resources, QueryScope};
use super::resource_type::ResourceType;
use super::selector_service::{apply_selector, parse_selector, SelectorClause};

/// A validated `get` invocation.
#[derive(Debug, Clone)]
pub struct GetPlan {
    pub resource_type: ResourceType,
    pub names: Vec<String>,
    /// `None` when no selector was given.
    pub selector: Option<Vec<SelectorClause>>,
    pub render: RenderOptions,
}

/// Validates `request`, opens its store and writes the result to `out`.
pub fn execute_get<W: Write>(request: GetRequest, out: &mut W, now: DateTime<Utc>) -> AppResult<()> {
    let (repo, plan) = prepare_get(request, now)?;
    execute_get_with_repo(&repo, &plan, out)
}

/// Checks options in a fixed order; the first failure wins.
///
/// The store is opened here so that a bad path is reported before the
/// output format is looked at.
pub fn prepare_get(request: GetRequest, now: DateTime<Utc>) -> AppResult<(MetaRepository, GetPlan)> {
    let alias = request
        .resource_type
        .as_deref()
        .filter(|t| !t.is_empty())
        .ok_or(AppError::MissingResourceType)?;
    let resource_type = ResourceType::from_alias(alias)?;

    request
        .validate()
        .map_err(|e| AppError::InvalidArgument(e.to_string()))?;

    if !request.input.exists() {
        return Err(AppError::StoreUnavailable(format!(
            "{} does not exist",
            request.input.display()
        )));
    }
    let repo = MetaRepository::open(&request.input)?;

    let format = OutputFormat::parse(&request.output)?;

    if resource_type.is_all() && !request.names.is_empty() {
        return Err(AppError::MultipleNamesWithAllType);
    }

    let selector = match request.selector.as_deref().map(str::trim) {
        Some(expr) if !expr.is_empty() => Some(parse_selector(expr)?),
        _ => None,
    };

    debug!(
        "Prepared get of {} from {} (format: {})",
        resource_type,
        request.input.display(),
        format
    );

    let plan = GetPlan {
        resource_type,
        names: request.names,
        selector,
        render: RenderOptions {
            format,
            namespace: request.namespace,
            all_namespaces: request.all_namespaces,
            now,
        },
    };
    Ok((repo, plan))
}

pub fn execute_get_with_repo<R: MetaApiRepository + ?Sized, W: Write>(
    repo: &R,
    plan: &GetPlan,
    out: &mut W,
) -> AppResult<()> {
    let scope = QueryScope {
        namespace: &plan.render.namespace,
        all_namespaces: plan.render.all_namespaces,
    };
    let mut records = query_resources(repo, plan.resource_type, &plan.names, scope)?;

    if let Some(clauses) = &plan.selector {
        let before = records.len();
        records = apply_selector(records, clauses)?;
        debug!("Selector kept {} of {} record(s)", records.len(), before);
    }

    render(&records, &plan.render, out)
}
