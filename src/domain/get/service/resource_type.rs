use std::fmt;

use crate::core::resource::resource_kind::ResourceKind;
use crate::errors::{AppError, AppResult};

/// Alias of the pseudo-type that expands to every supported kind.
pub const ALL_ALIAS: &str = "all";

/// Kinds queried for `all`, in query order.
pub const ALL_EXPANSION: [ResourceKind; 6] = [
    ResourceKind::Pod,
    ResourceKind::Node,
    ResourceKind::ConfigMap,
    ResourceKind::Secret,
    ResourceKind::Endpoints,
    ResourceKind::Service,
];

/// Resource type as requested on the command line, after alias resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceType {
    All,
    Kind(ResourceKind),
}

impl ResourceType {
    pub fn from_alias(alias: &str) -> AppResult<Self> {
        let kind = match alias {
            ALL_ALIAS => return Ok(ResourceType::All),
            "po" | "pod" | "pods" => ResourceKind::Pod,
            "no" | "node" | "nodes" => ResourceKind::Node,
            "svc" | "service" | "services" => ResourceKind::Service,
            "secret" | "secrets" => ResourceKind::Secret,
            "cm" | "configmap" | "configmaps" => ResourceKind::ConfigMap,
            "ep" | "endpoint" | "endpoints" => ResourceKind::Endpoints,
            other => return Err(AppError::UnrecognizedResourceType(other.to_string())),
        };
        Ok(ResourceType::Kind(kind))
    }

    pub fn is_all(&self) -> bool {
        matches!(self, ResourceType::All)
    }

    /// Concrete kinds to query, in query order.
    pub fn kinds(&self) -> Vec<ResourceKind> {
        match self {
            ResourceType::All => ALL_EXPANSION.to_vec(),
            ResourceType::Kind(kind) => vec![*kind],
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceType::All => f.write_str(ALL_ALIAS),
            ResourceType::Kind(kind) => write!(f, "{}", kind),
        }
    }
}
