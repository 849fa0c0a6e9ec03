use std::fmt;

use crate::errors::{AppError, AppResult};

/// Resource kinds held in the edge metadata store.
///
/// Declaration order is the render order of multi-kind output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResourceKind {
    Pod,
    Service,
    Secret,
    ConfigMap,
    Endpoints,
    Node,
}

impl ResourceKind {
    pub const RENDER_ORDER: [ResourceKind; 6] = [
        ResourceKind::Pod,
        ResourceKind::Service,
        ResourceKind::Secret,
        ResourceKind::ConfigMap,
        ResourceKind::Endpoints,
        ResourceKind::Node,
    ];

    /// Record `type` tag used by the store.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Pod => "pod",
            ResourceKind::Service => "service",
            ResourceKind::Secret => "secret",
            ResourceKind::ConfigMap => "configmap",
            ResourceKind::Endpoints => "endpoints",
            ResourceKind::Node => "node",
        }
    }

    pub fn from_record_type(type_: &str) -> AppResult<Self> {
        match type_ {
            "pod" => Ok(ResourceKind::Pod),
            "service" => Ok(ResourceKind::Service),
            "secret" => Ok(ResourceKind::Secret),
            "configmap" => Ok(ResourceKind::ConfigMap),
            "endpoints" => Ok(ResourceKind::Endpoints),
            "node" => Ok(ResourceKind::Node),
            other => Err(AppError::UnrecognizedResourceType(other.to_string())),
        }
    }

    /// Type tag of the separately stored status record, for kinds that have one.
    pub fn status_type(&self) -> Option<&'static str> {
        match self {
            ResourceKind::Pod => Some("podstatus"),
            ResourceKind::Node => Some("nodestatus"),
            _ => None,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
