//! Minimal projections of stored documents.
//!
//! These carry only the fields needed to compute table columns. They are
//! decoded from the same [`SourceDocument`](super::source_document::SourceDocument)
//! sections as the complete k8s-openapi types, and must agree with them on
//! every field they share.

pub mod meta_summary;
pub mod pod_summary;
pub mod service_summary;
pub mod secret_summary;
pub mod config_map_summary;
pub mod endpoints_summary;
pub mod node_summary;

use chrono::{DateTime, Utc};

use super::resource_kind::ResourceKind;
use meta_summary::MetaSummary;

pub use config_map_summary::ConfigMapSummary;
pub use endpoints_summary::EndpointsSummary;
pub use node_summary::NodeSummary;
pub use pod_summary::PodSummary;
pub use secret_summary::SecretSummary;
pub use service_summary::ServiceSummary;

#[derive(Debug, Clone, PartialEq)]
pub enum SummaryResource {
    Pod(PodSummary),
    Service(ServiceSummary),
    Secret(SecretSummary),
    ConfigMap(ConfigMapSummary),
    Endpoints(EndpointsSummary),
    Node(NodeSummary),
}

impl SummaryResource {
    pub fn metadata(&self) -> &MetaSummary {
        match self {
            SummaryResource::Pod(r) => &r.metadata,
            SummaryResource::Service(r) => &r.metadata,
            SummaryResource::Secret(r) => &r.metadata,
            SummaryResource::ConfigMap(r) => &r.metadata,
            SummaryResource::Endpoints(r) => &r.metadata,
            SummaryResource::Node(r) => &r.metadata,
        }
    }

    /// Row cells in the order of [`headers`].
    pub fn columns(&self, now: DateTime<Utc>) -> Vec<String> {
        match self {
            SummaryResource::Pod(r) => r.columns(now),
            SummaryResource::Service(r) => r.columns(now),
            SummaryResource::Secret(r) => r.columns(now),
            SummaryResource::ConfigMap(r) => r.columns(now),
            SummaryResource::Endpoints(r) => r.columns(now),
            SummaryResource::Node(r) => r.columns(now),
        }
    }
}

/// Column headers of the table for one kind.
pub fn headers(kind: ResourceKind) -> &'static [&'static str] {
    match kind {
        ResourceKind::Pod => PodSummary::HEADERS,
        ResourceKind::Service => ServiceSummary::HEADERS,
        ResourceKind::Secret => SecretSummary::HEADERS,
        ResourceKind::ConfigMap => ConfigMapSummary::HEADERS,
        ResourceKind::Endpoints => EndpointsSummary::HEADERS,
        ResourceKind::Node => NodeSummary::HEADERS,
    }
}

/// Placeholder for an empty cell.
pub(crate) const NONE: &str = "<none>";
