//! Maps decoded store documents → the two typed projections.
//!
//! Each function reads the same named sections of a [`SourceDocument`]:
//! `metadata`, plus `spec`/`status` (Pod, Service, Node), `data`/`type`
//! (Secret), `data` (ConfigMap) or `subsets` (Endpoints).

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use tracing::trace;

use crate::errors::AppResult;

use super::complete::CompleteResource;
use super::kube_resources::{
    ByteString, ConfigMap, EndpointSubset, Endpoints, Node, NodeSpec, NodeStatus, ObjectMeta, Pod,
    PodSpec, PodStatus, Secret, Service, ServiceSpec, ServiceStatus,
};
use super::resource_kind::ResourceKind;
use super::source_document::{SourceDocument, API_VERSION_V1};
use super::summary::{
    ConfigMapSummary, EndpointsSummary, NodeSummary, PodSummary, SecretSummary, ServiceSummary,
    SummaryResource,
};

/// Decodes a section into its lean form after checking it against the full
/// k8s-openapi type `F`, so a section the complete pass rejects is rejected
/// here as well.
fn lean_section<F, T>(doc: &SourceDocument, name: &str) -> AppResult<T>
where
    F: DeserializeOwned,
    T: DeserializeOwned + Default,
{
    doc.section::<F>(name)?;
    doc.section_or_default(name)
}

/// Builds the minimal projection used to compute table columns.
pub fn map_document_to_summary(doc: &SourceDocument) -> AppResult<SummaryResource> {
    let api_version = API_VERSION_V1.to_string();
    let kind = doc.kind().as_str().to_string();
    let metadata = lean_section::<ObjectMeta, _>(doc, "metadata")?;

    let summary = match doc.kind() {
        ResourceKind::Pod => SummaryResource::Pod(PodSummary {
            api_version,
            kind,
            metadata,
            spec: lean_section::<PodSpec, _>(doc, "spec")?,
            status: lean_section::<PodStatus, _>(doc, "status")?,
        }),
        ResourceKind::Service => SummaryResource::Service(ServiceSummary {
            api_version,
            kind,
            metadata,
            spec: lean_section::<ServiceSpec, _>(doc, "spec")?,
            status: lean_section::<ServiceStatus, _>(doc, "status")?,
        }),
        ResourceKind::Secret => SummaryResource::Secret(SecretSummary {
            api_version,
            kind,
            metadata,
            data: lean_section::<BTreeMap<String, ByteString>, _>(doc, "data")?,
            type_: doc.section("type")?,
        }),
        ResourceKind::ConfigMap => SummaryResource::ConfigMap(ConfigMapSummary {
            api_version,
            kind,
            metadata,
            data: doc.section_or_default("data")?,
        }),
        ResourceKind::Endpoints => SummaryResource::Endpoints(EndpointsSummary {
            api_version,
            kind,
            metadata,
            subsets: lean_section::<Vec<EndpointSubset>, _>(doc, "subsets")?,
        }),
        ResourceKind::Node => SummaryResource::Node(NodeSummary {
            api_version,
            kind,
            metadata,
            spec: lean_section::<NodeSpec, _>(doc, "spec")?,
            status: lean_section::<NodeStatus, _>(doc, "status")?,
        }),
    };

    trace!("Mapped {} to summary projection", doc.key());
    Ok(summary)
}

/// Builds the complete k8s-openapi projection used for JSON/YAML output.
pub fn map_document_to_complete(doc: &SourceDocument) -> AppResult<CompleteResource> {
    let metadata = doc.section_or_default("metadata")?;

    let complete = match doc.kind() {
        ResourceKind::Pod => CompleteResource::Pod(Pod {
            metadata,
            spec: doc.section("spec")?,
            status: doc.section("status")?,
        }),
        ResourceKind::Service => CompleteResource::Service(Service {
            metadata,
            spec: doc.section("spec")?,
            status: doc.section("status")?,
        }),
        ResourceKind::Secret => CompleteResource::Secret(Secret {
            metadata,
            data: doc.section("data")?,
            type_: doc.section("type")?,
            ..Default::default()
        }),
        ResourceKind::ConfigMap => CompleteResource::ConfigMap(ConfigMap {
            metadata,
            data: doc.section("data")?,
            ..Default::default()
        }),
        ResourceKind::Endpoints => CompleteResource::Endpoints(Endpoints {
            metadata,
            subsets: doc.section("subsets")?,
        }),
        ResourceKind::Node => CompleteResource::Node(Node {
            metadata,
            spec: doc.section("spec")?,
            status: doc.section("status")?,
        }),
    };

    trace!("Mapped {} to complete projection", doc.key());
    Ok(complete)
}
