use kube::core::{DynamicObject, TypeMeta};
use kube::{Resource, ResourceExt};
use serde_json::Value;

use crate::errors::{output_error, AppResult};

use super::kube_resources::{ConfigMap, Endpoints, Node, ObjectMeta, Pod, Secret, Service};
use super::resource_kind::ResourceKind;
use super::source_document::API_VERSION_V1;

/// Complete projection of a stored document, used for JSON/YAML output.
#[derive(Debug, Clone, PartialEq)]
pub enum CompleteResource {
    Pod(Pod),
    Service(Service),
    Secret(Secret),
    ConfigMap(ConfigMap),
    Endpoints(Endpoints),
    Node(Node),
}

impl CompleteResource {
    pub fn kind(&self) -> ResourceKind {
        match self {
            CompleteResource::Pod(_) => ResourceKind::Pod,
            CompleteResource::Service(_) => ResourceKind::Service,
            CompleteResource::Secret(_) => ResourceKind::Secret,
            CompleteResource::ConfigMap(_) => ResourceKind::ConfigMap,
            CompleteResource::Endpoints(_) => ResourceKind::Endpoints,
            CompleteResource::Node(_) => ResourceKind::Node,
        }
    }

    pub fn metadata(&self) -> &ObjectMeta {
        match self {
            CompleteResource::Pod(r) => r.meta(),
            CompleteResource::Service(r) => r.meta(),
            CompleteResource::Secret(r) => r.meta(),
            CompleteResource::ConfigMap(r) => r.meta(),
            CompleteResource::Endpoints(r) => r.meta(),
            CompleteResource::Node(r) => r.meta(),
        }
    }

    pub fn name(&self) -> String {
        match self {
            CompleteResource::Pod(r) => r.name_any(),
            CompleteResource::Service(r) => r.name_any(),
            CompleteResource::Secret(r) => r.name_any(),
            CompleteResource::ConfigMap(r) => r.name_any(),
            CompleteResource::Endpoints(r) => r.name_any(),
            CompleteResource::Node(r) => r.name_any(),
        }
    }

    /// Version marker and kind label stamped on output: `v1` and the record type.
    pub fn type_meta(&self) -> TypeMeta {
        TypeMeta {
            api_version: API_VERSION_V1.to_string(),
            kind: self.kind().as_str().to_string(),
        }
    }

    /// Flattens the typed object into a generic object carrying the stamped
    /// type fields, so printers do not depend on the typed field layout.
    pub fn to_dynamic(&self) -> AppResult<DynamicObject> {
        let value = match self {
            CompleteResource::Pod(r) => serde_json::to_value(r),
            CompleteResource::Service(r) => serde_json::to_value(r),
            CompleteResource::Secret(r) => serde_json::to_value(r),
            CompleteResource::ConfigMap(r) => serde_json::to_value(r),
            CompleteResource::Endpoints(r) => serde_json::to_value(r),
            CompleteResource::Node(r) => serde_json::to_value(r),
        }
        .map_err(output_error)?;

        let mut body = match value {
            Value::Object(map) => map,
            _ => serde_json::Map::new(),
        };
        body.remove("apiVersion");
        body.remove("kind");
        body.remove("metadata");

        Ok(DynamicObject {
            types: Some(self.type_meta()),
            metadata: self.metadata().clone(),
            data: Value::Object(body),
        })
    }
}
