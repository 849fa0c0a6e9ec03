/// Re-export the k8s-openapi types used as the complete projection of
/// stored documents, so the rest of the crate has one place to import from.

pub use k8s_openapi::api::core::v1::{
    ConfigMap,
    EndpointSubset,
    Endpoints,
    Node,
    NodeSpec,
    NodeStatus,
    Pod,
    PodSpec,
    PodStatus,
    Secret,
    Service,
    ServiceSpec,
    ServiceStatus,
};

pub use k8s_openapi::apimachinery::pkg::apis::meta::v1::{
    ListMeta,
    ObjectMeta,
};

pub use k8s_openapi::ByteString;
