pub mod kube_resources;
pub mod resource_kind;
pub mod resource_key;
pub mod source_document;
pub mod summary;
pub mod complete;
pub mod mappers;
pub mod kind_groups;
