pub mod get_service;
pub mod query_service;
pub mod reconstruct_service;
pub mod resource_type;
pub mod selector_service;
