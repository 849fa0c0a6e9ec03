pub mod meta_entity;
pub mod meta_fs_adapter_trait;
pub mod meta_fs_adapter;
pub mod meta_api_repository_trait;
pub mod meta_repository;
