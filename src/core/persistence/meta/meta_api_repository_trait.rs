use crate::errors::AppResult;

use super::meta_entity::MetaEntity;
use super::meta_fs_adapter_trait::MetaFsAdapterTrait;

/// Query-facing repository abstraction for the metadata store.
pub trait MetaApiRepository {
    fn fs_adapter(&self) -> &dyn MetaFsAdapterTrait;

    fn scan_by_type(&self, type_: &str) -> AppResult<Vec<MetaEntity>> {
        self.fs_adapter().scan_by_type(type_)
    }

    fn get_by_key(&self, key: &str) -> AppResult<Option<MetaEntity>> {
        self.fs_adapter().get_by_key(key)
    }
}
