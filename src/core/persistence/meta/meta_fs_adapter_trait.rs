use crate::errors::AppResult;

use super::meta_entity::MetaEntity;

/// Read-only access to the persisted metadata rows.
pub trait MetaFsAdapterTrait {
    /// All rows of the given `type`, in store order.
    fn scan_by_type(&self, type_: &str) -> AppResult<Vec<MetaEntity>>;

    /// The row stored under `key`, if any.
    fn get_by_key(&self, key: &str) -> AppResult<Option<MetaEntity>>;
}
