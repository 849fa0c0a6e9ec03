use std::path::Path;

use crate::errors::AppResult;

use super::meta_api_repository_trait::MetaApiRepository;
use super::meta_fs_adapter::MetaFsAdapter;
use super::meta_fs_adapter_trait::MetaFsAdapterTrait;

pub struct MetaRepository {
    adapter: MetaFsAdapter,
}

impl MetaRepository {
    /// Opens the snapshot at `path`; the handle lives as long as the repository.
    pub fn open(path: &Path) -> AppResult<Self> {
        Ok(Self {
            adapter: MetaFsAdapter::open(path)?,
        })
    }
}

impl MetaApiRepository for MetaRepository {
    fn fs_adapter(&self) -> &dyn MetaFsAdapterTrait {
        &self.adapter
    }
}
