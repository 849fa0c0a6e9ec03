pub mod meta;
pub mod storage_path;
