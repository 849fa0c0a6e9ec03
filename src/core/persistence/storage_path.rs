use std::env;
use std::path::PathBuf;

/// Environment variable that overrides the default snapshot location.
pub const STORE_PATH_ENV: &str = "METAVIEW_STORE_PATH";

/// Snapshot written by the edge agent's metadata manager.
pub const DEFAULT_STORE_PATH: &str = "/var/lib/kubeedge/meta.jsonl";

/// Resolves the metadata snapshot path (`METAVIEW_STORE_PATH` or the default).
pub fn meta_store_path() -> PathBuf {
    env::var(STORE_PATH_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH))
}
