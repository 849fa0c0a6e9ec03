use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use tracing::debug;

use crate::errors::{AppError, AppResult};

use super::meta_entity::MetaEntity;
use super::meta_fs_adapter_trait::MetaFsAdapterTrait;

/// FS adapter for a metadata store snapshot.
///
/// The snapshot is a JSON Lines file, one `{"key", "type", "value"}` object
/// per line. It is read once on open and never written.
pub struct MetaFsAdapter {
    rows: Vec<MetaEntity>,
}

impl MetaFsAdapter {
    pub fn open(path: &Path) -> AppResult<Self> {
        let file = File::open(path).map_err(|e| {
            AppError::StoreUnavailable(format!("failed to open {}: {}", path.display(), e))
        })?;
        let is_file = file.metadata().map(|m| m.is_file()).map_err(|e| {
            AppError::StoreUnavailable(format!("failed to stat {}: {}", path.display(), e))
        })?;
        if !is_file {
            return Err(AppError::StoreUnavailable(format!(
                "{} is not a regular file",
                path.display()
            )));
        }

        let rows = Self::read_rows(BufReader::new(file), path)?;

        debug!("Loaded {} metadata row(s) from {}", rows.len(), path.display());
        Ok(Self { rows })
    }

    fn read_rows<R: BufRead>(reader: R, path: &Path) -> AppResult<Vec<MetaEntity>> {
        let mut rows = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                AppError::StoreError(format!("failed to read {}: {}", path.display(), e))
            })?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let row: MetaEntity = serde_json::from_str(line).map_err(|e| {
                AppError::StoreError(format!(
                    "malformed row at {}:{}: {}",
                    path.display(),
                    idx + 1,
                    e
                ))
            })?;
            rows.push(row);
        }

        Ok(rows)
    }
}

impl MetaFsAdapterTrait for MetaFsAdapter {
    fn scan_by_type(&self, type_: &str) -> AppResult<Vec<MetaEntity>> {
        Ok(self
            .rows
            .iter()
            .filter(|row| row.type_ == type_)
            .cloned()
            .collect())
    }

    fn get_by_key(&self, key: &str) -> AppResult<Option<MetaEntity>> {
        Ok(self.rows.iter().find(|row| row.key == key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_snapshot(lines: &[String]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file.flush().unwrap();
        file
    }

    fn row(type_: &str, key: &str) -> String {
        json!({ "key": key, "type": type_, "value": "{}" }).to_string()
    }

    #[test]
    fn scan_keeps_file_order_and_filters_type() {
        let file = write_snapshot(&[
            row("pod", "default/pod/b"),
            row("service", "default/service/web"),
            String::new(),
            row("pod", "default/pod/a"),
        ]);

        let adapter = MetaFsAdapter::open(file.path()).unwrap();
        let pods = adapter.scan_by_type("pod").unwrap();

        let keys: Vec<_> = pods.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["default/pod/b", "default/pod/a"]);
        assert!(adapter.scan_by_type("secret").unwrap().is_empty());
    }

    #[test]
    fn lookup_by_key() {
        let file = write_snapshot(&[row("podstatus", "default/podstatus/a")]);
        let adapter = MetaFsAdapter::open(file.path()).unwrap();

        assert!(adapter.get_by_key("default/podstatus/a").unwrap().is_some());
        assert!(adapter.get_by_key("default/podstatus/b").unwrap().is_none());
    }

    #[test]
    fn missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = MetaFsAdapter::open(&dir.path().join("absent.jsonl"))
            .err()
            .expect("open should fail");
        assert!(matches!(err, AppError::StoreUnavailable(_)));
    }

    #[test]
    fn directory_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = MetaFsAdapter::open(dir.path()).err().expect("open should fail");
        assert!(matches!(err, AppError::StoreUnavailable(_)));
    }

    #[test]
    fn malformed_row_reports_line() {
        let file = write_snapshot(&[row("pod", "default/pod/a"), "{not json".to_string()]);
        let err = MetaFsAdapter::open(file.path()).err().expect("open should fail");

        match err {
            AppError::StoreError(msg) => assert!(msg.contains(":2:")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
