use crate::errors::{AppError, AppResult};

pub const RESOURCE_SEP: char = '/';

/// Identity encoded in a store key: `namespace/resourceType/name`.
///
/// Only the namespace is kept; the type and name segments are checked for
/// presence and otherwise matched against the raw key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceKey<'a> {
    pub namespace: &'a str,
}

impl<'a> ResourceKey<'a> {
    /// The name segment is everything after the second separator.
    pub fn parse(key: &'a str) -> AppResult<Self> {
        let mut parts = key.splitn(3, RESOURCE_SEP);
        let namespace = parts.next().unwrap_or_default();
        let resource_type = parts.next().unwrap_or_default();
        let name = parts.next().unwrap_or_default();

        if resource_type.is_empty() || name.is_empty() {
            return Err(AppError::DecodeError(format!("malformed resource key: {}", key)));
        }

        Ok(Self { namespace })
    }
}

/// Swaps the first `/from/` type segment of `key` for `/to/`.
pub fn substitute_type_segment(key: &str, from: &str, to: &str) -> String {
    let from = format!("{RESOURCE_SEP}{from}{RESOURCE_SEP}");
    let to = format!("{RESOURCE_SEP}{to}{RESOURCE_SEP}");
    key.replacen(&from, &to, 1)
}
