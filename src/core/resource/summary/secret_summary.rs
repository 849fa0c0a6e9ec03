use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::core::util::time_util::TimeUtil;

use super::meta_summary::MetaSummary;

#[derive(Debug, Clone, PartialEq)]
pub struct SecretSummary {
    pub api_version: String,
    pub kind: String,
    pub metadata: MetaSummary,
    /// Base64 payloads as stored.
    pub data: BTreeMap<String, String>,
    pub type_: Option<String>,
}

impl SecretSummary {
    pub const HEADERS: &'static [&'static str] = &["NAME", "TYPE", "DATA", "AGE"];

    pub fn columns(&self, now: DateTime<Utc>) -> Vec<String> {
        vec![
            self.metadata.name().to_string(),
            self.type_.clone().unwrap_or_default(),
            self.data.len().to_string(),
            TimeUtil::age(self.metadata.creation_timestamp, now),
        ]
    }
}
