use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::core::util::time_util::TimeUtil;

use super::meta_summary::MetaSummary;

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigMapSummary {
    pub api_version: String,
    pub kind: String,
    pub metadata: MetaSummary,
    pub data: BTreeMap<String, String>,
}

impl ConfigMapSummary {
    pub const HEADERS: &'static [&'static str] = &["NAME", "DATA", "AGE"];

    pub fn columns(&self, now: DateTime<Utc>) -> Vec<String> {
        vec![
            self.metadata.name().to_string(),
            self.data.len().to_string(),
            TimeUtil::age(self.metadata.creation_timestamp, now),
        ]
    }
}
