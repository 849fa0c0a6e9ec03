use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::core::util::time_util::TimeUtil;

use super::meta_summary::MetaSummary;
use super::NONE;

/// Endpoints shown before the rest are collapsed into `+ N more...`.
const MAX_SHOWN_ENDPOINTS: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct EndpointsSummary {
    pub api_version: String,
    pub kind: String,
    pub metadata: MetaSummary,
    pub subsets: Vec<EndpointSubsetSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EndpointSubsetSummary {
    #[serde(default)]
    pub addresses: Vec<EndpointAddressSummary>,
    #[serde(default)]
    pub ports: Vec<EndpointPortSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EndpointAddressSummary {
    #[serde(default)]
    pub ip: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EndpointPortSummary {
    #[serde(default)]
    pub port: i32,
}

impl EndpointsSummary {
    pub const HEADERS: &'static [&'static str] = &["NAME", "ENDPOINTS", "AGE"];

    pub fn columns(&self, now: DateTime<Utc>) -> Vec<String> {
        vec![
            self.metadata.name().to_string(),
            self.endpoints(),
            TimeUtil::age(self.metadata.creation_timestamp, now),
        ]
    }

    fn endpoints(&self) -> String {
        let mut all = Vec::new();
        for subset in &self.subsets {
            if subset.ports.is_empty() {
                all.extend(subset.addresses.iter().map(|a| a.ip.clone()));
            } else {
                for port in &subset.ports {
                    all.extend(
                        subset
                            .addresses
                            .iter()
                            .map(|a| format!("{}:{}", a.ip, port.port)),
                    );
                }
            }
        }

        if all.is_empty() {
            return NONE.to_string();
        }

        let shown = all[..all.len().min(MAX_SHOWN_ENDPOINTS)].join(",");
        if all.len() > MAX_SHOWN_ENDPOINTS {
            format!("{} + {} more...", shown, all.len() - MAX_SHOWN_ENDPOINTS)
        } else {
            shown
        }
    }
}
