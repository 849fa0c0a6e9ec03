use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::core::util::time_util::TimeUtil;

use super::meta_summary::MetaSummary;
use super::NONE;

const NODE_ROLE_LABEL_PREFIX: &str = "node-role.kubernetes.io/";
const NODE_ROLE_LABEL: &str = "kubernetes.io/role";

#[derive(Debug, Clone, PartialEq)]
pub struct NodeSummary {
    pub api_version: String,
    pub kind: String,
    pub metadata: MetaSummary,
    pub spec: NodeSpecSummary,
    pub status: NodeStatusSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NodeSpecSummary {
    pub unschedulable: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStatusSummary {
    #[serde(default)]
    pub conditions: Vec<NodeConditionSummary>,
    pub node_info: Option<NodeInfoSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NodeConditionSummary {
    #[serde(rename = "type", default)]
    pub type_: String,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInfoSummary {
    #[serde(default)]
    pub kubelet_version: String,
}

impl NodeSummary {
    pub const HEADERS: &'static [&'static str] = &["NAME", "STATUS", "ROLES", "AGE", "VERSION"];

    pub fn columns(&self, now: DateTime<Utc>) -> Vec<String> {
        vec![
            self.metadata.name().to_string(),
            self.node_status(),
            self.roles(),
            TimeUtil::age(self.metadata.creation_timestamp, now),
            self.status
                .node_info
                .as_ref()
                .map(|info| info.kubelet_version.clone())
                .unwrap_or_default(),
        ]
    }

    fn node_status(&self) -> String {
        let mut status: Vec<String> = self
            .status
            .conditions
            .iter()
            .filter(|c| c.type_ == "Ready")
            .map(|c| {
                if c.status == "True" {
                    c.type_.clone()
                } else {
                    format!("Not{}", c.type_)
                }
            })
            .take(1)
            .collect();

        if status.is_empty() {
            status.push("Unknown".to_string());
        }
        if self.spec.unschedulable.unwrap_or(false) {
            status.push("SchedulingDisabled".to_string());
        }
        status.join(",")
    }

    fn roles(&self) -> String {
        let mut roles: Vec<&str> = self
            .metadata
            .labels
            .iter()
            .flatten()
            .filter_map(|(k, v)| {
                if let Some(role) = k.strip_prefix(NODE_ROLE_LABEL_PREFIX) {
                    Some(role)
                } else if k == NODE_ROLE_LABEL {
                    Some(v.as_str())
                } else {
                    None
                }
            })
            .filter(|role| !role.is_empty())
            .collect();
        roles.sort_unstable();
        roles.dedup();

        if roles.is_empty() {
            NONE.to_string()
        } else {
            roles.join(",")
        }
    }
}
