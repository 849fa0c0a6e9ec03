use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::core::util::time_util::TimeUtil;

use super::meta_summary::MetaSummary;
use super::NONE;

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceSummary {
    pub api_version: String,
    pub kind: String,
    pub metadata: MetaSummary,
    pub spec: ServiceSpecSummary,
    pub status: ServiceStatusSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSpecSummary {
    #[serde(rename = "type")]
    pub type_: Option<String>,
    #[serde(rename = "clusterIP")]
    pub cluster_ip: Option<String>,
    #[serde(rename = "externalIPs", default)]
    pub external_ips: Vec<String>,
    pub external_name: Option<String>,
    #[serde(default)]
    pub ports: Vec<ServicePortSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePortSummary {
    #[serde(default)]
    pub port: i32,
    pub node_port: Option<i32>,
    pub protocol: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStatusSummary {
    pub load_balancer: Option<LoadBalancerSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LoadBalancerSummary {
    #[serde(default)]
    pub ingress: Vec<LoadBalancerIngressSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LoadBalancerIngressSummary {
    pub ip: Option<String>,
    pub hostname: Option<String>,
}

impl ServiceSummary {
    pub const HEADERS: &'static [&'static str] =
        &["NAME", "TYPE", "CLUSTER-IP", "EXTERNAL-IP", "PORT(S)", "AGE"];

    pub fn columns(&self, now: DateTime<Utc>) -> Vec<String> {
        vec![
            self.metadata.name().to_string(),
            self.service_type().to_string(),
            self.spec
                .cluster_ip
                .clone()
                .filter(|ip| !ip.is_empty())
                .unwrap_or_else(|| NONE.to_string()),
            self.external_ip(),
            self.ports(),
            TimeUtil::age(self.metadata.creation_timestamp, now),
        ]
    }

    fn service_type(&self) -> &str {
        self.spec
            .type_
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or("ClusterIP")
    }

    fn external_ip(&self) -> String {
        let external_ips = || {
            if self.spec.external_ips.is_empty() {
                NONE.to_string()
            } else {
                self.spec.external_ips.join(",")
            }
        };

        match self.service_type() {
            "ClusterIP" | "NodePort" => external_ips(),
            "LoadBalancer" => {
                let mut ips: Vec<String> = self
                    .status
                    .load_balancer
                    .iter()
                    .flat_map(|lb| lb.ingress.iter())
                    .filter_map(|ing| {
                        ing.ip
                            .clone()
                            .filter(|ip| !ip.is_empty())
                            .or_else(|| ing.hostname.clone().filter(|h| !h.is_empty()))
                    })
                    .collect();
                ips.extend(self.spec.external_ips.iter().cloned());

                if ips.is_empty() {
                    "<pending>".to_string()
                } else {
                    ips.join(",")
                }
            }
            "ExternalName" => self.spec.external_name.clone().unwrap_or_default(),
            _ => "<unknown>".to_string(),
        }
    }

    fn ports(&self) -> String {
        if self.spec.ports.is_empty() {
            return NONE.to_string();
        }

        self.spec
            .ports
            .iter()
            .map(|p| {
                let protocol = p.protocol.as_deref().unwrap_or("TCP");
                match p.node_port {
                    Some(node_port) if node_port > 0 => {
                        format!("{}:{}/{}", p.port, node_port, protocol)
                    }
                    _ => format!("{}/{}", p.port, protocol),
                }
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}
