use chrono::{DateTime, Utc};
use serde::de::IgnoredAny;
use serde::Deserialize;

use crate::core::util::time_util::TimeUtil;

use super::meta_summary::MetaSummary;

#[derive(Debug, Clone, PartialEq)]
pub struct PodSummary {
    pub api_version: String,
    pub kind: String,
    pub metadata: MetaSummary,
    pub spec: PodSpecSummary,
    pub status: PodStatusSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodSpecSummary {
    pub node_name: Option<String>,
    #[serde(default)]
    pub containers: Vec<ContainerSummary>,
    #[serde(default)]
    pub init_containers: Vec<ContainerSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContainerSummary {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodStatusSummary {
    pub phase: Option<String>,
    pub reason: Option<String>,
    #[serde(default)]
    pub container_statuses: Vec<ContainerStatusSummary>,
    #[serde(default)]
    pub init_container_statuses: Vec<ContainerStatusSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerStatusSummary {
    pub name: String,
    pub ready: bool,
    pub restart_count: i32,
    pub state: Option<ContainerStateSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContainerStateSummary {
    pub waiting: Option<ContainerStateReason>,
    pub running: Option<IgnoredAny>,
    pub terminated: Option<ContainerStateTerminated>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContainerStateReason {
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerStateTerminated {
    pub reason: Option<String>,
    #[serde(default)]
    pub exit_code: i32,
    pub signal: Option<i32>,
}

impl ContainerStatusSummary {
    fn waiting_reason(&self) -> Option<&str> {
        self.state
            .as_ref()
            .and_then(|s| s.waiting.as_ref())
            .and_then(|w| w.reason.as_deref())
            .filter(|r| !r.is_empty())
    }

    fn terminated(&self) -> Option<&ContainerStateTerminated> {
        self.state.as_ref().and_then(|s| s.terminated.as_ref())
    }

    fn is_running(&self) -> bool {
        self.state.as_ref().is_some_and(|s| s.running.is_some())
    }
}

impl ContainerStateTerminated {
    fn reason(&self) -> Option<&str> {
        self.reason.as_deref().filter(|r| !r.is_empty())
    }

    fn exit_description(&self) -> String {
        match self.signal {
            Some(signal) if signal != 0 => format!("Signal:{}", signal),
            _ => format!("ExitCode:{}", self.exit_code),
        }
    }
}

impl PodSummary {
    pub const HEADERS: &'static [&'static str] = &["NAME", "READY", "STATUS", "RESTARTS", "AGE"];

    pub fn columns(&self, now: DateTime<Utc>) -> Vec<String> {
        let (ready, restarts, reason) = self.display_status();
        vec![
            self.metadata.name().to_string(),
            format!("{}/{}", ready, self.spec.containers.len()),
            reason,
            restarts.to_string(),
            TimeUtil::age(self.metadata.creation_timestamp, now),
        ]
    }

    /// Ready container count, restart count and the STATUS column text.
    fn display_status(&self) -> (usize, i32, String) {
        let status = &self.status;
        let mut reason = status
            .reason
            .clone()
            .filter(|r| !r.is_empty())
            .or_else(|| status.phase.clone())
            .unwrap_or_default();
        let mut restarts = 0;
        let mut ready = 0;
        let mut initializing = false;

        for (idx, container) in status.init_container_statuses.iter().enumerate() {
            restarts += container.restart_count;

            if let Some(terminated) = container.terminated() {
                if terminated.exit_code == 0 {
                    continue;
                }
                reason = match terminated.reason() {
                    Some(r) => format!("Init:{}", r),
                    None => format!("Init:{}", terminated.exit_description()),
                };
            } else if let Some(waiting) = container
                .waiting_reason()
                .filter(|r| *r != "PodInitializing")
            {
                reason = format!("Init:{}", waiting);
            } else {
                reason = format!("Init:{}/{}", idx, self.spec.init_containers.len());
            }
            initializing = true;
            break;
        }

        if !initializing {
            restarts = 0;
            let mut has_running = false;

            for container in status.container_statuses.iter().rev() {
                restarts += container.restart_count;

                if let Some(waiting) = container.waiting_reason() {
                    reason = waiting.to_string();
                } else if let Some(terminated) = container.terminated() {
                    reason = match terminated.reason() {
                        Some(r) => r.to_string(),
                        None => terminated.exit_description(),
                    };
                } else if container.ready && container.is_running() {
                    has_running = true;
                    ready += 1;
                }
            }

            if reason == "Completed" && has_running {
                reason = "Running".to_string();
            }
        }

        if self.metadata.deletion_timestamp.is_some() {
            reason = if status.reason.as_deref() == Some("NodeLost") {
                "Unknown".to_string()
            } else {
                "Terminating".to_string()
            };
        }

        (ready, restarts, reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pod(spec: serde_json::Value, status: serde_json::Value) -> PodSummary {
        PodSummary {
            api_version: "v1".into(),
            kind: "pod".into(),
            metadata: serde_json::from_value(json!({ "name": "web-1" })).unwrap(),
            spec: serde_json::from_value(spec).unwrap(),
            status: serde_json::from_value(status).unwrap(),
        }
    }

    #[test]
    fn running_pod_counts_ready_and_restarts() {
        let p = pod(
            json!({ "containers": [{ "name": "a" }, { "name": "b" }] }),
            json!({
                "phase": "Running",
                "containerStatuses": [
                    { "name": "a", "ready": true, "restartCount": 2, "state": { "running": {} } },
                    { "name": "b", "ready": true, "restartCount": 1, "state": { "running": { "startedAt": "x" } } }
                ]
            }),
        );

        let cols = p.columns(Utc::now());
        assert_eq!(cols[0], "web-1");
        assert_eq!(cols[1], "2/2");
        assert_eq!(cols[2], "Running");
        assert_eq!(cols[3], "3");
        assert_eq!(cols[4], "<unknown>");
    }

    #[test]
    fn waiting_reason_wins_over_phase() {
        let p = pod(
            json!({ "containers": [{ "name": "a" }] }),
            json!({
                "phase": "Pending",
                "containerStatuses": [
                    { "name": "a", "state": { "waiting": { "reason": "CrashLoopBackOff" } } }
                ]
            }),
        );
        assert_eq!(p.columns(Utc::now())[2], "CrashLoopBackOff");
        assert_eq!(p.columns(Utc::now())[1], "0/1");
    }

    #[test]
    fn init_container_progress() {
        let p = pod(
            json!({ "initContainers": [{ "name": "i0" }, { "name": "i1" }], "containers": [{ "name": "a" }] }),
            json!({
                "phase": "Pending",
                "initContainerStatuses": [
                    { "name": "i0", "state": { "terminated": { "exitCode": 0 } } },
                    { "name": "i1", "state": { "running": {} } }
                ]
            }),
        );
        assert_eq!(p.columns(Utc::now())[2], "Init:1/2");
    }

    #[test]
    fn init_container_exiting_zero_counts_as_done_despite_signal() {
        let p = pod(
            json!({ "initContainers": [{ "name": "i0" }], "containers": [{ "name": "a" }] }),
            json!({
                "phase": "Running",
                "initContainerStatuses": [
                    { "name": "i0", "state": { "terminated": { "exitCode": 0, "signal": 9 } } }
                ],
                "containerStatuses": [
                    { "name": "a", "ready": true, "state": { "running": {} } }
                ]
            }),
        );
        let cols = p.columns(Utc::now());
        assert_eq!(cols[2], "Running");
        assert_eq!(cols[1], "1/1");
    }

    #[test]
    fn failed_init_container_exit_code() {
        let p = pod(
            json!({ "initContainers": [{ "name": "i0" }], "containers": [{ "name": "a" }] }),
            json!({
                "initContainerStatuses": [
                    { "name": "i0", "state": { "terminated": { "exitCode": 3 } } }
                ]
            }),
        );
        assert_eq!(p.columns(Utc::now())[2], "Init:ExitCode:3");
    }

    #[test]
    fn empty_status_leaves_blank_status_column() {
        let p = pod(json!({ "containers": [{ "name": "a" }] }), json!({}));
        let cols = p.columns(Utc::now());
        assert_eq!(cols[1], "0/1");
        assert_eq!(cols[2], "");
        assert_eq!(cols[3], "0");
    }
}
