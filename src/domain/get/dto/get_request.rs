use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Options of one `get` invocation, as collected from the command line.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GetRequest {
    /// Resource type alias; `None` when the argument was omitted.
    pub resource_type: Option<String>,
    #[serde(default)]
    pub names: Vec<String>,
    #[validate(length(min = 1, max = 63))]
    pub namespace: String,
    /// Raw `-o` value; "" means table output.
    #[serde(default)]
    pub output: String,
    pub selector: Option<String>,
    /// Snapshot file to read.
    pub input: PathBuf,
    #[serde(default)]
    pub all_namespaces: bool,
}

impl GetRequest {
    pub fn new(resource_type: impl Into<String>, input: impl Into<PathBuf>) -> Self {
        Self {
            resource_type: Some(resource_type.into()),
            names: Vec::new(),
            namespace: "default".to_string(),
            output: String::new(),
            selector: None,
            input: input.into(),
            all_namespaces: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn namespace_length_is_validated() {
        let mut req = GetRequest::new("pod", "/tmp/meta.jsonl");
        assert!(req.validate().is_ok());

        req.namespace = String::new();
        assert!(req.validate().is_err());

        req.namespace = "n".repeat(64);
        assert!(req.validate().is_err());
    }

    #[test]
    fn deserializes_with_defaults() {
        let req: GetRequest = serde_json::from_value(json!({
            "resource_type": "svc",
            "namespace": "test",
            "selector": null,
            "input": "/var/lib/kubeedge/meta.jsonl"
        }))
        .unwrap();

        assert!(req.names.is_empty());
        assert_eq!(req.output, "");
        assert!(!req.all_namespaces);
    }
}
