use serde::{Deserialize, Serialize};

/// One row of the edge metadata store.
///
/// `key` has the layout `namespace/resourceType/name`; `value` is the
/// serialized JSON document of the resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaEntity {
    pub key: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub value: String,
}

impl MetaEntity {
    pub fn new(type_: impl Into<String>, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            type_: type_.into(),
            value: value.into(),
        }
    }

    /// Copy of this row carrying a different document.
    pub fn with_value(&self, value: String) -> Self {
        Self {
            key: self.key.clone(),
            type_: self.type_.clone(),
            value,
        }
    }
}
