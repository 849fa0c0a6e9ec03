use kube::core::DynamicObject;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::core::resource::complete::CompleteResource;
use crate::core::resource::kind_groups::KindGroups;
use crate::core::resource::kube_resources::ListMeta;
use crate::core::resource::source_document::API_VERSION_V1;
use crate::errors::{output_error, AppResult};

const LIST_KIND: &str = "List";
const JSON_INDENT: &[u8] = b"    ";
const YAML_SEPARATOR: &str = "---\n";

/// Synthetic container for two or more objects of one kind.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ListContainer {
    api_version: String,
    kind: String,
    metadata: ListMeta,
    items: Vec<DynamicObject>,
}

/// What gets printed for one kind: the object itself, or a `List`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum KindDocument {
    Single(DynamicObject),
    List(ListContainer),
}

impl KindDocument {
    fn from_items(items: &[CompleteResource]) -> AppResult<Self> {
        let mut objects = items
            .iter()
            .map(CompleteResource::to_dynamic)
            .collect::<AppResult<Vec<_>>>()?;

        if objects.len() == 1 {
            if let Some(object) = objects.pop() {
                return Ok(KindDocument::Single(object));
            }
        }

        Ok(KindDocument::List(ListContainer {
            api_version: API_VERSION_V1.to_string(),
            kind: LIST_KIND.to_string(),
            metadata: ListMeta::default(),
            items: objects,
        }))
    }
}

pub struct StructuredFormatter;

impl StructuredFormatter {
    /// One pretty-printed JSON document per kind.
    pub fn json(groups: &KindGroups<CompleteResource>) -> AppResult<String> {
        let mut output = String::new();
        for doc in Self::documents(groups)? {
            output.push_str(&to_json(&doc)?);
            output.push('\n');
        }
        Ok(output)
    }

    /// One YAML document per kind, separated by `---`.
    pub fn yaml(groups: &KindGroups<CompleteResource>) -> AppResult<String> {
        let mut output = String::new();
        for (idx, doc) in Self::documents(groups)?.iter().enumerate() {
            if idx > 0 {
                output.push_str(YAML_SEPARATOR);
            }
            output.push_str(&serde_yaml::to_string(doc).map_err(output_error)?);
        }
        Ok(output)
    }

    fn documents(groups: &KindGroups<CompleteResource>) -> AppResult<Vec<KindDocument>> {
        groups
            .iter()
            .map(|(_, items)| KindDocument::from_items(items))
            .collect()
    }
}

fn to_json<T: Serialize>(value: &T) -> AppResult<String> {
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
    value.serialize(&mut ser).map_err(output_error)?;
    String::from_utf8(buf).map_err(output_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::persistence::meta::meta_entity::MetaEntity;
    use crate::domain::get::service::reconstruct_service::reconstruct_complete;
    use serde_json::json;

    fn service(name: &str) -> MetaEntity {
        MetaEntity::new(
            "service",
            format!("default/service/{}", name),
            json!({
                "metadata": { "name": name, "namespace": "default" },
                "spec": { "type": "ClusterIP", "clusterIP": "10.96.0.10" }
            })
            .to_string(),
        )
    }

    fn pod(name: &str) -> MetaEntity {
        MetaEntity::new(
            "pod",
            format!("default/pod/{}", name),
            json!({ "metadata": { "name": name, "namespace": "default" } }).to_string(),
        )
    }

    #[test]
    fn single_item_is_not_wrapped() {
        let groups = reconstruct_complete(&[service("web")]).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&StructuredFormatter::json(&groups).unwrap()).unwrap();

        assert_eq!(value["kind"], "service");
        assert_eq!(value["apiVersion"], "v1");
        assert_eq!(value["metadata"]["name"], "web");
        assert_eq!(value["spec"]["clusterIP"], "10.96.0.10");
    }

    #[test]
    fn two_items_are_wrapped_in_a_list() {
        let groups = reconstruct_complete(&[service("web"), service("db")]).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&StructuredFormatter::json(&groups).unwrap()).unwrap();

        assert_eq!(value["kind"], "List");
        assert_eq!(value["apiVersion"], "v1");
        let items = value["items"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["metadata"]["name"], "web");
        assert_eq!(items[1]["metadata"]["name"], "db");
    }

    #[test]
    fn json_uses_four_space_indent() {
        let groups = reconstruct_complete(&[service("web")]).unwrap();
        let text = StructuredFormatter::json(&groups).unwrap();
        assert!(text.starts_with("{\n    \""));
        assert!(text.ends_with("}\n"));
    }

    #[test]
    fn yaml_separates_kinds() {
        let groups = reconstruct_complete(&[service("web"), pod("a"), pod("b")]).unwrap();
        let text = StructuredFormatter::yaml(&groups).unwrap();

        let docs: Vec<&str> = text.split(YAML_SEPARATOR).collect();
        assert_eq!(docs.len(), 2);

        let pods: serde_json::Value = serde_yaml::from_str(docs[0]).unwrap();
        assert_eq!(pods["kind"], "List");
        let svc: serde_json::Value = serde_yaml::from_str(docs[1]).unwrap();
        assert_eq!(svc["kind"], "service");
    }
}
