use tracing::debug;

use crate::core::persistence::meta::meta_entity::MetaEntity;
use crate::core::resource::complete::CompleteResource;
use crate::core::resource::kind_groups::KindGroups;
use crate::core::resource::mappers::{map_document_to_complete, map_document_to_summary};
use crate::core::resource::resource_kind::ResourceKind;
use crate::core::resource::source_document::SourceDocument;
use crate::core::resource::summary::SummaryResource;
use crate::errors::AppResult;

/// Minimal projection grouped by kind, for the table path.
pub fn reconstruct_summaries(records: &[MetaEntity]) -> AppResult<KindGroups<SummaryResource>> {
    reconstruct(records, map_document_to_summary)
}

/// Complete projection grouped by kind, for JSON and YAML.
pub fn reconstruct_complete(records: &[MetaEntity]) -> AppResult<KindGroups<CompleteResource>> {
    reconstruct(records, map_document_to_complete)
}

fn reconstruct<T, F>(records: &[MetaEntity], map: F) -> AppResult<KindGroups<T>>
where
    F: Fn(&SourceDocument) -> AppResult<T>,
{
    let mut groups = KindGroups::new();

    for record in records {
        let doc = SourceDocument::from_entity(record)?;
        let kind: ResourceKind = doc.kind();
        groups.push(kind, map(&doc)?);
    }

    debug!("Reconstructed {} resource(s)", groups.len());
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use serde_json::json;

    fn record(type_: &str, name: &str) -> MetaEntity {
        MetaEntity::new(
            type_,
            format!("default/{}/{}", type_, name),
            json!({ "metadata": { "name": name, "namespace": "default" } }).to_string(),
        )
    }

    #[test]
    fn groups_follow_render_order_and_scan_order() {
        let records = vec![
            record("node", "edge-1"),
            record("service", "web"),
            record("pod", "b"),
            record("pod", "a"),
        ];

        let groups = reconstruct_complete(&records).unwrap();
        let order: Vec<_> = groups.iter().map(|(kind, _)| kind).collect();
        assert_eq!(
            order,
            vec![ResourceKind::Pod, ResourceKind::Service, ResourceKind::Node]
        );

        let pods: Vec<_> = groups
            .get(ResourceKind::Pod)
            .iter()
            .map(|p| p.name())
            .collect();
        assert_eq!(pods, vec!["b", "a"]);
    }

    #[test]
    fn both_passes_see_the_same_records() {
        let records = vec![record("secret", "creds"), record("configmap", "cfg")];
        let summaries = reconstruct_summaries(&records).unwrap();
        let complete = reconstruct_complete(&records).unwrap();

        assert_eq!(summaries.len(), complete.len());
        assert_eq!(
            summaries.get(ResourceKind::Secret)[0].metadata().name(),
            complete.get(ResourceKind::Secret)[0].name()
        );
    }

    #[test]
    fn unknown_type_aborts() {
        let records = vec![record("pod", "a"), record("deployment", "d")];
        assert!(matches!(
            reconstruct_summaries(&records),
            Err(AppError::UnrecognizedResourceType(_))
        ));
    }
}
