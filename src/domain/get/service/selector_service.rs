use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tracing::debug;

use crate::core::persistence::meta::meta_entity::MetaEntity;
use crate::core::resource::source_document::parse_object;
use crate::errors::{AppError, AppResult};

const TERM_SEP: char = ',';

/// One conjunctive requirement of a label selector.
///
/// `exists == true` requires `labels[key] == value`; `false` requires the
/// label to differ (a missing label satisfies it).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorClause {
    pub key: String,
    pub value: String,
    pub exists: bool,
}

impl SelectorClause {
    fn matches(&self, labels: &BTreeMap<String, String>) -> bool {
        let equal = labels.get(&self.key) == Some(&self.value);
        equal == self.exists
    }
}

/// Parses `k==v`, `k=v` and `k!=v` terms separated by commas.
///
/// Blank terms and terms without an operator are skipped.
pub fn parse_selector(expr: &str) -> AppResult<Vec<SelectorClause>> {
    let mut clauses = Vec::new();

    for term in expr.split(TERM_SEP).map(str::trim) {
        if term.is_empty() {
            continue;
        }

        let (op, exists) = if term.contains("==") {
            ("==", true)
        } else if term.contains("!=") {
            ("!=", false)
        } else if term.contains('=') {
            ("=", true)
        } else {
            debug!("Skipping selector term without operator: {}", term);
            continue;
        };

        let sides: Vec<&str> = term.split(op).map(str::trim).collect();
        match sides.as_slice() {
            [key, value] if !key.is_empty() && !value.is_empty() => {
                clauses.push(SelectorClause {
                    key: key.to_string(),
                    value: value.to_string(),
                    exists,
                });
            }
            _ => return Err(AppError::InvalidSelectorSyntax(term.to_string())),
        }
    }

    Ok(clauses)
}

/// Keeps the records whose labels satisfy every clause, in input order.
///
/// Records without labels are kept whatever the clauses say.
pub fn apply_selector(
    records: Vec<MetaEntity>,
    clauses: &[SelectorClause],
) -> AppResult<Vec<MetaEntity>> {
    let mut kept = Vec::with_capacity(records.len());

    for record in records {
        let document = parse_object(&record.value)
            .map_err(|e| AppError::DecodeError(format!("{}: {}", record.key, e)))?;

        let keep = match labels_of(&document, &record.key)? {
            Some(labels) => clauses.iter().all(|clause| clause.matches(&labels)),
            None => true,
        };
        if keep {
            kept.push(record);
        }
    }

    Ok(kept)
}

fn labels_of(document: &Map<String, Value>, key: &str) -> AppResult<Option<BTreeMap<String, String>>> {
    let metadata = match document.get("metadata") {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Object(metadata)) => metadata,
        Some(_) => {
            return Err(AppError::DecodeError(format!(
                "{}: metadata is not an object",
                key
            )))
        }
    };

    match metadata.get("labels") {
        None | Some(Value::Null) => Ok(None),
        Some(labels) => serde_json::from_value(labels.clone())
            .map(Some)
            .map_err(|e| AppError::DecodeError(format!("labels of {}: {}", key, e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn clause(key: &str, value: &str, exists: bool) -> SelectorClause {
        SelectorClause {
            key: key.into(),
            value: value.into(),
            exists,
        }
    }

    fn labelled(name: &str, labels: Option<serde_json::Value>) -> MetaEntity {
        let mut metadata = json!({ "name": name });
        if let Some(labels) = labels {
            metadata["labels"] = labels;
        }
        MetaEntity::new(
            "pod",
            format!("default/pod/{}", name),
            json!({ "metadata": metadata }).to_string(),
        )
    }

    #[test]
    fn operators_are_tried_in_order() {
        let clauses = parse_selector("a==1, b!=2,c=3").unwrap();
        assert_eq!(
            clauses,
            vec![clause("a", "1", true), clause("b", "2", false), clause("c", "3", true)]
        );
    }

    #[test]
    fn blank_and_operatorless_terms_are_skipped() {
        assert!(parse_selector("").unwrap().is_empty());
        assert_eq!(parse_selector("app,,env=prod").unwrap(), vec![clause("env", "prod", true)]);
    }

    #[test]
    fn malformed_terms_are_rejected() {
        for expr in ["=prod", "env=", "a==", "a=b=c", "!=x"] {
            assert!(
                matches!(parse_selector(expr), Err(AppError::InvalidSelectorSyntax(_))),
                "{expr} should be rejected"
            );
        }
    }

    #[test]
    fn absent_label_satisfies_inequality_only() {
        let labels = BTreeMap::from([("app".to_string(), "web".to_string())]);
        assert!(clause("tier", "cache", false).matches(&labels));
        assert!(!clause("tier", "cache", true).matches(&labels));
    }

    #[test]
    fn env_prod_without_cache_keeps_four_of_five() {
        let records = vec![
            labelled("web-1", Some(json!({ "env": "prod", "tier": "web" }))),
            labelled("web-2", Some(json!({ "env": "prod", "tier": "web" }))),
            labelled("cache-1", Some(json!({ "env": "prod", "tier": "cache" }))),
            labelled("bare-1", None),
            labelled("bare-2", Some(serde_json::Value::Null)),
        ];
        let clauses = parse_selector("env=prod,tier!=cache").unwrap();

        let kept = apply_selector(records, &clauses).unwrap();
        let names: Vec<_> = kept.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(
            names,
            vec!["default/pod/web-1", "default/pod/web-2", "default/pod/bare-1", "default/pod/bare-2"]
        );
    }

    #[test]
    fn missing_metadata_is_kept() {
        let record = MetaEntity::new("secret", "default/secret/x", "{}");
        let kept = apply_selector(vec![record], &[clause("a", "b", true)]).unwrap();
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn bad_labels_abort() {
        let numeric = labelled("x", Some(json!({ "replicas": 3 })));
        assert!(matches!(
            apply_selector(vec![numeric], &[]),
            Err(AppError::DecodeError(_))
        ));

        let listed = labelled("y", Some(json!(["a"])));
        assert!(matches!(
            apply_selector(vec![listed], &[]),
            Err(AppError::DecodeError(_))
        ));

        let garbage = MetaEntity::new("pod", "default/pod/z", "{");
        assert!(matches!(
            apply_selector(vec![garbage], &[]),
            Err(AppError::DecodeError(_))
        ));
    }
}
