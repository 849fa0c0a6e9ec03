use std::collections::HashMap;

use super::resource_kind::ResourceKind;

/// Same-kind groupings of reconstructed items.
///
/// Kinds iterate in render order; items within a kind keep insertion
/// (store scan) order.
#[derive(Debug, Clone)]
pub struct KindGroups<T> {
    groups: HashMap<ResourceKind, Vec<T>>,
}

impl<T> KindGroups<T> {
    pub fn new() -> Self {
        Self {
            groups: HashMap::new(),
        }
    }

    pub fn push(&mut self, kind: ResourceKind, item: T) {
        self.groups.entry(kind).or_default().push(item);
    }

    pub fn get(&self, kind: ResourceKind) -> &[T] {
        self.groups.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    /// Non-empty groups in render order.
    pub fn iter(&self) -> impl Iterator<Item = (ResourceKind, &[T])> + '_ {
        ResourceKind::RENDER_ORDER
            .into_iter()
            .map(move |kind| (kind, self.get(kind)))
            .filter(|(_, items)| !items.is_empty())
    }

    /// Total number of items across all kinds.
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for KindGroups<T> {
    fn default() -> Self {
        Self::new()
    }
}
