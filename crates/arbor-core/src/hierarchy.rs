//! Read-only parent index over statistical-variable groups

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Parent lists keyed by group id
///
/// Populated once at startup and shared behind an `Arc`; there is no
/// interior mutability, so concurrent readers need no locking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HierarchyCache {
    parents: HashMap<String, Vec<String>>,
}

impl HierarchyCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(child, parent)` edges, keeping parent order per child
    pub fn from_edges<I, C, P>(edges: I) -> Self
    where
        I: IntoIterator<Item = (C, P)>,
        C: Into<String>,
        P: Into<String>,
    {
        let mut parents: HashMap<String, Vec<String>> = HashMap::new();
        for (child, parent) in edges {
            let list = parents.entry(child.into()).or_default();
            let parent = parent.into();
            if !list.contains(&parent) {
                list.push(parent);
            }
        }
        Self { parents }
    }

    /// Ordered parents of a group, `None` if the group is unknown
    pub fn parents(&self, group: &str) -> Option<&[String]> {
        self.parents.get(group).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

impl From<HashMap<String, Vec<String>>> for HierarchyCache {
    fn from(parents: HashMap<String, Vec<String>>) -> Self {
        Self { parents }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_edges_keeps_order() {
        let cache = HierarchyCache::from_edges([
            ("dc/g/Demographics", "dc/g/Root"),
            ("dc/g/Person_Age", "dc/g/Demographics"),
            ("dc/g/Person_Age", "dc/g/Custom_Age"),
            ("dc/g/Person_Age", "dc/g/Demographics"),
        ]);

        assert_eq!(cache.len(), 2);
        assert_eq!(
            cache.parents("dc/g/Person_Age").unwrap(),
            ["dc/g/Demographics".to_string(), "dc/g/Custom_Age".to_string()]
        );
        assert!(cache.parents("dc/g/Root").is_none());
    }

    #[test]
    fn test_deserialize_transparent() {
        let cache: HierarchyCache =
            serde_json::from_str(r#"{"dc/g/A": ["dc/g/Root"]}"#).unwrap();
        assert_eq!(cache.parents("dc/g/A").unwrap(), ["dc/g/Root".to_string()]);
    }
}
