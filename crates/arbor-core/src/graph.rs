//! Response graph types

use crate::entity::EntityInfo;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-node result graph
///
/// `arcs` holds flat property values (and closure results), `neighbor`
/// holds the nested ancestor chain produced by hierarchy walks, keyed by
/// the ancestor's node id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedGraph {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub arcs: BTreeMap<String, Vec<EntityInfo>>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub neighbor: BTreeMap<String, LinkedGraph>,
}

impl LinkedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one value under a property, creating the arc if needed
    pub fn push_arc(&mut self, property: impl Into<String>, info: EntityInfo) {
        self.arcs.entry(property.into()).or_default().push(info);
    }

    /// Set the full value list of a property
    pub fn set_arc(&mut self, property: impl Into<String>, values: Vec<EntityInfo>) {
        self.arcs.insert(property.into(), values);
    }

    pub fn arc(&self, property: &str) -> Option<&[EntityInfo]> {
        self.arcs.get(property).map(Vec::as_slice)
    }

    /// Node ids along a linear neighbor chain, nearest first
    pub fn chain(&self) -> Vec<&str> {
        let mut chain = Vec::new();
        let mut current = self;
        while let Some((id, next)) = current.neighbor.iter().next() {
            chain.push(id.as_str());
            current = next;
        }
        chain
    }
}

/// Response keyed by requested node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeResponse {
    pub data: BTreeMap<String, LinkedGraph>,

    /// Continuation token, absent on the final page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl NodeResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty() && self.next_token.is_none()
    }

    pub fn get(&self, node: &str) -> Option<&LinkedGraph> {
        self.data.get(node)
    }

    /// Disjoint-key union of two partial responses
    ///
    /// Node sets of the two sides never overlap, so entries from `other`
    /// are inserted as is. A token on `other` replaces ours.
    pub fn merge(mut self, other: NodeResponse) -> Self {
        debug_assert!(other.data.keys().all(|k| !self.data.contains_key(k)));
        self.data.extend(other.data);
        if other.next_token.is_some() {
            self.next_token = other.next_token;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_arc() {
        let mut graph = LinkedGraph::new();
        graph.push_arc("name", EntityInfo::with_value("California"));
        graph.push_arc("name", EntityInfo::with_value("CA"));
        assert_eq!(graph.arc("name").map(<[EntityInfo]>::len), Some(2));
        assert!(graph.arc("typeOf").is_none());
    }

    #[test]
    fn test_chain() {
        let mut leaf = LinkedGraph::new();
        leaf.neighbor.insert("C".to_string(), LinkedGraph::new());
        let mut root = LinkedGraph::new();
        root.neighbor.insert("B".to_string(), leaf);
        assert_eq!(root.chain(), vec!["B", "C"]);
    }

    #[test]
    fn test_merge_disjoint() {
        let mut left = NodeResponse::new();
        left.data.insert("dc/o/1".to_string(), LinkedGraph::new());
        let mut right = NodeResponse::new();
        right.data.insert("geoId/06".to_string(), LinkedGraph::new());
        right.next_token = Some("abc".to_string());

        let merged = left.merge(right);
        assert_eq!(merged.data.len(), 2);
        assert_eq!(merged.next_token.as_deref(), Some("abc"));
    }

    #[test]
    fn test_response_json_omits_empty_fields() {
        let mut response = NodeResponse::new();
        response.data.insert("geoId/06".to_string(), LinkedGraph::new());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"data": {"geoId/06": {}}}));
    }
}
