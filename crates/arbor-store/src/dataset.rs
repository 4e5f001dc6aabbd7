//! JSON dataset used to seed the in-memory backend

use crate::error::StoreResult;
use arbor_core::{EntityInfo, HierarchyCache, Triple};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name and types of a node, used to describe arc endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub dcid: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub types: Vec<String>,
}

impl NodeRecord {
    pub fn new(dcid: impl Into<String>, name: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            dcid: dcid.into(),
            name: Some(name.into()),
            types: vec![node_type.into()],
        }
    }

    pub fn info(&self) -> EntityInfo {
        EntityInfo {
            name: self.name.clone(),
            types: self.types.clone(),
            dcid: Some(self.dcid.clone()),
            ..Default::default()
        }
    }
}

/// Graph content plus the group hierarchy
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,

    #[serde(default)]
    pub triples: Vec<Triple>,

    /// Parent lists of statistical-variable groups
    #[serde(default)]
    pub hierarchy: HierarchyCache,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a dataset from a JSON file
    pub fn load(path: &Path) -> StoreResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let dataset: Self = serde_json::from_str(&raw)?;
        tracing::debug!(
            "Loaded dataset from {:?}: {} nodes, {} triples, {} groups",
            path,
            dataset.nodes.len(),
            dataset.triples.len(),
            dataset.hierarchy.len()
        );
        Ok(dataset)
    }

    pub fn with_node(mut self, node: NodeRecord) -> Self {
        self.nodes.push(node);
        self
    }

    pub fn with_triple(mut self, triple: Triple) -> Self {
        self.triples.push(triple);
        self
    }

    pub fn with_hierarchy(mut self, hierarchy: HierarchyCache) -> Self {
        self.hierarchy = hierarchy;
        self
    }
}
