//! Linked-property traversals
//!
//! Two shapes are supported: the transitive `containedInPlace+` closure,
//! which arrives precomputed from the places index and only needs
//! reshaping, and the `specializationOf` ancestor walk over the hierarchy
//! cache, which produces a linear chain of nested graphs.

use crate::entity::EntityInfo;
use crate::error::{CoreError, Result};
use crate::graph::{LinkedGraph, NodeResponse};
use crate::hierarchy::HierarchyCache;
use crate::limits::MAX_ANCESTOR_HOPS;
use crate::node::Namespaces;
use std::collections::{HashMap, HashSet};

/// Suffix marking a transitive-closure arc
pub const CLOSURE_MARKER: &str = "+";

/// Place containment relation
pub const CONTAINED_IN_PLACE: &str = "containedInPlace";

/// Group specialization relation
pub const SPECIALIZATION_OF: &str = "specializationOf";

/// Type of statistical-variable group nodes
pub const STAT_VAR_GROUP: &str = "StatVarGroup";

/// Settings for the ancestor walk
#[derive(Debug, Clone)]
pub struct AncestorWalk {
    pub namespaces: Namespaces,

    /// Upper bound on chain length before the hierarchy is declared broken
    pub max_hops: usize,
}

impl Default for AncestorWalk {
    fn default() -> Self {
        Self {
            namespaces: Namespaces::default(),
            max_hops: MAX_ANCESTOR_HOPS,
        }
    }
}

impl AncestorWalk {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_namespaces(mut self, namespaces: Namespaces) -> Self {
        self.namespaces = namespaces;
        self
    }

    pub fn with_max_hops(mut self, max_hops: usize) -> Self {
        self.max_hops = max_hops;
        self
    }
}

/// Linked-property traversal algorithms
pub struct TraversalEngine;

impl TraversalEngine {
    /// Pick the parent to continue the walk from
    ///
    /// The first parent wins unless some parent is a custom-import group,
    /// in which case the first such group wins.
    pub fn next_ancestor<'a>(parents: &'a [String], namespaces: &Namespaces) -> Option<&'a str> {
        parents
            .iter()
            .find(|p| namespaces.is_custom_group(p))
            .or_else(|| parents.first())
            .map(String::as_str)
    }

    /// Ancestor ids of `start`, nearest first, root excluded
    pub fn ancestors(start: &str, cache: &HierarchyCache, walk: &AncestorWalk) -> Result<Vec<String>> {
        let mut chain: Vec<String> = Vec::new();
        let mut visited: HashSet<&str> = HashSet::new();
        visited.insert(start);
        let mut current = start;

        while let Some(parents) = cache.parents(current) {
            let Some(next) = Self::next_ancestor(parents, &walk.namespaces) else {
                break;
            };
            if walk.namespaces.is_hierarchy_root(next) {
                break;
            }
            if !visited.insert(next) {
                tracing::warn!("Hierarchy cycle at {} while walking from {}", next, start);
                return Err(CoreError::HierarchyCycle {
                    start: start.to_string(),
                    node: next.to_string(),
                });
            }
            if chain.len() >= walk.max_hops {
                return Err(CoreError::HierarchyTooDeep {
                    start: start.to_string(),
                    max_hops: walk.max_hops,
                });
            }
            chain.push(next.to_string());
            current = next;
        }

        Ok(chain)
    }

    /// Nested neighbor chain for one start node
    pub fn ancestor_chain(start: &str, cache: &HierarchyCache, walk: &AncestorWalk) -> Result<LinkedGraph> {
        let chain = Self::ancestors(start, cache, walk)?;
        Ok(chain.into_iter().rev().fold(LinkedGraph::new(), |inner, id| {
            let mut outer = LinkedGraph::new();
            outer.neighbor.insert(id, inner);
            outer
        }))
    }

    /// Ancestor chains for every input node
    pub fn ancestor_chains(nodes: &[String], cache: &HierarchyCache, walk: &AncestorWalk) -> Result<NodeResponse> {
        let mut response = NodeResponse::new();
        for node in nodes {
            let graph = Self::ancestor_chain(node, cache, walk)?;
            response.data.insert(node.clone(), graph);
        }
        tracing::debug!("Walked ancestor chains for {} nodes", nodes.len());
        Ok(response)
    }

    /// Reshape a precomputed containment closure into per-node arcs
    ///
    /// Every input node gets a `containedInPlace+` arc, empty when the
    /// index returned nothing for it. Order follows the index.
    pub fn containment_graph(nodes: &[String], contained: &HashMap<String, Vec<String>>) -> NodeResponse {
        let property = format!("{}{}", CONTAINED_IN_PLACE, CLOSURE_MARKER);
        let mut response = NodeResponse::new();
        for node in nodes {
            let values = contained
                .get(node)
                .map(|ids| ids.iter().map(EntityInfo::with_dcid).collect())
                .unwrap_or_default();
            let mut graph = LinkedGraph::new();
            graph.set_arc(property.clone(), values);
            response.data.insert(node.clone(), graph);
        }
        response
    }
}
