//! In-memory backend
//!
//! Serves all three collaborators from one set of triples. Useful for
//! testing and for running the API over a small JSON dataset.

use crate::dataset::{Dataset, NodeRecord};
use crate::error::{StoreError, StoreResult};
use crate::traits::{
    PlacesIndex, PropertyValuePage, PropertyValueRequest, PropertyValueSource, TripleSource,
};
use arbor_core::traversal::CONTAINED_IN_PLACE;
use arbor_core::{Direction, EntityInfo, Identity, Namespaces, PageCursor, Triple, TypedValues};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::RwLock;

/// Predicate carrying a node's type labels
const TYPE_OF: &str = "typeOf";

/// In-memory backend
pub struct MemoryStore {
    namespaces: Namespaces,
    nodes: RwLock<HashMap<String, NodeRecord>>,
    triples: RwLock<Vec<Triple>>,
    observations: RwLock<HashMap<String, Vec<Triple>>>,
}

fn lock_error(e: impl std::fmt::Display) -> StoreError {
    StoreError::Lock(e.to_string())
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_namespaces(Namespaces::default())
    }

    pub fn with_namespaces(namespaces: Namespaces) -> Self {
        Self {
            namespaces,
            nodes: RwLock::new(HashMap::new()),
            triples: RwLock::new(Vec::new()),
            observations: RwLock::new(HashMap::new()),
        }
    }

    /// Seed a store from a dataset
    pub fn from_dataset(dataset: &Dataset, namespaces: Namespaces) -> StoreResult<Self> {
        let store = Self::with_namespaces(namespaces);
        for node in &dataset.nodes {
            store.add_node(node.clone())?;
        }
        for triple in &dataset.triples {
            store.add_triple(triple.clone())?;
        }
        Ok(store)
    }

    /// Register name and types of a node
    pub fn add_node(&self, node: NodeRecord) -> StoreResult<()> {
        let mut nodes = self.nodes.write().map_err(lock_error)?;
        nodes.insert(node.dcid.clone(), node);
        Ok(())
    }

    /// Store a triple; observation subjects are also indexed for raw fetch
    pub fn add_triple(&self, triple: Triple) -> StoreResult<()> {
        if self.namespaces.classify(&triple.subject_id).is_observation() {
            let mut observations = self.observations.write().map_err(lock_error)?;
            observations
                .entry(triple.subject_id.clone())
                .or_default()
                .push(triple.clone());
        }
        let mut triples = self.triples.write().map_err(lock_error)?;
        triples.push(triple);
        Ok(())
    }

    /// Values of one (node, property) pair, each as its `(type, value)` entries
    ///
    /// A value with several types yields one entry per type, and every
    /// triple naming the same value lands in the same group, so pages never
    /// split a value. Groups are ordered by their first type, then by
    /// insertion.
    fn typed_entries(
        &self,
        node: &str,
        property: &str,
        direction: Direction,
    ) -> StoreResult<Vec<Vec<(String, EntityInfo)>>> {
        let triples = self.triples.read().map_err(lock_error)?;
        let nodes = self.nodes.read().map_err(lock_error)?;

        let infos = triples
            .iter()
            .filter(|t| t.predicate == property)
            .filter_map(|t| match direction {
                Direction::Outgoing if t.subject_id == node => {
                    let mut info = t.object_info();
                    if let Some(record) = info.dcid.as_deref().and_then(|id| nodes.get(id)) {
                        if info.name.is_none() {
                            info.name = record.name.clone();
                        }
                        if info.types.is_empty() {
                            info.types = record.types.clone();
                        }
                    }
                    Some(info)
                }
                Direction::Incoming if t.object_id.as_deref() == Some(node) => {
                    let mut info = nodes
                        .get(&t.subject_id)
                        .map(NodeRecord::info)
                        .unwrap_or_else(|| EntityInfo::with_dcid(&t.subject_id));
                    if !t.provenance_id.is_empty() {
                        info.provenance_id = Some(t.provenance_id.clone());
                    }
                    Some(info)
                }
                _ => None,
            });

        let mut groups: Vec<Vec<(String, EntityInfo)>> = Vec::new();
        let mut slots: HashMap<(bool, String), usize> = HashMap::new();
        for info in infos {
            let key = info.identity().map(|id| match id {
                Identity::Node(k) => (true, k.to_string()),
                Identity::Scalar(k) => (false, k.to_string()),
            });
            let slot = match key {
                Some(key) => *slots.entry(key).or_insert_with(|| {
                    groups.push(Vec::new());
                    groups.len() - 1
                }),
                None => {
                    groups.push(Vec::new());
                    groups.len() - 1
                }
            };

            let group = &mut groups[slot];
            if info.types.is_empty() {
                group.push((String::new(), info));
            } else {
                for t in &info.types {
                    group.push((t.clone(), info.clone()));
                }
            }
        }

        for group in &mut groups {
            group.sort_by(|a, b| a.0.cmp(&b.0));
        }
        groups.sort_by(|a, b| a.first().map(|e| &e.0).cmp(&b.first().map(|e| &e.0)));
        Ok(groups)
    }

    /// Type labels per node, from node records and `typeOf` triples
    fn type_index(&self) -> StoreResult<HashMap<String, HashSet<String>>> {
        let nodes = self.nodes.read().map_err(lock_error)?;
        let triples = self.triples.read().map_err(lock_error)?;

        let mut index: HashMap<String, HashSet<String>> = HashMap::new();
        for record in nodes.values() {
            index
                .entry(record.dcid.clone())
                .or_default()
                .extend(record.types.iter().cloned());
        }
        for t in triples.iter().filter(|t| t.predicate == TYPE_OF) {
            if let Some(node_type) = &t.object_id {
                index
                    .entry(t.subject_id.clone())
                    .or_default()
                    .insert(node_type.clone());
            }
        }
        Ok(index)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TripleSource for MemoryStore {
    async fn observation_triples(&self, nodes: &[String]) -> StoreResult<HashMap<String, Vec<Triple>>> {
        let observations = self.observations.read().map_err(lock_error)?;
        Ok(nodes
            .iter()
            .filter_map(|n| observations.get(n).map(|t| (n.clone(), t.clone())))
            .collect())
    }
}

#[async_trait]
impl PropertyValueSource for MemoryStore {
    async fn fetch_property_values(&self, request: &PropertyValueRequest) -> StoreResult<PropertyValuePage> {
        let mut page = PropertyValuePage::default();
        let mut next = PageCursor::new();

        for node in &request.nodes {
            let mut seen: HashSet<&str> = HashSet::new();
            for property in &request.properties {
                if !seen.insert(property) {
                    continue;
                }

                let start = match &request.cursor {
                    None => Some(0),
                    Some(cursor) => cursor.offset(node, property),
                };

                let mut typed = TypedValues::new();
                if let Some(start) = start {
                    let groups = self.typed_entries(node, property, request.direction)?;
                    let end = start.saturating_add(request.limit).min(groups.len());
                    for (value_type, info) in groups.iter().skip(start).take(end.saturating_sub(start)).flatten() {
                        typed.entry(value_type.clone()).or_default().push(info.clone());
                    }
                    if end < groups.len() {
                        next.push(node.clone(), property.clone(), end);
                    }
                }

                page.data
                    .entry(node.clone())
                    .or_default()
                    .insert(property.clone(), typed);
            }
        }

        tracing::debug!(
            "Fetched property values for {} nodes, {} pairs pending",
            request.nodes.len(),
            next.cursors.len()
        );

        page.cursor = (!next.is_empty()).then_some(next);
        Ok(page)
    }
}

#[async_trait]
impl PlacesIndex for MemoryStore {
    async fn places_in(&self, nodes: &[String], place_type: &str) -> StoreResult<HashMap<String, Vec<String>>> {
        let types = self.type_index()?;
        let triples = self.triples.read().map_err(lock_error)?;

        let mut children: HashMap<&str, Vec<&str>> = HashMap::new();
        for t in triples.iter().filter(|t| t.predicate == CONTAINED_IN_PLACE) {
            if let Some(parent) = t.object_id.as_deref() {
                children.entry(parent).or_default().push(&t.subject_id);
            }
        }

        let mut result = HashMap::new();
        for node in nodes {
            let mut visited: HashSet<&str> = HashSet::new();
            let mut queue: VecDeque<&str> = VecDeque::new();
            let mut contained: Vec<String> = Vec::new();

            visited.insert(node);
            queue.push_back(node);

            while let Some(current) = queue.pop_front() {
                for &child in children.get(current).into_iter().flatten() {
                    if !visited.insert(child) {
                        continue;
                    }
                    if types.get(child).is_some_and(|t| t.contains(place_type)) {
                        contained.push(child.to_string());
                    }
                    queue.push_back(child);
                }
            }

            tracing::debug!("{} contains {} places of type {}", node, contained.len(), place_type);
            result.insert(node.clone(), contained);
        }
        Ok(result)
    }
}
