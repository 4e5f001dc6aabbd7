//! Collaborator trait definitions

use crate::error::StoreResult;
use arbor_core::{Direction, PageCursor, Triple, TypedValues};
use async_trait::async_trait;
use std::collections::HashMap;

/// One page request against the typed property-value store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyValueRequest {
    pub nodes: Vec<String>,
    pub properties: Vec<String>,
    pub direction: Direction,

    /// Values per (node, property) pair
    pub limit: usize,

    /// Resume position; `None` starts from the beginning
    pub cursor: Option<PageCursor>,
}

/// Typed values per node and property
pub type TypedNodeValues = HashMap<String, HashMap<String, TypedValues>>;

/// One page of typed property values
#[derive(Debug, Clone, Default)]
pub struct PropertyValuePage {
    pub data: TypedNodeValues,

    /// Present while more pages remain
    pub cursor: Option<PageCursor>,
}

impl PropertyValuePage {
    pub fn values(&self, node: &str, property: &str) -> Option<&TypedValues> {
        self.data.get(node).and_then(|props| props.get(property))
    }
}

/// Raw triple fetch for observation nodes
#[async_trait]
pub trait TripleSource: Send + Sync {
    /// All triples whose subject is one of `nodes`
    ///
    /// Nodes without triples may be absent from the result.
    async fn observation_triples(&self, nodes: &[String]) -> StoreResult<HashMap<String, Vec<Triple>>>;
}

/// Typed, paginated property-value fetch for regular nodes
#[async_trait]
pub trait PropertyValueSource: Send + Sync {
    async fn fetch_property_values(&self, request: &PropertyValueRequest) -> StoreResult<PropertyValuePage>;
}

/// Transitive place-containment index
#[async_trait]
pub trait PlacesIndex: Send + Sync {
    /// Places of `place_type` transitively contained in each node
    async fn places_in(&self, nodes: &[String], place_type: &str) -> StoreResult<HashMap<String, Vec<String>>>;
}

/// Everything the property-value API reads from
pub trait GraphBackend: TripleSource + PropertyValueSource + PlacesIndex {}

impl<T: TripleSource + PropertyValueSource + PlacesIndex> GraphBackend for T {}
