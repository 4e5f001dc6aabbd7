//! Arbor Store - backend collaborators
//!
//! The property-value API reads from three collaborators: a raw triple
//! fetch for observation nodes, a typed property-value fetch for regular
//! nodes and a places-containment index. This crate defines them as traits
//! and provides an in-memory backend implementing all three.

pub mod dataset;
pub mod error;
pub mod memory;
pub mod traits;

pub use dataset::{Dataset, NodeRecord};
pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use traits::{
    GraphBackend, PlacesIndex, PropertyValuePage, PropertyValueRequest, PropertyValueSource,
    TripleSource, TypedNodeValues,
};
