//! Arbor Core - data model and traversal policy
//!
//! This crate provides the node, entity and graph types shared by the
//! Arbor property-value API, together with the pure algorithms that sit
//! between the API boundary and the storage collaborators: node
//! classification, typed-value merging, continuation tokens and the
//! hierarchy walks used by linked-property queries.

pub mod direction;
pub mod entity;
pub mod error;
pub mod expression;
pub mod graph;
pub mod hierarchy;
pub mod limits;
pub mod node;
pub mod pagination;
pub mod traversal;
pub mod typed;

pub use direction::Direction;
pub use entity::{EntityInfo, Identity, Triple};
pub use error::{CoreError, Result};
pub use expression::{PropertyExpression, PropertySelector};
pub use graph::{LinkedGraph, NodeResponse};
pub use hierarchy::HierarchyCache;
pub use node::{Namespaces, Node, Partition};
pub use pagination::{decode_token, encode_token, CursorEntry, PageCursor};
pub use traversal::{AncestorWalk, TraversalEngine, CLOSURE_MARKER};
pub use typed::{merge_typed_nodes, TypedValues};
