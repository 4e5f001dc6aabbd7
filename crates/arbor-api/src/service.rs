//! Property-value service

use crate::error::{ApiError, ApiResult};
use arbor_core::limits::{self, MAX_ANCESTOR_HOPS};
use arbor_core::{
    decode_token, AncestorWalk, Direction, HierarchyCache, Namespaces, NodeResponse,
    PropertyExpression,
};
use arbor_store::GraphBackend;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Tunables of the service
#[derive(Debug, Clone)]
pub struct ServiceOptions {
    pub namespaces: Namespaces,
    pub max_ancestor_hops: usize,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self {
            namespaces: Namespaces::default(),
            max_ancestor_hops: MAX_ANCESTOR_HOPS,
        }
    }
}

/// Routes property-value requests to the backend collaborators
///
/// The hierarchy cache is injected at construction and only ever read.
pub struct PropertyValuesService<B: GraphBackend> {
    pub(crate) backend: Arc<B>,
    pub(crate) hierarchy: Arc<HierarchyCache>,
    pub(crate) options: ServiceOptions,
}

impl<B: GraphBackend> PropertyValuesService<B> {
    pub fn new(backend: Arc<B>, hierarchy: Arc<HierarchyCache>) -> Self {
        Self {
            backend,
            hierarchy,
            options: ServiceOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ServiceOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ServiceOptions {
        &self.options
    }

    pub(crate) fn ancestor_walk(&self) -> AncestorWalk {
        AncestorWalk::new()
            .with_namespaces(self.options.namespaces.clone())
            .with_max_hops(self.options.max_ancestor_hops)
    }

    /// Values of `properties` for every node
    ///
    /// Observation nodes are served from raw triples, everything else from
    /// the typed store. An empty `token` starts from the first page; an
    /// empty node list yields an empty response without touching the
    /// backend.
    pub async fn property_values(
        &self,
        nodes: &[String],
        properties: &[String],
        direction: Direction,
        limit: usize,
        token: &str,
    ) -> ApiResult<NodeResponse> {
        limits::validate_nodes(nodes)?;
        limits::validate_properties(properties)?;
        let cursor = decode_token(token)?;

        let partition = self.options.namespaces.partition(nodes);
        tracing::debug!(
            "Property values: {} observation nodes, {} regular nodes, {} properties, direction={}",
            partition.observation.len(),
            partition.regular.len(),
            properties.len(),
            direction
        );
        if partition.is_empty() {
            return Ok(NodeResponse::new());
        }

        let mut response = NodeResponse::new();
        if !partition.observation.is_empty() {
            let observed = self
                .resolve_observations(&partition.observation, properties)
                .await?;
            response = response.merge(observed);
        }
        if !partition.regular.is_empty() {
            let regular = self
                .resolve_regular(
                    &partition.regular,
                    properties,
                    direction,
                    limits::page_limit(limit),
                    cursor,
                )
                .await?;
            response = response.merge(regular);
        }
        Ok(response)
    }

    /// Traverse `linked_property` from every node
    ///
    /// Requires a `typeOf` filter. Supported combinations are incoming
    /// `containedInPlace` (transitive containment) and outgoing
    /// `specializationOf` over `StatVarGroup` nodes (ancestor chain).
    pub async fn linked_property_values(
        &self,
        nodes: &[String],
        linked_property: &str,
        direction: Direction,
        filter: &BTreeMap<String, String>,
    ) -> ApiResult<NodeResponse> {
        self.resolve_linked(nodes, linked_property, direction, filter)
            .await
    }

    /// Evaluate a property expression
    pub async fn query(
        &self,
        nodes: &[String],
        expression: &str,
        limit: usize,
        token: &str,
    ) -> ApiResult<NodeResponse> {
        let expr = PropertyExpression::parse(expression)?;
        match expr.linked_property() {
            Some(property) => {
                if !token.is_empty() {
                    return Err(ApiError::invalid_argument(
                        "linked property queries are not paginated",
                    ));
                }
                self.linked_property_values(nodes, property, expr.direction, &expr.filter)
                    .await
            }
            None => {
                self.property_values(nodes, &expr.properties(), expr.direction, limit, token)
                    .await
            }
        }
    }
}
