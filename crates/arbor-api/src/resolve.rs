//! Observation-node and regular-node resolvers

use crate::error::ApiResult;
use crate::service::PropertyValuesService;
use arbor_core::{encode_token, merge_typed_nodes, Direction, LinkedGraph, NodeResponse, PageCursor};
use arbor_store::{GraphBackend, PropertyValueRequest, PropertyValueSource, TripleSource};
use std::collections::HashSet;

impl<B: GraphBackend> PropertyValuesService<B> {
    /// Project raw observation triples onto the requested properties
    ///
    /// Every node the triple fetch returned gets an entry, but only the
    /// requested predicates that actually occur get an arc.
    pub(crate) async fn resolve_observations(
        &self,
        nodes: &[String],
        properties: &[String],
    ) -> ApiResult<NodeResponse> {
        let wanted: HashSet<&str> = properties.iter().map(String::as_str).collect();
        let triples = self.backend.observation_triples(nodes).await?;

        let mut response = NodeResponse::new();
        for (node, list) in triples {
            let graph = response.data.entry(node).or_insert_with(LinkedGraph::new);
            for triple in list.iter().filter(|t| wanted.contains(t.predicate.as_str())) {
                graph.push_arc(triple.predicate.clone(), triple.object_info());
            }
        }

        tracing::debug!(
            "Resolved {} of {} observation nodes",
            response.data.len(),
            nodes.len()
        );
        Ok(response)
    }

    /// Fetch and merge typed values for regular nodes
    ///
    /// Every node gets one arc per requested property, empty when the store
    /// has nothing. The store's cursor, if any, becomes the next token.
    pub(crate) async fn resolve_regular(
        &self,
        nodes: &[String],
        properties: &[String],
        direction: Direction,
        limit: usize,
        cursor: Option<PageCursor>,
    ) -> ApiResult<NodeResponse> {
        let request = PropertyValueRequest {
            nodes: nodes.to_vec(),
            properties: properties.to_vec(),
            direction,
            limit,
            cursor,
        };
        let page = self.backend.fetch_property_values(&request).await?;

        let mut response = NodeResponse::new();
        for node in nodes {
            let mut graph = LinkedGraph::new();
            for property in properties {
                let merged = page
                    .values(node, property)
                    .map(merge_typed_nodes)
                    .unwrap_or_default();
                graph.set_arc(property.clone(), merged);
            }
            response.data.insert(node.clone(), graph);
        }

        if let Some(cursor) = &page.cursor {
            response.next_token = Some(encode_token(cursor)?);
        }
        Ok(response)
    }
}
