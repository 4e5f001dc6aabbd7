//! Linked-property traversal routing

use crate::error::{ApiError, ApiResult};
use crate::service::PropertyValuesService;
use arbor_core::limits;
use arbor_core::traversal::{CONTAINED_IN_PLACE, SPECIALIZATION_OF, STAT_VAR_GROUP};
use arbor_core::{Direction, NodeResponse, TraversalEngine};
use arbor_store::{GraphBackend, PlacesIndex};
use std::collections::BTreeMap;

/// Filter key naming the type of the nodes a traversal returns
pub const TYPE_OF_FILTER: &str = "typeOf";

impl<B: GraphBackend> PropertyValuesService<B> {
    pub(crate) async fn resolve_linked(
        &self,
        nodes: &[String],
        linked_property: &str,
        direction: Direction,
        filter: &BTreeMap<String, String>,
    ) -> ApiResult<NodeResponse> {
        let Some(node_type) = filter.get(TYPE_OF_FILTER) else {
            tracing::warn!("Rejected linked property {} without typeOf", linked_property);
            return Err(ApiError::invalid_argument("must provide typeOf filters"));
        };
        limits::validate_nodes(nodes)?;

        tracing::debug!(
            "Linked property {}{} typeOf={} for {} nodes",
            direction.arrow(),
            linked_property,
            node_type,
            nodes.len()
        );

        match (linked_property, direction) {
            (CONTAINED_IN_PLACE, Direction::Incoming) => {
                if nodes.is_empty() {
                    return Ok(NodeResponse::new());
                }
                let contained = self.backend.places_in(nodes, node_type).await?;
                Ok(TraversalEngine::containment_graph(nodes, &contained))
            }
            (SPECIALIZATION_OF, Direction::Outgoing) if node_type == STAT_VAR_GROUP => {
                let walk = self.ancestor_walk();
                Ok(TraversalEngine::ancestor_chains(nodes, &self.hierarchy, &walk)?)
            }
            _ => Err(ApiError::invalid_argument(format!(
                "Invalid property {} for wildcard '+'",
                linked_property
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{fixture_service, ids, RecordingBackend};
    use arbor_core::EntityInfo;

    fn type_of(value: &str) -> BTreeMap<String, String> {
        BTreeMap::from([(TYPE_OF_FILTER.to_string(), value.to_string())])
    }

    #[tokio::test]
    async fn test_missing_type_of_rejected_without_calls() {
        let (service, backend) = fixture_service(RecordingBackend::fixture());
        for (property, direction) in [
            (CONTAINED_IN_PLACE, Direction::Incoming),
            (SPECIALIZATION_OF, Direction::Outgoing),
            ("geoOverlaps", Direction::Outgoing),
        ] {
            let err = service
                .linked_property_values(&ids(&["geoId/06"]), property, direction, &BTreeMap::new())
                .await
                .unwrap_err();
            assert!(matches!(err, ApiError::InvalidArgument(ref m) if m.contains("typeOf")));
        }
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn test_containment_closure() {
        let (service, _) = fixture_service(RecordingBackend::fixture());
        let response = service
            .linked_property_values(
                &ids(&["geoId/06", "geoId/0644000"]),
                CONTAINED_IN_PLACE,
                Direction::Incoming,
                &type_of("City"),
            )
            .await
            .unwrap();

        let cities = response.get("geoId/06").unwrap();
        assert_eq!(cities.arcs.len(), 1);
        assert_eq!(
            cities.arc("containedInPlace+").unwrap(),
            [
                EntityInfo::with_dcid("geoId/0644000"),
                EntityInfo::with_dcid("geoId/0667000")
            ]
        );

        let leaf = response.get("geoId/0644000").unwrap();
        assert_eq!(leaf.arc("containedInPlace+"), Some(&[][..]));
    }

    #[tokio::test]
    async fn test_containment_failure_propagates() {
        let (service, _) = fixture_service(RecordingBackend::fixture().failing_places());
        let err = service
            .linked_property_values(&ids(&["geoId/06"]), CONTAINED_IN_PLACE, Direction::Incoming, &type_of("City"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "upstream");
    }

    #[tokio::test]
    async fn test_specialization_chain() {
        let (service, backend) = fixture_service(RecordingBackend::fixture());
        let response = service
            .linked_property_values(
                &ids(&["dc/g/Person_Age", "dc/g/Demographics_Person", "dc/g/Unlisted"]),
                SPECIALIZATION_OF,
                Direction::Outgoing,
                &type_of(STAT_VAR_GROUP),
            )
            .await
            .unwrap();

        // Custom group wins over the first listed parent, root is dropped
        assert_eq!(response.get("dc/g/Person_Age").unwrap().chain(), vec!["dc/g/Custom_Survey"]);
        assert_eq!(
            response.get("dc/g/Demographics_Person").unwrap().chain(),
            vec!["dc/g/Demographics"]
        );
        assert!(response.get("dc/g/Unlisted").unwrap().neighbor.is_empty());
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn test_specialization_cycle_is_internal_error() {
        let (service, _) = fixture_service(RecordingBackend::fixture());
        let err = service
            .linked_property_values(
                &ids(&["dc/g/Loop_A"]),
                SPECIALIZATION_OF,
                Direction::Outgoing,
                &type_of(STAT_VAR_GROUP),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Internal(_)));
    }

    #[tokio::test]
    async fn test_unsupported_combinations() {
        let (service, backend) = fixture_service(RecordingBackend::fixture());
        let cases = [
            (CONTAINED_IN_PLACE, Direction::Outgoing, "City"),
            (SPECIALIZATION_OF, Direction::Incoming, STAT_VAR_GROUP),
            (SPECIALIZATION_OF, Direction::Outgoing, "Topic"),
            ("geoOverlaps", Direction::Incoming, "City"),
        ];
        for (property, direction, node_type) in cases {
            let err = service
                .linked_property_values(&ids(&["geoId/06"]), property, direction, &type_of(node_type))
                .await
                .unwrap_err();
            assert_eq!(err.to_string(), format!("Invalid argument: Invalid property {} for wildcard '+'", property));
        }
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn test_empty_nodes_skip_index() {
        let (service, backend) = fixture_service(RecordingBackend::fixture());
        let response = service
            .linked_property_values(&[], CONTAINED_IN_PLACE, Direction::Incoming, &type_of("City"))
            .await
            .unwrap();
        assert!(response.is_empty());
        assert_eq!(backend.calls(), 0);
    }
}
