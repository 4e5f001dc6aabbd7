//! Test doubles shared by the service tests

use crate::service::PropertyValuesService;
use arbor_core::traversal::CONTAINED_IN_PLACE;
use arbor_core::{HierarchyCache, Namespaces, PageCursor, Triple};
use arbor_store::{
    Dataset, MemoryStore, NodeRecord, PlacesIndex, PropertyValuePage, PropertyValueRequest,
    PropertyValueSource, StoreError, StoreResult, TripleSource,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub fn ids(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

/// Small geography plus observations and a group hierarchy
pub fn fixture_dataset() -> Dataset {
    let hierarchy: HashMap<String, Vec<String>> = [
        ("dc/g/Person_Age", &["dc/g/Demographics_Person", "dc/g/Custom_Survey"][..]),
        ("dc/g/Custom_Survey", &["dc/g/Root"][..]),
        ("dc/g/Demographics_Person", &["dc/g/Demographics"][..]),
        ("dc/g/Demographics", &["dc/g/Root"][..]),
        ("dc/g/Loop_A", &["dc/g/Loop_B"][..]),
        ("dc/g/Loop_B", &["dc/g/Loop_A"][..]),
    ]
    .into_iter()
    .map(|(child, parents)| (child.to_string(), ids(parents)))
    .collect();

    Dataset::new()
        .with_node(NodeRecord::new("country/USA", "United States", "Country"))
        .with_node(NodeRecord::new("geoId/06", "California", "State"))
        .with_node(NodeRecord::new("geoId/06075", "San Francisco County", "County"))
        .with_node(NodeRecord {
            dcid: "geoId/0667000".to_string(),
            name: Some("San Francisco".to_string()),
            types: ids(&["City", "County"]),
        })
        .with_node(NodeRecord::new("geoId/0644000", "Los Angeles", "City"))
        .with_triple(Triple::reference("geoId/06", CONTAINED_IN_PLACE, "country/USA", "dc/base/Census"))
        .with_triple(Triple::reference("geoId/06075", CONTAINED_IN_PLACE, "geoId/06", "dc/base/Census"))
        .with_triple(Triple::reference("geoId/0667000", CONTAINED_IN_PLACE, "geoId/06075", "dc/base/Census"))
        .with_triple(Triple::reference("geoId/0644000", CONTAINED_IN_PLACE, "geoId/06", "dc/base/Census"))
        .with_triple(Triple::scalar("geoId/06", "name", "California", "dc/base/Census"))
        .with_triple(
            Triple::reference("dc/o/1", "observationAbout", "geoId/06", "dc/base/BLS")
                .with_object_name("California")
                .with_object_type("State"),
        )
        .with_triple(Triple::scalar("dc/o/1", "value", "39512223", "dc/base/BLS"))
        .with_triple(Triple::reference("dc/o/2", "measurementMethod", "CensusACS5yrSurvey", "dc/base/ACS"))
        .with_triple(Triple::reference("dc/o/2", "measurementMethod", "CensusPEPSurvey", "dc/base/PEP"))
        .with_hierarchy(hierarchy.into())
}

/// Backend wrapping a `MemoryStore` that counts calls and can fail on demand
pub struct RecordingBackend {
    inner: MemoryStore,
    triple_calls: AtomicUsize,
    value_calls: AtomicUsize,
    place_calls: AtomicUsize,
    last_cursor: Mutex<Option<PageCursor>>,
    fail_triples: bool,
    fail_values: bool,
    fail_places: bool,
}

impl RecordingBackend {
    pub fn new(inner: MemoryStore) -> Self {
        Self {
            inner,
            triple_calls: AtomicUsize::new(0),
            value_calls: AtomicUsize::new(0),
            place_calls: AtomicUsize::new(0),
            last_cursor: Mutex::new(None),
            fail_triples: false,
            fail_values: false,
            fail_places: false,
        }
    }

    pub fn fixture() -> Self {
        let store = MemoryStore::from_dataset(&fixture_dataset(), Namespaces::default()).unwrap();
        Self::new(store)
    }

    pub fn failing_triples(mut self) -> Self {
        self.fail_triples = true;
        self
    }

    pub fn failing_values(mut self) -> Self {
        self.fail_values = true;
        self
    }

    pub fn failing_places(mut self) -> Self {
        self.fail_places = true;
        self
    }

    pub fn calls(&self) -> usize {
        self.triple_calls.load(Ordering::SeqCst)
            + self.value_calls.load(Ordering::SeqCst)
            + self.place_calls.load(Ordering::SeqCst)
    }

    pub fn value_calls(&self) -> usize {
        self.value_calls.load(Ordering::SeqCst)
    }

    pub fn last_cursor(&self) -> Option<PageCursor> {
        self.last_cursor.lock().unwrap().clone()
    }
}

#[async_trait]
impl TripleSource for RecordingBackend {
    async fn observation_triples(&self, nodes: &[String]) -> StoreResult<HashMap<String, Vec<Triple>>> {
        self.triple_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_triples {
            return Err(StoreError::Unavailable("triple store".to_string()));
        }
        self.inner.observation_triples(nodes).await
    }
}

#[async_trait]
impl PropertyValueSource for RecordingBackend {
    async fn fetch_property_values(&self, request: &PropertyValueRequest) -> StoreResult<PropertyValuePage> {
        self.value_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_values {
            return Err(StoreError::Unavailable("property store".to_string()));
        }
        let page = self.inner.fetch_property_values(request).await?;
        *self.last_cursor.lock().unwrap() = page.cursor.clone();
        Ok(page)
    }
}

#[async_trait]
impl PlacesIndex for RecordingBackend {
    async fn places_in(&self, nodes: &[String], place_type: &str) -> StoreResult<HashMap<String, Vec<String>>> {
        self.place_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_places {
            return Err(StoreError::Unavailable("places index".to_string()));
        }
        self.inner.places_in(nodes, place_type).await
    }
}

/// Service over `backend` with the fixture hierarchy injected
pub fn fixture_service(backend: RecordingBackend) -> (PropertyValuesService<RecordingBackend>, Arc<RecordingBackend>) {
    let backend = Arc::new(backend);
    let hierarchy: Arc<HierarchyCache> = Arc::new(fixture_dataset().hierarchy);
    (PropertyValuesService::new(backend.clone(), hierarchy), backend)
}
