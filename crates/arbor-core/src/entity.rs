//! Stored facts (triples) and their output projection

use serde::{Deserialize, Serialize};

/// Output-facing view of one arc endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityInfo {
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Scalar value for leaf arcs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Type labels
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,

    /// Node identifier for reference arcs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dcid: Option<String>,

    /// Import the fact came from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provenance_id: Option<String>,
}

impl EntityInfo {
    /// Reference to another node by identifier only
    pub fn with_dcid(dcid: impl Into<String>) -> Self {
        Self {
            dcid: Some(dcid.into()),
            ..Default::default()
        }
    }

    /// Scalar value with no node identity
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Default::default()
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn typed(mut self, entity_type: impl Into<String>) -> Self {
        self.types.push(entity_type.into());
        self
    }

    pub fn from_provenance(mut self, provenance_id: impl Into<String>) -> Self {
        self.provenance_id = Some(provenance_id.into());
        self
    }

    /// Key used to recognise the same endpoint across typed groups
    pub fn identity(&self) -> Option<Identity<'_>> {
        match (&self.dcid, &self.value) {
            (Some(dcid), _) => Some(Identity::Node(dcid)),
            (None, Some(value)) => Some(Identity::Scalar(value)),
            (None, None) => None,
        }
    }
}

/// De-duplication key of a value; a node and a scalar never share one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Identity<'a> {
    Node(&'a str),
    Scalar(&'a str),
}

/// A single stored fact: `subject --predicate--> object`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Triple {
    pub subject_id: String,
    pub predicate: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_value: Option<String>,

    #[serde(default)]
    pub object_types: Vec<String>,

    #[serde(default)]
    pub provenance_id: String,
}

impl Triple {
    /// Triple pointing at another node
    pub fn reference(
        subject_id: impl Into<String>,
        predicate: impl Into<String>,
        object_id: impl Into<String>,
        provenance_id: impl Into<String>,
    ) -> Self {
        Self {
            subject_id: subject_id.into(),
            predicate: predicate.into(),
            object_id: Some(object_id.into()),
            object_name: None,
            object_value: None,
            object_types: Vec::new(),
            provenance_id: provenance_id.into(),
        }
    }

    /// Triple carrying a scalar value
    pub fn scalar(
        subject_id: impl Into<String>,
        predicate: impl Into<String>,
        value: impl Into<String>,
        provenance_id: impl Into<String>,
    ) -> Self {
        Self {
            subject_id: subject_id.into(),
            predicate: predicate.into(),
            object_id: None,
            object_name: None,
            object_value: Some(value.into()),
            object_types: Vec::new(),
            provenance_id: provenance_id.into(),
        }
    }

    pub fn with_object_name(mut self, name: impl Into<String>) -> Self {
        self.object_name = Some(name.into());
        self
    }

    pub fn with_object_type(mut self, object_type: impl Into<String>) -> Self {
        self.object_types.push(object_type.into());
        self
    }

    /// Project the object side of this triple
    pub fn object_info(&self) -> EntityInfo {
        EntityInfo {
            name: self.object_name.clone(),
            value: self.object_value.clone(),
            types: self.object_types.clone(),
            dcid: self.object_id.clone(),
            provenance_id: Some(self.provenance_id.clone()).filter(|p| !p.is_empty()),
        }
    }
}
