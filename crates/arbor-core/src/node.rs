//! Node identifiers and node-kind classification

use serde::{Deserialize, Serialize};

/// Identifier prefix reserved for observation records
pub const OBSERVATION_PREFIX: &str = "dc/o";

/// Identifier prefix of statistical-variable groups from custom imports
pub const CUSTOM_GROUP_PREFIX: &str = "dc/g/Custom_";

/// Root of the statistical-variable-group hierarchy
pub const HIERARCHY_ROOT: &str = "dc/g/Root";

/// Reserved identifier namespaces that change how a node is served
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Namespaces {
    pub observation_prefix: String,
    pub custom_group_prefix: String,
    pub hierarchy_root: String,
}

impl Default for Namespaces {
    fn default() -> Self {
        Self {
            observation_prefix: OBSERVATION_PREFIX.to_string(),
            custom_group_prefix: CUSTOM_GROUP_PREFIX.to_string(),
            hierarchy_root: HIERARCHY_ROOT.to_string(),
        }
    }
}

impl Namespaces {
    /// Decide the node kind for an identifier
    pub fn classify(&self, id: &str) -> Node {
        if id.starts_with(&self.observation_prefix) {
            Node::Observation(id.to_string())
        } else {
            Node::Regular(id.to_string())
        }
    }

    pub fn is_custom_group(&self, id: &str) -> bool {
        id.starts_with(&self.custom_group_prefix)
    }

    pub fn is_hierarchy_root(&self, id: &str) -> bool {
        id == self.hierarchy_root
    }

    /// Split input nodes by kind, keeping input order inside each side
    pub fn partition(&self, ids: &[String]) -> Partition {
        let mut partition = Partition::default();
        for id in ids {
            match self.classify(id) {
                Node::Observation(id) => partition.observation.push(id),
                Node::Regular(id) => partition.regular.push(id),
            }
        }
        partition
    }
}

/// A node identifier tagged with how it is served
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    /// Statistical observation record, served from raw triples
    Observation(String),
    /// Ordinary entity, served from the typed property-value store
    Regular(String),
}

impl Node {
    pub fn id(&self) -> &str {
        match self {
            Self::Observation(id) | Self::Regular(id) => id,
        }
    }

    pub fn is_observation(&self) -> bool {
        matches!(self, Self::Observation(_))
    }
}

/// Input nodes split by kind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    pub observation: Vec<String>,
    pub regular: Vec<String>,
}

impl Partition {
    pub fn is_empty(&self) -> bool {
        self.observation.is_empty() && self.regular.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_classify() {
        let ns = Namespaces::default();
        assert!(ns.classify("dc/o/abc123").is_observation());
        assert!(!ns.classify("geoId/06").is_observation());
        assert_eq!(ns.classify("geoId/06").id(), "geoId/06");
    }

    #[test]
    fn test_partition_preserves_order() {
        let ns = Namespaces::default();
        let input = ids(&["geoId/06", "dc/o/2", "country/USA", "dc/o/1", "geoId/01"]);
        let partition = ns.partition(&input);

        assert_eq!(partition.observation, ids(&["dc/o/2", "dc/o/1"]));
        assert_eq!(partition.regular, ids(&["geoId/06", "country/USA", "geoId/01"]));

        // True partition: every input lands on exactly one side
        let total = partition.observation.len() + partition.regular.len();
        assert_eq!(total, input.len());
        for id in &input {
            let on_obs = partition.observation.contains(id);
            let on_reg = partition.regular.contains(id);
            assert!(on_obs ^ on_reg, "{} must be in exactly one partition", id);
        }
    }

    #[test]
    fn test_partition_empty() {
        let partition = Namespaces::default().partition(&[]);
        assert!(partition.is_empty());
    }

    #[test]
    fn test_custom_namespaces() {
        let ns = Namespaces {
            observation_prefix: "obs:".to_string(),
            ..Default::default()
        };
        assert!(ns.classify("obs:1").is_observation());
        assert!(!ns.classify("dc/o/1").is_observation());
        assert!(ns.is_custom_group("dc/g/Custom_Energy"));
        assert!(ns.is_hierarchy_root("dc/g/Root"));
    }
}
