//! Merging of type-grouped property values

use crate::entity::{EntityInfo, Identity};
use std::collections::{BTreeMap, HashMap};

/// Property values for one (node, property) pair, grouped by object type
///
/// An object with several types shows up once in each of its groups. The
/// empty key holds values with no type (scalars).
pub type TypedValues = BTreeMap<String, Vec<EntityInfo>>;

/// Collapse type-grouped values into one de-duplicated list
///
/// Groups are visited in type order. Values sharing a dcid (or, lacking
/// one, a scalar value) are merged into the first occurrence, whose type
/// labels absorb the group type and the duplicate's own labels. Values with
/// neither are kept as is.
pub fn merge_typed_nodes(typed: &TypedValues) -> Vec<EntityInfo> {
    let mut merged: Vec<EntityInfo> = Vec::new();
    let mut index: HashMap<Identity<'_>, usize> = HashMap::new();

    for (group_type, values) in typed {
        for info in values {
            let slot = match info.identity() {
                Some(key) => match index.get(&key) {
                    Some(&slot) => slot,
                    None => {
                        index.insert(key, merged.len());
                        merged.push(strip_types(info));
                        merged.len() - 1
                    }
                },
                None => {
                    merged.push(strip_types(info));
                    merged.len() - 1
                }
            };

            let target = &mut merged[slot];
            if target.name.is_none() {
                target.name = info.name.clone();
            }
            if target.provenance_id.is_none() {
                target.provenance_id = info.provenance_id.clone();
            }
            if !group_type.is_empty() {
                add_type(target, group_type);
            }
            for t in &info.types {
                add_type(target, t);
            }
        }
    }

    merged
}

fn strip_types(info: &EntityInfo) -> EntityInfo {
    EntityInfo {
        types: Vec::new(),
        ..info.clone()
    }
}

fn add_type(info: &mut EntityInfo, entity_type: &str) {
    if !info.types.iter().any(|t| t == entity_type) {
        info.types.push(entity_type.to_string());
    }
}
