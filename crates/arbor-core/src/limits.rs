//! Request limits for resource protection

use crate::error::{CoreError, Result};

/// Page size used when the caller does not ask for one (500)
pub const DEFAULT_PAGE_LIMIT: usize = 500;

/// Largest page size honoured (5000)
pub const MAX_PAGE_LIMIT: usize = 5000;

/// Maximum nodes in a single request (10000)
pub const MAX_NODES_PER_REQUEST: usize = 10_000;

/// Maximum properties in a single request (500)
pub const MAX_PROPERTIES_PER_REQUEST: usize = 500;

/// Maximum length of an ancestor chain (64)
pub const MAX_ANCESTOR_HOPS: usize = 64;

/// Resolve the effective page size: 0 means default, large values are clamped
pub fn page_limit(requested: usize) -> usize {
    match requested {
        0 => DEFAULT_PAGE_LIMIT,
        n => n.min(MAX_PAGE_LIMIT),
    }
}

/// Validate node count
pub fn validate_nodes(nodes: &[String]) -> Result<()> {
    if nodes.len() > MAX_NODES_PER_REQUEST {
        return Err(CoreError::Validation(format!(
            "Too many nodes: {} (max {})",
            nodes.len(),
            MAX_NODES_PER_REQUEST
        )));
    }
    if nodes.iter().any(|n| n.is_empty()) {
        return Err(CoreError::Validation("Node id cannot be empty".to_string()));
    }
    Ok(())
}

/// Validate requested properties
pub fn validate_properties(properties: &[String]) -> Result<()> {
    if properties.len() > MAX_PROPERTIES_PER_REQUEST {
        return Err(CoreError::Validation(format!(
            "Too many properties: {} (max {})",
            properties.len(),
            MAX_PROPERTIES_PER_REQUEST
        )));
    }
    if properties.iter().any(|p| p.is_empty()) {
        return Err(CoreError::Validation("Property cannot be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_limit() {
        assert_eq!(page_limit(0), DEFAULT_PAGE_LIMIT);
        assert_eq!(page_limit(10), 10);
        assert_eq!(page_limit(1_000_000), MAX_PAGE_LIMIT);
    }

    #[test]
    fn test_validate_nodes() {
        assert!(validate_nodes(&["geoId/06".to_string()]).is_ok());
        assert!(validate_nodes(&[String::new()]).is_err());
        let many = vec!["x".to_string(); MAX_NODES_PER_REQUEST + 1];
        assert!(validate_nodes(&many).is_err());
    }

    #[test]
    fn test_validate_properties() {
        assert!(validate_properties(&["name".to_string()]).is_ok());
        assert!(validate_properties(&[String::new()]).is_err());
    }
}
