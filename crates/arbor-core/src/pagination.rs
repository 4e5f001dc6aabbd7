//! Pagination cursors and the opaque continuation token

use crate::error::{CoreError, Result};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Resume position for one (node, property) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorEntry {
    pub node: String,
    pub property: String,
    pub offset: usize,
}

/// Where the next page of a property-value fetch starts
///
/// Pairs that are not listed are exhausted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCursor {
    pub cursors: Vec<CursorEntry>,
}

impl PageCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: impl Into<String>, property: impl Into<String>, offset: usize) {
        self.cursors.push(CursorEntry {
            node: node.into(),
            property: property.into(),
            offset,
        });
    }

    /// Offset to resume from; `None` if the pair is exhausted
    pub fn offset(&self, node: &str, property: &str) -> Option<usize> {
        self.cursors
            .iter()
            .find(|c| c.node == node && c.property == property)
            .map(|c| c.offset)
    }

    pub fn is_empty(&self) -> bool {
        self.cursors.is_empty()
    }
}

/// Serialize a cursor into the wire token
pub fn encode_token(cursor: &PageCursor) -> Result<String> {
    let bytes = serde_json::to_vec(cursor)?;
    Ok(URL_SAFE_NO_PAD.encode(bytes))
}

/// Parse a wire token; an empty token means "start from the beginning"
pub fn decode_token(token: &str) -> Result<Option<PageCursor>> {
    if token.is_empty() {
        return Ok(None);
    }
    let bytes = URL_SAFE_NO_PAD
        .decode(token)
        .map_err(|e| CoreError::InvalidToken(e.to_string()))?;
    let cursor = serde_json::from_slice(&bytes)
        .map_err(|e| CoreError::InvalidToken(e.to_string()))?;
    Ok(Some(cursor))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        let mut cursor = PageCursor::new();
        cursor.push("geoId/06", "containedInPlace", 500);
        cursor.push("geoId/06", "name", 2);

        let token = encode_token(&cursor).unwrap();
        assert!(!token.contains('='));
        assert_eq!(decode_token(&token).unwrap(), Some(cursor));
    }

    #[test]
    fn test_empty_token_starts_fresh() {
        assert_eq!(decode_token("").unwrap(), None);
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(matches!(decode_token("!!not-base64!!"), Err(CoreError::InvalidToken(_))));
        let not_json = URL_SAFE_NO_PAD.encode(b"hello");
        assert!(matches!(decode_token(&not_json), Err(CoreError::InvalidToken(_))));
    }

    #[test]
    fn test_offset_lookup() {
        let mut cursor = PageCursor::new();
        cursor.push("a", "p", 3);
        assert_eq!(cursor.offset("a", "p"), Some(3));
        assert_eq!(cursor.offset("a", "q"), None);
    }
}
