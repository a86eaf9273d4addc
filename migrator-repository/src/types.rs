//! Shared types for cluster operations.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single document fetched from an index.
///
/// Documents are untyped on purpose: the source cluster's records carry no
/// schema this tool enforces or validates. The engine-assigned `_id` is kept
/// so the document can be re-inserted under the same identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// The engine-assigned document identifier, if present in the hit.
    pub id: Option<String>,
    /// The raw `_source` body of the hit.
    pub source: Value,
}

impl Document {
    /// Create a document from an identifier and source body.
    pub fn new(id: Option<String>, source: Value) -> Self {
        Self { id, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_keeps_untyped_source() {
        let doc = Document::new(Some("1".to_string()), json!({"any": {"shape": true}}));

        assert_eq!(doc.id.as_deref(), Some("1"));
        assert_eq!(doc.source["any"]["shape"], true);
    }
}
