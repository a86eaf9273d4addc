//! OpenSearch query builders.
//!
//! This module provides the fixed search body used to fetch an index's
//! documents during a migration.

use serde_json::{json, Value};

/// Maximum number of documents fetched from an index in one request.
///
/// This matches the engine's default `index.max_result_window`; anything past
/// it would require scroll or search-after pagination, which the migrator
/// does not do.
pub const PAGE_SIZE: usize = 10_000;

/// Build the fixed per-index fetch query.
///
/// One match-all page: `query_string` with `*`, `PAGE_SIZE` documents,
/// offset 0.
pub fn fetch_page_query() -> Value {
    json!({
        "query": {
            "query_string": {
                "query": "*"
            }
        },
        "size": PAGE_SIZE,
        "from": 0
    })
}
