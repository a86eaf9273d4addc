//! OpenSearch cluster client implementation.
//!
//! This module provides the concrete implementation of `ClusterClient`
//! using the OpenSearch Rust client.

use async_trait::async_trait;
use opensearch::{
    auth::Credentials,
    cat::CatIndicesParts,
    cluster::ClusterHealthParts,
    http::request::JsonBody,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    BulkParts, OpenSearch, SearchParts,
};
use serde_json::{json, Value};
use tracing::{debug, error, info};
use url::Url;

use crate::errors::ClusterError;
use crate::interfaces::ClusterClient;
use crate::opensearch::queries::fetch_page_query;
use crate::types::Document;

/// OpenSearch cluster client.
///
/// One instance per cluster; the same type serves as the read side (source
/// cluster) and the write side (target cluster) of a migration.
///
/// # Example
///
/// ```ignore
/// let source = OpenSearchCluster::new(
///     "production",
///     "http://localhost:9200",
///     "admin",
///     "admin",
/// )?;
///
/// for name in source.list_indices().await? {
///     let docs = source.fetch_documents(&name).await?;
///     println!("{}: {} docs", name, docs.len());
/// }
/// ```
pub struct OpenSearchCluster {
    client: OpenSearch,
    cluster_name: String,
}

impl OpenSearchCluster {
    /// Create a new client connected to the specified cluster.
    ///
    /// # Arguments
    ///
    /// * `cluster_name` - Human-readable cluster name, used in logs only
    /// * `url` - The cluster URL (e.g., "http://localhost:9200")
    /// * `username` - Basic auth username
    /// * `password` - Basic auth password
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchCluster)` - A new client instance
    /// * `Err(ClusterError)` - If the URL is malformed or transport setup fails
    pub fn new(
        cluster_name: &str,
        url: &str,
        username: &str,
        password: &str,
    ) -> Result<Self, ClusterError> {
        let parsed_url = Url::parse(url).map_err(|e| ClusterError::connection(e.to_string()))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let transport = TransportBuilder::new(conn_pool)
            .auth(Credentials::Basic(
                username.to_string(),
                password.to_string(),
            ))
            .disable_proxy()
            .build()
            .map_err(|e| ClusterError::connection(e.to_string()))?;

        let client = OpenSearch::new(transport);

        info!(
            cluster = %cluster_name,
            url = %url,
            "Created cluster client"
        );

        Ok(Self {
            client,
            cluster_name: cluster_name.to_string(),
        })
    }

    /// Extract index names from a cat-indices JSON response.
    ///
    /// Entries without a string `index` field are skipped.
    fn parse_index_names(entries: &[Value]) -> Vec<String> {
        entries
            .iter()
            .filter_map(|entry| entry.get("index").and_then(|v| v.as_str()))
            .map(|name| name.to_string())
            .collect()
    }

    /// Parse a single search hit into a `Document`.
    ///
    /// Returns `None` if the hit carries no `_source`.
    fn parse_hit(hit: &Value) -> Option<Document> {
        let source = hit.get("_source")?.clone();
        let id = hit
            .get("_id")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());

        Some(Document::new(id, source))
    }

    /// Extract the documents from a search response body.
    ///
    /// A zero-hit body yields an empty list; a body without a hits array
    /// is malformed.
    fn parse_hits(body: &Value) -> Result<Vec<Document>, ClusterError> {
        let hits = body["hits"]["hits"]
            .as_array()
            .ok_or_else(|| ClusterError::parse("response body has no hits array"))?;

        Ok(hits.iter().filter_map(Self::parse_hit).collect())
    }

    /// Read the hit total from a search response body.
    ///
    /// Handles both the object form (`{"value": N, ...}`) and the bare
    /// number older engines return.
    fn hit_total(body: &Value) -> u64 {
        let total = &body["hits"]["total"];
        total["value"].as_u64().or_else(|| total.as_u64()).unwrap_or(0)
    }

    /// Build the flat action/document pair list for a bulk request.
    fn bulk_actions(index: &str, documents: &[Document]) -> Vec<Value> {
        let mut actions = Vec::with_capacity(documents.len() * 2);

        for doc in documents {
            let action = match &doc.id {
                Some(id) => json!({"index": {"_index": index, "_id": id}}),
                None => json!({"index": {"_index": index}}),
            };
            actions.push(action);
            actions.push(doc.source.clone());
        }

        actions
    }

    /// Format a non-success search response into a fetch error.
    ///
    /// Extracts the engine's error type and reason when the body is
    /// parseable, falling back to the raw text.
    fn fetch_error(status: u16, body: &str) -> ClusterError {
        if let Ok(parsed) = serde_json::from_str::<Value>(body) {
            let error_type = parsed["error"]["type"].as_str();
            let reason = parsed["error"]["reason"].as_str();
            if let (Some(error_type), Some(reason)) = (error_type, reason) {
                return ClusterError::fetch(format!("[{}] {}: {}", status, error_type, reason));
            }
        }
        ClusterError::fetch(format!("[{}] {}", status, body))
    }
}

#[async_trait]
impl ClusterClient for OpenSearchCluster {
    /// Check cluster health.
    ///
    /// Green and yellow statuses count as healthy.
    async fn health_check(&self) -> Result<bool, ClusterError> {
        let response = self
            .client
            .cluster()
            .health(ClusterHealthParts::None)
            .send()
            .await
            .map_err(|e| ClusterError::health_check(e.to_string()))?;

        let body: Value = response
            .json()
            .await
            .map_err(|e| ClusterError::parse(e.to_string()))?;

        let status = body["status"].as_str().unwrap_or("unknown");
        info!(cluster = %self.cluster_name, status = %status, "Cluster health");

        Ok(status == "green" || status == "yellow")
    }

    /// Enumerate all index names in the cluster via cat-indices.
    async fn list_indices(&self) -> Result<Vec<String>, ClusterError> {
        let response = self
            .client
            .cat()
            .indices(CatIndicesParts::None)
            .format("json")
            .send()
            .await
            .map_err(|e| ClusterError::enumeration(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                cluster = %self.cluster_name,
                status = %status,
                body = %body,
                "Cat indices request failed"
            );
            return Err(ClusterError::enumeration(format!("[{}] {}", status, body)));
        }

        let entries: Vec<Value> = response
            .json()
            .await
            .map_err(|e| ClusterError::parse(e.to_string()))?;

        let names = Self::parse_index_names(&entries);
        debug!(cluster = %self.cluster_name, count = names.len(), "Enumerated indices");

        Ok(names)
    }

    /// Fetch one bounded match-all page of documents from an index.
    async fn fetch_documents(&self, index: &str) -> Result<Vec<Document>, ClusterError> {
        let response = self
            .client
            .search(SearchParts::Index(&[index]))
            .body(fetch_page_query())
            .send()
            .await
            .map_err(|e| ClusterError::fetch(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(index = %index, status = %status, "Search request failed");
            return Err(Self::fetch_error(status.as_u16(), &body));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ClusterError::parse(e.to_string()))?;

        let took_ms = body["took"].as_u64().unwrap_or(0);
        info!(
            index = %index,
            hits = Self::hit_total(&body),
            took_ms = took_ms,
            "Fetched documents"
        );

        Self::parse_hits(&body)
    }

    /// Insert documents into an index in a single bulk request.
    async fn bulk_insert(&self, index: &str, documents: &[Document]) -> Result<(), ClusterError> {
        if documents.is_empty() {
            return Ok(());
        }

        info!(index = %index, count = documents.len(), "Inserting documents");

        let body: Vec<JsonBody<Value>> = Self::bulk_actions(index, documents)
            .into_iter()
            .map(Into::into)
            .collect();

        let response = self
            .client
            .bulk(BulkParts::Index(index))
            .body(body)
            .send()
            .await
            .map_err(|e| ClusterError::bulk_insert(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(index = %index, status = %status, body = %body, "Bulk request failed");
            return Err(ClusterError::bulk_insert(format!("[{}] {}", status, body)));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ClusterError::parse(e.to_string()))?;

        if body["errors"].as_bool().unwrap_or(false) {
            let failed = body["items"]
                .as_array()
                .map(|items| {
                    items
                        .iter()
                        .filter(|item| item["index"]["error"].is_object())
                        .count()
                })
                .unwrap_or(0);
            error!(index = %index, failed = failed, "Bulk insert had item errors");
            return Err(ClusterError::bulk_insert(format!(
                "{} of {} documents failed",
                failed,
                documents.len()
            )));
        }

        debug!(index = %index, count = documents.len(), "Documents inserted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_index_names() {
        let entries = vec![
            json!({"index": "logs-2024", "health": "green"}),
            json!({"index": "users", "health": "yellow"}),
            json!({"index": "orders"}),
        ];

        let names = OpenSearchCluster::parse_index_names(&entries);

        assert_eq!(names, vec!["logs-2024", "users", "orders"]);
    }

    #[test]
    fn test_parse_index_names_skips_malformed_entries() {
        let entries = vec![
            json!({"index": "kept"}),
            json!({"health": "green"}),
            json!({"index": 42}),
        ];

        let names = OpenSearchCluster::parse_index_names(&entries);

        assert_eq!(names, vec!["kept"]);
    }

    #[test]
    fn test_parse_index_names_empty() {
        let names = OpenSearchCluster::parse_index_names(&[]);

        assert!(names.is_empty());
    }

    #[test]
    fn test_parse_hit() {
        let hit = json!({
            "_id": "doc-1",
            "_source": {"title": "First", "count": 3}
        });

        let doc = OpenSearchCluster::parse_hit(&hit).unwrap();

        assert_eq!(doc.id.as_deref(), Some("doc-1"));
        assert_eq!(doc.source["title"], "First");
        assert_eq!(doc.source["count"], 3);
    }

    #[test]
    fn test_parse_hit_without_id() {
        let hit = json!({"_source": {"title": "Anonymous"}});

        let doc = OpenSearchCluster::parse_hit(&hit).unwrap();

        assert!(doc.id.is_none());
        assert_eq!(doc.source["title"], "Anonymous");
    }

    #[test]
    fn test_parse_hit_without_source() {
        let hit = json!({"_id": "doc-1"});

        assert!(OpenSearchCluster::parse_hit(&hit).is_none());
    }

    #[test]
    fn test_parse_hits() {
        let body = json!({
            "hits": {
                "total": {"value": 2, "relation": "eq"},
                "hits": [
                    {"_id": "a", "_source": {"n": 1}},
                    {"_id": "b", "_source": {"n": 2}}
                ]
            }
        });

        let docs = OpenSearchCluster::parse_hits(&body).unwrap();

        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].id.as_deref(), Some("a"));
        assert_eq!(docs[1].source["n"], 2);
    }

    #[test]
    fn test_parse_hits_zero_hits_yields_empty_list() {
        let body = json!({"hits": {"total": {"value": 0, "relation": "eq"}, "hits": []}});

        let docs = OpenSearchCluster::parse_hits(&body).unwrap();

        assert!(docs.is_empty());
    }

    #[test]
    fn test_parse_hits_missing_hits_array_is_a_parse_error() {
        let body = json!({"took": 3});

        let result = OpenSearchCluster::parse_hits(&body);

        assert!(matches!(result, Err(ClusterError::ParseError(_))));
    }

    #[test]
    fn test_hit_total_object_form() {
        let body = json!({"hits": {"total": {"value": 42, "relation": "eq"}}});

        assert_eq!(OpenSearchCluster::hit_total(&body), 42);
    }

    #[test]
    fn test_hit_total_bare_number() {
        let body = json!({"hits": {"total": 7}});

        assert_eq!(OpenSearchCluster::hit_total(&body), 7);
    }

    #[test]
    fn test_bulk_actions_pairs_action_with_document() {
        let documents = vec![
            Document::new(Some("a".to_string()), json!({"n": 1})),
            Document::new(None, json!({"n": 2})),
        ];

        let actions = OpenSearchCluster::bulk_actions("target", &documents);

        assert_eq!(actions.len(), 4);
        assert_eq!(actions[0]["index"]["_index"], "target");
        assert_eq!(actions[0]["index"]["_id"], "a");
        assert_eq!(actions[1]["n"], 1);
        // Documents without an id get an engine-assigned one
        assert!(actions[2]["index"].get("_id").is_none());
        assert_eq!(actions[3]["n"], 2);
    }

    #[test]
    fn test_fetch_error_extracts_engine_reason() {
        let body = r#"{"error": {"type": "index_not_found_exception", "reason": "no such index"}}"#;

        let err = OpenSearchCluster::fetch_error(404, body);

        assert_eq!(
            err.to_string(),
            "Fetch error: [404] index_not_found_exception: no such index"
        );
    }

    #[test]
    fn test_fetch_error_falls_back_to_raw_body() {
        let err = OpenSearchCluster::fetch_error(502, "bad gateway");

        assert_eq!(err.to_string(), "Fetch error: [502] bad gateway");
    }
}
