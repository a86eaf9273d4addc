//! Cluster client trait definition.
//!
//! This module defines the abstract interface for cluster operations,
//! allowing for different backend implementations (OpenSearch,
//! Elasticsearch, etc.).

use async_trait::async_trait;

use crate::errors::ClusterError;
use crate::types::Document;

/// Abstract interface for the cluster operations a migration needs.
///
/// Implementations can be swapped for different backends (OpenSearch, mock,
/// etc.), enabling easy testing of the transfer logic without a live cluster.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` to allow use across async tasks.
#[async_trait]
pub trait ClusterClient: Send + Sync {
    /// Check if the cluster is healthy and reachable.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - If the cluster reports a healthy status
    /// * `Ok(false)` - If the cluster is reachable but unhealthy
    /// * `Err(ClusterError)` - If the health check fails to execute
    async fn health_check(&self) -> Result<bool, ClusterError>;

    /// Enumerate the names of all indices in the cluster.
    ///
    /// No ordering is guaranteed.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<String>)` - One name per index in the cluster
    /// * `Err(ClusterError)` - On transport error or non-success status
    async fn list_indices(&self) -> Result<Vec<String>, ClusterError>;

    /// Fetch a single bounded page of documents from an index.
    ///
    /// Issues one match-all search (size 10 000, offset 0). An index with
    /// zero hits yields an empty list without error.
    ///
    /// # Arguments
    ///
    /// * `index` - The index to fetch from
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Document>)` - The matching documents
    /// * `Err(ClusterError)` - On transport error, non-success status, or
    ///   malformed response body
    async fn fetch_documents(&self, index: &str) -> Result<Vec<Document>, ClusterError>;

    /// Insert documents into an index in a single bulk request.
    ///
    /// Documents that carry an identifier are written under it; the rest get
    /// engine-assigned identifiers. An empty slice is a no-op success.
    ///
    /// # Arguments
    ///
    /// * `index` - The destination index
    /// * `documents` - The documents to insert
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If every document was accepted
    /// * `Err(ClusterError)` - If the request or any bulk item fails
    async fn bulk_insert(&self, index: &str, documents: &[Document]) -> Result<(), ClusterError>;
}
