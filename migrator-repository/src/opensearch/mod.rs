//! OpenSearch implementation of the cluster client.
//!
//! This module provides a concrete implementation of `ClusterClient`
//! using OpenSearch as the backend.

mod client;
mod queries;

pub use client::OpenSearchCluster;
pub use queries::fetch_page_query;
