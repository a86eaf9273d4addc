//! Cluster error types.
//!
//! This module defines the error types that can occur while talking to a
//! search engine cluster.

use thiserror::Error;

/// Errors that can occur during cluster operations.
#[derive(Debug, Clone, Error)]
pub enum ClusterError {
    /// Failed to establish a connection to the cluster.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Failed to enumerate the cluster's indices.
    #[error("Enumeration error: {0}")]
    EnumerationError(String),

    /// Failed to fetch documents from an index.
    #[error("Fetch error: {0}")]
    FetchError(String),

    /// Failed to bulk-insert documents into an index.
    #[error("Bulk insert error: {0}")]
    BulkInsertError(String),

    /// Failed to parse a response body.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Health check against the cluster failed.
    #[error("Health check error: {0}")]
    HealthCheckError(String),
}

impl ClusterError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create an enumeration error.
    pub fn enumeration(msg: impl Into<String>) -> Self {
        Self::EnumerationError(msg.into())
    }

    /// Create a fetch error.
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::FetchError(msg.into())
    }

    /// Create a bulk insert error.
    pub fn bulk_insert(msg: impl Into<String>) -> Self {
        Self::BulkInsertError(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create a health check error.
    pub fn health_check(msg: impl Into<String>) -> Self {
        Self::HealthCheckError(msg.into())
    }
}
