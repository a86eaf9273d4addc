//! # Migrator Repository
//!
//! This crate provides traits and implementations for talking to the search
//! engine clusters involved in a migration. It includes definitions for
//! errors, interfaces, and a concrete implementation for OpenSearch.

pub mod errors;
pub mod interfaces;
pub mod opensearch;
pub mod types;

pub use errors::ClusterError;
pub use interfaces::ClusterClient;
pub use opensearch::OpenSearchCluster;
pub use types::Document;
