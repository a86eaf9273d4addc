//! Error types for the migrator repository.

mod cluster_error;

pub use cluster_error::ClusterError;
