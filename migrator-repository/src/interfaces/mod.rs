//! Interface definitions for the cluster client.
//!
//! This module defines the abstract `ClusterClient` trait that allows
//! for dependency injection and swappable search backend implementations.

mod cluster_client;

pub use cluster_client::ClusterClient;
