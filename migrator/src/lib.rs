//! # Migrator
//!
//! Main library for the cross-cluster index migrator.
//!
//! This crate provides the entry point, configuration, and transfer
//! dispatcher for copying every index of a source cluster into a target
//! cluster.

pub mod config;
pub mod transfer;

pub use config::{Dependencies, Settings};
pub use transfer::{TransferDispatcher, TransferSummary};

use thiserror::Error;

/// Errors that can occur during migrator initialization or execution.
#[derive(Error, Debug)]
pub enum MigrationError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Cluster error.
    #[error("Cluster error: {0}")]
    ClusterError(#[from] migrator_repository::ClusterError),
}

impl MigrationError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
