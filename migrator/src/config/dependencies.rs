//! Dependency initialization and wiring for the migrator.

use std::sync::Arc;
use tracing::info;

use crate::config::Settings;
use crate::MigrationError;
use migrator_repository::{ClusterClient, OpenSearchCluster};

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// Client for the external cluster being read.
    pub source: Arc<dyn ClusterClient>,
    /// Client for the internal cluster being written.
    pub target: Arc<dyn ClusterClient>,
}

impl Dependencies {
    /// Initialize all dependencies from loaded settings.
    ///
    /// Builds a client per cluster and verifies the source cluster is
    /// reachable and healthy before any migration work starts.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(MigrationError)` - If initialization fails
    pub async fn new(settings: &Settings) -> Result<Self, MigrationError> {
        info!(
            source = %settings.external_cluster_name,
            target = %settings.internal_cluster_name,
            "Initializing dependencies"
        );

        let source = OpenSearchCluster::new(
            &settings.external_cluster_name,
            &settings.external_uri,
            &settings.external_username,
            &settings.external_password,
        )
        .map_err(|e| MigrationError::config(format!("Failed to create source client: {}", e)))?;

        let target = OpenSearchCluster::new(
            &settings.internal_cluster_name,
            &settings.internal_uri,
            &settings.internal_username,
            &settings.internal_password,
        )
        .map_err(|e| MigrationError::config(format!("Failed to create target client: {}", e)))?;

        // Verify the source cluster is reachable
        let healthy = source
            .health_check()
            .await
            .map_err(|e| MigrationError::config(format!("Source health check failed: {}", e)))?;

        if !healthy {
            return Err(MigrationError::config("Source cluster is unhealthy"));
        }

        info!("Source cluster connection verified");

        Ok(Self {
            source: Arc::new(source),
            target: Arc::new(target),
        })
    }
}
