//! Transfer dispatcher for the migrator.
//!
//! Enumerates the source cluster's indices, fetches each index's documents,
//! and fans out one insert task per index against the target cluster.

use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{error, info};

use crate::MigrationError;
use migrator_repository::ClusterClient;

/// Outcome of a migration run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferSummary {
    /// Number of indices the source cluster reported.
    pub indices_total: usize,
    /// Number of indices whose documents reached the target.
    pub migrated: usize,
    /// Number of indices that failed during fetch or insert.
    pub failed: usize,
}

/// Dispatcher that copies every source index into the target cluster.
///
/// For each index the fetch runs synchronously, then the insert is spawned
/// as its own task; all tasks are joined by a single barrier before the run
/// returns. Per-index failures are logged and counted, never propagated to
/// sibling indices.
pub struct TransferDispatcher {
    source: Arc<dyn ClusterClient>,
    target: Arc<dyn ClusterClient>,
}

impl TransferDispatcher {
    /// Create a new dispatcher over the given source and target clients.
    pub fn new(source: Arc<dyn ClusterClient>, target: Arc<dyn ClusterClient>) -> Self {
        Self { source, target }
    }

    /// Run the migration.
    ///
    /// Index enumeration failure is fatal; everything after it is per-index
    /// and only affects that index's counters.
    pub async fn run(&self) -> Result<TransferSummary, MigrationError> {
        let names = self.source.list_indices().await?;

        info!(count = names.len(), "Starting transfer");

        let indices_total = names.len();
        let mut failed = 0;
        let mut tasks: JoinSet<bool> = JoinSet::new();

        for name in names {
            match self.source.fetch_documents(&name).await {
                Ok(documents) => {
                    let target = Arc::clone(&self.target);
                    tasks.spawn(async move {
                        match target.bulk_insert(&name, &documents).await {
                            Ok(()) => true,
                            Err(e) => {
                                error!(index = %name, error = %e, "Insert failed");
                                false
                            }
                        }
                    });
                }
                Err(e) => {
                    error!(index = %name, error = %e, "Fetch failed, skipping index");
                    failed += 1;
                }
            }
        }

        let mut migrated = 0;
        while let Some(result) = tasks.join_next().await {
            match result {
                Ok(true) => migrated += 1,
                Ok(false) => failed += 1,
                Err(e) => {
                    error!(error = %e, "Transfer task panicked");
                    failed += 1;
                }
            }
        }

        Ok(TransferSummary {
            indices_total,
            migrated,
            failed,
        })
    }
}
