//! Entry point for the cross-cluster index migrator.
//!
//! Connects to the source cluster, retrieves the documents of every index,
//! and imports them into the target cluster.

use tracing::{error, info};

use migrator::{Dependencies, MigrationError, Settings, TransferDispatcher};

/// Settings file read at startup.
const ENV_FILE: &str = "debug.env";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run(ENV_FILE).await {
        error!(error = %e, "Migration failed");
        std::process::exit(1);
    }
}

async fn run(env_file: &str) -> Result<(), MigrationError> {
    let settings = Settings::from_env_file(env_file)?;
    let dependencies = Dependencies::new(&settings).await?;

    let dispatcher = TransferDispatcher::new(dependencies.source, dependencies.target);
    let summary = dispatcher.run().await?;

    info!(
        indices = summary.indices_total,
        migrated = summary.migrated,
        failed = summary.failed,
        "Migration complete"
    );

    Ok(())
}
