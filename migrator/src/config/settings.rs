//! Settings loaded from an environment-style file.

use std::env;
use std::path::Path;

use crate::MigrationError;

/// Connection settings for the two clusters involved in a migration.
///
/// The external cluster is the source being read; the internal cluster is
/// the local target being written. Immutable after load.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Source cluster name, used in logs only.
    pub external_cluster_name: String,
    /// Source cluster basic auth username.
    pub external_username: String,
    /// Source cluster basic auth password.
    pub external_password: String,
    /// Source cluster URL.
    pub external_uri: String,

    /// Target cluster name, used in logs only.
    pub internal_cluster_name: String,
    /// Target cluster basic auth username.
    pub internal_username: String,
    /// Target cluster basic auth password.
    pub internal_password: String,
    /// Target cluster URL.
    pub internal_uri: String,
}

impl Settings {
    /// Load settings from an env-format file.
    ///
    /// The file is loaded into the process environment first, so variables
    /// already set in the environment take precedence over file contents.
    /// A missing file or a missing key is an error.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, MigrationError> {
        dotenv::from_path(path.as_ref()).map_err(|e| {
            MigrationError::config(format!(
                "No env file found at {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_env()
    }

    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, MigrationError> {
        Ok(Self {
            external_cluster_name: required_var("EXTERNAL_CLUSTER_NAME")?,
            external_username: required_var("EXTERNAL_USERNAME")?,
            external_password: required_var("EXTERNAL_PASSWORD")?,
            external_uri: required_var("EXTERNAL_URI")?,
            internal_cluster_name: required_var("INTERNAL_CLUSTER_NAME")?,
            internal_username: required_var("INTERNAL_USERNAME")?,
            internal_password: required_var("INTERNAL_PASSWORD")?,
            internal_uri: required_var("INTERNAL_URI")?,
        })
    }
}

/// Read a required environment variable.
fn required_var(key: &str) -> Result<String, MigrationError> {
    env::var(key).map_err(|_| MigrationError::config(format!("Missing required setting {}", key)))
}
