//! Configuration for the migrator.

mod dependencies;
mod settings;

pub use dependencies::Dependencies;
pub use settings::Settings;
