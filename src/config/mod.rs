//! Configuration module for roster
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ROSTER_*)
//! 3. Project config (.roster/config.toml)
//! 4. User config (~/.config/roster/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, LoadedConfig, PROJECT_CONFIG};
pub use types::{Config, LogConfig, OutputConfig, OutputFormat, StoreConfig};
