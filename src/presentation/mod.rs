//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Command-line definition
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Output rendering
//!
//! ## Usage
//!
//! ```ignore
//! use roster::presentation::factory;
//!
//! let use_cases = factory::create_file_use_cases("roster.json".into());
//! let structure = use_cases.reporting.read(&"lead".into())?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use factory::{create_file_use_cases, create_use_cases, UseCases};
