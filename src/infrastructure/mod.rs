//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repositories/` - Directory stores (JSON file, in-memory)

pub mod repositories;

pub use repositories::{InMemoryDirectory, JsonFileDirectory};
