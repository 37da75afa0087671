//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod document;
mod json_file;
mod memory;

pub use json_file::JsonFileDirectory;
pub use memory::InMemoryDirectory;
