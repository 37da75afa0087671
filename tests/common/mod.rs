//! Shared helpers for roster integration tests.

#![allow(dead_code)]

pub mod env;

pub use env::*;
pub use fixtures::*;
