//! Seed command handler

use std::path::Path;

use anyhow::{Context, Result};

use roster::config::OutputFormat;
use roster::presentation::UseCases;

use super::emit;

pub fn cmd_seed(file: &Path, use_cases: &UseCases, format: OutputFormat) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read employee database {}", file.display()))?;
    let summary = use_cases
        .seed
        .import_json(&content)
        .with_context(|| format!("failed to import {}", file.display()))?;
    emit(&summary, format)
}
