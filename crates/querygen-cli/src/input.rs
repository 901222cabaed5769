//! Definition-document loading for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use querygen_def::AiDef;

/// Reads and decodes an AI definition document.
///
/// Both failure modes are fatal for every command: a missing or unreadable
/// file, and a document that does not decode into the query schema.
pub fn load_def(path: &Path) -> Result<AiDef> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read AI definition file: {}", path.display()))?;
    AiDef::from_yaml_str(&text)
        .with_context(|| format!("failed to decode AI definition file: {}", path.display()))
}
