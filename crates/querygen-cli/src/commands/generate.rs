//! Generate command implementation
//!
//! Walks the `Querys` collection in document order, skips system queries,
//! and writes a stub pair per surviving query into the output directory.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use querygen_backend_cpp::{write_query_stubs, QueryClass};
use querygen_def::{capitalize_query_name, AiDef, QueryEntry};

use crate::input::load_def;

/// Outcome of one generation pass.
#[derive(Debug, Clone, Default)]
pub struct GenerationSummary {
    /// Capitalized class names in generation order, one per stub pair.
    pub generated: Vec<String>,
    /// Union of the top-level field names seen across processed query
    /// records. Diagnostic only; skipped system queries do not contribute.
    pub field_names: BTreeSet<String>,
}

/// Run the generate command
///
/// # Arguments
/// * `aidef_path` - Path to the AI definition document (YAML)
/// * `out_dir` - Directory the stub pairs are written into (created if absent)
/// * `verbose` - Whether to also print the diagnostic field-name union
///
/// # Returns
/// Exit code: 0 on success; load, render, and I/O failures propagate.
pub fn run(aidef_path: &str, out_dir: &str, verbose: bool) -> Result<ExitCode> {
    let def = load_def(Path::new(aidef_path))?;
    let out_dir = Path::new(out_dir);
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory: {}", out_dir.display()))?;

    let summary = generate_stubs(&def, out_dir)?;

    for name in &summary.generated {
        println!("{}", name);
    }
    println!();
    println!("{} queries", summary.generated.len());

    if verbose && !summary.field_names.is_empty() {
        let names: Vec<&str> = summary.field_names.iter().map(String::as_str).collect();
        println!(
            "{} {}",
            "Record fields seen:".dimmed(),
            names.join(", ").dimmed()
        );
    }

    Ok(ExitCode::SUCCESS)
}

/// Generates a stub pair for every non-system query in `def`.
///
/// Entries are processed in document order. A query either fully renders
/// both artifacts or the whole pass aborts; there is no partial-success
/// state for a single query.
pub fn generate_stubs(def: &AiDef, out_dir: &Path) -> Result<GenerationSummary> {
    let mut summary = GenerationSummary::default();

    for (name, entry) in &def.querys {
        if entry.is_system() {
            continue;
        }

        if let QueryEntry::Record(record) = entry {
            summary
                .field_names
                .extend(record.field_names().map(str::to_owned));
        }

        let class_name = capitalize_query_name(name);
        let class = QueryClass::resolve(&class_name, entry)?;
        write_query_stubs(&class, out_dir)
            .with_context(|| format!("failed to write stubs for query {}", class_name))?;

        summary.generated.push(class_name);
    }

    Ok(summary)
}
