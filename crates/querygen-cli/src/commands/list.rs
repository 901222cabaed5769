//! List command implementation
//!
//! Prints every generatable query with its per-category parameter counts.
//! Read-only inspection aid; nothing is written.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use querygen_def::capitalize_query_name;

use crate::input::load_def;

/// Run the list command
///
/// # Arguments
/// * `aidef_path` - Path to the AI definition document (YAML)
///
/// # Returns
/// Exit code: always 0 once the document loads.
pub fn run(aidef_path: &str) -> Result<ExitCode> {
    let def = load_def(Path::new(aidef_path))?;

    let mut count = 0usize;
    for (name, entry) in &def.querys {
        if entry.is_system() {
            continue;
        }
        count += 1;

        let class_name = capitalize_query_name(name);
        match entry.record() {
            Some(record) => println!(
                "{}  {}",
                class_name,
                format!(
                    "static: {}, dynamic: {}, tree: {}",
                    record.static_params().len(),
                    record.dynamic_params().len(),
                    record.tree_variables().len()
                )
                .dimmed()
            ),
            None => println!("{}  {}", class_name, "no parameters".dimmed()),
        }
    }

    println!();
    println!("{} queries", count);
    Ok(ExitCode::SUCCESS)
}
