//! Validate command implementation
//!
//! Decodes a definition document and runs the diagnostic validation pass
//! without writing any stubs.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use querygen_def::{validate_def, ValidationError, ValidationResult, ValidationWarning};
use serde::Serialize;

use crate::input::load_def;

/// Machine-readable validate output.
#[derive(Serialize)]
struct ValidateOutput<'a> {
    ok: bool,
    errors: &'a [ValidationError],
    warnings: &'a [ValidationWarning],
}

/// Run the validate command
///
/// # Arguments
/// * `aidef_path` - Path to the AI definition document (YAML)
/// * `json_output` - Whether to print machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if valid, 1 if any validation error was found.
pub fn run(aidef_path: &str, json_output: bool) -> Result<ExitCode> {
    let def = load_def(Path::new(aidef_path))?;
    let result = validate_def(&def);

    if json_output {
        print_json(&result)?;
    } else {
        print_human(aidef_path, &result);
    }

    if result.is_ok() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn print_json(result: &ValidationResult) -> Result<()> {
    let output = ValidateOutput {
        ok: result.is_ok(),
        errors: &result.errors,
        warnings: &result.warnings,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_human(aidef_path: &str, result: &ValidationResult) {
    println!("{} {}", "Validating:".cyan().bold(), aidef_path);

    for warning in &result.warnings {
        println!("  {} {}", "!".yellow(), warning);
    }
    for error in &result.errors {
        println!("  {} {}", "x".red(), error);
    }

    if result.is_ok() {
        println!("{} document is valid", "OK".green().bold());
    } else {
        println!(
            "{} {} error(s), {} warning(s)",
            "FAILED".red().bold(),
            result.errors.len(),
            result.warnings.len()
        );
    }
}
