//! querygen - stub generator for game AI queries
//!
//! This binary reads an AI definition document and emits paired C++ stub
//! files (header and translation unit) for each non-system query.

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use querygen_cli::commands;

mod cli_args;
use cli_args::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            aidef,
            out_dir,
            verbose,
        } => commands::generate::run(&aidef, &out_dir, verbose),
        Commands::Validate { aidef, json } => commands::validate::run(&aidef, json),
        Commands::List { aidef } => commands::list::run(&aidef),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
