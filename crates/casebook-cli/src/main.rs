//! Casebook CLI - renders test-suite documentation to standard output
//!
//! The input is a module model in JSON form, produced by whichever binding
//! inspected the test suite. The CLI picks an output syntax and streams one
//! document to stdout.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use casebook_core::{
    find_tests, Documenter, RestFormatter, TerminalFormatter, TestModule, WikiFormatter,
};
use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "casebook")]
#[command(version = casebook_core::VERSION)]
#[command(about = "Generate readable documentation from a test suite", long_about = None)]
struct Cli {
    /// Path to a module model in JSON form
    module: PathBuf,

    /// Output syntax
    #[arg(long, value_enum, default_value_t = Format::Wiki)]
    format: Format,
}

/// Output syntax selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Wiki markup
    Wiki,
    /// reStructuredText
    Rest,
    /// Coloured, indented terminal output
    Terminal,
}

/// Load a module model from a JSON file
fn load_module(path: &Path) -> Result<TestModule> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read module model {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("invalid module model in {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let module = load_module(&cli.module)?;
    let stdout = io::stdout().lock();

    match cli.format {
        Format::Wiki => {
            let mut documenter = Documenter::new(WikiFormatter::new(stdout));
            find_tests(&mut documenter, &module)?;
        }
        Format::Rest => {
            let mut documenter = Documenter::new(RestFormatter::new(stdout));
            find_tests(&mut documenter, &module)?;
        }
        Format::Terminal => {
            let mut documenter = Documenter::new(TerminalFormatter::new(stdout));
            find_tests(&mut documenter, &module)?;
        }
    }
    Ok(())
}
