use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;

use java_precheck::config::init_logging;
use java_precheck::{Config, Diagnostic, ValidationResult};

/// Check Java source files for common syntax mistakes before compiling
#[derive(Debug, Parser)]
#[command(name = "java-precheck")]
#[command(version)]
struct Cli {
    /// Files to check; none or `-` reads standard input
    files: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Settings file to use instead of the discovered ones
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Serialize)]
struct FileReport<'a> {
    path: &'a str,
    is_valid: bool,
    diagnostics: &'a [Diagnostic],
}

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

/// Returns whether every input passed
fn run() -> Result<bool> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let workspace = std::env::current_dir().context("Failed to read current directory")?;
    let config = Config::load(cli.config.clone(), &workspace, cli.log_level.clone())?;

    let validator = config.validator();
    log::debug!(
        "{} misspellings, {:?}",
        validator.dictionary().entry_count(),
        validator.options()
    );
    let inputs = if cli.files.is_empty() {
        vec![PathBuf::from("-")]
    } else {
        cli.files.clone()
    };

    let mut checked = Vec::with_capacity(inputs.len());
    for path in &inputs {
        let source = read_source(path)?;
        log::debug!("checking {}", display_name(path));
        checked.push((display_name(path), validator.validate(&source)));
    }

    match cli.format {
        OutputFormat::Text => print_text(&checked),
        OutputFormat::Json => print_json(&checked)?,
    }

    Ok(checked.iter().all(|(_, result)| result.is_valid()))
}

fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read standard input")?;
        Ok(source)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    }
}

fn display_name(path: &Path) -> String {
    if path == Path::new("-") {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

fn print_text(checked: &[(String, ValidationResult)]) {
    for (name, result) in checked {
        for d in &result.diagnostics {
            println!(
                "{}:{}:{}: {} ({})",
                name, d.line, d.column, d.message, d.explanation
            );
        }
        if result.is_valid() {
            println!("{}: ok", name);
        }
    }
}

fn print_json(checked: &[(String, ValidationResult)]) -> Result<()> {
    let reports: Vec<FileReport<'_>> = checked
        .iter()
        .map(|(name, result)| FileReport {
            path: name,
            is_valid: result.is_valid(),
            diagnostics: &result.diagnostics,
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}
