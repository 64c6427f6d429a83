//! secfmt CLI - detect the serialization format of secrets files.

mod logging;
mod output;

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use colored::Colorize;
use secfmt_core::config::DEFAULT_CONFIG_FILE;
use secfmt_core::{Classification, DetectConfig, classify_path, classify_tree};

use output::OutputFormat;

#[derive(Parser)]
#[command(name = "secfmt")]
#[command(version, about = "Detect the serialization format of secrets files")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify files or paths (directories are scanned)
    Detect(DetectArgs),

    /// List known formats and their path suffixes
    Formats {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the JSON schema for .secfmt.toml
    Schema,
}

#[derive(Args)]
struct DetectArgs {
    /// Paths to classify. They need not exist unless they are directories.
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Explicit format name (binary, dotenv, ini, json, yaml); overrides
    /// path detection
    #[arg(long, value_name = "NAME")]
    input_type: Option<String>,

    /// Config file (defaults to .secfmt.toml in the working directory)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Detect(args) => detect(args, cli.verbose > 0),
        Commands::Formats { format } => {
            print!("{}", output::render_formats(format)?);
            Ok(())
        }
        Commands::Schema => {
            let schema = secfmt_core::generate_schema();
            println!("{}", serde_json::to_string_pretty(&schema)?);
            Ok(())
        }
    }
}

fn warn(message: &str) {
    eprintln!("{} {}", "warning:".yellow().bold(), message);
}

/// Resolve the config: an explicit `--config` must load, an implicit
/// `.secfmt.toml` falls back to defaults with a warning.
fn load_config(explicit: Option<&Path>) -> anyhow::Result<DetectConfig> {
    if let Some(path) = explicit {
        tracing::debug!(path = %path.display(), "loading config");
        return DetectConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()));
    }

    let implicit = PathBuf::from(DEFAULT_CONFIG_FILE);
    if !implicit.is_file() {
        return Ok(DetectConfig::default());
    }

    tracing::debug!(path = %implicit.display(), "loading config");
    let (config, warning) = DetectConfig::load_or_default(Some(&implicit));
    if let Some(warning) = warning {
        warn(&warning);
    }
    Ok(config)
}

fn detect(args: DetectArgs, show_source: bool) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_deref())?;

    // An unknown name is reported once, by validate().
    if let Some(name) = args.input_type {
        config.input_type = Some(name);
    }

    for w in config.validate() {
        match &w.suggestion {
            Some(s) => warn(&format!("{}: {} ({})", w.field, w.message, s)),
            None => warn(&format!("{}: {}", w.field, w.message)),
        }
    }

    let chain = config
        .build_chain()
        .context("invalid override pattern in config")?;
    tracing::debug!(detectors = ?chain.names(), "detector chain ready");

    let mut results: Vec<Classification> = Vec::new();
    for path in &args.paths {
        if path.is_dir() {
            let found = classify_tree(path, &config, &chain)
                .with_context(|| format!("failed to scan {}", path.display()))?;
            tracing::info!(root = %path.display(), files = found.len(), "scanned directory");
            results.extend(found);
        } else {
            results.push(classify_path(path, config.input_type(), &chain));
        }
    }

    print!(
        "{}",
        output::render_classifications(&results, args.format, show_source)?
    );
    Ok(())
}
