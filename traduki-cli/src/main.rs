//! Traduki CLI - translation key extraction and dictionary validation.
//!
//! # Commands
//!
//! - `traduki extract <source_dir> <locale>` - Scan Rust sources for
//!   translation calls and write a dictionary file
//! - `traduki validate <file>...` - Validate dictionary files

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

mod commands;
mod error;

use commands::{extract, validate};

/// Traduki CLI - translation tooling
#[derive(Parser)]
#[command(name = "traduki")]
#[command(version)]
#[command(about = "Translation key extraction and dictionary validation for traduki")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan Rust sources for translation calls and write a dictionary file
    #[command(alias = "x")]
    Extract(ExtractArgs),

    /// Validate dictionary files
    #[command(alias = "check")]
    Validate(ValidateArgs),
}

#[derive(Args)]
struct ExtractArgs {
    /// Directory to scan for Rust files
    source_dir: PathBuf,

    /// Language code for the generated dictionary (e.g. "en", "fr")
    locale: String,

    /// Output path (defaults to locales/default.{locale}.json)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct ValidateArgs {
    /// Dictionary files to validate
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let result = match cli.command {
        Commands::Extract(args) => {
            extract::execute(&args.source_dir, &args.locale, args.output.as_deref())
        }
        Commands::Validate(args) => validate::execute(&args.files),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".bright_red().bold(), e);
        std::process::exit(1);
    }
}
