//! Validate command.
//!
//! Loads each given dictionary file through the same parse/validate
//! path the runtime uses and reports a per-file verdict.

use crate::error::{CliError, CliResult};
use colored::Colorize;
use std::path::PathBuf;
use traduki::Dictionary;

/// Validate command entry point.
pub fn execute(files: &[PathBuf]) -> CliResult<()> {
    let mut failed = 0usize;

    for file in files {
        match Dictionary::load(file) {
            Ok(dict) => {
                println!(
                    "{} {} ({}, {} entries)",
                    "✅",
                    file.display().to_string().bold(),
                    dict.lang(),
                    dict.len()
                );
            }
            Err(e) => {
                failed += 1;
                println!("{} {}", "❌", file.display().to_string().bold());
                println!("   {}", e.to_string().bright_red());
            }
        }
    }

    let passed = files.len() - failed;
    println!();
    println!(
        "{} passed, {} failed",
        passed.to_string().green(),
        if failed > 0 {
            failed.to_string().bright_red().to_string()
        } else {
            failed.to_string()
        }
    );

    if failed > 0 {
        return Err(CliError::Validation(format!(
            "{failed} dictionary file(s) failed validation"
        )));
    }
    Ok(())
}
