//! Console output for inspection outcomes

use anyhow::Result;
use colored::*;
use sheetprobe_core::FileOutcome;
use sheetprobe_core::render;
use std::path::Path;

pub fn print_missing_dir(dir: &Path) {
    println!("Templates folder not found: {}", dir.display());
}

pub fn print_scan_error(dir: &Path, error: &dyn std::fmt::Display) {
    println!(
        "{}",
        format!("Failed to scan directory: {}: {}", dir.display(), error).red()
    );
}

pub fn print_no_files() {
    println!("No Excel files found.");
}

pub fn print_found(count: usize) {
    println!("\nFound {} Excel files.\n", count);
}

/// Print one file's report, or its banner followed by the failure message
pub fn print_human(outcome: &FileOutcome) {
    match (&outcome.report, &outcome.error) {
        (Some(report), _) => print!("{}", render::render_report(report)),
        (None, error) => {
            print!("{}", render::file_banner(&outcome.display_name()));
            let message = error.as_deref().unwrap_or("Error: unknown failure");
            println!("{}", message.red());
        }
    }
}

pub fn print_done() {
    let rule = render::rule();
    println!("\n{}", rule);
    println!("{}", "Analysis complete!".green().bold());
    println!("{}\n", rule);
}

/// Print all outcomes as one JSON array
pub fn print_json(outcomes: &[FileOutcome]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(outcomes)?);
    Ok(())
}
