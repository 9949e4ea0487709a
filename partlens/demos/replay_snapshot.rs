//! Replay a saved analysis snapshot and print the identification report.

use partlens::prelude::*;
use partlens::{identify_snapshot, render_summary};
use std::path::Path;

fn main() -> Result<(), PartLensError> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tests/fixtures/resistor.json".to_string());
    let path = Path::new(&path);

    if !path.exists() {
        eprintln!("File not found: {}", path.display());
        eprintln!("Usage: cargo run --example replay_snapshot [path/to/snapshot.json]");
        std::process::exit(1);
    }

    let result = identify_snapshot(path, SourceOptions::default())?;

    println!("{}", render_summary(&result));
    println!();
    println!("Labels considered: {}", result.detected_labels.len());
    println!("Text lines considered: {}", result.detected_text.len());

    if result.component_type.is_none() {
        println!("\nNo component type matched the detected labels.");
        std::process::exit(1);
    }

    Ok(())
}
