//! PartLens CLI - identify electronic components from saved vision-analysis
//! snapshots.

use clap::{Parser, Subcommand, ValueEnum};
use partlens::rules::keywords_for;
use partlens::{
    identify_snapshot, render_summary, ComponentType, IdentificationResult, SourceOptions,
};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "partlens")]
#[command(about = "Electronic component identification from vision-analysis output", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Identify a component from an analysis snapshot file
    Identify {
        /// Path to a snapshot JSON file (labels + text detections)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,

        /// Drop labels below this confidence before identification
        #[arg(long, default_value_t = 50.0)]
        min_confidence: f64,

        /// Exit with code 2 when no component type matched
        #[arg(long)]
        fail_on_unknown: bool,
    },

    /// List canonical component types
    Types {
        /// Show keyword sets and descriptions
        #[arg(short, long)]
        verbose: bool,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable report
    Human,
    /// JSON for downstream tooling
    Json,
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Identify {
            file,
            format,
            min_confidence,
            fail_on_unknown,
        } => handle_identify(&file, format, min_confidence, fail_on_unknown),
        Commands::Types { verbose } => {
            handle_types(verbose);
            0
        }
    };

    process::exit(exit_code);
}

fn handle_identify(
    file: &PathBuf,
    format: OutputFormat,
    min_confidence: f64,
    fail_on_unknown: bool,
) -> i32 {
    let options = SourceOptions { min_confidence };

    let result = match identify_snapshot(file, options) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    match format {
        OutputFormat::Human => output_human(&result),
        OutputFormat::Json => output_json(&result),
    }

    if fail_on_unknown && result.component_type.is_none() {
        return 2;
    }
    0
}

fn output_human(result: &IdentificationResult) {
    println!("{}", render_summary(result));

    if !result.possible_types.is_empty() {
        println!("\nCandidates:");
        for candidate in &result.possible_types {
            println!(
                "  {:<20} {:>5.1}%  (label: {})",
                candidate.component_type.label(),
                candidate.confidence,
                candidate.matched_label
            );
        }
    }

    println!("\nEvidence:");
    println!("  Labels: {}", result.detected_labels.len());
    println!("  Text lines: {}", result.detected_text.len());
}

fn output_json(result: &IdentificationResult) {
    let output = serde_json::json!({
        "result": result,
        "summary": render_summary(result),
    });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

fn handle_types(verbose: bool) {
    println!("Canonical component types:\n");

    for component_type in ComponentType::ALL {
        if verbose {
            println!(
                "  {:<20} {}",
                component_type.label(),
                component_type.description()
            );
            println!("    keywords: {}", keywords_for(component_type).join(", "));
        } else {
            println!("  {}", component_type.label());
        }
    }
}
