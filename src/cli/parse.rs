//! CLI parse: clap types for cwmerge. No behavior; definitions only.

use clap::Parser;
use std::path::PathBuf;

/// cwmerge - merge two CloudWatch agent configuration files
#[derive(Parser, Debug)]
#[command(name = "cwmerge")]
#[command(about = "Merge two CloudWatch agent configuration files without duplicating metrics")]
pub struct Cli {
    /// Path to the first configuration file (wins on conflicts)
    pub config1: PathBuf,

    /// Path to the second configuration file
    pub config2: PathBuf,

    /// Path to the output merged configuration file
    pub output: PathBuf,

    /// Settings file for cwmerge itself (overrides the global settings file)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Fail instead of keeping the first config when a key holds different shapes
    #[arg(long)]
    pub strict: bool,

    /// Print the merged configuration to stdout instead of writing the output file
    #[arg(long)]
    pub dry_run: bool,

    /// Disable logging
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes a file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
