//! cwmerge CLI Binary
//!
//! Command-line interface for merging CloudWatch agent configuration files.

use clap::Parser;
use cwmerge::cli::{format_diagnostic, load_settings, map_error, Cli, MergeRequest, RunContext};
use cwmerge::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let settings = match load_settings(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    // Build logging config from CLI args and settings
    let logging_config = build_logging_config(&cli, &settings.logging);

    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("cwmerge starting");

    let context = RunContext::new(&settings, cli.strict);
    match context.execute(&MergeRequest::from(&cli)) {
        Ok(report) => {
            for diagnostic in &report.diagnostics {
                eprintln!("{}", format_diagnostic(diagnostic));
            }
            println!("{}", report.output);
        }
        Err(e) => {
            error!("Merge failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args and settings.
/// Precedence: CLI flags override settings override defaults.
fn build_logging_config(cli: &Cli, settings: &LoggingConfig) -> LoggingConfig {
    let mut config = settings.clone();

    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
        // Keep verbose output visible on the terminal; an explicit --log-output still wins.
        if config.output == "file" {
            config.output = "both".to_string();
        }
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }

    let output_uses_file = config.output == "file" || config.output == "both";
    if config.enabled && output_uses_file {
        if let Ok(path) =
            cwmerge::logging::resolve_log_file_path(cli.log_file.clone(), config.file.clone())
        {
            config.file = Some(path);
        }
    } else if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }

    config
}
