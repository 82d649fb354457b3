//! DirectKit CLI entry point.

use clap::Parser;
use directkit::cli::args::{Cli, Commands};
use directkit::cli::output::Output;
use directkit::cli::{init_logging, matching, phrases};
use directkit::config::Config;
use directkit::error::{DirectKitError, ExitCode as DirectKitExitCode};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(code) => ExitCode::from(code.code() as u8),
        Err(e) => {
            if !cli.quiet {
                eprintln!("Error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<DirectKitExitCode, DirectKitError> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let output = Output::new(cli.output_format(&config), cli.quiet);

    match &cli.command {
        Commands::Match(args) => matching::run_match(args, &config, &output),
        Commands::Parse(args) => {
            matching::run_parse(args, &config, &output)?;
            Ok(DirectKitExitCode::Success)
        }
        Commands::Filter(args) => {
            phrases::run_filter(args, &config, &output)?;
            Ok(DirectKitExitCode::Success)
        }
        Commands::Sort(args) => {
            phrases::run_sort(args, &output)?;
            Ok(DirectKitExitCode::Success)
        }
        Commands::MarkMinus(args) => {
            phrases::run_mark_minus(args, &config, &output)?;
            Ok(DirectKitExitCode::Success)
        }
        Commands::Stem(args) => {
            matching::run_stem(args, &output)?;
            Ok(DirectKitExitCode::Success)
        }
        Commands::WordForm(args) => {
            matching::run_word_form(args, &output)?;
            Ok(DirectKitExitCode::Success)
        }
        Commands::Minus(args) => {
            matching::run_minus(args, &config, &output)?;
            Ok(DirectKitExitCode::Success)
        }
    }
}
