/*
 * main.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! settingsgen - generate settings tables from INI templates

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser};
use settingsgen::{EmitOptions, Generator, GeneratorOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "settingsgen")]
#[command(version, about = "Generate settings tables from INI templates", long_about = None)]
#[command(disable_help_flag = true)]
struct Cli {
    /// INI files to process, in order
    #[arg(value_name = "INI_FILE")]
    inputs: Vec<PathBuf>,

    /// Write output to FILE (only replaced when the content changes)
    #[arg(short = 'o', long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Copy FILE before all settings
    #[arg(short = 'b', long, value_name = "FILE")]
    before: Option<PathBuf>,

    /// Copy FILE after all settings
    #[arg(short = 'a', long, value_name = "FILE")]
    after: Option<PathBuf>,

    /// Warn about template variables that have no value
    #[arg(long)]
    warn_unresolved: bool,

    /// Print this help message and exit
    #[arg(short = 'h', long, short_alias = '?', action = ArgAction::Help)]
    help: Option<bool>,
}

fn main() -> ExitCode {
    // Logs go to stderr: stdout may carry the generated output.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "settingsgen=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("settingsgen: FATAL: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut generator = Generator::new(GeneratorOptions {
        warn_unresolved: cli.warn_unresolved,
        ..Default::default()
    });

    for input in &cli.inputs {
        generator.process_path(input)?;
    }

    let emit_options = EmitOptions {
        before: cli.before,
        after: cli.after,
        output: cli.output,
    };
    let outcome = generator.finish(&emit_options)?;
    tracing::debug!(?outcome, files = cli.inputs.len(), "Done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "settingsgen",
            "-o",
            "table.h",
            "--before",
            "head.h",
            "-a",
            "tail.h",
            "a.ini",
            "b.ini",
        ])
        .unwrap();

        assert_eq!(cli.output, Some(PathBuf::from("table.h")));
        assert_eq!(cli.before, Some(PathBuf::from("head.h")));
        assert_eq!(cli.after, Some(PathBuf::from("tail.h")));
        assert_eq!(cli.inputs, vec![PathBuf::from("a.ini"), PathBuf::from("b.ini")]);
        assert!(!cli.warn_unresolved);
    }

    #[test]
    fn test_question_mark_is_help() {
        let err = Cli::try_parse_from(["settingsgen", "-?"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_unknown_flag() {
        let err = Cli::try_parse_from(["settingsgen", "--bogus"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }
}
