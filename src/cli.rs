//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::commands;
use scaffold_check::output::OutputMode;

/// scaffold-check - Validate a scaffolded project before hand-off
#[derive(Parser, Debug)]
#[command(
    name = "scaffold-check",
    version,
    about = "Validate a scaffolded project before hand-off",
    long_about = "Check that template instantiation finished cleanly.\n\n\
                  Verifies that no placeholder tokens remain, the repository \
                  and its remote are set up, and the required files, \
                  directories and sections exist."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a project directory
    Validate {
        /// Project root (defaults to the current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Stop at the first failing check
        #[arg(long)]
        fail_fast: bool,

        /// Config file (defaults to <path>/.scaffold-check.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the effective configuration as TOML
    Config {
        /// Project root (defaults to the current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Config file (defaults to <path>/.scaffold-check.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Validate {
            path,
            fail_fast,
            config,
        }) => {
            let passed = commands::validate(&path, config.as_deref(), fail_fast, output_mode)?;
            Ok(if passed {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        },
        Some(Command::Config { path, config }) => {
            commands::show_config(&path, config.as_deref(), output_mode)?;
            Ok(ExitCode::SUCCESS)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": scaffold_check::VERSION
                    })
                );
            } else {
                println!("scaffold-check v{}", scaffold_check::VERSION);
            }
            Ok(ExitCode::SUCCESS)
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": scaffold_check::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("scaffold-check v{}", scaffold_check::VERSION);
                println!("\nRun 'scaffold-check --help' for usage");
                println!("Run 'scaffold-check validate <path>' to check a project");
            }
            Ok(ExitCode::SUCCESS)
        },
    }
}
