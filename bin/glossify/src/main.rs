//! Glossify CLI
//!
//! Builds a cross-referenced glossary website from a flat text source.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for Glossify.
#[derive(Parser)]
#[command(
    name = "glossify",
    version,
    about = "A cross-referenced glossary website generator"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "glossify.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Build the glossary site
    Build {
        /// Glossary source file
        input: std::path::PathBuf,
        /// Output directory
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },
    /// Validate a glossary source without building
    Check {
        /// Glossary source file
        input: std::path::PathBuf,
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    glossify::init_tracing(cli.verbose);

    match cli.command {
        Commands::Build { input, output } => {
            glossify::cmd::build::run(&cli.config, &input, output.as_deref())?;
        }
        Commands::Check { input, strict } => {
            glossify::cmd::check::run(&input, strict)?;
        }
    }

    Ok(())
}
