//! Build command - generates the glossary site

use std::{fs, path::Path, time::Instant};

use color_eyre::eyre::{Result, WrapErr};
use glossify_core::Config;
use glossify_generator::Builder;

use super::check::empty_definition_warnings;

/// Run the build command.
///
/// Builds the glossary site from the source file to the output directory.
pub fn run(config_path: &Path, input: &Path, output: Option<&Path>) -> Result<()> {
    let start = Instant::now();
    tracing::info!(?config_path, ?input, ?output, "Starting build");

    // Load configuration; defaults apply when no config file exists
    let mut config =
        Config::load_or_default(config_path).wrap_err("Failed to load configuration")?;

    // Override output directory if specified
    if let Some(output) = output {
        config.build.output_dir = output.to_string_lossy().to_string();
    }
    let output_dir = config.build.output_dir.clone();

    tracing::debug!(?config, "Loaded configuration");

    let source = fs::read_to_string(input)
        .wrap_err_with(|| format!("Failed to read glossary source {}", input.display()))?;

    // Surface empty definitions before building, same report as `check`
    let glossary = glossify_parser::parse(&source).wrap_err("Failed to parse glossary source")?;
    let warnings = empty_definition_warnings(&glossary);
    if !warnings.is_empty() {
        println!();
        println!("  Warnings:");
        for warn in &warnings {
            println!("  ⚠ {warn}");
        }
        println!();
    }

    let builder = Builder::new(config, &output_dir);
    let stats = builder.build(&source).wrap_err("Build failed")?;

    let duration = start.elapsed();

    // Print build statistics
    println!();
    println!("  Build completed successfully!");
    println!();
    println!("  Terms:     {}", stats.terms);
    println!("  Pages:     {}", stats.pages);
    println!();
    println!("  Duration:  {:.2}s", duration.as_secs_f64());
    println!("  Output:    {output_dir}");
    println!();

    tracing::info!(?stats, ?duration, "Build completed successfully");

    Ok(())
}
