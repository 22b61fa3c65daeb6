//! Generate command - regenerates the sidebar module

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use navgen_core::Config;
use navgen_generator::Generator;

/// Run the generate command.
///
/// Scans the content root and overwrites the generated sidebar module.
pub fn run(config_path: &Path, root: Option<&Path>, output: Option<&Path>) -> Result<()> {
    tracing::info!(?config_path, ?root, ?output, "Starting generation");

    let mut config =
        Config::load_or_default(config_path).wrap_err("Failed to load configuration")?;

    // Override content root if specified via CLI
    if let Some(r) = root {
        tracing::info!(root = %r.display(), "Overriding content root from CLI");
        config.content.root = r.to_path_buf();
    }

    // Override output path if specified via CLI
    if let Some(o) = output {
        tracing::info!(output = %o.display(), "Overriding output path from CLI");
        config.output.path = o.to_path_buf();
    }

    config.validate().wrap_err("Invalid configuration")?;
    tracing::debug!(?config, "Loaded configuration");

    let stats = Generator::new(config)
        .generate()
        .wrap_err("Generation failed")?;

    // Informational dump of the collected entries
    println!(
        "{}",
        serde_json::to_string_pretty(&stats.entries).wrap_err("Failed to render entry dump")?
    );

    println!();
    println!("  Sidebar generated successfully!");
    println!();
    println!("  Entries:  {}", stats.entries.len());
    println!("  Output:   {}", stats.output_path.display());
    println!();
    println!("  Duration: {}ms", stats.duration_ms);
    println!();

    tracing::info!(
        entries = stats.entries.len(),
        duration_ms = stats.duration_ms,
        "Generation completed successfully"
    );

    Ok(())
}
