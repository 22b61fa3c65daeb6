//! Check command - validate configuration and content

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use navgen_core::Config;

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates the configuration, the content root, and the output location.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration and content");

    let mut result = ValidationResult::default();

    // Validate configuration
    println!("Checking configuration...");
    let config = match Config::load_or_default(config_path) {
        Ok(c) => {
            println!("  ✓ Configuration valid");
            Some(c)
        }
        Err(e) => {
            result.add_error(format!("Configuration error: {e}"));
            println!("  ✗ Configuration invalid: {e}");
            None
        }
    };

    if let Some(ref cfg) = config {
        println!();
        println!("Checking content root...");
        check_content_root(cfg, &mut result);

        println!();
        println!("Checking output location...");
        check_output_location(cfg, &mut result);
    }

    // Print summary
    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    // Determine exit status
    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Check the content root and the files under it.
fn check_content_root(config: &Config, result: &mut ValidationResult) {
    let root = &config.content.root;

    if !root.exists() {
        result.add_error(format!("Content root does not exist: {}", root.display()));
        println!("  ✗ {} missing", root.display());
        return;
    }
    if !root.is_dir() {
        result.add_error(format!(
            "Content root is not a directory: {}",
            root.display()
        ));
        println!("  ✗ {} is not a directory", root.display());
        return;
    }
    println!("  ✓ {} exists", root.display());

    // Every markdown file must be readable; generation aborts on the first
    // unreadable one.
    let mut checked = 0;
    let mut failed = 0;

    for entry in walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }

        checked += 1;
        if let Err(e) = std::fs::read_to_string(path) {
            result.add_error(format!("{}: Failed to read file: {e}", path.display()));
            failed += 1;
        }
    }

    if failed == 0 {
        println!("  ✓ All {checked} markdown files readable");
    } else {
        println!("  ✗ {failed}/{checked} markdown files unreadable");
    }

    // An exclusion that matches nothing is usually a typo
    for excluded in config.excluded_paths() {
        if !excluded.exists() {
            result.add_warning(format!("Exclusion matches nothing: {}", excluded.display()));
        }
    }
}

/// Check the output path and its parent directory.
fn check_output_location(config: &Config, result: &mut ValidationResult) {
    let path = &config.output.path;

    if path.exists() && path.is_dir() {
        result.add_error(format!(
            "Output path exists but is a directory: {}",
            path.display()
        ));
        println!("  ✗ {} is a directory", path.display());
        return;
    }

    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            if parent.is_dir() {
                println!("  ✓ {} exists", parent.display());
            } else {
                result.add_warning(format!(
                    "Output parent directory missing: {}",
                    parent.display()
                ));
                println!("  ⚠ {} missing", parent.display());
            }
        }
        _ => println!("  ✓ output path has no parent directory to check"),
    }
}
