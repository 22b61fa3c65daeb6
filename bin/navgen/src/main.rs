//! navgen CLI
//!
//! Regenerates the sidebar navigation module for a markdown documentation
//! site.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for navgen.
#[derive(Parser)]
#[command(
    name = "navgen",
    version,
    about = "Sidebar navigation generator for markdown documentation sites"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "navgen.toml")]
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
    /// Scan the content tree and regenerate the sidebar module
    Generate {
        /// Override the content root directory
        #[arg(short, long)]
        root: Option<std::path::PathBuf>,
        /// Override the generated module path
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },
    /// Validate configuration and content
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    navgen::init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate { root, output } => {
            navgen::cmd::generate::run(&cli.config, root.as_deref(), output.as_deref())?;
        }
        Commands::Check { strict } => {
            navgen::cmd::check::run(&cli.config, strict)?;
        }
    }

    Ok(())
}
