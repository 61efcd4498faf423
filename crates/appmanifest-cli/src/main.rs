//! appmanifest CLI - Manifest checker
//!
//! Commands:
//! - `appmanifest check` - Validate the package manifest
//! - `appmanifest show` - Print the trusted projection as JSON

use anyhow::Result;
use appmanifest_core::ManifestError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod settings;

use settings::Settings;

#[derive(Parser)]
#[command(name = "appmanifest")]
#[command(author, version, about = "Checks the application package manifest", long_about = None)]
struct Cli {
    /// Path to an appmanifest.toml settings file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the package manifest
    Check {
        /// Path to package.json (default: resolved from the install directory)
        #[arg(short, long)]
        manifest: Option<PathBuf>,
    },

    /// Print the trusted manifest properties as JSON
    Show {
        /// Path to package.json (default: resolved from the install directory)
        #[arg(short, long)]
        manifest: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            let code = err
                .downcast_ref::<ManifestError>()
                .map_or(1, ManifestError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut settings = match &cli.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };
    settings.apply_overrides(cli.log_level, cli.plain);

    appmanifest_logging::init_logging(&settings.logging);

    match cli.command {
        Commands::Check { manifest } => {
            let path = commands::resolve_manifest_path(manifest, &settings.loader)?;
            commands::check(&path)?;
        }
        Commands::Show { manifest } => {
            let path = commands::resolve_manifest_path(manifest, &settings.loader)?;
            commands::show(&path)?;
        }
    }

    Ok(())
}
