//! Tinct CLI
//!
//! Generates a design-token tree from brand seed colors and writes it out as
//! CSS custom properties, a Tailwind config, Figma variables and a
//! TypeScript theme module.
//!
//! ```text
//! tinct export --primary "#ff0000" --out-dir tokens
//! tinct export --format css --stdout
//! tinct scale "#2563eb" --dark
//! tinct contrast "#767676" "#ffffff"
//! tinct init
//! ```

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use tinct_export::ExportFormat;
use tinct_theme::{CustomColors, TextSize};
use tracing_subscriber::EnvFilter;

use crate::commands::ExportPlan;
use crate::config::TinctConfig;

/// Design tokens from a handful of seed colors
#[derive(Parser, Debug)]
#[command(name = "tinct")]
#[command(about = "Generate design tokens and export them for CSS, Tailwind, Figma and TypeScript")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Export design tokens
    Export {
        /// Format to export: css, tailwind, figma, typescript, or all
        #[arg(short, long)]
        format: Option<String>,

        /// Output directory
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Primary brand seed (#rrggbb)
        #[arg(long)]
        primary: Option<String>,

        /// Secondary brand seed (#rrggbb)
        #[arg(long)]
        secondary: Option<String>,

        /// Accent brand seed (#rrggbb)
        #[arg(long)]
        accent: Option<String>,

        /// Config file (defaults to ./tinct.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print to stdout instead of writing files
        #[arg(long)]
        stdout: bool,
    },

    /// Print the 11-step scale for a seed color
    Scale {
        /// Seed color (#rrggbb)
        seed: String,

        /// Print the dark-mode inversion
        #[arg(long)]
        dark: bool,
    },

    /// Check WCAG contrast between two colors
    Contrast {
        /// Foreground color (#rrggbb)
        foreground: String,

        /// Background color (#rrggbb)
        background: String,

        /// Evaluate against the large-text thresholds
        #[arg(long)]
        large: bool,
    },

    /// Write a starter tinct.toml
    Init {
        /// Target directory
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Export {
            format,
            out_dir,
            primary,
            secondary,
            accent,
            config,
            stdout,
        } => {
            let file_config = match config {
                Some(path) => TinctConfig::load(&path)?,
                None => TinctConfig::discover(Path::new("."))?,
            };

            let overrides = CustomColors {
                primary,
                secondary,
                accent,
            };
            let formats = match format.as_deref() {
                None => file_config.output.export_formats()?,
                Some("all") => ExportFormat::ALL.to_vec(),
                Some(name) => vec![name.parse()?],
            };

            let plan = ExportPlan {
                colors: file_config.colors.merge(overrides),
                formats,
                out_dir: out_dir.unwrap_or(file_config.output.dir),
            };
            tracing::debug!("Export plan: {:?}", plan);

            if stdout {
                commands::print_exports(&plan, &mut io::stdout().lock())?;
            } else {
                let written = commands::write_exports(&plan)?;
                tracing::info!(
                    "Exported {} file(s) to {}",
                    written.len(),
                    plan.out_dir.display()
                );
            }
        }

        Command::Scale { seed, dark } => {
            commands::print_scale(&seed, dark, &mut io::stdout().lock())?;
        }

        Command::Contrast {
            foreground,
            background,
            large,
        } => {
            let size = if large {
                TextSize::Large
            } else {
                TextSize::Normal
            };
            commands::print_contrast(&foreground, &background, size, &mut io::stdout().lock())?;
        }

        Command::Init { path } => {
            let written = commands::init(&path)?;
            tracing::info!("Created {}", written.display());
        }
    }

    Ok(())
}
