mod internal;
mod types;
mod utils;

use crate::internal::batch::{negotiate_batch_policy, run_batch};
use crate::internal::generate::generate;
use crate::types::local_settings::LocalSettings;
use crate::types::presets::PresetFile;
use crate::types::web_app::WebAppSpec;
use crate::types::{GenerateOutcome, IconStatus, OverwritePolicy};
use crate::utils::notify::notify_best_effort;
use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum CliOverwrite {
    Ask,
    Always,
    Never,
}

impl From<CliOverwrite> for OverwritePolicy {
    fn from(value: CliOverwrite) -> Self {
        match value {
            CliOverwrite::Ask => OverwritePolicy::Ask,
            CliOverwrite::Always => OverwritePolicy::Always,
            CliOverwrite::Never => OverwritePolicy::Never,
        }
    }
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Create one web app launcher from a name and URL
    #[command(alias = "c")]
    Create {
        name: String,
        url: String,
        /// Icon to download and install into the hicolor theme
        #[arg(long)]
        icon_url: Option<String>,
        /// Give the app its own browser profile directory
        #[arg(long)]
        isolated: bool,
        #[arg(long, value_enum, default_value_t = CliOverwrite::Ask)]
        overwrite: CliOverwrite,
    },
    /// Create every web app in a preset category
    #[command(alias = "b")]
    Batch {
        category: String,
        #[arg(long, value_enum, default_value_t = CliOverwrite::Ask)]
        overwrite: CliOverwrite,
    },
    /// List preset categories and their apps
    Presets,
}

#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    let settings = LocalSettings::default();

    match args.command {
        CliCommand::Create {
            name,
            url,
            icon_url,
            isolated,
            overwrite,
        } => {
            let spec = WebAppSpec {
                name,
                url,
                isolated,
                icon_url,
            };

            match generate(&spec, overwrite.into(), &settings)? {
                GenerateOutcome::Created {
                    id,
                    launcher,
                    desktop_entry,
                    icon,
                } => {
                    println!("Created web app '{id}'");
                    println!("  launcher:      {}", launcher.display());
                    println!("  desktop entry: {}", desktop_entry.display());
                    match icon {
                        IconStatus::Installed { sizes } => {
                            println!("  icon sizes:    {sizes:?}");
                        }
                        IconStatus::InstalledOriginalOnly => {
                            println!("  icon:          original file only");
                        }
                        IconStatus::Skipped | IconStatus::Failed => {}
                    }

                    notify_best_effort(
                        &format!("\"{}\" installed", spec.name),
                        "The web app will show up in your application menu",
                    );
                }
                GenerateOutcome::Skipped { id } => {
                    println!("Skipped existing web app '{id}'");
                }
            }
        }

        CliCommand::Batch {
            category,
            overwrite,
        } => {
            let presets = PresetFile::load(&settings)?;
            let category = presets
                .category(&category)
                .ok_or_else(|| anyhow!("Unknown preset category: {category}"))?;

            let policy = negotiate_batch_policy(overwrite.into())?;
            let report = run_batch(category, policy, &settings);

            println!(
                "Batch '{}' done: {} created, {} skipped, {} failed",
                category.name, report.created, report.skipped, report.failed
            );
            notify_best_effort(
                &format!("Web app batch \"{}\" finished", category.name),
                &format!(
                    "{} created, {} skipped, {} failed",
                    report.created, report.skipped, report.failed
                ),
            );
        }

        CliCommand::Presets => {
            let presets = PresetFile::load(&settings)?;
            for category in &presets.categories {
                println!("{}:", category.name);
                for app in &category.apps {
                    println!("  {} ({})", app.name, app.url);
                }
            }
        }
    }

    Ok(())
}
