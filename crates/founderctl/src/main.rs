//! Founder Control - CLI client for Founder Assistant
//!
//! Talks to the founderd daemon over its local HTTP API.

mod client;
mod display;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use client::FounderdClient;
use founder_common::{PlanRequest, ValidatePlanRequest};

#[derive(Parser)]
#[command(name = "founderctl")]
#[command(about = "Founder Assistant - draft and validate startup plans", long_about = None)]
#[command(version)]
struct Cli {
    /// Daemon endpoint
    #[arg(long, global = true, default_value = "http://127.0.0.1:7870")]
    endpoint: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draft a business plan for a venture
    Generate {
        /// Venture name
        #[arg(long)]
        title: String,

        /// One or two sentences describing the venture
        #[arg(long)]
        description: String,

        /// Industry label (e.g. "Technology", "Food & Delivery")
        #[arg(long)]
        industry: String,

        /// Print the raw JSON response instead of formatted sections
        #[arg(long)]
        json: bool,
    },

    /// Validate an existing plan JSON object
    Validate {
        /// Path to a JSON file (reads stdin when omitted)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Venture name used for scale classification
        #[arg(long, default_value = "")]
        title: String,

        /// Venture description used for scale classification
        #[arg(long, default_value = "")]
        description: String,

        /// Industry label used for scale classification
        #[arg(long, default_value = "")]
        industry: String,
    },

    /// Check daemon health
    Health,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = FounderdClient::new(&cli.endpoint)?;

    match cli.command {
        Commands::Generate {
            title,
            description,
            industry,
            json,
        } => {
            let spinner = drafting_spinner();
            let result = client.generate(&PlanRequest {
                title,
                description,
                industry,
            });
            spinner.finish_and_clear();

            let response = result?;
            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                display::render_plan(&response);
            }
        }

        Commands::Validate {
            file,
            title,
            description,
            industry,
        } => {
            let raw = match &file {
                Some(path) => std::fs::read_to_string(path)
                    .with_context(|| format!("Cannot read {}", path.display()))?,
                None => {
                    let mut buffer = String::new();
                    std::io::stdin().read_to_string(&mut buffer)?;
                    buffer
                }
            };
            let plan = serde_json::from_str(&raw).context("Input is not valid JSON")?;

            let response = client.validate(&ValidatePlanRequest {
                plan,
                title,
                description,
                industry,
            })?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }

        Commands::Health => {
            let health = client.health()?;
            display::render_health(&health);
        }
    }

    Ok(())
}

fn drafting_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Drafting business plan...");
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}
