//! Command-line client for the aggregate SWAPI queries.
//!
//! Runs one query against the upstream API directly, without starting the
//! HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Total population of every planet
//! cargo run --bin swapi-cli -- population
//!
//! # Species classifications appearing in episode 1
//! cargo run --bin swapi-cli -- species
//!
//! # Starships flown by a person (default: Luke Skywalker)
//! cargo run --bin swapi-cli -- starships --name "Han Solo"
//!
//! # Raw {success, message, data} output
//! cargo run --bin swapi-cli -- --json population
//! ```
//!
//! # Environment Variables
//!
//! Reads the same `SWAPI_*` variables as the server. `RUST_LOG` defaults to
//! `warn` so logs do not drown the output.
//!
//! Ctrl-C cancels the running query. The exit status is non-zero when the
//! query does not succeed.

use swapi_aggregator::application::pagination::PaginationWalker;
use swapi_aggregator::application::services::{
    PopulationService, SpeciesService, StarshipService,
};
use swapi_aggregator::config::{self, Config};
use swapi_aggregator::domain::aggregate::AggregateResult;
use swapi_aggregator::domain::client::EntityClient;
use swapi_aggregator::domain::entities::Starship;
use swapi_aggregator::infrastructure::swapi::HttpEntityClient;
use swapi_aggregator::telemetry;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use serde::Serialize;
use std::process::ExitCode;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// CLI tool for querying the Star Wars API.
#[derive(Parser)]
#[command(name = "swapi-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print the raw JSON result instead of formatted output
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available queries.
#[derive(Subcommand)]
enum Commands {
    /// Sum the population of every planet
    Population,

    /// List species classifications appearing in episode 1
    Species,

    /// List starships flown by a person
    Starships {
        /// Person to search for (e.g., "Han Solo")
        #[arg(short, long)]
        name: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    telemetry::init(&log_level, &config.log_format);

    let client = build_client(&config)?;

    let shutdown = CancellationToken::new();
    let ctrl_c = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    let walker = PaginationWalker::new(config.page_size);

    let success = match cli.command {
        Commands::Population => {
            let service = PopulationService::new(client, walker, shutdown);
            let result = service.compute_total_population().await;
            report(&result, cli.json, print_population)?
        }
        Commands::Species => {
            let service = SpeciesService::new(client, walker, shutdown);
            let result = service.episode_one_species_classifications().await;
            report(&result, cli.json, print_classifications)?
        }
        Commands::Starships { name } => {
            let service = StarshipService::new(client, shutdown);
            let result = service.starships_by_person_name(name.as_deref()).await;
            report(&result, cli.json, print_starships)?
        }
    };

    Ok(exit_code(success))
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn build_client(config: &Config) -> Result<Arc<dyn EntityClient>> {
    let client = HttpEntityClient::new(
        config.swapi_base_url.clone(),
        config.request_timeout(),
        &config.user_agent,
        config.max_retries,
    )
    .context("Failed to build SWAPI client")?;

    Ok(Arc::new(client))
}

/// Prints `result` either as JSON or through `print`. Returns its success flag.
fn report<T: Serialize>(
    result: &AggregateResult<T>,
    json: bool,
    print: fn(&T),
) -> Result<bool> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else if result.success {
        print(&result.data);
    } else {
        eprintln!("{} {}", "❌".red(), result.message.red().bold());
    }

    Ok(result.success)
}

fn print_population(total: &String) {
    println!("{}", "🪐 Total population".bright_blue().bold());
    println!();
    println!("  {}", total.bright_yellow().bold());
    println!();
}

fn print_classifications(classifications: &Vec<String>) {
    println!("{}", "🧬 Species classifications in episode 1".bright_blue().bold());
    println!();

    if classifications.is_empty() {
        println!("{}", "  No classifications found".yellow());
    }
    for classification in classifications {
        println!("  • {}", classification.cyan());
    }
    println!();
}

fn print_starships(starships: &Vec<Starship>) {
    println!("{}", "🚀 Starships".bright_blue().bold());
    println!();

    if starships.is_empty() {
        println!("{}", "  No starships found".yellow());
        println!();
        return;
    }

    println!(
        "  {:<30} {:<35} {}",
        "Name".bright_white().bold(),
        "Model".bright_white().bold(),
        "Class".bright_white().bold()
    );
    println!("  {}", "─".repeat(80).bright_black());

    for ship in starships {
        println!(
            "  {:<30} {:<35} {}",
            ship.name.cyan(),
            ship.model,
            ship.starship_class.bright_black()
        );
    }
    println!();
}
