//! Route Finder CLI
//!
//! Address suggestions and route computation from the command line.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod geojson_output;
mod terminal;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use application::{
    AddressSuggestionController, ApplicationError, RouteRequestController, SuggestionOutcome,
};
use clap::{Parser, Subcommand};
use domain::{Origin, TravelMode};
use infrastructure::{AppConfig, HttpRoutingAdapter, PhotonGeocodingAdapter, init_logging};

use crate::geojson_output::route_feature_collection;
use crate::terminal::{TerminalMapSurface, TerminalSuggestionView};

/// Route Finder CLI
#[derive(Parser)]
#[command(name = "routefinder-cli")]
#[command(author, version, about = "Route Finder address and route CLI", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: ./routefinder.toml when present)
    #[arg(short, long, env = "ROUTEFINDER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest addresses for a partial query
    ///
    /// Example: routefinder-cli suggest "Piazza Vecchia" --select 0
    Suggest {
        /// Text typed into the address field
        query: String,

        /// Address field the query belongs to (start or end)
        #[arg(short, long, default_value = "start")]
        origin: Origin,

        /// Pick a candidate by its index and print the filled field
        #[arg(short, long)]
        select: Option<usize>,
    },

    /// Compute a route between two addresses
    ///
    /// Example: routefinder-cli route --from Bergamo --to Milano --mode car
    Route {
        /// Start address
        #[arg(short, long)]
        from: Option<String>,

        /// End address
        #[arg(short, long)]
        to: Option<String>,

        /// Travel mode (car, bike, walk, transit or a routing profile)
        #[arg(short, long)]
        mode: Option<TravelMode>,

        /// Print the route as a GeoJSON feature collection
        #[arg(long)]
        geojson: bool,
    },

    /// List the travel modes and their routing profiles
    Modes,

    /// Print the effective configuration
    Config,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Filter override for `-v` flags; without flags the configured filter wins
const fn verbosity_override(verbose: u8) -> Option<&'static str> {
    if verbose == 0 {
        None
    } else {
        Some(log_filter_from_verbosity(verbose))
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<AppConfig> {
    let config = match path {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => AppConfig::load().context("failed to load configuration")?,
    };
    config.validate()?;
    Ok(config)
}

/// Failure line shown to the user; written to stderr so stdout stays parseable
fn failure_notice(err: &ApplicationError) -> String {
    format!("❌ {}", err.user_notice())
}

fn fail(err: &ApplicationError) -> ! {
    eprintln!("{}", failure_notice(err));
    std::process::exit(1);
}

async fn suggest(
    config: &AppConfig,
    query: &str,
    origin: Origin,
    select: Option<usize>,
) -> anyhow::Result<()> {
    let geocoder = PhotonGeocodingAdapter::new(&config.geocoding)?;
    let view = Arc::new(TerminalSuggestionView::default());
    let controller =
        AddressSuggestionController::new(Arc::new(geocoder), view, &config.suggestions);

    match controller.on_input_settled(origin, query).await {
        Ok(SuggestionOutcome::Rendered(candidates)) if candidates.is_empty() => {
            println!("🔍 No addresses found for \"{query}\"");
            return Ok(());
        },
        Ok(SuggestionOutcome::Rendered(_)) => {},
        Ok(SuggestionOutcome::Cleared) => {
            println!("⚠️  Nothing to search for");
            return Ok(());
        },
        Ok(SuggestionOutcome::Superseded | SuggestionOutcome::Stale) => return Ok(()),
        Err(e) => fail(&e),
    }

    if let Some(Err(e)) = select.map(|id| controller.select_candidate(origin, id)) {
        fail(&e);
    }

    Ok(())
}

async fn route(
    config: &AppConfig,
    from: &str,
    to: &str,
    mode: Option<TravelMode>,
    geojson: bool,
) -> anyhow::Result<()> {
    let routing = HttpRoutingAdapter::new(&config.routing)?;
    let surface = Arc::new(TerminalMapSurface::default());
    let controller =
        RouteRequestController::new(Arc::new(routing), surface.clone(), config.map.clone());

    let outcome = match controller.compute_route(from, to, mode).await {
        Ok(outcome) => outcome,
        Err(e) => fail(&e),
    };

    if geojson {
        let (geometry, style) = surface
            .artifact(outcome.handle)
            .context("route artifact is no longer on the map")?;
        let collection = route_feature_collection(&geometry, &style, &outcome);
        println!("{}", serde_json::to_string_pretty(&collection)?);
        return Ok(());
    }

    println!("🧭 {from} → {to}");
    println!("📏 {}", outcome.summary);
    if let Some(view) = surface.view() {
        let center = view.center();
        println!(
            "🗺️  Map centered on {:.5}, {:.5}",
            center.latitude(),
            center.longitude()
        );
    }
    if !outcome.instructions.is_empty() {
        println!();
        for (step, instruction) in outcome.instructions.iter().enumerate() {
            println!("  {}. {instruction}", step + 1);
        }
    }

    Ok(())
}

fn print_modes() {
    println!("🚦 Travel modes:");
    for mode in TravelMode::ALL {
        println!("  {:<8} {}", mode.name(), mode.profile());
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    init_logging(&config.telemetry, verbosity_override(cli.verbose))?;

    match cli.command {
        Commands::Suggest {
            query,
            origin,
            select,
        } => suggest(&config, &query, origin, select).await?,

        Commands::Route {
            from,
            to,
            mode,
            geojson,
        } => {
            route(
                &config,
                from.as_deref().unwrap_or_default(),
                to.as_deref().unwrap_or_default(),
                mode,
                geojson,
            )
            .await?;
        },

        Commands::Modes => print_modes(),

        Commands::Config => {
            println!("⚙️  Effective configuration:");
            println!();
            println!("{}", config.to_toml()?);
        },
    }

    Ok(())
}
