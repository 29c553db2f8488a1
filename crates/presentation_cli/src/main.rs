//! Tripcast CLI
//!
//! Command-line interface for planning trips, checking destination
//! weather, and browsing the trip history.

#![allow(clippy::print_stdout)]

mod render;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use application::ports::TripHistoryPort;
use application::services::PlannerService;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use domain::{BudgetTier, PreferenceTag, TripDates, TripRequest};
use infrastructure::{AppConfig, SqliteTripHistory, WeatherAdapter, create_pool};
use integration_weather::{OpenWeatherClient, WeatherClient};
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Tripcast CLI
#[derive(Parser)]
#[command(name = "tripcast-cli")]
#[command(author, version, about = "Weather-aware trip planning assistant", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: tripcast.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan a trip and print the generated itinerary
    Plan {
        /// Starting location
        #[arg(long)]
        from: String,

        /// Destination city
        #[arg(long)]
        to: String,

        /// First travel day (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,

        /// Last travel day (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,

        /// Budget tier: budget, moderate, premium or luxury
        #[arg(long, default_value = "moderate")]
        budget: String,

        /// Preference tags, comma separated (adventure, relaxation,
        /// hill-station, beach, cultural, wildlife, road-trip, foodie)
        #[arg(long = "prefer", value_delimiter = ',')]
        preferences: Vec<String>,

        /// Plan without fetching destination weather
        #[arg(long)]
        offline: bool,

        /// Print the plan as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show current weather for a city
    Weather {
        /// City name
        city: String,

        /// Also show the 5-day forecast digest
        #[arg(long)]
        forecast: bool,
    },

    /// List recently planned trips
    History {
        /// Maximum records to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },
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

/// Parse a budget tier leniently, warning on unrecognized input
fn parse_budget(input: &str) -> BudgetTier {
    if input.parse::<BudgetTier>().is_err() {
        warn!(tier = %input, "unknown budget tier, using moderate rates");
    }
    BudgetTier::parse_or_default(input)
}

/// Parse preference tags, dropping unrecognized ones with a warning
fn parse_preferences(inputs: &[String]) -> Vec<PreferenceTag> {
    let mut tags = Vec::new();
    for input in inputs {
        match input.parse::<PreferenceTag>() {
            Ok(tag) => tags.push(tag),
            Err(error) => warn!(%error, "ignoring unrecognized preference tag"),
        }
    }
    tags
}

fn open_history(config: &AppConfig) -> anyhow::Result<SqliteTripHistory> {
    let pool = create_pool(&config.database).context("opening trip history database")?;
    SqliteTripHistory::new(pool).context("initializing trip history schema")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load(cli.config.as_deref()).context("loading configuration")?;

    match cli.command {
        Commands::Plan {
            from,
            to,
            start,
            end,
            budget,
            preferences,
            offline,
            json,
        } => {
            let dates = TripDates::new(start, end)?;
            let request = TripRequest::new(from, to, dates)
                .with_budget(parse_budget(&budget))
                .with_preferences(parse_preferences(&preferences));

            let weather = Arc::new(
                WeatherAdapter::new(config.weather.clone()).context("creating weather client")?,
            );
            let history = Arc::new(open_history(&config)?);
            let service = PlannerService::new(weather, history);

            let plan = service.plan_trip(&request, offline).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                println!("{}", render::render_plan(&plan));
            }
        },

        Commands::Weather { city, forecast } => {
            let client = OpenWeatherClient::new(config.weather.clone())
                .context("creating weather client")?;

            let conditions = client.current_by_city(&city).await?;
            println!("{}", render::render_conditions(&conditions));

            if forecast {
                let points = client.forecast_by_city(&city).await?;
                println!("{}", render::render_forecast(&points));
            }
        },

        Commands::History { limit } => {
            let history = open_history(&config)?;
            let records = history.recent(limit).await?;
            println!("{}", render::render_history(&records));
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn plan_args_parse() {
        let cli = Cli::parse_from([
            "tripcast-cli",
            "plan",
            "--from",
            "Delhi",
            "--to",
            "Goa",
            "--start",
            "2024-06-01",
            "--end",
            "2024-06-05",
            "--budget",
            "luxury",
            "--prefer",
            "beach,cultural",
            "--offline",
            "--json",
        ]);

        match cli.command {
            Commands::Plan {
                from,
                to,
                budget,
                preferences,
                offline,
                json,
                ..
            } => {
                assert_eq!(from, "Delhi");
                assert_eq!(to, "Goa");
                assert_eq!(budget, "luxury");
                assert_eq!(preferences, vec!["beach".to_string(), "cultural".to_string()]);
                assert!(offline);
                assert!(json);
            },
            _ => unreachable!("expected plan command"),
        }
    }

    #[test]
    fn parse_budget_falls_back() {
        assert_eq!(parse_budget("luxury"), BudgetTier::Luxury);
        assert_eq!(parse_budget("solid-gold"), BudgetTier::Moderate);
    }

    #[test]
    fn parse_preferences_drops_unknown_tags() {
        let inputs = vec![
            "beach".to_string(),
            "skiing".to_string(),
            "cultural".to_string(),
        ];
        assert_eq!(
            parse_preferences(&inputs),
            vec![PreferenceTag::Beach, PreferenceTag::Cultural]
        );
    }

    #[test]
    fn log_filter_levels() {
        assert_eq!(log_filter_from_verbosity(0), "warn");
        assert_eq!(log_filter_from_verbosity(1), "info");
        assert_eq!(log_filter_from_verbosity(3), "trace");
    }
}
