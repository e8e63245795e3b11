use std::{fmt, sync::Arc};

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, PasswordDisplayMode, Select, Text};
use tracing::debug;
use weather_core::{
    Config, FetchOutcome, LocationQuery, TemperatureUnit, WeatherProvider, WeatherSession,
    provider_from_config,
};

use crate::{
    cities::{POPULAR_CITIES, PopularCity},
    output,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather lookup widget")]
pub struct Cli {
    /// Verbosity level (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the Visual Crossing API key and default location.
    Configure,

    /// Show current conditions and the 5-day forecast for a location.
    Show {
        /// Location name, e.g. "Paris" or "Austin, TX".
        #[arg(required = true, num_args = 1..)]
        location: Vec<String>,

        /// Temperature unit: celsius (c) or fahrenheit (f).
        #[arg(short, long, default_value_t = TemperatureUnit::Celsius)]
        unit: TemperatureUnit,

        /// Print the raw snapshot as JSON instead of the widget view.
        #[arg(long)]
        json: bool,
    },

    /// List the popular cities offered by the interactive widget.
    Cities,

    /// Browse weather interactively: popular cities, search and unit toggle.
    Interactive {
        /// Location to load first; defaults to the configured default location.
        #[arg(long)]
        location: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { location, unit, json } => show(&location.join(" "), unit, json).await,
            Command::Cities => {
                output::print_cities();
                Ok(())
            }
            Command::Interactive { location } => interactive(location).await,
        }
    }
}

fn session_from_config(config: &Config) -> Result<WeatherSession> {
    let provider: Arc<dyn WeatherProvider> = Arc::from(provider_from_config(config)?);
    Ok(WeatherSession::new(provider))
}

fn configure() -> Result<()> {
    // file only, so an env override is never written to disk
    let mut config = Config::load_file()?;

    let api_key = Password::new("Visual Crossing API key:")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()
        .context("Failed to read API key")?;
    let api_key = api_key.trim();
    if api_key.is_empty() {
        bail!("API key must not be empty");
    }
    config.set_api_key(api_key.to_string());

    let location = Text::new("Default location:")
        .with_default(&config.default_location)
        .prompt()
        .context("Failed to read default location")?;
    if let Some(location) = LocationQuery::parse(&location) {
        config.default_location = location.to_string();
    }

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}

async fn show(location: &str, unit: TemperatureUnit, json: bool) -> Result<()> {
    let query =
        LocationQuery::parse(location).ok_or_else(|| anyhow!("Location must not be empty"))?;
    let session = session_from_config(&Config::load()?)?;
    session.set_unit(unit);

    match session.search(&query).await {
        FetchOutcome::Applied => {}
        FetchOutcome::Failed(err) => {
            return Err(err).with_context(|| format!("Could not fetch weather for '{query}'"));
        }
        FetchOutcome::Superseded => bail!("Request for '{query}' was superseded"),
    }

    if json {
        let snapshot = session
            .snapshot()
            .ok_or_else(|| anyhow!("No weather data after a successful fetch"))?;
        println!("{}", serde_json::to_string_pretty(snapshot.as_ref())?);
    } else {
        output::print_screen(&session.screen());
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    City(PopularCity),
    Search,
    SwitchUnit(TemperatureUnit),
    Quit,
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuItem::City(city) => write!(f, "{city}"),
            MenuItem::Search => f.write_str("Search for a location..."),
            MenuItem::SwitchUnit(unit) => write!(f, "Switch to {}", unit.symbol()),
            MenuItem::Quit => f.write_str("Quit"),
        }
    }
}

fn menu(unit: TemperatureUnit) -> Vec<MenuItem> {
    let mut items = vec![MenuItem::Search, MenuItem::SwitchUnit(unit.toggled())];
    items.extend(POPULAR_CITIES.into_iter().map(MenuItem::City));
    items.push(MenuItem::Quit);
    items
}

async fn refresh(session: &WeatherSession, query: &LocationQuery) {
    println!("Fetching weather for {query}...");
    let outcome = session.search(query).await;
    debug!(?outcome, "Fetch finished");
    output::print_screen(&session.screen());
}

async fn interactive(location: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let session = session_from_config(&config)?;

    let start = location.unwrap_or_else(|| config.default_location.clone());
    if let Some(query) = LocationQuery::parse(&start) {
        refresh(&session, &query).await;
    }

    loop {
        let choice = match Select::new("Weather", menu(session.unit())).prompt() {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e).context("Failed to read menu selection"),
        };

        match choice {
            MenuItem::City(city) => {
                if let Some(query) = city.query() {
                    refresh(&session, &query).await;
                }
            }
            MenuItem::Search => {
                let input = Text::new("Location:")
                    .prompt_skippable()
                    .context("Failed to read location")?;
                // blank input is ignored, like an empty search box
                if let Some(query) = input.as_deref().and_then(LocationQuery::parse) {
                    refresh(&session, &query).await;
                }
            }
            MenuItem::SwitchUnit(unit) => {
                session.set_unit(unit);
                output::print_screen(&session.screen());
            }
            MenuItem::Quit => break,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_multi_word_location_and_unit() {
        let cli = Cli::try_parse_from(["weather", "show", "New", "York", "--unit", "f"]).unwrap();

        match cli.command {
            Command::Show { location, unit, json } => {
                assert_eq!(location.join(" "), "New York");
                assert_eq!(unit, TemperatureUnit::Fahrenheit);
                assert!(!json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn unit_defaults_to_celsius() {
        let cli = Cli::try_parse_from(["weather", "show", "Paris"]).unwrap();
        assert!(matches!(cli.command, Command::Show { unit: TemperatureUnit::Celsius, .. }));
    }

    #[test]
    fn rejects_unknown_unit() {
        assert!(Cli::try_parse_from(["weather", "show", "Paris", "--unit", "kelvin"]).is_err());
    }

    #[test]
    fn show_requires_location() {
        assert!(Cli::try_parse_from(["weather", "show"]).is_err());
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::try_parse_from(["weather", "cities", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn menu_offers_the_other_unit_and_all_cities() {
        let items = menu(TemperatureUnit::Celsius);

        assert_eq!(items[1], MenuItem::SwitchUnit(TemperatureUnit::Fahrenheit));
        assert_eq!(items[1].to_string(), "Switch to °F");
        assert_eq!(
            items.iter().filter(|item| matches!(item, MenuItem::City(_))).count(),
            POPULAR_CITIES.len()
        );
        assert_eq!(items.last(), Some(&MenuItem::Quit));
    }
}
