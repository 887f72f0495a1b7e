use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use weathernow_core::{Credentials, WeatherClient, WeatherQuery};

use crate::console_observer::ConsoleObserver;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weathernow", version, about = "Current weather from OpenWeather")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key used by the fetch commands.
    Configure,

    /// Show current weather for a city name.
    City {
        /// City name, e.g. "London".
        name: String,
    },

    /// Show current weather for a coordinate pair.
    Coords {
        /// Latitude in decimal degrees.
        #[arg(allow_negative_numbers = true)]
        latitude: f64,

        /// Longitude in decimal degrees.
        #[arg(allow_negative_numbers = true)]
        longitude: f64,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::City { name } => fetch(WeatherQuery::City(name)).await,
            Command::Coords { latitude, longitude } => {
                fetch(WeatherQuery::Coordinates { latitude, longitude }).await
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut credentials =
        Credentials::load_or_default().context("Failed to read existing credentials")?;

    let api_key = inquire::Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key from prompt")?;

    credentials.set_api_key(api_key);
    credentials.save().context("Failed to save credentials")?;

    let path = Credentials::file_path()?;
    println!("API key saved to {}", path.display());

    Ok(())
}

async fn fetch(query: WeatherQuery) -> anyhow::Result<()> {
    // Credentials are resolved before any client exists, so a missing key
    // never turns into a request.
    let api_key = Credentials::load_api_key()?;

    let client = WeatherClient::new(api_key);
    client.set_observer(Arc::new(ConsoleObserver));

    client.fetch(&query).await.context("Weather request failed")?;

    Ok(())
}
