use std::path::PathBuf;

use thiserror::Error;

/// Failures while locating or reading the stored credentials.
///
/// All of these are startup-time errors: a fetch is never attempted
/// without an API key in hand.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "credentials file not found at {path}.\n\
         Hint: run `weathernow configure` to create it."
    )]
    MissingResource { path: PathBuf },

    #[error(
        "WEATHER_API_KEY is not set in the credentials file.\n\
         Hint: run `weathernow configure` to store your OpenWeather API key."
    )]
    MissingKey,

    #[error("failed to read credentials file: {0}")]
    Io(#[from] std::io::Error),

    #[error("credentials file is not valid TOML: {0}")]
    Malformed(#[from] toml::de::Error),

    #[error("failed to serialize credentials to TOML: {0}")]
    Encode(#[from] toml::ser::Error),

    #[error("could not determine platform config directory")]
    NoConfigDir,
}

/// Transport-level failure of the single weather request: DNS, connection
/// refused, timeout, malformed URL, or an unreadable body.
#[derive(Debug, Error)]
#[error("weather request could not complete: {0}")]
pub struct NetworkError(#[from] pub reqwest::Error);

/// The response body did not match the expected weather schema.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed weather response: {reason}")]
    Malformed { reason: String },
}

impl ParseError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        ParseError::Malformed { reason: reason.into() }
    }
}

/// Terminal outcome of a failed fetch, as delivered to the observer and
/// returned by the fetch methods.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
