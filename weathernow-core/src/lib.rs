//! Core library for the `weathernow` CLI.
//!
//! This crate defines:
//! - Credentials handling (the stored OpenWeather API key)
//! - The current-weather client and its observer seam
//! - Shared domain models (queries, records) and the error taxonomy
//!
//! It is used by `weathernow-cli`, but can also be reused by other binaries
//! or services.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod observer;

pub use client::WeatherClient;
pub use config::Credentials;
pub use error::{ConfigError, FetchError, NetworkError, ParseError};
pub use model::{WeatherQuery, WeatherRecord};
pub use observer::WeatherObserver;
