use async_trait::async_trait;

use crate::error::FetchError;
use crate::model::WeatherRecord;

/// Trait for anything that wants to be told the outcome of a fetch.
///
/// Lifecycle, per call:
/// - `on_in_progress` is called once, before the request is dispatched.
/// - then exactly one of:
///   - `on_updated` when the response decoded successfully, or
///   - `on_failed` when the request or the decode failed.
///
/// The client snapshots the registered observer when a fetch starts, so a
/// call always reports to the observer that was registered at its entry,
/// even if another one is registered mid-flight.
#[async_trait]
pub trait WeatherObserver: Send + Sync + 'static {
    /// Called before the network request is dispatched.
    async fn on_in_progress(&self);

    /// Called with the decoded record when the fetch succeeds.
    async fn on_updated(&self, record: &WeatherRecord);

    /// Called when the fetch fails, with the terminal error.
    async fn on_failed(&self, error: &FetchError);
}
