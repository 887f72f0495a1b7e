use async_trait::async_trait;

use weathernow_core::error::FetchError;
use weathernow_core::model::WeatherRecord;
use weathernow_core::observer::WeatherObserver;

/// Prints fetch progress and the decoded record to stdout.
///
/// Failures are left to the caller's error path so they are reported
/// exactly once.
pub struct ConsoleObserver;

#[async_trait]
impl WeatherObserver for ConsoleObserver {
    async fn on_in_progress(&self) {
        println!("Fetching current weather...");
    }

    async fn on_updated(&self, record: &WeatherRecord) {
        println!(
            "{}: {:.1} °C, {} (condition {})",
            record.city_name,
            record.temperature_c,
            record.condition_label(),
            record.condition_id,
        );
    }

    async fn on_failed(&self, error: &FetchError) {
        log::debug!("weather request failed: {error}");
    }
}
