use std::sync::{Arc, RwLock};

use reqwest::Client;
use serde::Deserialize;

use crate::error::{FetchError, NetworkError, ParseError};
use crate::model::{WeatherQuery, WeatherRecord};
use crate::observer::WeatherObserver;

/// OpenWeather current-weather endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Client for the OpenWeather current-weather endpoint.
///
/// Each fetch call owns its request/response lifecycle; the only state
/// shared between concurrent calls is the observer slot. The underlying
/// `reqwest::Client` uses its default configuration (default timeouts,
/// connection pool), and no retry is ever attempted.
pub struct WeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
    observer: RwLock<Option<Arc<dyn WeatherObserver>>>,
}

impl WeatherClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            http: Client::new(),
            observer: RwLock::new(None),
        }
    }

    /// Point the client at a different endpoint, e.g. a local test server
    /// or a proxy.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Register the observer notified of fetch outcomes. Replaces any
    /// previously registered observer (last write wins); calls already in
    /// flight keep reporting to the observer they started with.
    pub fn set_observer(&self, observer: Arc<dyn WeatherObserver>) {
        *self.observer.write().expect("observer lock poisoned") = Some(observer);
    }

    pub fn clear_observer(&self) {
        *self.observer.write().expect("observer lock poisoned") = None;
    }

    /// Fetch current weather by city name.
    pub async fn fetch_city(&self, city: &str) -> Result<WeatherRecord, FetchError> {
        self.fetch(&WeatherQuery::City(city.to_owned())).await
    }

    /// Fetch current weather by coordinate pair.
    pub async fn fetch_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherRecord, FetchError> {
        self.fetch(&WeatherQuery::Coordinates { latitude, longitude }).await
    }

    /// Fetch current weather for a query.
    ///
    /// Dispatch order: `on_in_progress` fires before the request goes out,
    /// then exactly one of `on_updated` / `on_failed` fires when it
    /// resolves. The same outcome is also returned, so callers without an
    /// observer can just await the result.
    pub async fn fetch(&self, query: &WeatherQuery) -> Result<WeatherRecord, FetchError> {
        // Snapshot once so every notification for this call goes to the
        // observer registered at entry.
        let observer = self.current_observer();

        if let Some(observer) = &observer {
            observer.on_in_progress().await;
        }

        let result = self.perform(query).await;

        if let Some(observer) = &observer {
            match &result {
                Ok(record) => observer.on_updated(record).await,
                Err(error) => observer.on_failed(error).await,
            }
        }

        result
    }

    async fn perform(&self, query: &WeatherQuery) -> Result<WeatherRecord, FetchError> {
        match query {
            WeatherQuery::City(city) => {
                log::debug!("requesting current weather for city {city}");
            }
            WeatherQuery::Coordinates { latitude, longitude } => {
                log::debug!("requesting current weather for {latitude},{longitude}");
            }
        }

        let url = build_url(&self.base_url, &self.api_key, query);
        let bytes = self.request(&url).await?;
        let record = parse_record(&bytes)?;

        Ok(record)
    }

    /// One GET, raw bytes back. The status code is deliberately not
    /// validated: any response whose body can be read counts as success,
    /// and an API error payload surfaces downstream as a parse failure.
    async fn request(&self, url: &str) -> Result<Vec<u8>, NetworkError> {
        let res = self.http.get(url).send().await?;
        let bytes = res.bytes().await?;
        Ok(bytes.to_vec())
    }

    fn current_observer(&self) -> Option<Arc<dyn WeatherObserver>> {
        self.observer.read().expect("observer lock poisoned").clone()
    }
}

/// Compose the request URL. Caller-supplied text is interpolated verbatim,
/// with no additional URL encoding.
fn build_url(base_url: &str, api_key: &str, query: &WeatherQuery) -> String {
    let base = format!("{base_url}?appid={api_key}&units=metric");

    match query {
        WeatherQuery::City(city) => format!("{base}&q={city}"),
        WeatherQuery::Coordinates { latitude, longitude } => {
            format!("{base}&lat={latitude}&lon={longitude}")
        }
    }
}

#[derive(Debug, Deserialize)]
struct OwCondition {
    id: u32,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    weather: Vec<OwCondition>,
    main: OwMain,
    name: String,
}

/// Decode a response body into a `WeatherRecord`.
///
/// An empty `weather` array is a malformed response, not a panic: the
/// condition id comes from its first element.
fn parse_record(bytes: &[u8]) -> Result<WeatherRecord, ParseError> {
    let parsed: OwCurrentResponse =
        serde_json::from_slice(bytes).map_err(|e| ParseError::malformed(e.to_string()))?;

    let condition = parsed
        .weather
        .first()
        .ok_or_else(|| ParseError::malformed("weather conditions array is empty"))?;

    Ok(WeatherRecord {
        condition_id: condition.id,
        city_name: parsed.name,
        temperature_c: parsed.main.temp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{"weather":[{"id":800}],"main":{"temp":21.5},"name":"London"}"#;

    #[test]
    fn city_url_has_single_city_param_and_no_coordinates() {
        let query = WeatherQuery::City("London".to_string());
        let url = build_url(DEFAULT_BASE_URL, "KEY", &query);

        assert_eq!(url.matches("&q=").count(), 1);
        assert!(!url.contains("&lat="));
        assert!(!url.contains("&lon="));
        assert!(url.contains("appid=KEY"));
        assert!(url.contains("units=metric"));
    }

    #[test]
    fn coordinate_url_has_both_coordinates_and_no_city_param() {
        let query = WeatherQuery::Coordinates { latitude: 51.5, longitude: -0.12 };
        let url = build_url(DEFAULT_BASE_URL, "KEY", &query);

        assert!(url.contains("&lat=51.5"));
        assert!(url.contains("&lon=-0.12"));
        assert!(!url.contains("&q="));
    }

    #[test]
    fn url_interpolates_caller_text_verbatim() {
        let query = WeatherQuery::City("São Paulo".to_string());
        let url = build_url(DEFAULT_BASE_URL, "KEY", &query);

        assert!(url.ends_with("&q=São Paulo"));
    }

    #[test]
    fn well_formed_body_parses_to_record() {
        let record = parse_record(FIXTURE.as_bytes()).expect("fixture must parse");

        assert_eq!(
            record,
            WeatherRecord {
                condition_id: 800,
                city_name: "London".to_string(),
                temperature_c: 21.5,
            }
        );
    }

    #[test]
    fn extra_fields_are_ignored() {
        let body = r#"{
            "coord": {"lon": -0.13, "lat": 51.51},
            "weather": [{"id": 500, "main": "Rain", "description": "light rain"}],
            "main": {"temp": 7.2, "feels_like": 5.1, "humidity": 81},
            "name": "London",
            "cod": 200
        }"#;

        let record = parse_record(body.as_bytes()).expect("body must parse");
        assert_eq!(record.condition_id, 500);
        assert_eq!(record.temperature_c, 7.2);
    }

    #[test]
    fn empty_weather_array_is_a_parse_error() {
        let body = r#"{"weather":[],"main":{"temp":3.0},"name":"Oslo"}"#;

        let err = parse_record(body.as_bytes()).unwrap_err();
        assert!(matches!(err, ParseError::Malformed { .. }));
    }

    #[test]
    fn missing_fields_are_a_parse_error() {
        let body = r#"{"cod":401,"message":"Invalid API key"}"#;

        let err = parse_record(body.as_bytes()).unwrap_err();
        assert!(matches!(err, ParseError::Malformed { .. }));
    }

    #[test]
    fn non_json_body_is_a_parse_error() {
        let err = parse_record(b"<html>gateway timeout</html>").unwrap_err();
        assert!(matches!(err, ParseError::Malformed { .. }));
    }
}
