use serde::{Deserialize, Serialize};

/// A single fetch request: either a city name or a coordinate pair.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherQuery {
    City(String),
    Coordinates { latitude: f64, longitude: f64 },
}

/// Decoded result of a successful fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// OpenWeather condition code, e.g. 800 for clear sky.
    pub condition_id: u32,
    pub city_name: String,
    pub temperature_c: f64,
}

impl WeatherRecord {
    /// Display word for the condition code, following the OpenWeather
    /// code ranges (2xx thunderstorm .. 80x clouds).
    pub fn condition_label(&self) -> &'static str {
        match self.condition_id {
            200..=232 => "thunderstorm",
            300..=321 => "drizzle",
            500..=531 => "rain",
            600..=622 => "snow",
            701..=781 => "mist",
            800 => "clear sky",
            801..=804 => "clouds",
            _ => "unknown conditions",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(condition_id: u32) -> WeatherRecord {
        WeatherRecord {
            condition_id,
            city_name: "London".to_string(),
            temperature_c: 21.5,
        }
    }

    #[test]
    fn condition_label_covers_known_ranges() {
        assert_eq!(record(211).condition_label(), "thunderstorm");
        assert_eq!(record(301).condition_label(), "drizzle");
        assert_eq!(record(500).condition_label(), "rain");
        assert_eq!(record(601).condition_label(), "snow");
        assert_eq!(record(741).condition_label(), "mist");
        assert_eq!(record(800).condition_label(), "clear sky");
        assert_eq!(record(804).condition_label(), "clouds");
    }

    #[test]
    fn condition_label_falls_back_for_unknown_codes() {
        assert_eq!(record(999).condition_label(), "unknown conditions");
    }
}
