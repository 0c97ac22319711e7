//! Typed views of the OpenWeather and Nominatim JSON payloads.
//!
//! Only the fields the tables display are deserialized. Everything is an
//! immutable value built once per request and discarded after rendering.

use serde::Deserialize;

/// One entry of the `weather` condition list.
#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    pub description: String,
}

/// The `main` block of a current-weather response. Stations may omit any of
/// these readings.
#[derive(Debug, Clone, Deserialize)]
pub struct MainBlock {
    pub temp: Option<f64>,
    pub feels_like: Option<f64>,
    pub humidity: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Wind {
    pub speed: Option<f64>,
    #[serde(default)]
    pub gust: Option<f64>,
}

/// Rain or snow amounts. The API keys these by accumulation window.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Precipitation {
    #[serde(rename = "1h")]
    pub one_hour: Option<f64>,
    #[serde(rename = "3h", default)]
    pub three_hour: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sys {
    pub sunrise: i64,
    pub sunset: i64,
}

/// A `/weather` response. Carries its own location name and UTC offset.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    pub name: String,
    pub main: MainBlock,
    #[serde(default)]
    pub wind: Option<Wind>,
    #[serde(default)]
    pub rain: Option<Precipitation>,
    #[serde(default)]
    pub snow: Option<Precipitation>,
    pub weather: Vec<Condition>,
    pub sys: Sys,
    /// UTC offset in seconds, may be negative.
    pub timezone: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HourlyForecast {
    pub dt: i64,
    pub temp: Option<f64>,
    pub feels_like: Option<f64>,
    pub humidity: u64,
    pub dew_point: Option<f64>,
    pub pressure: Option<f64>,
    pub uvi: f64,
    pub clouds: u64,
    pub wind_speed: Option<f64>,
    pub wind_gust: Option<f64>,
    #[serde(default)]
    pub rain: Option<Precipitation>,
    #[serde(default)]
    pub snow: Option<Precipitation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyTemp {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyForecast {
    pub dt: i64,
    pub sunrise: i64,
    pub sunset: i64,
    pub temp: DailyTemp,
    pub humidity: u64,
    pub dew_point: Option<f64>,
    pub pressure: Option<f64>,
    pub uvi: f64,
    pub clouds: u64,
    pub wind_speed: Option<f64>,
    pub wind_gust: Option<f64>,
}

/// A `/onecall` response: hourly and daily forecasts sharing one UTC offset.
#[derive(Debug, Clone, Deserialize)]
pub struct OneCallWeather {
    pub timezone_offset: i64,
    #[serde(default)]
    pub hourly: Vec<HourlyForecast>,
    #[serde(default)]
    pub daily: Vec<DailyForecast>,
}

/// A Nominatim search hit.
#[derive(Debug, Clone, Deserialize)]
pub struct Location {
    pub display_name: String,
    #[serde(deserialize_with = "coordinate")]
    pub lat: f64,
    #[serde(deserialize_with = "coordinate")]
    pub lon: f64,
}

/// Nominatim serializes coordinates as JSON strings; accept either form.
fn coordinate<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(value) => Ok(value),
        Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_weather_without_optional_blocks_parses() {
        let json = r#"{
            "name": "Greensboro",
            "main": {"temp": 296.92, "feels_like": 297.42, "humidity": 79},
            "weather": [{"description": "thunderstorm"}],
            "sys": {"sunrise": 1632308836, "sunset": 1632352582},
            "timezone": -14400
        }"#;

        let current: CurrentWeather = serde_json::from_str(json).expect("should parse");
        assert!(current.wind.is_none());
        assert!(current.rain.is_none());
        assert!(current.snow.is_none());
        assert_eq!(current.main.humidity, Some(79));
    }

    #[test]
    fn precipitation_accumulation_keys_are_renamed() {
        let rain: Precipitation =
            serde_json::from_str(r#"{"1h": 0.55, "3h": 1.2}"#).expect("should parse");
        assert_eq!(rain.one_hour, Some(0.55));
        assert_eq!(rain.three_hour, Some(1.2));

        let rain: Precipitation = serde_json::from_str(r#"{"1h": 0.55}"#).expect("should parse");
        assert_eq!(rain.three_hour, None);
    }

    #[test]
    fn location_accepts_string_coordinates() {
        let json = r#"{"display_name": "Greensboro, NC", "lat": "36.1056", "lon": "-79.7569"}"#;
        let location: Location = serde_json::from_str(json).expect("should parse");
        assert_eq!(location.lat, 36.1056);
        assert_eq!(location.lon, -79.7569);
    }
}
