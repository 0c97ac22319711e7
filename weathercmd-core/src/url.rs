//! Request-URL construction for the OpenWeather endpoints.

use crate::units::UnitSystem;

pub const WEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// How the user identified the place for a current-weather lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupHow {
    City,
    Zip,
}

/// URL for the `/weather` (current conditions) endpoint.
pub fn current_url(
    how: LookupHow,
    city_zip: &str,
    units: UnitSystem,
    state_code: Option<&str>,
    country_code: Option<&str>,
    api_key: &str,
) -> String {
    let mut url = match how {
        LookupHow::City => format!("{WEATHER_BASE_URL}/weather?q={city_zip}&units={units}"),
        LookupHow::Zip => format!("{WEATHER_BASE_URL}/weather?zip={city_zip}&units={units}"),
    };

    if let Some(state_code) = state_code {
        url = format!("{url}&state_code={state_code}");
    }

    if let Some(country_code) = country_code {
        url = format!("{url}&country_code={country_code}");
    }

    append_api_key(url, api_key)
}

/// URL for the `/onecall` (daily and hourly forecast) endpoint.
pub fn one_call_url(lat: f64, lon: f64, units: UnitSystem, api_key: &str) -> String {
    append_api_key(format!("{WEATHER_BASE_URL}/onecall?lat={lat}&lon={lon}&units={units}"), api_key)
}

// The credential goes on last, after all location parameters.
fn append_api_key(url: String, api_key: &str) -> String {
    format!("{url}&appid={api_key}")
}
