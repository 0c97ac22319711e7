//! Display formatting for weather fields and timestamps.
//!
//! Every numeric field the API reports may be absent (stations routinely omit
//! rain, snow, wind, or pressure). The formatters centralize a single
//! "absent or zero renders as literal 0" policy so the table builders never
//! branch on nullability beyond a presence check for nested optional blocks.

use chrono::{DateTime, NaiveDateTime};

use crate::units::{UnitSystem, hpa_to_inhg, kph_to_mph, mm_to_inches};

/// Format a precipitation amount in the requested unit system.
///
/// Metric values pass through unconverted; imperial values are converted
/// mm -> in and rounded to 2 decimal places.
pub fn precipitation(amount: Option<f64>, units: UnitSystem) -> String {
    match amount {
        None => "0".to_string(),
        Some(amount) if amount == 0.0 => "0".to_string(),
        Some(amount) => match units {
            UnitSystem::Metric => amount.to_string(),
            UnitSystem::Imperial => mm_to_inches(amount).to_string(),
        },
    }
}

/// Format a pressure reading. Metric keeps the raw hPa integer; imperial
/// converts to inches of mercury at 2 decimal places.
pub fn pressure(value: Option<f64>, units: UnitSystem) -> String {
    match value {
        None => "0".to_string(),
        Some(value) if value == 0.0 => "0".to_string(),
        Some(value) => match units {
            UnitSystem::Metric => value.to_string(),
            UnitSystem::Imperial => hpa_to_inhg(value).to_string(),
        },
    }
}

/// Format a wind speed, rounded to the nearest whole number in the active
/// speed unit.
pub fn wind(speed: Option<f64>, units: UnitSystem) -> String {
    match speed {
        None => "0".to_string(),
        Some(speed) if speed == 0.0 => "0".to_string(),
        Some(speed) => {
            let speed = match units {
                UnitSystem::Metric => speed,
                UnitSystem::Imperial => kph_to_mph(speed),
            };
            // Rounding is pinned to half-away-from-zero (`f64::round`).
            (speed.round() as i64).to_string()
        }
    }
}

/// Format a temperature-like value (temp, feels-like, dew point) rounded to
/// the nearest whole degree.
pub fn temperature(value: Option<f64>) -> String {
    match value {
        None => "0".to_string(),
        Some(value) => (value.round() as i64).to_string(),
    }
}

/// Format a relative-humidity percentage, absent values included.
pub fn humidity(value: Option<u64>) -> String {
    format!("{}%", value.unwrap_or(0))
}

/// Wall-clock time at the observation location: the UTC instant shifted by
/// the location's UTC offset. Never the caller's timezone.
fn local_time(epoch: i64, offset_secs: i64) -> NaiveDateTime {
    DateTime::from_timestamp(epoch + offset_secs, 0)
        .unwrap_or_default()
        .naive_utc()
}

/// Render a timestamp as local date and time. `daily` appends the weekday
/// name, `am_pm` switches from 24-hour to 12-hour clock.
pub fn date_time(epoch: i64, offset_secs: i64, am_pm: bool, daily: bool) -> String {
    let fmt = match (am_pm, daily) {
        (false, false) => "%Y-%m-%d %H:%M",
        (false, true) => "%Y-%m-%d %H:%M %A",
        (true, false) => "%Y-%m-%d %I:%M %p",
        (true, true) => "%Y-%m-%d %I:%M %p %A",
    };
    local_time(epoch, offset_secs).format(fmt).to_string()
}

/// Render sunrise and sunset as local time-of-day strings.
pub fn sunrise_sunset(
    sunrise: i64,
    sunset: i64,
    offset_secs: i64,
    am_pm: bool,
) -> (String, String) {
    let fmt = if am_pm { "%I:%M %p" } else { "%H:%M:%S" };
    (
        local_time(sunrise, offset_secs).format(fmt).to_string(),
        local_time(sunset, offset_secs).format(fmt).to_string(),
    )
}
