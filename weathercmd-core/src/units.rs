use std::str::FromStr;

use thiserror::Error;

/// Returned when a unit-system string is neither "metric" nor "imperial".
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Units must either be metric or imperial, got '{0}'")]
pub struct InvalidUnits(pub String);

/// The two unit systems OpenWeather can report in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitSystem {
    Metric,
    Imperial,
}

/// Display-unit labels for one unit system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitLabels {
    pub precipitation: &'static str,
    pub pressure: &'static str,
    pub speed: &'static str,
    pub temperature: &'static str,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    pub const fn all() -> &'static [UnitSystem] {
        &[UnitSystem::Metric, UnitSystem::Imperial]
    }

    /// Labels shown in table headers for this unit system.
    pub fn labels(&self) -> UnitLabels {
        match self {
            UnitSystem::Metric => UnitLabels {
                precipitation: "mm",
                pressure: "hPa",
                speed: "kph",
                temperature: "C",
            },
            UnitSystem::Imperial => UnitLabels {
                precipitation: "in",
                pressure: "in",
                speed: "mph",
                temperature: "F",
            },
        }
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = InvalidUnits;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "metric" => Ok(UnitSystem::Metric),
            "imperial" => Ok(UnitSystem::Imperial),
            other => Err(InvalidUnits(other.to_string())),
        }
    }
}

/// Hectopascals to inches of mercury, rounded to 2 decimal places.
pub fn hpa_to_inhg(value: f64) -> f64 {
    round2(value / 33.863886666667)
}

/// Kilometers per hour to miles per hour. Unrounded; callers round for display.
pub fn kph_to_mph(value: f64) -> f64 {
    value / 1.609
}

/// Millimeters to inches, rounded to 2 decimal places.
pub fn mm_to_inches(value: f64) -> f64 {
    round2(value / 25.4)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_system_as_str_roundtrip() {
        for units in UnitSystem::all() {
            let parsed = UnitSystem::from_str(units.as_str()).expect("roundtrip should succeed");
            assert_eq!(*units, parsed);
        }
    }

    #[test]
    fn invalid_units_rejected() {
        let err = UnitSystem::from_str("kelvin").unwrap_err();
        assert_eq!(err, InvalidUnits("kelvin".to_string()));
        assert!(err.to_string().contains("metric or imperial"));

        // Validation is case-sensitive, matching the API's expectations.
        assert!(UnitSystem::from_str("Metric").is_err());
    }

    #[test]
    fn metric_labels() {
        let labels = UnitSystem::Metric.labels();
        assert_eq!(labels.precipitation, "mm");
        assert_eq!(labels.pressure, "hPa");
        assert_eq!(labels.speed, "kph");
        assert_eq!(labels.temperature, "C");
    }

    #[test]
    fn imperial_labels() {
        let labels = UnitSystem::Imperial.labels();
        assert_eq!(labels.precipitation, "in");
        assert_eq!(labels.pressure, "in");
        assert_eq!(labels.speed, "mph");
        assert_eq!(labels.temperature, "F");
    }

    #[test]
    fn pressure_conversion() {
        assert_eq!(hpa_to_inhg(1013.25), 29.92);
        assert_eq!(hpa_to_inhg(1009.0), 29.8);
    }

    #[test]
    fn speed_conversion() {
        assert!((kph_to_mph(1.609) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn precipitation_conversion() {
        assert_eq!(mm_to_inches(25.4), 1.0);
        assert_eq!(mm_to_inches(0.55), 0.02);
    }
}
