//! Table construction: formatted rows and headers, ready for printing.
//!
//! Builders produce a [`RenderedTable`] value; writing it to the terminal is
//! the front end's job. Headers embed the active unit-system labels, so a
//! metric and an imperial run of the same command differ in their headers.

use crate::format;
use crate::icons;
use crate::model::{CurrentWeather, Location, OneCallWeather};
use crate::units::UnitSystem;

/// A fully formatted table: title, ordered column headers, and rows of
/// display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTable {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RenderedTable {
    fn new(title: String) -> Self {
        Self { title, columns: Vec::new(), rows: Vec::new() }
    }

    fn add_column(&mut self, header: String) {
        self.columns.push(header);
    }

    fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }
}

/// Current conditions, all fields.
pub fn current_weather_all(
    current: &CurrentWeather,
    units: UnitSystem,
    am_pm: bool,
) -> RenderedTable {
    let labels = units.labels();

    let mut conditions =
        current.weather.first().map(|w| w.description.clone()).unwrap_or_default();
    if let Some(icon) = icons::icon_for(&conditions) {
        conditions.push(' ');
        conditions.push_str(icon);
    }

    let (sunrise, sunset) = format::sunrise_sunset(
        current.sys.sunrise,
        current.sys.sunset,
        current.timezone,
        am_pm,
    );

    // Absent sub-blocks short-circuit to "0" without touching the formatter.
    let (rain_one_hour, rain_three_hour) = match &current.rain {
        Some(rain) => (
            format::precipitation(rain.one_hour, units),
            format::precipitation(rain.three_hour, units),
        ),
        None => ("0".to_string(), "0".to_string()),
    };

    let (snow_one_hour, snow_three_hour) = match &current.snow {
        Some(snow) => (
            format::precipitation(snow.one_hour, units),
            format::precipitation(snow.three_hour, units),
        ),
        None => ("0".to_string(), "0".to_string()),
    };

    let (wind, gusts) = match &current.wind {
        Some(wind) => (format::wind(wind.speed, units), format::wind(wind.gust, units)),
        None => ("0".to_string(), "0".to_string()),
    };

    let mut table = RenderedTable::new(format!("Current weather for {}", current.name));
    table.add_column(format!("Temperature ({})", labels.temperature));
    table.add_column(format!("Feels Like ({})", labels.temperature));
    table.add_column("Humidity".to_string());
    table.add_column("Conditions".to_string());
    table.add_column(format!("Wind Speed ({})", labels.speed));
    table.add_column(format!("Wind Gusts ({})", labels.speed));
    table.add_column(format!("Rain 1 Hour ({})", labels.precipitation));
    table.add_column(format!("Rain 3 Hour ({})", labels.precipitation));
    table.add_column(format!("Snow 1 Hour ({})", labels.precipitation));
    table.add_column(format!("Snow 3 Hour ({})", labels.precipitation));
    table.add_column("Sunrise".to_string());
    table.add_column("Sunset".to_string());

    table.add_row(vec![
        format::temperature(current.main.temp),
        format::temperature(current.main.feels_like),
        format::humidity(current.main.humidity),
        conditions,
        wind,
        gusts,
        rain_one_hour,
        rain_three_hour,
        snow_one_hour,
        snow_three_hour,
        sunrise,
        sunset,
    ]);

    table
}

/// Current conditions, temperatures only.
pub fn current_weather_temp(current: &CurrentWeather, units: UnitSystem) -> RenderedTable {
    let labels = units.labels();

    let mut table = RenderedTable::new(format!("Current weather for {}", current.name));
    table.add_column(format!("Temperature ({})", labels.temperature));
    table.add_column(format!("Feels Like ({})", labels.temperature));

    table.add_row(vec![
        format::temperature(current.main.temp),
        format::temperature(current.main.feels_like),
    ]);

    table
}

/// Daily forecast, all fields. One row per daily entry.
pub fn daily_all(
    weather: &OneCallWeather,
    units: UnitSystem,
    am_pm: bool,
    location: &Location,
) -> RenderedTable {
    let labels = units.labels();

    let mut table = RenderedTable::new(format!("Daily weather for {}", location.display_name));
    table.add_column("Date/Time".to_string());
    table.add_column(format!("Low ({})", labels.temperature));
    table.add_column(format!("High ({})", labels.temperature));
    table.add_column("Humidity".to_string());
    table.add_column(format!("Dew Point ({})", labels.temperature));
    table.add_column(format!("Pressure ({})", labels.pressure));
    table.add_column("UVI".to_string());
    table.add_column("Clouds".to_string());
    table.add_column(format!("Wind ({})", labels.speed));
    table.add_column(format!("Wind Gusts ({})", labels.speed));
    table.add_column("Sunrise".to_string());
    table.add_column("Sunset".to_string());

    for daily in &weather.daily {
        let date_time = format::date_time(daily.dt, weather.timezone_offset, am_pm, true);
        let (sunrise, sunset) =
            format::sunrise_sunset(daily.sunrise, daily.sunset, weather.timezone_offset, am_pm);

        table.add_row(vec![
            date_time,
            format::temperature(daily.temp.min),
            format::temperature(daily.temp.max),
            format!("{}%", daily.humidity),
            format::temperature(daily.dew_point),
            format::pressure(daily.pressure, units),
            daily.uvi.to_string(),
            format!("{}%", daily.clouds),
            format::wind(daily.wind_speed, units),
            format::wind(daily.wind_gust, units),
            sunrise,
            sunset,
        ]);
    }

    table
}

/// Daily forecast, temperatures only.
pub fn daily_temp_only(
    weather: &OneCallWeather,
    units: UnitSystem,
    am_pm: bool,
    location: &Location,
) -> RenderedTable {
    let labels = units.labels();

    let mut table = RenderedTable::new(format!("Daily weather for {}", location.display_name));
    table.add_column("Date/Time".to_string());
    table.add_column(format!("Low ({})", labels.temperature));
    table.add_column(format!("High ({})", labels.temperature));

    for daily in &weather.daily {
        table.add_row(vec![
            format::date_time(daily.dt, weather.timezone_offset, am_pm, true),
            format::temperature(daily.temp.min),
            format::temperature(daily.temp.max),
        ]);
    }

    table
}

/// Hourly forecast, all fields. One row per hourly entry.
pub fn hourly_all(
    weather: &OneCallWeather,
    units: UnitSystem,
    am_pm: bool,
    location: &Location,
) -> RenderedTable {
    let labels = units.labels();

    let mut table = RenderedTable::new(format!("Hourly weather for {}", location.display_name));
    table.add_column("Date/Time".to_string());
    table.add_column(format!("Temperature ({})", labels.temperature));
    table.add_column(format!("Feels Like ({})", labels.temperature));
    table.add_column("Humidity".to_string());
    table.add_column(format!("Dew Point ({})", labels.temperature));
    table.add_column(format!("Pressure ({})", labels.pressure));
    table.add_column("UVI".to_string());
    table.add_column("Clouds".to_string());
    table.add_column(format!("Wind ({})", labels.speed));
    table.add_column(format!("Wind Gusts ({})", labels.speed));
    table.add_column(format!("Rain ({})", labels.precipitation));
    table.add_column(format!("Snow ({})", labels.precipitation));

    for hourly in &weather.hourly {
        let rain = hourly
            .rain
            .as_ref()
            .map(|rain| format::precipitation(rain.one_hour, units))
            .unwrap_or_else(|| "0".to_string());
        let snow = hourly
            .snow
            .as_ref()
            .map(|snow| format::precipitation(snow.one_hour, units))
            .unwrap_or_else(|| "0".to_string());

        table.add_row(vec![
            format::date_time(hourly.dt, weather.timezone_offset, am_pm, false),
            format::temperature(hourly.temp),
            format::temperature(hourly.feels_like),
            format!("{}%", hourly.humidity),
            format::temperature(hourly.dew_point),
            format::pressure(hourly.pressure, units),
            hourly.uvi.to_string(),
            format!("{}%", hourly.clouds),
            format::wind(hourly.wind_speed, units),
            format::wind(hourly.wind_gust, units),
            rain,
            snow,
        ]);
    }

    table
}

/// Hourly forecast, temperatures only.
pub fn hourly_temp_only(
    weather: &OneCallWeather,
    units: UnitSystem,
    am_pm: bool,
    location: &Location,
) -> RenderedTable {
    let labels = units.labels();

    let mut table = RenderedTable::new(format!("Hourly weather for {}", location.display_name));
    table.add_column("Date/Time".to_string());
    table.add_column(format!("Temperature ({})", labels.temperature));
    table.add_column(format!("Feels Like ({})", labels.temperature));

    for hourly in &weather.hourly {
        table.add_row(vec![
            format::date_time(hourly.dt, weather.timezone_offset, am_pm, false),
            format::temperature(hourly.temp),
            format::temperature(hourly.feels_like),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Condition, DailyForecast, DailyTemp, HourlyForecast, MainBlock, Precipitation, Sys, Wind,
    };

    // Fixtures mirror real Greensboro, NC responses (UTC-4 during DST).

    fn current_weather() -> CurrentWeather {
        CurrentWeather {
            name: "Greensboro".to_string(),
            main: MainBlock {
                temp: Some(296.92),
                feels_like: Some(297.42),
                humidity: Some(79),
            },
            wind: Some(Wind { speed: Some(0.45), gust: Some(3.58) }),
            rain: Some(Precipitation { one_hour: Some(0.55), three_hour: None }),
            snow: None,
            weather: vec![Condition { description: "thunderstorm".to_string() }],
            sys: Sys { sunrise: 1632308836, sunset: 1632352582 },
            timezone: -14400,
        }
    }

    fn greensboro() -> Location {
        Location { display_name: "Greensboro, NC".to_string(), lat: 36.1056, lon: -79.7569 }
    }

    fn hourly_entry(dt: i64, temp: f64, feels_like: f64, humidity: u64) -> HourlyForecast {
        HourlyForecast {
            dt,
            temp: Some(temp),
            feels_like: Some(feels_like),
            humidity,
            dew_point: Some(15.39),
            pressure: Some(1015.0),
            uvi: 0.0,
            clouds: 6,
            wind_speed: Some(1.03),
            wind_gust: Some(1.07),
            rain: None,
            snow: None,
        }
    }

    fn one_call_weather() -> OneCallWeather {
        OneCallWeather {
            timezone_offset: -14400,
            hourly: vec![
                hourly_entry(1632877200, 19.74, 19.75, 76),
                hourly_entry(1632880800, 19.76, 19.7, 73),
                hourly_entry(1632884400, 19.61, 19.45, 70),
            ],
            daily: vec![
                DailyForecast {
                    dt: 1632848400,
                    sunrise: 1632827507,
                    sunset: 1632870436,
                    temp: DailyTemp { min: Some(14.95), max: Some(29.7) },
                    humidity: 35,
                    dew_point: Some(12.3),
                    pressure: Some(1014.0),
                    uvi: 5.67,
                    clouds: 5,
                    wind_speed: Some(2.88),
                    wind_gust: Some(8.7),
                },
                DailyForecast {
                    dt: 1632934800,
                    sunrise: 1632913955,
                    sunset: 1632956747,
                    temp: DailyTemp { min: Some(17.69), max: Some(29.22) },
                    humidity: 44,
                    dew_point: Some(14.51),
                    pressure: Some(1016.0),
                    uvi: 6.07,
                    clouds: 0,
                    wind_speed: Some(3.17),
                    wind_gust: Some(7.44),
                },
            ],
        }
    }

    #[test]
    fn current_all_metric() {
        let table = current_weather_all(&current_weather(), UnitSystem::Metric, false);

        assert_eq!(table.title, "Current weather for Greensboro");
        assert_eq!(table.columns.len(), 12);
        assert_eq!(table.columns[0], "Temperature (C)");
        assert_eq!(table.rows.len(), 1);

        let row = &table.rows[0];
        assert_eq!(row[0], "297");
        assert_eq!(row[1], "297");
        assert_eq!(row[2], "79%");
        assert_eq!(row[3], "thunderstorm 🌩️");
        assert_eq!(row[4], "0"); // 0.45 kph rounds down
        assert_eq!(row[5], "4");
        assert_eq!(row[6], "0.55"); // raw mm, unconverted
        assert_eq!(row[7], "0");
        assert_eq!(row[8], "0"); // snow block absent
        assert_eq!(row[9], "0");
        assert_eq!(row[10], "07:07:16");
        assert_eq!(row[11], "19:16:22");
    }

    #[test]
    fn current_all_imperial_converts_rain() {
        let table = current_weather_all(&current_weather(), UnitSystem::Imperial, false);

        assert_eq!(table.columns[0], "Temperature (F)");
        assert_eq!(table.columns[6], "Rain 1 Hour (in)");
        assert_eq!(table.rows[0][6], "0.02");
        assert_eq!(table.rows[0][5], "2"); // 3.58 kph -> mph, rounded
    }

    #[test]
    fn current_all_am_pm_sunrise_sunset() {
        let table = current_weather_all(&current_weather(), UnitSystem::Metric, true);

        assert_eq!(table.rows[0][10], "07:07 AM");
        assert_eq!(table.rows[0][11], "07:16 PM");
    }

    #[test]
    fn current_all_absent_blocks_render_zero() {
        let mut current = current_weather();
        current.wind = None;
        current.rain = None;
        current.snow = None;
        current.main.humidity = None;
        current.weather[0].description = "raining frogs".to_string();

        let table = current_weather_all(&current, UnitSystem::Metric, false);
        let row = &table.rows[0];

        assert_eq!(row[2], "0%");
        assert_eq!(row[3], "raining frogs"); // no icon appended
        for cell in &row[4..10] {
            assert_eq!(cell, "0");
        }
    }

    #[test]
    fn current_temp_only_has_two_columns() {
        let table = current_weather_temp(&current_weather(), UnitSystem::Metric);

        assert_eq!(table.columns, vec!["Temperature (C)", "Feels Like (C)"]);
        assert_eq!(table.rows, vec![vec!["297".to_string(), "297".to_string()]]);
    }

    #[test]
    fn daily_all_metric() {
        let table = daily_all(&one_call_weather(), UnitSystem::Metric, false, &greensboro());

        assert_eq!(table.title, "Daily weather for Greensboro, NC");
        assert_eq!(table.rows.len(), 2);

        let row = &table.rows[0];
        assert_eq!(row[0], "2021-09-28 13:00 Tuesday");
        assert_eq!(row[1], "15");
        assert_eq!(row[2], "30");
        assert_eq!(row[3], "35%");
        assert_eq!(row[4], "12");
        assert_eq!(row[5], "1014");
        assert_eq!(row[6], "5.67"); // UVI raw, unrounded
        assert_eq!(row[7], "5%");
        assert_eq!(row[8], "3");
        assert_eq!(row[9], "9");
        assert_eq!(row[10], "07:11:47");
        assert_eq!(row[11], "19:07:16");

        assert_eq!(table.rows[1][0], "2021-09-29 13:00 Wednesday");
    }

    #[test]
    fn daily_all_imperial_pressure() {
        let table = daily_all(&one_call_weather(), UnitSystem::Imperial, false, &greensboro());

        assert_eq!(table.columns[5], "Pressure (in)");
        assert_eq!(table.rows[0][5], "29.94");
    }

    #[test]
    fn daily_temp_only_rows() {
        let table = daily_temp_only(&one_call_weather(), UnitSystem::Metric, false, &greensboro());

        assert_eq!(table.columns.len(), 3);
        assert_eq!(
            table.rows[0],
            vec!["2021-09-28 13:00 Tuesday".to_string(), "15".to_string(), "30".to_string()]
        );
    }

    #[test]
    fn hourly_all_metric() {
        let table = hourly_all(&one_call_weather(), UnitSystem::Metric, false, &greensboro());

        assert_eq!(table.title, "Hourly weather for Greensboro, NC");
        assert_eq!(table.rows.len(), 3);

        let row = &table.rows[0];
        assert_eq!(row[0], "2021-09-28 21:00"); // no weekday for hourly
        assert_eq!(row[1], "20");
        assert_eq!(row[2], "20");
        assert_eq!(row[3], "76%");
        assert_eq!(row[4], "15");
        assert_eq!(row[5], "1015");
        assert_eq!(row[6], "0");
        assert_eq!(row[7], "6%");
        assert_eq!(row[8], "1");
        assert_eq!(row[9], "1");
        assert_eq!(row[10], "0"); // rain block absent
        assert_eq!(row[11], "0"); // snow block absent
    }

    #[test]
    fn hourly_all_with_rain_block() {
        let mut weather = one_call_weather();
        weather.hourly[0].rain = Some(Precipitation { one_hour: Some(0.55), three_hour: None });

        let metric = hourly_all(&weather, UnitSystem::Metric, false, &greensboro());
        assert_eq!(metric.rows[0][10], "0.55");

        let imperial = hourly_all(&weather, UnitSystem::Imperial, false, &greensboro());
        assert_eq!(imperial.rows[0][10], "0.02");
    }

    #[test]
    fn hourly_temp_only_am_pm() {
        let table = hourly_temp_only(&one_call_weather(), UnitSystem::Metric, true, &greensboro());

        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[1][0], "2021-09-28 10:00 PM");
    }
}
