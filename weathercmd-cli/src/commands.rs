//! Orchestration for the forecast subcommands: resolve a location when
//! needed, build the request URL, fetch, pick the full or temp-only table,
//! and print it. Errors propagate to `main` untouched; no table is printed
//! on failure.

use std::str::FromStr;

use anyhow::Result;
use weathercmd_core::{
    Config, OpenWeatherClient, UnitSystem, WeatherSource, table,
    url::{self, LookupHow},
};

use crate::cli::{How, LookupArgs};
use crate::render;
use crate::status::Status;

impl From<How> for LookupHow {
    fn from(how: How) -> Self {
        match how {
            How::City => LookupHow::City,
            How::Zip => LookupHow::Zip,
        }
    }
}

pub async fn show_current(args: &LookupArgs) -> Result<()> {
    let units = UnitSystem::from_str(&args.units)?;
    let api_key = Config::load()?.resolve_api_key()?;
    let client = OpenWeatherClient::new()?;

    let request_url = url::current_url(
        args.how.into(),
        &args.city_zip,
        units,
        args.state_code.as_deref(),
        args.country_code.as_deref(),
        &api_key,
    );

    let table = {
        let _status = Status::new("Getting weather...");
        let current = client.current_weather(&request_url).await?;

        if args.temp_only {
            table::current_weather_temp(&current, units)
        } else {
            table::current_weather_all(&current, units, args.am_pm)
        }
    };

    render::print_table(&table, args.terminal_width);
    Ok(())
}

pub async fn show_daily(args: &LookupArgs) -> Result<()> {
    let units = UnitSystem::from_str(&args.units)?;
    let api_key = Config::load()?.resolve_api_key()?;
    let client = OpenWeatherClient::new()?;

    let table = {
        let _status = Status::new("Getting weather...");
        let location = client
            .resolve_location(
                &args.city_zip,
                args.state_code.as_deref(),
                args.country_code.as_deref(),
            )
            .await?;
        let request_url = url::one_call_url(location.lat, location.lon, units, &api_key);
        let weather = client.one_call_weather(&request_url).await?;

        if args.temp_only {
            table::daily_temp_only(&weather, units, args.am_pm, &location)
        } else {
            table::daily_all(&weather, units, args.am_pm, &location)
        }
    };

    render::print_table(&table, args.terminal_width);
    Ok(())
}

pub async fn show_hourly(args: &LookupArgs) -> Result<()> {
    let units = UnitSystem::from_str(&args.units)?;
    let api_key = Config::load()?.resolve_api_key()?;
    let client = OpenWeatherClient::new()?;

    let table = {
        let _status = Status::new("Getting weather...");
        let location = client
            .resolve_location(
                &args.city_zip,
                args.state_code.as_deref(),
                args.country_code.as_deref(),
            )
            .await?;
        let request_url = url::one_call_url(location.lat, location.lon, units, &api_key);
        let weather = client.one_call_weather(&request_url).await?;

        if args.temp_only {
            table::hourly_temp_only(&weather, units, args.am_pm, &location)
        } else {
            table::hourly_all(&weather, units, args.am_pm, &location)
        }
    };

    render::print_table(&table, args.terminal_width);
    Ok(())
}

/// Prompt for the OpenWeather API key and save it to the config file.
pub fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Text::new("OpenWeather API key:").prompt()?;
    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("API key saved to {}", Config::config_file_path()?.display());
    Ok(())
}
