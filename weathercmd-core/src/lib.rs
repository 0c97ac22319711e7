//! Core library for the `weathercmd` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Typed OpenWeather / Nominatim response models
//! - Unit conversion and display formatting
//! - Table construction for the terminal front end
//!
//! It is used by `weathercmd-cli`, but can also be reused by other binaries or services.

pub mod api;
pub mod config;
pub mod format;
pub mod icons;
pub mod model;
pub mod table;
pub mod units;
pub mod url;

pub use api::{OpenWeatherClient, WeatherSource};
pub use config::Config;
pub use model::{CurrentWeather, Location, OneCallWeather};
pub use table::RenderedTable;
pub use units::{InvalidUnits, UnitSystem};
