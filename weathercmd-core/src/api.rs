//! HTTP access to OpenWeather and Nominatim.
//!
//! The [`WeatherSource`] trait is the seam between orchestration and the
//! network, so commands can be exercised against a stub in tests.

use std::fmt::Debug;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;

use crate::model::{CurrentWeather, Location, OneCallWeather};

pub const LOCATION_BASE_URL: &str = "https://nominatim.openstreetmap.org/search";

#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    /// Fetch and parse a `/weather` response from a fully-built URL.
    async fn current_weather(&self, url: &str) -> Result<CurrentWeather>;

    /// Fetch and parse a `/onecall` response from a fully-built URL.
    async fn one_call_weather(&self, url: &str) -> Result<OneCallWeather>;

    /// Resolve a free-form place descriptor to coordinates and a display name.
    async fn resolve_location(
        &self,
        city_zip: &str,
        state_code: Option<&str>,
        country_code: Option<&str>,
    ) -> Result<Location>;
}

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    http: Client,
}

impl OpenWeatherClient {
    pub fn new() -> Result<Self> {
        // Nominatim rejects requests without an identifying User-Agent.
        let http = Client::builder()
            .user_agent(concat!("weathercmd/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http })
    }

    async fn get_body(&self, url: &str, what: &str) -> Result<String> {
        let res = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to send {what} request"))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .with_context(|| format!("Failed to read {what} response body"))?;

        if !status.is_success() {
            return Err(anyhow!(
                "{what} request failed with status {status}: {}",
                truncate_body(&body),
            ));
        }

        Ok(body)
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherClient {
    async fn current_weather(&self, url: &str) -> Result<CurrentWeather> {
        let body = self.get_body(url, "current weather").await?;
        serde_json::from_str(&body).context("Failed to parse current weather JSON")
    }

    async fn one_call_weather(&self, url: &str) -> Result<OneCallWeather> {
        let body = self.get_body(url, "forecast").await?;
        serde_json::from_str(&body).context("Failed to parse forecast JSON")
    }

    async fn resolve_location(
        &self,
        city_zip: &str,
        state_code: Option<&str>,
        country_code: Option<&str>,
    ) -> Result<Location> {
        let mut query = city_zip.to_string();
        if let Some(state_code) = state_code {
            query = format!("{query},{state_code}");
        }
        if let Some(country_code) = country_code {
            query = format!("{query},{country_code}");
        }

        let url = format!("{LOCATION_BASE_URL}?q={query}&format=json");
        let body = self.get_body(&url, "location lookup").await?;

        let hits: Vec<Location> =
            serde_json::from_str(&body).context("Failed to parse location JSON")?;

        hits.into_iter()
            .next()
            .ok_or_else(|| anyhow!("No location found for '{city_zip}'"))
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
