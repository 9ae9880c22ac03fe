use std::{fmt, time::Duration};

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{
    error::FetchError,
    model::{WeatherQuery, WeatherRecord},
};

use super::WeatherFetcher;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

#[derive(Clone)]
pub struct OpenWeatherFetcher {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherFetcher {
    pub fn new(api_key: String, timeout: Duration) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Client(Box::new(e)))?;

        Ok(Self { api_key, base_url: DEFAULT_BASE_URL.to_owned(), http })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl fmt::Debug for OpenWeatherFetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenWeatherFetcher")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl WeatherFetcher for OpenWeatherFetcher {
    async fn fetch(&self, query: &WeatherQuery) -> Result<WeatherRecord, FetchError> {
        debug!(query = %query.query_string(), url = %self.base_url, "requesting current weather");

        let mut params = query.pairs();
        params.push(("appid", self.api_key.as_str()));

        let res = self
            .http
            .get(&self.base_url)
            .query(&params)
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        decode_response(status.as_u16(), &body)
    }
}

/// Turn a status code and body into a record or the matching error.
pub fn decode_response(status: u16, body: &str) -> Result<WeatherRecord, FetchError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<OwErrorBody>(body)
            .ok()
            .and_then(|e| e.message)
            .unwrap_or_else(|| truncate_body(body));

        debug!(status, %message, "OpenWeather request failed");
        return Err(FetchError::Service { status, message });
    }

    let parsed: OwCurrentResponse = serde_json::from_str(body)?;
    debug!(?parsed, "decoded OpenWeather response");

    Ok(parsed.into())
}

#[derive(Debug, Deserialize)]
struct OwErrorBody {
    message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct OwMain {
    temp: Option<f64>,
    feels_like: Option<f64>,
    temp_min: Option<f64>,
    temp_max: Option<f64>,
    humidity: Option<u8>,
    sea_level: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct OwWind {
    speed: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct OwClouds {
    all: Option<u8>,
}

#[derive(Debug, Default, Deserialize)]
struct OwSys {
    country: Option<String>,
}

/// Current-weather payload. Sections are optional so a partial answer still
/// decodes; a wrong type anywhere is a decode error.
#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: Option<String>,
    #[serde(default)]
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
    #[serde(default)]
    wind: OwWind,
    #[serde(default)]
    clouds: OwClouds,
    #[serde(default)]
    sys: OwSys,
}

impl From<OwCurrentResponse> for WeatherRecord {
    fn from(res: OwCurrentResponse) -> Self {
        WeatherRecord {
            country: res.sys.country,
            name: res.name,
            temp: res.main.temp,
            feels_like: res.main.feels_like,
            temp_max: res.main.temp_max,
            temp_min: res.main.temp_min,
            condition: res.weather.into_iter().next().and_then(|w| w.main),
            wind_speed: res.wind.speed,
            clouds: res.clouds.all,
            humidity: res.main.humidity,
            sea_level: res.main.sea_level,
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
