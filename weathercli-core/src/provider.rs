use crate::{Config, WeatherQuery, WeatherRecord, error::FetchError};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

pub use openweather::OpenWeatherFetcher;

/// Retrieves current conditions for a query.
#[async_trait]
pub trait WeatherFetcher: Send + Sync + Debug {
    async fn fetch(&self, query: &WeatherQuery) -> Result<WeatherRecord, FetchError>;
}

/// Construct the OpenWeather fetcher from config.
pub fn fetcher_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherFetcher>> {
    let api_key = config.api_key()?;

    let fetcher = OpenWeatherFetcher::new(api_key.to_owned(), config.timeout())?;
    let fetcher = match config.base_url.as_deref() {
        Some(url) => fetcher.with_base_url(url),
        None => fetcher,
    };

    Ok(Box::new(fetcher))
}
