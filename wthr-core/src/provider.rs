use crate::{CurrentWeather, WeatherRequest, config::Secrets, query::QueryError};
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

pub mod openweather;

pub use openweather::OpenWeatherProvider;

/// Ways a single weather lookup can fail. None of them are retried.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Access denied. Check your API key.")]
    Unauthorized,

    #[error("Can't find weather data for this city.")]
    CityNotFound,

    #[error("Something went wrong... (HTTP {0})")]
    Status(u16),

    #[error("Could not reach the weather service")]
    Transport(#[source] reqwest::Error),

    #[error("Couldn't read the server response: {0}")]
    Malformed(String),

    #[error(transparent)]
    Query(#[from] QueryError),
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, request: &WeatherRequest)
    -> Result<CurrentWeather, FetchError>;
}

/// Construct the OpenWeather provider from the credentials file contents.
pub fn provider_from_secrets(secrets: &Secrets) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = secrets.api_key()?;

    let provider = match secrets.base_url() {
        Some(base) => OpenWeatherProvider::new(api_key.to_owned()).with_base_url(base),
        None => OpenWeatherProvider::new(api_key.to_owned()),
    };

    Ok(Box::new(provider))
}
