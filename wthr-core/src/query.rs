use thiserror::Error;
use url::Url;

use crate::model::Units;

/// OpenWeather "current weather by city name" endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Invalid weather endpoint '{base}'")]
    InvalidBaseUrl {
        base: String,
        #[source]
        source: url::ParseError,
    },
}

/// Build the request target for a city lookup.
///
/// Tokens are joined with single spaces and form-encoded into `q`, followed
/// by `units` and `appid`. The city text itself is not validated.
pub fn build_query_url<S: AsRef<str>>(
    base_url: &str,
    city: &[S],
    units: Units,
    api_key: &str,
) -> Result<Url, QueryError> {
    let city = city.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" ");

    Url::parse_with_params(
        base_url,
        &[("q", city.as_str()), ("units", units.as_str()), ("appid", api_key)],
    )
    .map_err(|source| QueryError::InvalidBaseUrl { base: base_url.to_string(), source })
}
