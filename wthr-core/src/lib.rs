//! Core library for the `wthr` CLI.
//!
//! This crate defines:
//! - Credentials handling
//! - Query URL construction
//! - The OpenWeather provider and its error taxonomy
//! - Condition code mapping and terminal rendering
//!
//! It is used by `wthr-cli`, but nothing in here reads process arguments or
//! global state, so it can be driven from tests or other binaries.

pub mod condition;
pub mod config;
pub mod display;
pub mod model;
pub mod provider;
pub mod query;

pub use condition::Condition;
pub use config::{OpenWeatherSecrets, Secrets};
pub use model::{CurrentWeather, Units, WeatherRequest};
pub use provider::{FetchError, OpenWeatherProvider, WeatherProvider, provider_from_secrets};
pub use query::{DEFAULT_BASE_URL, QueryError, build_query_url};
