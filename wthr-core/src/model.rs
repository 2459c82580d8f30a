use std::fmt;

use serde::{Deserialize, Serialize};

/// Temperature unit system requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    pub fn from_imperial_flag(imperial: bool) -> Self {
        if imperial { Units::Imperial } else { Units::Metric }
    }

    /// Value of the `units` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    pub fn temperature_suffix(&self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherRequest {
    /// City name as typed, one entry per word.
    pub city: Vec<String>,
    pub units: Units,
}

impl WeatherRequest {
    pub fn new(city: Vec<String>, units: Units) -> Self {
        Self { city, units }
    }

    pub fn city_name(&self) -> String {
        self.city.join(" ")
    }
}

/// Current conditions for a single place, as returned by the fetcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub city: String,
    pub condition_id: i64,
    pub description: String,
    pub temperature: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_follow_imperial_flag() {
        assert_eq!(Units::from_imperial_flag(false), Units::Metric);
        assert_eq!(Units::from_imperial_flag(true), Units::Imperial);
        assert_eq!(Units::default(), Units::Metric);
    }

    #[test]
    fn units_tokens_and_suffixes() {
        assert_eq!(Units::Metric.as_str(), "metric");
        assert_eq!(Units::Imperial.as_str(), "imperial");
        assert_eq!(Units::Metric.temperature_suffix(), "°C");
        assert_eq!(Units::Imperial.temperature_suffix(), "°F");
    }

    #[test]
    fn city_name_joins_tokens_with_spaces() {
        let req = WeatherRequest::new(
            vec!["Rio".into(), "de".into(), "Janeiro".into()],
            Units::Metric,
        );
        assert_eq!(req.city_name(), "Rio de Janeiro");
    }
}
