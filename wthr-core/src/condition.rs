//! Mapping from OpenWeather condition codes to display attributes.
//!
//! See <https://openweathermap.org/weather-conditions> for the code groups.

use std::ops::Range;

use console::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Atmosphere,
    Clear,
    Cloudy,
    Unknown,
}

/// Checked in order, first match wins.
const CODE_RANGES: &[(Range<i64>, Condition)] = &[
    (200..300, Condition::Thunderstorm),
    (300..400, Condition::Drizzle),
    (500..600, Condition::Rain),
    (600..700, Condition::Snow),
    (700..800, Condition::Atmosphere),
    (800..801, Condition::Clear),
    (801..900, Condition::Cloudy),
];

impl Condition {
    /// Classify a condition code. Codes outside every known group map to
    /// [`Condition::Unknown`].
    pub fn from_code(code: i64) -> Self {
        CODE_RANGES
            .iter()
            .find(|(range, _)| range.contains(&code))
            .map(|(_, condition)| *condition)
            .unwrap_or(Condition::Unknown)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Condition::Thunderstorm => "💥",
            Condition::Drizzle => "💧",
            Condition::Rain => "💦",
            Condition::Snow => "⛄️",
            Condition::Atmosphere => "🌀",
            Condition::Clear => "🔆",
            Condition::Cloudy => "💨",
            Condition::Unknown => "🌈",
        }
    }

    /// Foreground color for the description, `None` keeps the terminal default.
    pub fn color(&self) -> Option<Color> {
        match self {
            Condition::Thunderstorm => Some(Color::Red),
            Condition::Drizzle => Some(Color::Cyan),
            Condition::Rain | Condition::Atmosphere => Some(Color::Blue),
            Condition::Snow | Condition::Cloudy => Some(Color::White),
            Condition::Clear => Some(Color::Yellow),
            Condition::Unknown => None,
        }
    }
}
