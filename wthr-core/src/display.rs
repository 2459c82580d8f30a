//! One-line terminal rendering of the current weather.

use console::{Style, style};

use crate::{condition::Condition, model::{CurrentWeather, Units}};

/// Width each centered text column is padded to.
const PADDING: usize = 20;

/// Render a single summary line.
///
/// When `styled` is false no escape sequences are emitted. Otherwise the city
/// is bold and reversed and the description takes its condition's color; each
/// styled segment resets the terminal right after itself.
pub fn render(weather: &CurrentWeather, units: Units, styled: bool) -> String {
    let condition = Condition::from_code(weather.condition_id);

    let city = style(format!("{:^PADDING$}", weather.city))
        .bold()
        .reverse()
        .force_styling(styled);

    let description_style = match condition.color() {
        Some(color) => Style::new().fg(color),
        None => Style::new(),
    }
    .force_styling(styled);
    let description =
        description_style.apply_to(format!("{:^PADDING$}", capitalize(&weather.description)));

    format!(
        "{city}\t{} {description} ({}{})",
        condition.symbol(),
        weather.temperature,
        units.temperature_suffix(),
    )
}

pub fn print(weather: &CurrentWeather, units: Units, styled: bool) {
    println!("{}", render(weather, units, styled));
}

/// Upper-case the first character and lower-case the rest.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
