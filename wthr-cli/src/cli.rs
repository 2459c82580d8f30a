use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::Parser;
use inquire::{Password, PasswordDisplayMode};
use tracing::{debug, info};
use wthr_core::{Secrets, Units, WeatherRequest, display, provider_from_secrets};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "wthr", version, about = "Current weather for a city")]
pub struct Cli {
    /// City name; several words are joined with spaces, e.g. `wthr new york`.
    #[arg(required_unless_present = "configure")]
    pub city: Vec<String>,

    /// Display the temperature in imperial units.
    #[arg(short, long)]
    pub imperial: bool,

    /// Path to the secrets file holding the API key.
    #[arg(long, value_name = "PATH")]
    pub secrets: Option<PathBuf>,

    /// Store an OpenWeather API key and exit.
    #[arg(long, conflicts_with_all = ["city", "imperial"])]
    pub configure: bool,

    /// Disable colors and text styling.
    #[arg(long)]
    pub no_color: bool,

    /// Log debug details to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let path = match self.secrets {
            Some(path) => path,
            None => Secrets::default_path()?,
        };
        debug!(path = %path.display(), "Using secrets file");

        if self.configure {
            return configure(&path);
        }

        let secrets = Secrets::load(&path)?;
        let provider = provider_from_secrets(&secrets)?;

        let units = Units::from_imperial_flag(self.imperial);
        let request = WeatherRequest::new(self.city, units);
        let weather = provider.current_weather(&request).await?;

        display::print(&weather, units, !self.no_color && console::colors_enabled());

        Ok(())
    }
}

/// Prompt for an API key and store it in the secrets file at `path`.
fn configure(path: &Path) -> anyhow::Result<()> {
    let mut secrets = Secrets::load(path)?;

    let key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let key = key.trim();
    if key.is_empty() {
        bail!("API key must not be empty");
    }

    secrets.set_api_key(key.to_string());
    secrets.save(path)?;

    info!(path = %path.display(), "Stored OpenWeather API key");
    println!("Saved OpenWeather API key to {}", path.display());

    Ok(())
}
