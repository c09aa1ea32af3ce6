use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Text};
use uvcast_core::{
    Config, Coordinates, ProviderId, compute_weather_and_uv,
    provider::{uv_source_from_config, weather_source_from_config},
    recommendations, safe_exposure,
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "uvcast", version, about = "Weather and UV protection advice")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configure credentials for a specific provider.
    Configure {
        /// Provider short name, e.g. "openuv" or "open-meteo".
        provider: String,
    },

    /// Show weather and UV advice for a location.
    Show {
        /// Coordinates as "lat, lon", e.g. "52.52, 13.41".
        #[arg(allow_hyphen_values = true)]
        coordinates: Coordinates,

        /// Print the full result as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Show protection advice for a UV index, without any network access.
    Advise {
        /// UV index value.
        #[arg(allow_hyphen_values = true)]
        uv_index: f64,

        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure { provider } => configure(&provider),
            Command::Show { coordinates, json } => show(coordinates, json).await,
            Command::Advise { uv_index, json } => {
                advise(uv_index, json);
                Ok(())
            }
        }
    }
}

fn configure(provider: &str) -> anyhow::Result<()> {
    let id = ProviderId::try_from(provider)?;
    let mut config = Config::load()?;

    if id.requires_api_key() {
        let api_key = Password::new(&format!("API key for {id}:"))
            .with_display_mode(PasswordDisplayMode::Masked)
            .without_confirmation()
            .prompt()
            .context("Failed to read API key")?;

        if api_key.trim().is_empty() {
            return Err(anyhow!("API key must not be empty"));
        }
        config.upsert_provider_api_key(id, api_key.trim().to_string());
    }

    let current = config.provider_base_url(id).unwrap_or_default().to_string();
    let base_url = Text::new(&format!("Base URL for {id} (leave empty for the public endpoint):"))
        .with_initial_value(&current)
        .prompt()
        .context("Failed to read base URL")?;

    if !base_url.trim().is_empty() {
        config.set_provider_base_url(id, base_url.trim().to_string());
    } else if let Some(cfg) = config.providers.get_mut(id.as_str()) {
        cfg.base_url = None;
    }

    config.save()?;
    println!(
        "Saved configuration for {id} to {}",
        Config::config_file_path()?.display()
    );

    Ok(())
}

async fn show(coordinates: Coordinates, json: bool) -> anyhow::Result<()> {
    let config = Config::load()?;
    let weather = weather_source_from_config(&config);
    let uv = uv_source_from_config(&config);

    let result = compute_weather_and_uv(&weather, &uv, coordinates)
        .await
        .map_err(|e| anyhow!("{}\n({e})", e.user_message()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render::weather_and_uv(&coordinates, &result));
    }

    Ok(())
}

fn advise(uv_index: f64, json: bool) {
    let bundle = recommendations(uv_index);
    let exposure = safe_exposure(uv_index);

    if json {
        let value = serde_json::json!({
            "uvIndex": uv_index,
            "safeExposure": exposure,
            "recommendations": bundle,
        });
        println!("{value:#}");
    } else {
        print!("{}", render::advice(uv_index, &exposure, &bundle));
    }
}
