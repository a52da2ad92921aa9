use anyhow::Context;
use chrono::{Datelike, Local};
use clap::{Parser, Subcommand};
use inquire::{Select, Text};
use skyview_core::{Config, ForecastSource, OpenMeteoClient, Theme, ViewState, refresh};
use tracing::debug;

use crate::render::render_screen;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skyview", version, about = "Current weather and five-day forecast for Rivne, UA")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set the city label and default theme.
    Configure,

    /// Fetch the forecast and show the screen (default).
    Show {
        /// Start from the night theme, whatever the configured default.
        #[arg(long)]
        night: bool,

        /// Print the fetched snapshot as JSON instead of the screen.
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Show { night: false, json: false }) {
            Command::Configure => configure(),
            Command::Show { night, json } => show(night, json).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut cfg = Config::load()?;

    let city = Text::new("City label:")
        .with_default(cfg.city_or_default())
        .prompt()
        .context("Failed to read city label")?;

    let themes = vec![Theme::Day, Theme::Night];
    let start = themes.iter().position(|t| *t == cfg.theme_or_default()).unwrap_or(0);
    let theme = Select::new("Default theme:", themes)
        .with_starting_cursor(start)
        .prompt()
        .context("Failed to read theme")?;

    cfg.city = Some(city.trim().to_string());
    cfg.theme = Some(theme);

    let path = cfg.save()?;
    println!("Saved configuration to {}", path.display());

    Ok(())
}

async fn show(night: bool, json: bool) -> anyhow::Result<()> {
    let cfg = Config::load()?;
    debug!(?cfg, "loaded configuration");

    let state = starting_view(&cfg, night);

    let client = OpenMeteoClient::new();

    if json {
        let snapshot = client.fetch().await?;
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    let state = refresh(&client, state).await;
    print!("{}", render_screen(&state, Local::now().weekday()));

    Ok(())
}

/// Screen state before the first fetch; `--night` overrides the configured theme.
fn starting_view(cfg: &Config, night: bool) -> ViewState {
    if night {
        ViewState::new(cfg.city_or_default(), Theme::Night)
    } else {
        cfg.initial_view()
    }
}
