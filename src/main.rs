//! Draw Steel sheet host
//!
//! Starts the sheet the way a UI shell does: loads configuration, opens the
//! local profile and reports what it found. Nothing is written until a user
//! action changes the sheet, so a stored record that could not be decoded is
//! left on disk as it was.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use drawsteel_sheet::infrastructure::config::AppConfig;
use drawsteel_sheet::infrastructure::state::AppState;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "drawsteel_sheet=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Draw Steel sheet");

    // Load configuration
    let config = AppConfig::from_env().context("Invalid configuration")?;
    tracing::info!("Configuration loaded");
    tracing::info!("  Character key: {}", config.character_key);
    tracing::info!("  Abilities key: {}", config.abilities_key);

    let state = AppState::new(config)?;
    let service = &state.sheet_service;

    let character = service.character();
    tracing::info!(
        name = %character.display_name(),
        class = %character.class_name,
        level = character.level,
        xp = character.xp,
        victories = character.victories,
        stamina = %format!("{}/{}", character.stamina_current, character.stamina_max),
        potencies = %format!(
            "{}/{}/{}",
            character.potencies.weak, character.potencies.average, character.potencies.strong
        ),
        abilities = service.abilities().len(),
        "Sheet ready"
    );

    Ok(())
}
