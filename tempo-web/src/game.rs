//! Web-specific game engine implementation
//!
//! This module provides the browser's [`DataLoader`] and re-exports the core
//! game types.

use serde::de::DeserializeOwned;

// Re-export all types from tempo-game
pub use tempo_game::*;

const TEMPO_CONFIG_JSON: &str = include_str!("../static/config/tempo.json");

/// Web data loader serving the embedded deck and static config files.
pub struct WebDataLoader;

#[derive(Debug, thiserror::Error)]
pub enum WebDataError {
    #[error("Unknown config: {0}")]
    UnknownConfig(String),
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DataLoader for WebDataLoader {
    type Error = WebDataError;

    fn load_catalog(&self) -> Result<Catalog, Self::Error> {
        Ok(Catalog::builtin()?)
    }

    fn load_config<T>(&self, config_name: &str) -> Result<T, Self::Error>
    where
        T: DeserializeOwned,
    {
        let json = match config_name {
            "tempo" => TEMPO_CONFIG_JSON,
            _ => return Err(WebDataError::UnknownConfig(config_name.to_string())),
        };
        serde_json::from_str(json).map_err(WebDataError::Json)
    }
}

/// Create a web-compatible game engine with `WebDataLoader`
#[must_use]
pub const fn create_web_game_engine() -> GameEngine<WebDataLoader> {
    GameEngine::new(WebDataLoader)
}

/// Build a session for the game page.
///
/// A share code replays its round; otherwise `seed` starts a fresh one. Load
/// failures are logged and fall back to the built-in deck and default tuning.
#[must_use]
pub fn load_session(seed: u64, code: Option<&str>) -> GameSession {
    let engine = create_web_game_engine();
    let loaded = match code {
        Some(code) => engine.create_session_from_code(code),
        None => engine.create_session(seed),
    };
    match loaded {
        Ok(session) => session,
        Err(err) => {
            log::error!("falling back to built-in session: {err:#}");
            fallback_session(seed)
        }
    }
}

fn fallback_session(seed: u64) -> GameSession {
    let catalog = Catalog::builtin().expect("embedded deck is validated by tests");
    GameSession::with_defaults(catalog, seed)
}
