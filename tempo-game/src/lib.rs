//! Tempo Game Engine
//!
//! Platform-agnostic core of the Tempo caller game: a shuffled deck is called
//! out on a shrinking timer while the player marks matches on a 3x3 board.
//! This crate has no UI or platform dependencies; drivers feed it time and taps
//! and render its [`Snapshot`].

pub mod board;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod lines;
pub mod loader;
pub mod notice;
pub mod scheduler;
pub mod seed;
pub mod session;
pub mod snapshot;

use anyhow::Context;

pub use board::{Board, Deck, LayoutError, Marks, deal};
pub use catalog::{Card, CardId, Catalog, CatalogError, Category};
pub use config::{ConfigError, TempoConfig, caller_duration};
pub use lines::{LineId, NewLines, record_new_lines};
pub use loader::{BuiltinLoader, LoaderError};
pub use notice::{Notice, NoticeKind, NoticeSink, Severity};
pub use scheduler::{ScheduledTask, Scheduler, TaskKind};
pub use seed::{
    decode_to_seed, encode_friendly, generate_code_from_entropy, round_seed_from_entropy,
};
pub use session::{GameSession, LineCheck, SessionState, TapOutcome};
pub use snapshot::{CellView, Outcome, Snapshot, Tally};

/// Trait for abstracting data loading operations
/// Platform-specific implementations should provide this
pub trait DataLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the card catalog from the platform-specific source
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded or fails validation.
    fn load_catalog(&self) -> Result<Catalog, Self::Error>;

    /// Load configuration data for a specific system
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or parsed.
    fn load_config<T>(&self, config_name: &str) -> Result<T, Self::Error>
    where
        T: serde::de::DeserializeOwned;
}

/// Builds sessions from whatever a [`DataLoader`] supplies.
pub struct GameEngine<L>
where
    L: DataLoader,
{
    data_loader: L,
}

impl<L> GameEngine<L>
where
    L: DataLoader,
{
    pub const fn new(data_loader: L) -> Self {
        Self { data_loader }
    }

    /// Load and validate the session tuning.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or is out of range.
    pub fn load_config(&self) -> anyhow::Result<TempoConfig> {
        let config: TempoConfig = self
            .data_loader
            .load_config(constants::CONFIG_NAME)
            .context("loading tempo config")?;
        config.validate().context("validating tempo config")?;
        Ok(config)
    }

    /// Create a session for `seed` with its first round already started.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog or configuration cannot be loaded.
    pub fn create_session(&self, seed: u64) -> anyhow::Result<GameSession> {
        let catalog = self
            .data_loader
            .load_catalog()
            .context("loading card catalog")?;
        let config = self.load_config()?;
        Ok(GameSession::new(catalog, config, seed)?)
    }

    /// Create a session and replace its first round with the one a share code names.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails or `code` is not a valid share code.
    pub fn create_session_from_code(&self, code: &str) -> anyhow::Result<GameSession> {
        let round_seed =
            decode_to_seed(code).with_context(|| format!("invalid share code {code:?}"))?;
        let mut session = self.create_session(round_seed)?;
        session.start_game_with_seed(round_seed);
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::de::DeserializeOwned;
    use std::convert::Infallible;

    #[derive(Clone, Copy, Default)]
    struct FixtureLoader;

    impl DataLoader for FixtureLoader {
        type Error = Infallible;

        fn load_catalog(&self) -> Result<Catalog, Self::Error> {
            let cards = (1..=12)
                .map(|id| Card::new(id, format!("CARTA {id}"), Category::Both))
                .collect();
            Ok(Catalog::new(cards).unwrap())
        }

        fn load_config<T>(&self, _config_name: &str) -> Result<T, Self::Error>
        where
            T: DeserializeOwned,
        {
            Ok(serde_json::from_str(r#"{ "starting_lives": 5 }"#).unwrap())
        }
    }

    #[test]
    fn engine_builds_sessions_from_loader() {
        let engine = GameEngine::new(FixtureLoader);
        let session = engine.create_session(0xABCD).unwrap();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.lives, 5);
        assert_eq!(snapshot.deck_len, 12);
        assert_eq!(snapshot.cells.len(), 9);
        assert_eq!(snapshot.outcome, Outcome::InProgress);
    }

    #[test]
    fn share_code_session_replays_the_named_round() {
        let engine = GameEngine::new(BuiltinLoader);
        let code = generate_code_from_entropy(77);
        let a = engine.create_session_from_code(&code).unwrap();
        let b = engine.create_session_from_code(&code.to_lowercase()).unwrap();
        assert_eq!(a.share_code().as_deref(), Some(code.as_str()));
        assert_eq!(a.state().board, b.state().board);
        assert_eq!(a.state().deck, b.state().deck);
        assert!(engine.create_session_from_code("XX-NOPE00").is_err());
    }
}
