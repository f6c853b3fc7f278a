//! Centralized tuning constants for the Tempo caller loop.
//!
//! These values define the deterministic difficulty ramp and penalty policy.
//! `TempoConfig` defaults to them; JSON overrides are validated against the
//! same shape.

// Board geometry -----------------------------------------------------------
pub const BOARD_SIDE: usize = 3;
pub const BOARD_SIZE: usize = BOARD_SIDE * BOARD_SIDE;

// Lives --------------------------------------------------------------------
pub const STARTING_LIVES: u8 = 3;

// Caller timer ramp ----------------------------------------------------------
pub const BASE_DURATION_MS: u32 = 10_000;
pub const DURATION_STEP_MS: u32 = 150;
pub const MIN_DURATION_MS: u32 = 3_500;

// Visual feedback delays -----------------------------------------------------
pub const FEEDBACK_DELAY_MS: u32 = 500;
pub const SHAKE_MS: u32 = 500;

// Catalog --------------------------------------------------------------------
pub(crate) const BUILTIN_DECK_JSON: &str = include_str!("../assets/deck.json");
pub(crate) const CARD_IMAGE_PREFIX: &str = "/deck/";
pub(crate) const CONFIG_NAME: &str = "tempo";

// RNG domain tags ------------------------------------------------------------
pub(crate) const STREAM_BOARD: &[u8] = b"tempo.board";
pub(crate) const STREAM_DECK: &[u8] = b"tempo.deck";

// Notice copy ----------------------------------------------------------------
pub(crate) const MSG_WRONG_CARD: &str = "¡Carta incorrecta! Pierdes una vida.";
pub(crate) const MSG_LINE_COMPLETE: &str = "¡Línea completada! ¡Sigue así! 👏";
pub(crate) const MSG_WAIT_HINT: &str = "Toca la carta o pulsa SIGUIENTE si no la tienes.";
