//! Board, deck and the marked-cell overlay, plus the seeded deal that builds them.
use hmac::{Hmac, Mac};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::collections::HashSet;
use thiserror::Error;

use crate::catalog::{Card, CardId, Catalog};
use crate::constants::{BOARD_SIZE, STREAM_BOARD, STREAM_DECK};

/// Reasons a hand-built layout is rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("board needs exactly {BOARD_SIZE} cards (got {0})")]
    BoardSize(usize),
    #[error("card {0} appears twice on the board")]
    DuplicateCard(CardId),
    #[error("deck is empty")]
    EmptyDeck,
}

/// The player's 3x3 grid in row-major order. Never changes after the deal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Vec<Card>,
}

impl Board {
    /// Build a board from exactly nine distinct cards.
    ///
    /// # Errors
    ///
    /// Returns an error for a wrong cell count or a repeated card id.
    pub fn from_cards(cells: Vec<Card>) -> Result<Self, LayoutError> {
        if cells.len() != BOARD_SIZE {
            return Err(LayoutError::BoardSize(cells.len()));
        }
        let mut seen = HashSet::with_capacity(BOARD_SIZE);
        if let Some(dup) = cells.iter().find(|card| !seen.insert(card.id)) {
            return Err(LayoutError::DuplicateCard(dup.id));
        }
        Ok(Self { cells })
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cells.get(index)
    }

    /// Cell holding the card with `id`, if it is on the board.
    #[must_use]
    pub fn position_of(&self, id: CardId) -> Option<usize> {
        self.cells.iter().position(|card| card.id == id)
    }

    #[must_use]
    pub fn cells(&self) -> &[Card] {
        &self.cells
    }
}

/// Caller order for one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Wrap a caller order. Any non-empty order is accepted so rounds can be replayed.
    ///
    /// # Errors
    ///
    /// Returns an error if `cards` is empty.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, LayoutError> {
        if cards.is_empty() {
            return Err(LayoutError::EmptyDeck);
        }
        Ok(Self { cards })
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Index of the last card; the caller never moves past it.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.cards.len().saturating_sub(1)
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// Set of marked board cells, stored as a bitmask over cells 0..9.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Marks(u16);

impl Marks {
    const FULL: u16 = (1 << BOARD_SIZE) - 1;

    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Mark a cell. Returns `false` when the index is off the board or already marked.
    pub fn insert(&mut self, index: usize) -> bool {
        if index >= BOARD_SIZE || self.contains(index) {
            return false;
        }
        self.0 |= 1 << index;
        true
    }

    #[must_use]
    pub const fn contains(self, index: usize) -> bool {
        index < BOARD_SIZE && self.0 & (1 << index) != 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Every cell is marked (blackout).
    #[must_use]
    pub const fn is_full(self) -> bool {
        self.0 & Self::FULL == Self::FULL
    }

    #[must_use]
    pub const fn contains_all(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..BOARD_SIZE).filter(move |idx| self.contains(*idx))
    }
}

impl FromIterator<usize> for Marks {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut marks = Self::empty();
        for index in iter {
            marks.insert(index);
        }
        marks
    }
}

/// Deal a board and a deck from two independent streams derived from `round_seed`.
#[must_use]
pub fn deal(catalog: &Catalog, round_seed: u64) -> (Board, Deck) {
    let mut board_rng = ChaCha8Rng::seed_from_u64(derive_stream_seed(round_seed, STREAM_BOARD));
    let mut deck_rng = ChaCha8Rng::seed_from_u64(derive_stream_seed(round_seed, STREAM_DECK));

    let mut board_cards = catalog.cards().to_vec();
    board_cards.shuffle(&mut board_rng);
    board_cards.truncate(BOARD_SIZE);

    let mut deck_cards = catalog.cards().to_vec();
    deck_cards.shuffle(&mut deck_rng);

    (Board { cells: board_cards }, Deck { cards: deck_cards })
}

fn derive_stream_seed(round_seed: u64, domain_tag: &[u8]) -> u64 {
    let mut mac = Hmac::<Sha256>::new_from_slice(&round_seed.to_le_bytes())
        .expect("64-bit seed is valid key");
    mac.update(domain_tag);
    let digest = mac.finalize().into_bytes();
    let seed_bytes: [u8; 8] = digest[..8].try_into().expect("digest slice length");
    u64::from_le_bytes(seed_bytes)
}
