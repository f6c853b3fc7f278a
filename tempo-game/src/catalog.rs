//! Static card catalog.
//!
//! The catalog JSON follows the deck generator's output: an array of
//! `{ "id", "nombre", "categoria", "visual_prompt_description" }` records.
//! Images are not stored in the JSON; they live at `/deck/{id}.png`.
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;
use thiserror::Error;

use crate::constants::{BOARD_SIZE, BUILTIN_DECK_JSON, CARD_IMAGE_PREFIX};

pub type CardId = u32;

/// Which race surface a card belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(alias = "road")]
    Road,
    #[serde(alias = "trail")]
    Trail,
    #[serde(rename = "Ambos", alias = "Both", alias = "both")]
    Both,
}

impl Category {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Road => "Road",
            Self::Trail => "Trail",
            Self::Both => "Ambos",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    #[serde(rename = "nombre", alias = "title")]
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(rename = "categoria", alias = "category")]
    pub category: Category,
}

impl Card {
    /// Build a card whose image follows the `/deck/{id}.png` convention.
    #[must_use]
    pub fn new(id: CardId, title: impl Into<String>, category: Category) -> Self {
        Self {
            id,
            title: title.into(),
            image: default_image(id),
            category,
        }
    }
}

fn default_image(id: CardId) -> String {
    format!("{CARD_IMAGE_PREFIX}{id}.png")
}

/// Reasons a catalog cannot back a game.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog JSON invalid: {0}")]
    Json(String),
    #[error("catalog needs at least {needed} cards to fill a board (got {found})")]
    TooFewCards { needed: usize, found: usize },
    #[error("card id {0} appears more than once")]
    DuplicateId(CardId),
}

/// Validated, ordered collection of every card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    cards: Vec<Card>,
}

impl Catalog {
    /// Validate and wrap a list of cards, filling in missing image references.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than nine cards are supplied or an id repeats.
    pub fn new(mut cards: Vec<Card>) -> Result<Self, CatalogError> {
        if cards.len() < BOARD_SIZE {
            return Err(CatalogError::TooFewCards {
                needed: BOARD_SIZE,
                found: cards.len(),
            });
        }
        let mut seen = HashSet::with_capacity(cards.len());
        for card in &mut cards {
            if !seen.insert(card.id) {
                return Err(CatalogError::DuplicateId(card.id));
            }
            if card.image.trim().is_empty() {
                card.image = default_image(card.id);
            }
        }
        Ok(Self { cards })
    }

    /// Parse a catalog from the deck JSON format.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed or fails validation.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let cards: Vec<Card> =
            serde_json::from_str(json).map_err(|err| CatalogError::Json(err.to_string()))?;
        Self::new(cards)
    }

    /// The embedded "Road & Trail" deck.
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded asset is malformed.
    pub fn builtin() -> Result<Self, CatalogError> {
        static BUILTIN: OnceLock<Result<Catalog, CatalogError>> = OnceLock::new();
        BUILTIN
            .get_or_init(|| Self::from_json(BUILTIN_DECK_JSON))
            .clone()
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Card at a catalog position, wrapping in both directions.
    #[must_use]
    pub fn wrapping_at(&self, position: isize) -> &Card {
        let len = isize::try_from(self.cards.len()).unwrap_or(isize::MAX);
        let idx = usize::try_from(position.rem_euclid(len)).unwrap_or(0);
        &self.cards[idx]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(count: u32) -> Vec<Card> {
        (1..=count)
            .map(|id| Card::new(id, format!("CARTA {id}"), Category::Road))
            .collect()
    }

    #[test]
    fn parses_generator_format() {
        let json = r#"[
            { "id": 7, "nombre": "EL GEL", "categoria": "Ambos", "visual_prompt_description": "x" },
            { "id": 8, "title": "LA META", "category": "Trail" }
        ]"#;
        let cards: Vec<Card> = serde_json::from_str(json).unwrap();
        assert_eq!(cards[0].title, "EL GEL");
        assert_eq!(cards[0].category, Category::Both);
        assert_eq!(cards[1].category, Category::Trail);
        assert!(cards[0].image.is_empty());
    }

    #[test]
    fn new_fills_images_and_rejects_duplicates() {
        let mut cards = sample(9);
        cards[3].image.clear();
        let catalog = Catalog::new(cards).unwrap();
        assert_eq!(catalog.get(4).unwrap().image, "/deck/4.png");

        let mut dup = sample(10);
        dup[9].id = 2;
        assert_eq!(Catalog::new(dup), Err(CatalogError::DuplicateId(2)));
    }

    #[test]
    fn too_small_catalog_is_rejected() {
        assert_eq!(
            Catalog::new(sample(8)),
            Err(CatalogError::TooFewCards {
                needed: 9,
                found: 8
            })
        );
    }

    #[test]
    fn wrapping_lookup_cycles() {
        let catalog = Catalog::new(sample(9)).unwrap();
        assert_eq!(catalog.wrapping_at(0).id, 1);
        assert_eq!(catalog.wrapping_at(9).id, 1);
        assert_eq!(catalog.wrapping_at(-1).id, 9);
    }

    #[test]
    fn builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 54);
        assert!(catalog.iter().all(|card| card.image.ends_with(".png")));
    }
}
