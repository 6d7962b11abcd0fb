use crate::{CardId, RngState, MAX_CATALOG_CARDS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound on cards dealt by one draw, regardless of deck size.
pub const MAX_DRAW: usize = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("cannot draw {requested} cards: {remaining} remaining, at most {cap} per draw")]
    InsufficientCards {
        requested: usize,
        remaining: usize,
        cap: usize,
    },
    #[error("draw count must be at least 1")]
    InvalidDrawCount,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeckInfo {
    pub total: usize,
    pub remaining: usize,
}

impl DeckInfo {
    pub fn drawn(&self) -> usize {
        self.total - self.remaining
    }
}

/// Cards not yet drawn this cycle. Index 0 is the top of the deck.
#[derive(Debug, Clone)]
pub struct Deck {
    total: usize,
    cap: usize,
    cards: Vec<CardId>,
    rng: RngState,
}

impl Deck {
    /// Builds a full, shuffled deck over `total` catalog cards.
    pub fn new(total: usize, rng: RngState) -> Self {
        Self::with_cap(total, MAX_DRAW, rng)
    }

    /// Like [`Deck::new`] with a lower per-draw cap. The cap never exceeds
    /// [`MAX_DRAW`] and the deck never holds more than [`MAX_CATALOG_CARDS`].
    pub fn with_cap(total: usize, cap: usize, rng: RngState) -> Self {
        if total > MAX_CATALOG_CARDS {
            log::warn!("deck of {total} cards clamped to {MAX_CATALOG_CARDS}");
        }
        let mut deck = Self {
            total: total.min(MAX_CATALOG_CARDS),
            cap: cap.clamp(1, MAX_DRAW),
            cards: Vec::new(),
            rng,
        };
        deck.reset();
        deck
    }

    pub fn reset(&mut self) {
        self.cards.clear();
        self.cards
            .extend((0..=u16::MAX).take(self.total).map(CardId));
        self.rng.shuffle(&mut self.cards);
    }

    pub fn draw(&mut self, count: usize) -> Result<Vec<CardId>, DeckError> {
        if count == 0 {
            return Err(DeckError::InvalidDrawCount);
        }
        if count > self.cap || count > self.cards.len() {
            return Err(DeckError::InsufficientCards {
                requested: count,
                remaining: self.cards.len(),
                cap: self.cap,
            });
        }
        Ok(self.cards.drain(..count).collect())
    }

    pub fn info(&self) -> DeckInfo {
        DeckInfo {
            total: self.total,
            remaining: self.cards.len(),
        }
    }

    pub fn cap(&self) -> usize {
        self.cap
    }
}
