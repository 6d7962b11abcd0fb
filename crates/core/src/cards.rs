use crate::card_slug;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Largest catalog a [`CardId`] can address.
pub const MAX_CATALOG_CARDS: usize = u16::MAX as usize + 1;

/// Position of a card inside its catalog.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub u16);

impl CardId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Card {
    pub name: String,
    pub meaning: String,
    pub slug: String,
}

impl Card {
    pub fn new(name: impl Into<String>, meaning: impl Into<String>) -> Self {
        let name = name.into();
        let slug = card_slug(&name);
        Self {
            name,
            meaning: meaning.into(),
            slug,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog has no cards")]
    Empty,
    #[error("duplicate card name: {0}")]
    DuplicateName(String),
    #[error("card name is blank at entry {0}")]
    BlankName(usize),
    #[error("card {0:?} has no usable image slug")]
    EmptySlug(String),
    #[error("cards {first:?} and {second:?} share image slug {slug:?}")]
    DuplicateSlug {
        first: String,
        second: String,
        slug: String,
    },
    #[error("catalog is limited to {max} cards, got {got}")]
    TooLarge { max: usize, got: usize },
}

/// Immutable, validated card list. Order is the load order.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub title: String,
    pub description: String,
    cards: Vec<Card>,
}

impl Catalog {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        entries: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Self, CatalogError> {
        let mut cards = Vec::new();
        let mut names = HashSet::new();
        let mut by_slug: HashMap<String, usize> = HashMap::new();
        for (idx, (name, meaning)) in entries.into_iter().enumerate() {
            if name.trim().is_empty() {
                return Err(CatalogError::BlankName(idx));
            }
            if names.contains(&name) {
                return Err(CatalogError::DuplicateName(name));
            }
            let card = Card::new(name, meaning);
            if card.slug.is_empty() {
                return Err(CatalogError::EmptySlug(card.name));
            }
            if let Some(&other) = by_slug.get(&card.slug) {
                let first: &Card = &cards[other];
                return Err(CatalogError::DuplicateSlug {
                    first: first.name.clone(),
                    second: card.name,
                    slug: first.slug.clone(),
                });
            }
            if cards.len() >= MAX_CATALOG_CARDS {
                return Err(CatalogError::TooLarge {
                    max: MAX_CATALOG_CARDS,
                    got: cards.len() + 1,
                });
            }
            by_slug.insert(card.slug.clone(), cards.len());
            names.insert(card.name.clone());
            cards.push(card);
        }
        if cards.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self {
            title: title.into(),
            description: description.into(),
            cards,
        })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
