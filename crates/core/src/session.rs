use crate::{Card, ImageHost};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("position {index} out of range for {len} cards")]
    InvalidPosition { index: usize, len: usize },
    #[error("{labels} position labels for {cards} drawn cards")]
    LabelMismatch { labels: usize, cards: usize },
    #[error("a reading needs at least one card")]
    EmptySession,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Face {
    Down,
    Up,
}

#[derive(Debug, Clone)]
struct Entry {
    label: String,
    card: Card,
    face: Face,
}

/// Drawn cards of one message, each behind its position label.
#[derive(Debug, Clone)]
pub struct RevealSession {
    entries: Vec<Entry>,
}

/// A face-up card, ready for the integration layer to display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RevealedCard {
    pub position: usize,
    pub label: String,
    pub name: String,
    pub meaning: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "face", rename_all = "snake_case")]
pub enum RenderedCard {
    Down { position: usize, label: String },
    Up(RevealedCard),
}

/// Interactive flip button for one position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Button {
    pub custom_id: String,
    pub label: String,
    pub disabled: bool,
}

impl RevealSession {
    pub fn create<L>(labels: Vec<L>, cards: Vec<Card>) -> Result<Self, SessionError>
    where
        L: Into<String>,
    {
        if labels.len() != cards.len() {
            return Err(SessionError::LabelMismatch {
                labels: labels.len(),
                cards: cards.len(),
            });
        }
        if cards.is_empty() {
            return Err(SessionError::EmptySession);
        }
        let entries = labels
            .into_iter()
            .zip(cards)
            .map(|(label, card)| Entry {
                label: label.into(),
                card,
                face: Face::Down,
            })
            .collect();
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn face(&self, index: usize) -> Result<Face, SessionError> {
        self.entry(index).map(|entry| entry.face)
    }

    pub fn is_revealed(&self, index: usize) -> Result<bool, SessionError> {
        self.face(index).map(|face| face == Face::Up)
    }

    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(|entry| entry.face == Face::Up)
    }

    pub fn revealed_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.face == Face::Up)
            .count()
    }

    /// Turns a position face up. Revealing an already face-up position
    /// changes nothing and returns the same card.
    pub fn reveal(&mut self, index: usize, images: &ImageHost) -> Result<RevealedCard, SessionError> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(SessionError::InvalidPosition { index, len })?;
        entry.face = Face::Up;
        Ok(face_up(index, entry, images))
    }

    pub fn render(&self, index: usize, images: &ImageHost) -> Result<RenderedCard, SessionError> {
        let entry = self.entry(index)?;
        Ok(render_entry(index, entry, images))
    }

    /// Every position in order, face-down ones as placeholders.
    pub fn render_all(&self, images: &ImageHost) -> Vec<RenderedCard> {
        self.entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| render_entry(idx, entry, images))
            .collect()
    }

    pub fn buttons(&self) -> Vec<Button> {
        self.entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| match entry.face {
                Face::Down => Button {
                    custom_id: format!("card_{idx}"),
                    label: format!("🎴 {}", entry.label),
                    disabled: false,
                },
                Face::Up => Button {
                    custom_id: format!("card_{idx}"),
                    label: format!("✨ {}", entry.label),
                    disabled: true,
                },
            })
            .collect()
    }

    fn entry(&self, index: usize) -> Result<&Entry, SessionError> {
        self.entries.get(index).ok_or(SessionError::InvalidPosition {
            index,
            len: self.entries.len(),
        })
    }
}

fn render_entry(position: usize, entry: &Entry, images: &ImageHost) -> RenderedCard {
    match entry.face {
        Face::Down => RenderedCard::Down {
            position,
            label: entry.label.clone(),
        },
        Face::Up => RenderedCard::Up(face_up(position, entry, images)),
    }
}

fn face_up(position: usize, entry: &Entry, images: &ImageHost) -> RevealedCard {
    RevealedCard {
        position,
        label: entry.label.clone(),
        name: entry.card.name.clone(),
        meaning: entry.card.meaning.clone(),
        image_url: images.url_for(&entry.card.slug),
    }
}
