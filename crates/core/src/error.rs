use crate::{CatalogError, DeckError, SessionError, SpreadError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OracleError {
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Spread(#[from] SpreadError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("reading {0} has expired or was never dealt")]
    UnknownSession(u64),
}

impl OracleError {
    /// Message suitable for showing to the person who triggered the error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Deck(DeckError::InvalidDrawCount) => {
                "Please draw between 1 and 5 cards! 🎴".to_string()
            }
            Self::Deck(DeckError::InsufficientCards {
                requested,
                remaining,
                cap,
            }) => {
                if requested > cap {
                    format!("Please draw between 1 and {cap} cards! 🎴")
                } else {
                    format!(
                        "Only {remaining} card{} left in the deck. Use /shuffle for a fresh start! 🔄",
                        if *remaining == 1 { "" } else { "s" }
                    )
                }
            }
            Self::Session(SessionError::InvalidPosition { .. }) => {
                "That card is not part of this reading.".to_string()
            }
            Self::Spread(SpreadError::UnknownSpreadType(name)) => {
                format!("I don't know the {name:?} spread.")
            }
            Self::UnknownSession(_) => {
                "This reading has faded. Draw again for a new one! 🌙".to_string()
            }
            other => other.to_string(),
        }
    }
}
