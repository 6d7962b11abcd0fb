use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpreadError {
    #[error("unknown spread type: {0}")]
    UnknownSpreadType(String),
}

/// Named three-card layouts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Spread {
    PastPresentFuture,
    MindBodySpirit,
    SituationActionOutcome,
}

impl Spread {
    pub const ALL: [Spread; 3] = [
        Spread::PastPresentFuture,
        Spread::MindBodySpirit,
        Spread::SituationActionOutcome,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::PastPresentFuture => "past-present-future",
            Self::MindBodySpirit => "mind-body-spirit",
            Self::SituationActionOutcome => "situation-action-outcome",
        }
    }

    pub fn labels(self) -> [&'static str; 3] {
        match self {
            Self::PastPresentFuture => ["Past", "Present", "Future"],
            Self::MindBodySpirit => ["Mind", "Body", "Spirit"],
            Self::SituationActionOutcome => ["Situation", "Action", "Outcome"],
        }
    }

    /// `"Past • Present • Future"`
    pub fn title(self) -> String {
        self.labels().join(" • ")
    }
}

impl fmt::Display for Spread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Spread {
    type Err = SpreadError;

    /// Accepts the kebab-case id, its snake_case form, any letter case.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "-");
        Spread::ALL
            .into_iter()
            .find(|spread| spread.id() == normalized)
            .ok_or_else(|| SpreadError::UnknownSpreadType(value.to_string()))
    }
}

/// How drawn cards are labelled: a named spread or `count` anonymous cards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Layout {
    Spread(Spread),
    Generic(usize),
}

impl Layout {
    pub fn card_count(self) -> usize {
        match self {
            Self::Spread(spread) => spread.labels().len(),
            Self::Generic(count) => count,
        }
    }

    /// `"Card 1".."Card N"` for generic draws.
    pub fn labels(self) -> Vec<String> {
        match self {
            Self::Spread(spread) => spread.labels().iter().map(|s| s.to_string()).collect(),
            Self::Generic(count) => (1..=count).map(|n| format!("Card {n}")).collect(),
        }
    }
}
