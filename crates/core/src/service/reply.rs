use crate::{Button, DeckInfo, Layout, RenderedCard, RevealedCard};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    Purple,
    Blue,
    Gold,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Text block plus optional image references, shaped like a chat embed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Panel {
    pub title: String,
    pub body: String,
    pub accent: Accent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
}

impl Panel {
    pub fn new(title: impl Into<String>, body: impl Into<String>, accent: Accent) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            accent,
            image_url: None,
            thumbnail_url: None,
            footer: None,
            fields: Vec::new(),
        }
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.fields.push(Field {
            name: name.into(),
            value: value.to_string(),
            inline: true,
        });
        self
    }
}

impl From<&RenderedCard> for Panel {
    fn from(rendered: &RenderedCard) -> Self {
        match rendered {
            RenderedCard::Down { label, .. } => Panel::new(
                format!("🎴 {label}"),
                "This card is still face down.",
                Accent::Blue,
            ),
            RenderedCard::Up(card) => {
                Panel::new(format!("🔮 {}", card.name), card.meaning.clone(), Accent::Purple)
                    .with_image(card.image_url.clone())
                    .with_footer(card.label.clone())
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reply {
    Shuffled {
        panel: Panel,
    },
    Dealt {
        session: u64,
        layout: Layout,
        reshuffled: bool,
        remaining: usize,
        panel: Panel,
        cards: Vec<RenderedCard>,
        buttons: Vec<Button>,
    },
    DeckInfo {
        info: DeckInfo,
        panel: Panel,
    },
    Revealed {
        session: u64,
        card: RevealedCard,
        complete: bool,
        panel: Panel,
        cards: Vec<RenderedCard>,
        buttons: Vec<Button>,
    },
    /// Repeat click on a face-up card. `notice` is meant for the clicker only.
    AlreadyRevealed {
        session: u64,
        card: RevealedCard,
        notice: String,
    },
}

impl Reply {
    pub fn session(&self) -> Option<u64> {
        match self {
            Self::Dealt { session, .. }
            | Self::Revealed { session, .. }
            | Self::AlreadyRevealed { session, .. } => Some(*session),
            Self::Shuffled { .. } | Self::DeckInfo { .. } => None,
        }
    }
}
