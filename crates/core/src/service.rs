use crate::{
    Card, CardId, Catalog, Deck, DeckError, DeckInfo, Event, EventBus, Layout, OracleConfig,
    OracleError, RevealSession, RngState, Spread,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

mod reply;
mod store;

pub use reply::*;
use store::SessionStore;

const ALREADY_REVEALED: &str = "This card has already been revealed! ✨";
const RESHUFFLE_NOTE: &str = "\n\n*The deck has been automatically reshuffled! 🔄*";

fn default_count() -> usize {
    1
}

/// Slash-command style request. `scope` (guild or user) is passed alongside.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    Shuffle,
    Draw {
        #[serde(default = "default_count")]
        count: usize,
    },
    Spread {
        spread: String,
    },
    DeckInfo,
}

/// Button click on a dealt reading.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Interaction {
    pub session: u64,
    pub position: usize,
}

/// Request/response front for the chat integration. Holds one deck per scope
/// and every open reading.
pub struct Oracle {
    catalog: Arc<Catalog>,
    config: OracleConfig,
    decks: Mutex<HashMap<u64, Deck>>,
    sessions: SessionStore,
}

impl Oracle {
    pub fn new(catalog: Catalog, config: OracleConfig) -> Self {
        let ttl = Duration::from_secs(config.session_ttl_secs.max(1));
        log::info!(
            "oracle ready: {} cards in {:?}, draw cap {}, session ttl {:?}",
            catalog.len(),
            catalog.title,
            config.max_draw,
            ttl
        );
        Self {
            catalog: Arc::new(catalog),
            config,
            decks: Mutex::new(HashMap::new()),
            sessions: SessionStore::new(ttl),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn open_sessions(&self) -> usize {
        self.sessions.len()
    }

    pub fn handle_command(
        &self,
        scope: u64,
        command: Command,
        events: &mut EventBus,
    ) -> Result<Reply, OracleError> {
        self.handle_command_at(scope, command, Instant::now(), events)
    }

    pub fn handle_command_at(
        &self,
        scope: u64,
        command: Command,
        now: Instant,
        events: &mut EventBus,
    ) -> Result<Reply, OracleError> {
        self.prune_sessions(now, events);
        match command {
            Command::Shuffle => Ok(self.shuffle(scope, events)),
            Command::Draw { count } => self.deal(scope, Layout::Generic(count), now, events),
            Command::Spread { spread } => {
                let spread: Spread = spread.parse()?;
                self.deal(scope, Layout::Spread(spread), now, events)
            }
            Command::DeckInfo => Ok(self.deck_info_reply(scope)),
        }
    }

    pub fn handle_interaction(
        &self,
        interaction: Interaction,
        events: &mut EventBus,
    ) -> Result<Reply, OracleError> {
        self.handle_interaction_at(interaction, Instant::now(), events)
    }

    pub fn handle_interaction_at(
        &self,
        interaction: Interaction,
        now: Instant,
        events: &mut EventBus,
    ) -> Result<Reply, OracleError> {
        let Interaction { session, position } = interaction;
        let slot = self
            .sessions
            .get(session, now)
            .ok_or(OracleError::UnknownSession(session))?;
        let mut state = slot.lock();
        let images = &self.config.images;
        if state.session.is_revealed(position)? {
            state.touch(now);
            let card = state.session.reveal(position, images)?;
            return Ok(Reply::AlreadyRevealed {
                session,
                card,
                notice: ALREADY_REVEALED.to_string(),
            });
        }
        let card = state.session.reveal(position, images)?;
        state.touch(now);
        let complete = state.session.is_complete();
        log::debug!("session {session}: revealed {:?} at {}", card.name, card.label);
        events.push(Event::CardRevealed {
            session,
            position,
            card: card.name.clone(),
        });
        if complete {
            events.push(Event::SessionCompleted { session });
        }
        let panel = Panel::from(&state.session.render(position, images)?);
        Ok(Reply::Revealed {
            session,
            card,
            complete,
            panel,
            cards: state.session.render_all(images),
            buttons: state.session.buttons(),
        })
    }

    /// Current counts for a scope's deck, creating the deck if needed.
    pub fn deck_info(&self, scope: u64) -> DeckInfo {
        let mut decks = self.decks();
        let info = self.deck_entry(&mut decks, scope).info();
        info
    }

    /// Drops readings idle for longer than the configured TTL.
    pub fn prune_sessions(&self, now: Instant, events: &mut EventBus) -> usize {
        let count = self.sessions.prune(now);
        if count > 0 {
            log::debug!("expired {count} readings");
            events.push(Event::SessionsExpired { count });
        }
        count
    }

    fn shuffle(&self, scope: u64, events: &mut EventBus) -> Reply {
        let total = {
            let mut decks = self.decks();
            let deck = self.deck_entry(&mut decks, scope);
            deck.reset();
            deck.info().total
        };
        log::info!("scope {scope}: deck shuffled");
        events.push(Event::DeckShuffled { scope, total });
        Reply::Shuffled {
            panel: Panel::new(
                "🔮 Deck Shuffled",
                "The cards have been shuffled and reset. Ready for a new reading! ✨",
                Accent::Purple,
            ),
        }
    }

    fn deal(
        &self,
        scope: u64,
        layout: Layout,
        now: Instant,
        events: &mut EventBus,
    ) -> Result<Reply, OracleError> {
        let count = layout.card_count();
        let (ids, remaining, reshuffled) = {
            let mut decks = self.decks();
            let deck = self.deck_entry(&mut decks, scope);
            match deck.draw(count) {
                Ok(ids) => (ids, deck.info().remaining, false),
                Err(DeckError::InsufficientCards { requested, cap, .. })
                    if self.config.auto_reshuffle
                        && requested <= cap
                        && requested <= deck.info().total =>
                {
                    deck.reset();
                    let ids = deck.draw(count)?;
                    (ids, deck.info().remaining, true)
                }
                Err(err) => return Err(err.into()),
            }
        };
        if reshuffled {
            log::info!("scope {scope}: deck ran short, reshuffled");
            events.push(Event::DeckShuffled {
                scope,
                total: self.catalog.len(),
            });
        }

        let cards = self.cards_for(&ids);
        let session = RevealSession::create(layout.labels(), cards)?;
        let buttons = session.buttons();
        let cards = session.render_all(&self.config.images);
        let id = self.sessions.open(session, now);
        log::info!("scope {scope}: dealt {count} cards as reading {id}, {remaining} left");
        events.push(Event::CardsDrawn {
            scope,
            session: id,
            count,
            remaining,
            reshuffled,
        });

        let note = if reshuffled { RESHUFFLE_NOTE } else { "" };
        let panel = match layout {
            Layout::Spread(spread) => Panel::new(
                format!("🔮 {} Spread", spread.title()),
                format!("Your cards have been laid out. Click each position to reveal! ✨{note}"),
                Accent::Purple,
            ),
            Layout::Generic(count) => Panel::new(
                format!("🎴 {count} Card{} Drawn", if count > 1 { "s" } else { "" }),
                format!("Click the buttons below to reveal each card one at a time! ✨{note}"),
                Accent::Blue,
            ),
        }
        .with_thumbnail(self.config.images.card_back_url())
        .with_footer(format!("Cards remaining in deck: {remaining}"));

        Ok(Reply::Dealt {
            session: id,
            layout,
            reshuffled,
            remaining,
            panel,
            cards,
            buttons,
        })
    }

    fn deck_info_reply(&self, scope: u64) -> Reply {
        let info = self.deck_info(scope);
        let body = format!("**{}**\n\n{}", self.catalog.title, self.catalog.description);
        let panel = Panel::new("🎴 Current Deck", body, Accent::Gold)
            .with_field("Total Cards", info.total)
            .with_field("Remaining", info.remaining)
            .with_field("Drawn", info.drawn());
        Reply::DeckInfo { info, panel }
    }

    fn cards_for(&self, ids: &[CardId]) -> Vec<Card> {
        ids.iter()
            .filter_map(|id| self.catalog.get(*id).cloned())
            .collect()
    }

    fn deck_entry<'a>(&self, decks: &'a mut HashMap<u64, Deck>, scope: u64) -> &'a mut Deck {
        decks.entry(scope).or_insert_with(|| {
            let rng = match self.config.seed {
                Some(seed) => RngState::for_scope(seed, scope),
                None => RngState::from_entropy(),
            };
            log::info!("scope {scope}: new deck (seed {:#x})", rng.seed());
            Deck::with_cap(self.catalog.len(), self.config.max_draw, rng)
        })
    }

    fn decks(&self) -> MutexGuard<'_, HashMap<u64, Deck>> {
        self.decks.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
