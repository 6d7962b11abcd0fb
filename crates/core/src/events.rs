use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    DeckShuffled { scope: u64, total: usize },
    CardsDrawn {
        scope: u64,
        session: u64,
        count: usize,
        remaining: usize,
        reshuffled: bool,
    },
    CardRevealed {
        session: u64,
        position: usize,
        card: String,
    },
    SessionCompleted { session: u64 },
    SessionsExpired { count: usize },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        log::debug!("event: {event:?}");
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
