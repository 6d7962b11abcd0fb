use crate::RevealSession;
use rand::Rng;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, TryLockError};
use std::time::{Duration, Instant};

pub(super) struct Slot {
    state: Mutex<SlotState>,
}

pub(super) struct SlotState {
    pub session: RevealSession,
    last_active: Instant,
}

impl SlotState {
    pub fn touch(&mut self, now: Instant) {
        self.last_active = self.last_active.max(now);
    }
}

impl Slot {
    pub fn lock(&self) -> MutexGuard<'_, SlotState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Open readings keyed by session id. Each reading has its own lock so
/// clicks on one message never wait on another.
pub(super) struct SessionStore {
    ttl: Duration,
    slots: Mutex<HashMap<u64, Arc<Slot>>>,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Stores a new reading under a fresh random id and returns the id.
    /// Ids are drawn from OS entropy so they cannot be guessed from one
    /// another.
    pub fn open(&self, session: RevealSession, now: Instant) -> u64 {
        let slot = Arc::new(Slot {
            state: Mutex::new(SlotState {
                session,
                last_active: now,
            }),
        });
        let mut rng = rand::thread_rng();
        let mut slots = self.slots();
        let id = loop {
            let id: u64 = rng.gen();
            if id != 0 && !slots.contains_key(&id) {
                break id;
            }
        };
        slots.insert(id, slot);
        id
    }

    /// Live slot for `id`. An expired slot is dropped and reported missing.
    /// The map lock is released before the slot lock is taken.
    pub fn get(&self, id: u64, now: Instant) -> Option<Arc<Slot>> {
        let slot = self.slots().get(&id)?.clone();
        let expired = self.is_expired(&slot.lock(), now);
        if expired {
            let mut slots = self.slots();
            if slots.get(&id).is_some_and(|current| Arc::ptr_eq(current, &slot)) {
                slots.remove(&id);
            }
            return None;
        }
        Some(slot)
    }

    /// Drops expired slots and returns how many were removed. Slots that are
    /// locked right now are in use and kept.
    pub fn prune(&self, now: Instant) -> usize {
        let mut slots = self.slots();
        let before = slots.len();
        slots.retain(|_, slot| match slot.state.try_lock() {
            Ok(state) => !self.is_expired(&state, now),
            Err(TryLockError::Poisoned(poisoned)) => !self.is_expired(&poisoned.into_inner(), now),
            Err(TryLockError::WouldBlock) => true,
        });
        before - slots.len()
    }

    pub fn len(&self) -> usize {
        self.slots().len()
    }

    fn is_expired(&self, state: &SlotState, now: Instant) -> bool {
        now.saturating_duration_since(state.last_active) >= self.ttl
    }

    fn slots(&self) -> MutexGuard<'_, HashMap<u64, Arc<Slot>>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
