//! In-memory session storage
//!
//! An explicitly owned map from identifier to session. Entries live until
//! removed; there is no expiry.

use crate::game::{GameId, GameSession};
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: FxHashMap<GameId, GameSession>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a session under its own id, returning a handle to it
    ///
    /// A session already stored under the same id is replaced.
    pub fn insert(&mut self, session: GameSession) -> &mut GameSession {
        match self.sessions.entry(session.id().clone()) {
            Entry::Occupied(mut entry) => {
                entry.insert(session);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(session),
        }
    }

    #[must_use]
    pub fn get(&self, id: &GameId) -> Option<&GameSession> {
        self.sessions.get(id)
    }

    pub fn get_mut(&mut self, id: &GameId) -> Option<&mut GameSession> {
        self.sessions.get_mut(id)
    }

    pub fn remove(&mut self, id: &GameId) -> Option<GameSession> {
        self.sessions.remove(id)
    }

    #[must_use]
    pub fn contains(&self, id: &GameId) -> bool {
        self.sessions.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Identifiers of every stored session, in no particular order
    pub fn ids(&self) -> impl Iterator<Item = &GameId> {
        self.sessions.keys()
    }
}
