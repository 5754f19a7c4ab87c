use std::collections::HashMap;

use anyhow::Result;
use chrono::NaiveDate;
use puzzle_types::GameKind;
use tracing::warn;

use crate::{CategoryGameSession, WordGameSession};

/// Storage key for one identity's game on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionKey {
    pub identity: String,
    pub date: NaiveDate,
    pub kind: GameKind,
}

impl SessionKey {
    pub fn new(identity: &str, date: NaiveDate, kind: GameKind) -> Self {
        Self {
            identity: identity.to_lowercase(),
            date,
            kind,
        }
    }

    pub fn storage_key(&self) -> String {
        format!("{}:{}:{}", self.kind.storage_tag(), self.identity, self.date)
    }
}

/// Narrow durable key-value contract the engines depend on.
///
/// Satisfied by an in-memory map in tests, a file on disk, or browser
/// storage; the engines never care which.
pub trait SessionStore {
    fn load(&self, key: &SessionKey) -> Result<Option<String>>;
    fn save(&mut self, key: &SessionKey, value: &str) -> Result<()>;
    fn remove(&mut self, key: &SessionKey) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    entries: HashMap<String, String>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn load(&self, key: &SessionKey) -> Result<Option<String>> {
        Ok(self.entries.get(&key.storage_key()).cloned())
    }

    fn save(&mut self, key: &SessionKey, value: &str) -> Result<()> {
        self.entries.insert(key.storage_key(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &SessionKey) -> Result<()> {
        self.entries.remove(&key.storage_key());
        Ok(())
    }
}

/// Load a word session, restoring persisted progress only when it matches
/// today's puzzle. Corrupt blobs are discarded, never fatal.
pub fn load_word_session(
    store: &dyn SessionStore,
    key: &SessionKey,
    today: NaiveDate,
    todays_target: &str,
) -> Result<WordGameSession> {
    match store.load(key)? {
        Some(blob) => match serde_json::from_str::<WordGameSession>(&blob) {
            Ok(persisted) => Ok(WordGameSession::restore(persisted, today, todays_target)),
            Err(err) => {
                warn!(%err, "discarding unreadable word session");
                Ok(WordGameSession::new(today, todays_target))
            }
        },
        None => Ok(WordGameSession::new(today, todays_target)),
    }
}

pub fn save_word_session(
    store: &mut dyn SessionStore,
    key: &SessionKey,
    session: &WordGameSession,
) -> Result<()> {
    store.save(key, &serde_json::to_string(session)?)
}

/// Load a category session, restoring persisted progress only for the
/// same calendar day.
pub fn load_category_session(
    store: &dyn SessionStore,
    key: &SessionKey,
    today: NaiveDate,
) -> Result<CategoryGameSession> {
    match store.load(key)? {
        Some(blob) => match serde_json::from_str::<CategoryGameSession>(&blob) {
            Ok(persisted) => Ok(CategoryGameSession::restore(persisted, today)),
            Err(err) => {
                warn!(%err, "discarding unreadable category session");
                Ok(CategoryGameSession::new(today))
            }
        },
        None => Ok(CategoryGameSession::new(today)),
    }
}

pub fn save_category_session(
    store: &mut dyn SessionStore,
    key: &SessionKey,
    session: &CategoryGameSession,
) -> Result<()> {
    store.save(key, &serde_json::to_string(session)?)
}
