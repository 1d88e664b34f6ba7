//! Short-lived key/value flags used to remember hunt progress across routes.
//!
//! [`Flags`] wraps any [`FlagStore`] and applies the fire-and-forget contract:
//! writes never fail from the caller's point of view and reads collapse every
//! failure (missing, expired, malformed, storage disabled) into `None`.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use thiserror::Error;

use crate::FlagStore;
use crate::constants::{FLAG_GAME_COMPLETED, FLAG_HEARTS_FOUND, TARGET_COUNT};

/// Fire-and-forget adapter over a platform flag store.
#[derive(Debug, Clone, Default)]
pub struct Flags<S> {
    store: S,
}

impl<S: FlagStore> Flags<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Write a flag, swallowing storage failures.
    pub fn set_flag(&self, key: &str, value: &str, ttl: Duration) {
        if let Err(err) = self.store.write_flag(key, value, ttl) {
            log::warn!("flag write for {key} dropped: {err}");
        }
    }

    /// Read a flag; any failure reads as absent.
    #[must_use]
    pub fn get_flag(&self, key: &str) -> Option<String> {
        match self.store.read_flag(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("flag read for {key} failed: {err}");
                None
            }
        }
    }

    /// Persisted hunt progress, if present and well-formed.
    #[must_use]
    pub fn progress(&self) -> Option<u8> {
        let raw = self.get_flag(FLAG_HEARTS_FOUND)?;
        if !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        raw.parse::<u8>()
            .ok()
            .filter(|found| usize::from(*found) <= TARGET_COUNT)
    }

    /// Raw completion flag exactly as stored.
    #[must_use]
    pub fn completed_raw(&self) -> Option<String> {
        self.get_flag(FLAG_GAME_COMPLETED)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MemoryStoreError {
    #[error("storage unavailable")]
    Unavailable,
}

#[derive(Debug, Clone)]
struct StoredFlag {
    value: String,
    expires_at: Duration,
}

/// In-memory flag store with a manual clock.
///
/// Clones share the same backing map, clock and availability switch, so a
/// test can keep a handle while the hunt owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryFlagStore {
    entries: Rc<RefCell<HashMap<String, StoredFlag>>>,
    now: Rc<Cell<Duration>>,
    unavailable: Rc<Cell<bool>>,
}

impl MemoryFlagStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the store clock forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get().saturating_add(by));
    }

    /// Simulate disabled storage; every read and write fails while set.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.set(unavailable);
    }

    /// Plant a value directly, bypassing callers. Useful for tampered or
    /// malformed entries.
    pub fn insert_raw(&self, key: &str, value: &str, ttl: Duration) {
        let expires_at = self.now.get().saturating_add(ttl);
        self.entries.borrow_mut().insert(
            key.to_string(),
            StoredFlag {
                value: value.to_string(),
                expires_at,
            },
        );
    }

    /// Number of live (unexpired) entries.
    #[must_use]
    pub fn live_len(&self) -> usize {
        let now = self.now.get();
        self.entries
            .borrow()
            .values()
            .filter(|f| f.expires_at > now)
            .count()
    }
}

impl FlagStore for MemoryFlagStore {
    type Error = MemoryStoreError;

    fn write_flag(&self, key: &str, value: &str, ttl: Duration) -> Result<(), Self::Error> {
        if self.unavailable.get() {
            return Err(MemoryStoreError::Unavailable);
        }
        self.insert_raw(key, value, ttl);
        Ok(())
    }

    fn read_flag(&self, key: &str) -> Result<Option<String>, Self::Error> {
        if self.unavailable.get() {
            return Err(MemoryStoreError::Unavailable);
        }
        let now = self.now.get();
        Ok(self
            .entries
            .borrow()
            .get(key)
            .filter(|f| f.expires_at > now)
            .map(|f| f.value.clone()))
    }
}
