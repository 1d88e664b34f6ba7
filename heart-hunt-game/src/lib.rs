//! Heart Hunt Game Engine
//!
//! Platform-agnostic core for the "find the hidden hearts" mini-game: the hunt
//! state machine, the short-lived progress flags it mirrors into, and the guard
//! that gates the reward page. Rendering lives elsewhere and only consumes the
//! snapshots and signals produced here.

pub mod celebration;
pub mod constants;
pub mod flags;
pub mod gallery;
pub mod guard;
pub mod hunt;
pub mod layout;
pub mod progress;
pub mod target;

use std::time::Duration;

// Re-export commonly used types
pub use celebration::{Burst, ConfettiPiece, ConfettiPlan, Origin};
pub use flags::{Flags, MemoryFlagStore, MemoryStoreError};
pub use gallery::{Lightbox, LightboxKey};
pub use guard::{GuardDecision, RewardGuard};
pub use hunt::{HeartHunt, HuntError, HuntPhase, HuntSignal, HuntSignals, HuntSnapshot};
pub use layout::{Particle, Star, generate_particles, generate_sparkles, generate_stars};
pub use progress::ProgressRecord;
pub use target::{HiddenTarget, Position, TargetId, canonical_targets};

/// Trait for abstracting flag persistence
/// Platform-specific implementations should provide this
pub trait FlagStore {
    type Error: std::error::Error + 'static;

    /// Write `value` under `key`, expiring after `ttl`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage rejects the write.
    fn write_flag(&self, key: &str, value: &str, ttl: Duration) -> Result<(), Self::Error>;

    /// Read the live value under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be read.
    fn read_flag(&self, key: &str) -> Result<Option<String>, Self::Error>;
}
