//! The heart hunt state machine.
//!
//! `NotStarted -> InProgress -> Completed`, with `start()` re-entering
//! `InProgress` from any phase. The target set is the only source of truth
//! for progress; the persisted counter is a mirror written after each change.

use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};
use thiserror::Error;

use crate::FlagStore;
use crate::constants::{FLAG_FALSE, FLAG_GAME_COMPLETED, FLAG_HEARTS_FOUND, FLAG_TRUE, FLAG_TTL};
use crate::flags::Flags;
use crate::progress::ProgressRecord;
use crate::target::{HiddenTarget, TargetId, canonical_targets};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HuntPhase {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

/// Signals consumed by the presentation layer to drive animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HuntSignal {
    TargetDiscovered {
        id: TargetId,
        progress: ProgressRecord,
    },
    /// Emitted once, on the transition into [`HuntPhase::Completed`].
    HuntCompleted,
}

pub type HuntSignals = SmallVec<[HuntSignal; 2]>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HuntError {
    #[error("unknown target {id} (hunt has {known} targets)")]
    UnknownTarget { id: TargetId, known: usize },
}

/// Read-only view handed to renderers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HuntSnapshot {
    pub phase: HuntPhase,
    pub targets: Vec<HiddenTarget>,
    pub progress: ProgressRecord,
}

/// Owns the target set for one session and is the sole writer of the
/// progress flags.
#[derive(Debug, Clone)]
pub struct HeartHunt<S> {
    phase: HuntPhase,
    targets: Vec<HiddenTarget>,
    flags: Flags<S>,
}

impl<S: FlagStore> HeartHunt<S> {
    pub const fn new(flags: Flags<S>) -> Self {
        Self {
            phase: HuntPhase::NotStarted,
            targets: Vec::new(),
            flags,
        }
    }

    /// (Re)initialize a fresh session and reset the persisted flags.
    pub fn start(&mut self) {
        self.targets = canonical_targets();
        self.phase = HuntPhase::InProgress;
        self.flags.set_flag(FLAG_HEARTS_FOUND, "0", FLAG_TTL);
        self.flags.set_flag(FLAG_GAME_COMPLETED, FLAG_FALSE, FLAG_TTL);
        log::debug!("heart hunt started with {} targets", self.targets.len());
    }

    /// Record a click on target `id`.
    ///
    /// Duplicate clicks return no signals and touch nothing.
    ///
    /// # Errors
    ///
    /// Returns [`HuntError::UnknownTarget`] when `id` is not part of the
    /// current target set, including any id before [`Self::start`].
    pub fn discover(&mut self, id: TargetId) -> Result<HuntSignals, HuntError> {
        let known = self.targets.len();
        let target = self
            .targets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(HuntError::UnknownTarget { id, known })?;

        if !target.mark_discovered() {
            return Ok(SmallVec::new());
        }

        let progress = self.progress();
        self.flags
            .set_flag(FLAG_HEARTS_FOUND, &progress.found.to_string(), FLAG_TTL);
        let discovered = HuntSignal::TargetDiscovered { id, progress };

        if progress.completed && self.phase != HuntPhase::Completed {
            self.phase = HuntPhase::Completed;
            self.flags.set_flag(FLAG_GAME_COMPLETED, FLAG_TRUE, FLAG_TTL);
            log::debug!("heart hunt completed");
            return Ok(smallvec![discovered, HuntSignal::HuntCompleted]);
        }

        Ok(smallvec![discovered])
    }

    #[must_use]
    pub const fn phase(&self) -> HuntPhase {
        self.phase
    }

    #[must_use]
    pub fn targets(&self) -> &[HiddenTarget] {
        &self.targets
    }

    #[must_use]
    pub fn progress(&self) -> ProgressRecord {
        ProgressRecord::from_targets(&self.targets)
    }

    #[must_use]
    pub fn snapshot(&self) -> HuntSnapshot {
        HuntSnapshot {
            phase: self.phase,
            targets: self.targets.clone(),
            progress: self.progress(),
        }
    }

    pub const fn flags(&self) -> &Flags<S> {
        &self.flags
    }
}
