use serde::{Deserialize, Serialize};

use crate::constants::TARGET_COUNT;
use crate::target::HiddenTarget;

/// Aggregate view over a target set. Always derived, never mutated directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub found: u8,
    pub completed: bool,
}

impl ProgressRecord {
    #[must_use]
    pub fn from_targets(targets: &[HiddenTarget]) -> Self {
        let found = targets.iter().filter(|t| t.discovered).count();
        Self {
            found: u8::try_from(found).unwrap_or(u8::MAX),
            completed: found == TARGET_COUNT,
        }
    }

    #[must_use]
    pub fn remaining(self) -> u8 {
        u8::try_from(TARGET_COUNT)
            .unwrap_or(u8::MAX)
            .saturating_sub(self.found)
    }

    /// Short status line shown under the hunt screen.
    #[must_use]
    pub fn hint(self) -> String {
        match (self.found, self.remaining()) {
            (_, 0) => String::from("✨ Amazing! You found them all!"),
            (0, _) => String::from("🔍 Look carefully... the hearts are hiding!"),
            (_, 1) => String::from("💫 1 more heart to go!"),
            (_, n) => format!("💫 {n} more hearts to go!"),
        }
    }
}
