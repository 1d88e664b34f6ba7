use serde::{Deserialize, Serialize};

use crate::FlagStore;
use crate::constants::FLAG_TRUE;
use crate::flags::Flags;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuardDecision {
    Grant,
    /// Send the visitor back to the start route.
    Redirect,
}

impl GuardDecision {
    #[must_use]
    pub const fn is_granted(self) -> bool {
        matches!(self, Self::Grant)
    }
}

/// One-shot check run when the reward route mounts.
///
/// Advisory only: it keeps cooperative visitors from deep-linking past the
/// hunt, nothing more.
pub struct RewardGuard;

impl RewardGuard {
    #[must_use]
    pub fn evaluate<S: FlagStore>(flags: &Flags<S>) -> GuardDecision {
        match flags.completed_raw() {
            Some(value) if value == FLAG_TRUE => GuardDecision::Grant,
            other => {
                log::info!("reward route denied (completion flag {other:?})");
                GuardDecision::Redirect
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{FLAG_GAME_COMPLETED, FLAG_TTL};
    use crate::flags::MemoryFlagStore;
    use std::time::Duration;

    fn decide(raw: Option<&str>) -> GuardDecision {
        let store = MemoryFlagStore::new();
        if let Some(raw) = raw {
            store.insert_raw(FLAG_GAME_COMPLETED, raw, FLAG_TTL);
        }
        RewardGuard::evaluate(&Flags::new(store))
    }

    #[test]
    fn grants_only_exact_true() {
        assert_eq!(decide(Some("true")), GuardDecision::Grant);
        for raw in [None, Some("false"), Some("TRUE"), Some(" true"), Some("1"), Some("")] {
            assert_eq!(decide(raw), GuardDecision::Redirect, "raw={raw:?}");
        }
    }

    #[test]
    fn expired_or_unreadable_flags_redirect() {
        let store = MemoryFlagStore::new();
        store.insert_raw(FLAG_GAME_COMPLETED, "true", Duration::from_secs(1));
        let flags = Flags::new(store.clone());
        assert!(RewardGuard::evaluate(&flags).is_granted());

        store.set_unavailable(true);
        assert_eq!(RewardGuard::evaluate(&flags), GuardDecision::Redirect);
        store.set_unavailable(false);

        store.advance(Duration::from_secs(1));
        assert_eq!(RewardGuard::evaluate(&flags), GuardDecision::Redirect);
    }
}
