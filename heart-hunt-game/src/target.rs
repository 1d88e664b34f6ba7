use serde::{Deserialize, Serialize};

use crate::constants::TARGET_SPOTS;

/// Identifier of a hidden target, unique within one hunt session.
pub type TargetId = u8;

/// Position in viewport percent; both axes fall in `[0, 100)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// One of the hearts hidden on the hunt screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HiddenTarget {
    pub id: TargetId,
    pub position: Position,
    pub discovered: bool,
}

impl HiddenTarget {
    #[must_use]
    pub const fn new(id: TargetId, position: Position) -> Self {
        Self {
            id,
            position,
            discovered: false,
        }
    }

    /// Flip the target to discovered. Returns `false` when it already was.
    pub(crate) const fn mark_discovered(&mut self) -> bool {
        if self.discovered {
            return false;
        }
        self.discovered = true;
        true
    }
}

/// Fresh, undiscovered targets at their canonical spots.
#[must_use]
pub fn canonical_targets() -> Vec<HiddenTarget> {
    TARGET_SPOTS
        .iter()
        .zip(0_u8..)
        .map(|(&(x, y), id)| HiddenTarget::new(id, Position { x, y }))
        .collect()
}
