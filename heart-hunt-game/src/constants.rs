//! Centralized tuning constants for the heart hunt.
//!
//! Target placement, flag names and presentation pacing all live here so the
//! core and the web layer agree on a single set of values.

use std::time::Duration;

// Targets ------------------------------------------------------------------
pub const TARGET_COUNT: usize = 3;

/// Canonical `(x, y)` placement of each hidden heart, in viewport percent.
/// Index doubles as the target id.
pub const TARGET_SPOTS: [(f32, f32); TARGET_COUNT] = [(15.0, 28.0), (78.0, 38.0), (42.0, 70.0)];

// Flags --------------------------------------------------------------------
pub const FLAG_HEARTS_FOUND: &str = "heartsFound";
pub const FLAG_GAME_COMPLETED: &str = "gameCompleted";
pub const FLAG_TTL: Duration = Duration::from_secs(24 * 60 * 60);
pub const FLAG_TRUE: &str = "true";
pub const FLAG_FALSE: &str = "false";

// Pacing -------------------------------------------------------------------
pub const REVEAL_DELAY: Duration = Duration::from_millis(1_000);
pub const RIPPLE_LIFETIME: Duration = Duration::from_millis(800);

// Confetti -----------------------------------------------------------------
pub const CONFETTI_DURATION: Duration = Duration::from_secs(12);
pub const CONFETTI_INTERVAL: Duration = Duration::from_millis(350);
pub const CONFETTI_BASE_PARTICLES: f64 = 30.0;
pub const CONFETTI_PALETTE: [&str; 5] = ["#ec4899", "#f43f5e", "#fb7185", "#a855f7", "#fbbf24"];

// Backdrop -----------------------------------------------------------------
pub const HOME_PARTICLE_COUNT: usize = 25;
pub const HOME_STAR_COUNT: usize = 15;
pub const REWARD_SPARKLE_COUNT: usize = 8;
pub const PARTICLE_PALETTE: [&str; 5] = [
    "rgba(236, 72, 153, 0.4)",
    "rgba(244, 114, 182, 0.3)",
    "rgba(168, 85, 247, 0.3)",
    "rgba(139, 92, 246, 0.25)",
    "rgba(251, 191, 36, 0.2)",
];
