//! Confetti schedule for the reward page.
//!
//! Every tick of the celebration fires a pair of bursts from the left and
//! right edges. Burst size decays linearly to zero over the run.

use std::f64::consts::TAU;
use std::time::Duration;

use rand::Rng;
use serde::Serialize;

use crate::constants::{
    CONFETTI_BASE_PARTICLES, CONFETTI_DURATION, CONFETTI_INTERVAL, CONFETTI_PALETTE,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Origin {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Burst {
    pub origin: Origin,
    pub particle_count: u32,
}

/// A single drawable scrap of confetti, in viewport fractions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfettiPiece {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfettiPlan {
    pub duration: Duration,
    pub interval: Duration,
    pub base_particles: f64,
}

impl Default for ConfettiPlan {
    fn default() -> Self {
        Self {
            duration: CONFETTI_DURATION,
            interval: CONFETTI_INTERVAL,
            base_particles: CONFETTI_BASE_PARTICLES,
        }
    }
}

impl ConfettiPlan {
    /// Whether the interval driving this plan should be torn down.
    #[must_use]
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    #[must_use]
    pub fn particle_count(&self, elapsed: Duration) -> u32 {
        let Some(remaining) = self.duration.checked_sub(elapsed) else {
            return 0;
        };
        let fraction = remaining.as_secs_f64() / self.duration.as_secs_f64();
        // Bounded by base_particles, so the cast cannot truncate meaningfully.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let count = (self.base_particles * fraction).round() as u32;
        count
    }

    /// Left and right bursts for the tick at `elapsed`, or `None` once the
    /// run is over.
    pub fn burst_at<R: Rng + ?Sized>(&self, elapsed: Duration, rng: &mut R) -> Option<[Burst; 2]> {
        if self.is_finished(elapsed) {
            return None;
        }
        let particle_count = self.particle_count(elapsed);
        let mut side = |lo: f64, hi: f64| Burst {
            origin: Origin {
                x: rng.gen_range(lo..hi),
                y: rng.r#gen::<f64>() - 0.2,
            },
            particle_count,
        };
        let left = side(0.1, 0.3);
        let right = side(0.7, 0.9);
        Some([left, right])
    }

    /// Scatter a burst into pieces spread over the full circle.
    pub fn pieces<R: Rng + ?Sized>(burst: &Burst, rng: &mut R) -> Vec<ConfettiPiece> {
        (0..burst.particle_count)
            .map(|_| {
                let angle = rng.gen_range(0.0..TAU);
                let speed = rng.gen_range(0.05..0.25);
                ConfettiPiece {
                    x: burst.origin.x,
                    y: burst.origin.y,
                    dx: angle.cos() * speed,
                    dy: angle.sin() * speed,
                    color: CONFETTI_PALETTE[rng.gen_range(0..CONFETTI_PALETTE.len())],
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn particle_count_decays_to_zero() {
        let plan = ConfettiPlan::default();
        assert_eq!(plan.particle_count(Duration::ZERO), 30);
        assert_eq!(plan.particle_count(Duration::from_secs(6)), 15);
        assert_eq!(plan.particle_count(Duration::from_secs(12)), 0);
        assert_eq!(plan.particle_count(Duration::from_secs(60)), 0);
    }

    #[test]
    fn bursts_stop_after_duration() {
        let plan = ConfettiPlan::default();
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        assert!(plan.burst_at(Duration::from_millis(350), &mut rng).is_some());
        assert!(plan.burst_at(Duration::from_secs(12), &mut rng).is_none());
        assert!(plan.is_finished(Duration::from_secs(13)));
    }

    #[test]
    fn bursts_come_from_both_edges() {
        let plan = ConfettiPlan::default();
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        for tick in 0..30 {
            let elapsed = plan.interval * tick;
            let [left, right] = plan.burst_at(elapsed, &mut rng).unwrap();
            assert!((0.1..0.3).contains(&left.origin.x));
            assert!((0.7..0.9).contains(&right.origin.x));
            assert!((-0.2..0.8).contains(&left.origin.y));
            assert_eq!(left.particle_count, right.particle_count);
        }
    }

    #[test]
    fn pieces_match_burst_size_and_palette() {
        let mut rng = ChaCha20Rng::seed_from_u64(9);
        let burst = Burst {
            origin: Origin { x: 0.2, y: 0.1 },
            particle_count: 12,
        };
        let pieces = ConfettiPlan::pieces(&burst, &mut rng);
        assert_eq!(pieces.len(), 12);
        assert!(pieces.iter().all(|p| CONFETTI_PALETTE.contains(&p.color)));
        assert!(pieces.iter().all(|p| (p.x - 0.2).abs() < f64::EPSILON));
    }
}
