//! Seeded decorative layout for the backdrop.
//!
//! Kept apart from the hunt so decoration never influences game state; the
//! same seed always yields the same scene.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::constants::PARTICLE_PALETTE;

/// A drifting dot rising from the bottom edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Particle {
    pub id: usize,
    pub x: f32,
    pub size: f32,
    pub duration: f32,
    pub delay: f32,
    pub color: &'static str,
}

/// A twinkling star placed anywhere on screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub id: usize,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub duration: f32,
    pub delay: f32,
}

#[must_use]
pub fn generate_particles(seed: u64, count: usize) -> Vec<Particle> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    (0..count)
        .map(|id| Particle {
            id,
            x: rng.gen_range(0.0..100.0),
            size: rng.gen_range(2.0..6.0),
            duration: rng.gen_range(8.0..20.0),
            delay: rng.gen_range(0.0..10.0),
            color: PARTICLE_PALETTE[rng.gen_range(0..PARTICLE_PALETTE.len())],
        })
        .collect()
}

#[must_use]
pub fn generate_stars(seed: u64, count: usize) -> Vec<Star> {
    // Offset so particles and stars drawn from one seed do not correlate.
    let mut rng = ChaCha20Rng::seed_from_u64(seed ^ 0x5354_4152);
    (0..count)
        .map(|id| Star {
            id,
            x: rng.gen_range(0.0..100.0),
            y: rng.gen_range(0.0..100.0),
            size: rng.gen_range(8.0..22.0),
            duration: rng.gen_range(2.0..6.0),
            delay: rng.gen_range(0.0..3.0),
        })
        .collect()
}

/// Sparkles on the reward page stay inside the central 80% of the screen.
#[must_use]
pub fn generate_sparkles(seed: u64, count: usize) -> Vec<Star> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed ^ 0x5350_4b4c);
    (0..count)
        .map(|id| Star {
            id,
            x: rng.gen_range(10.0..90.0),
            y: rng.gen_range(10.0..90.0),
            size: rng.gen_range(10.0..20.0),
            duration: rng.gen_range(2.0..5.0),
            delay: rng.gen_range(0.0..2.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_scene() {
        assert_eq!(generate_particles(7, 25), generate_particles(7, 25));
        assert_eq!(generate_stars(7, 15), generate_stars(7, 15));
        assert_ne!(generate_particles(7, 25), generate_particles(8, 25));
    }

    #[test]
    fn values_stay_within_ranges() {
        for p in generate_particles(11, 200) {
            assert!((0.0..100.0).contains(&p.x));
            assert!((2.0..6.0).contains(&p.size));
            assert!((8.0..20.0).contains(&p.duration));
            assert!((0.0..10.0).contains(&p.delay));
            assert!(PARTICLE_PALETTE.contains(&p.color));
        }
        for s in generate_stars(11, 200) {
            assert!((0.0..100.0).contains(&s.x));
            assert!((0.0..100.0).contains(&s.y));
            assert!((8.0..22.0).contains(&s.size));
        }
        for s in generate_sparkles(11, 50) {
            assert!((10.0..90.0).contains(&s.x));
            assert!((10.0..90.0).contains(&s.y));
        }
    }

    #[test]
    fn ids_are_sequential() {
        let stars = generate_stars(3, 15);
        assert!(stars.iter().enumerate().all(|(i, s)| s.id == i));
    }
}
