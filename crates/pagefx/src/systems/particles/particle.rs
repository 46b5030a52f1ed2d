//! A single drifting particle.

use glam::DVec2;

use crate::core::rng::Rng;
use crate::api::config::ParticleConfig;

/// A point particle in canvas pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: DVec2,
    /// Displacement per frame.
    pub vel: DVec2,
    pub radius: f64,
    pub opacity: f64,
}

impl Particle {
    /// Random particle inside a `width` × `height` canvas, with radius, velocity
    /// and opacity drawn from the configured half-open ranges.
    pub fn random(rng: &mut Rng, width: f64, height: f64, config: &ParticleConfig) -> Self {
        let pos = DVec2::new(rng.range(0.0, width), rng.range(0.0, height));
        let radius = rng.range(config.radius.0, config.radius.1);
        let vel = DVec2::new(
            rng.range(config.velocity.0, config.velocity.1),
            rng.range(config.velocity.0, config.velocity.1),
        );
        let opacity = rng.range(config.opacity.0, config.opacity.1);
        Self { pos, vel, radius, opacity }
    }

    /// Advance one frame and wrap back into [0, width) × [0, height).
    pub fn step(&mut self, width: f64, height: f64) {
        self.pos += self.vel;
        self.pos.x = wrap(self.pos.x, width);
        self.pos.y = wrap(self.pos.y, height);
    }
}

/// Wrap a coordinate into [0, extent). Leaving the far edge lands exactly on
/// 0; leaving the near edge re-enters from the far side.
pub fn wrap(v: f64, extent: f64) -> f64 {
    if extent <= 0.0 {
        return 0.0;
    }
    if v >= extent {
        0.0
    } else if v < 0.0 {
        let w = v + extent;
        if (0.0..extent).contains(&w) { w } else { 0.0 }
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_right_edge_lands_on_zero() {
        assert_eq!(wrap(800.1, 800.0), 0.0);
        assert_eq!(wrap(800.0, 800.0), 0.0);
    }

    #[test]
    fn wrap_left_edge_reenters_from_far_side() {
        let w = wrap(-0.1, 800.0);
        assert!(w > 799.0 && w < 800.0);
    }

    #[test]
    fn wrap_inside_is_identity() {
        assert_eq!(wrap(0.0, 800.0), 0.0);
        assert_eq!(wrap(399.5, 800.0), 399.5);
    }

    #[test]
    fn wrap_tiny_negative_stays_in_bounds() {
        let w = wrap(-1e-300, 800.0);
        assert!((0.0..800.0).contains(&w));
    }

    #[test]
    fn random_particle_within_ranges() {
        let config = ParticleConfig::default();
        let mut rng = Rng::new(3);
        for _ in 0..1000 {
            let p = Particle::random(&mut rng, 640.0, 360.0, &config);
            assert!((0.0..640.0).contains(&p.pos.x));
            assert!((0.0..360.0).contains(&p.pos.y));
            assert!((0.5..2.0).contains(&p.radius));
            assert!((-0.15..0.15).contains(&p.vel.x));
            assert!((-0.15..0.15).contains(&p.vel.y));
            assert!((0.05..0.35).contains(&p.opacity));
        }
    }

    #[test]
    fn step_moves_by_velocity() {
        let mut p = Particle {
            pos: DVec2::new(10.0, 10.0),
            vel: DVec2::new(0.1, -0.1),
            radius: 1.0,
            opacity: 0.2,
        };
        p.step(100.0, 100.0);
        assert!((p.pos.x - 10.1).abs() < 1e-12);
        assert!((p.pos.y - 9.9).abs() < 1e-12);
    }
}
