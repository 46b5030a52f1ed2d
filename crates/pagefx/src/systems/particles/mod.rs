//! Hero particle background: simulation and drawing, independent of the canvas.

mod particle;
mod field;

pub use particle::{Particle, wrap};
pub use field::{ParticleField, FieldState, Connection};
