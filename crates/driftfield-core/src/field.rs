//! The particle field: a fixed population of drifting dots and the viewport
//! extents they bounce inside.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::PARTICLE_COUNT;
use crate::particle::Particle;

/// Owns the particle collection and the current extents.
///
/// Constructed once at startup; the population never changes afterwards.
/// The frontend reads positions to draw and calls
/// [`step`](ParticleField::step) once per animation frame.
pub struct ParticleField {
    width: f32,
    height: f32,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Scatter `count` dots over `width x height`.
    ///
    /// Spawning is driven by a seeded RNG, so the same seed over the same
    /// extents reproduces the same field.
    pub fn new(width: f32, height: f32, count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..count)
            .map(|_| Particle::spawn(&mut rng, width, height))
            .collect();
        Self {
            width,
            height,
            particles,
        }
    }

    /// Field with the default population size.
    pub fn with_default_count(width: f32, height: f32, seed: u64) -> Self {
        Self::new(width, height, PARTICLE_COUNT, seed)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Dots in creation order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Advance every dot by one frame: move, then reflect off the edges.
    ///
    /// Reflection only inverts a velocity component that still points
    /// outward, so a dot stranded beyond the extents (after a shrinking
    /// resize) drifts back in instead of flipping its sign every frame. The
    /// move runs before the check, so a dot can sit up to one frame's
    /// displacement outside the extents for a single frame.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.pos += p.vel;
            if (p.pos.x > self.width && p.vel.x > 0.0) || (p.pos.x < 0.0 && p.vel.x < 0.0) {
                p.vel.x = -p.vel.x;
            }
            if (p.pos.y > self.height && p.vel.y > 0.0) || (p.pos.y < 0.0 && p.vel.y < 0.0) {
                p.vel.y = -p.vel.y;
            }
        }
    }

    /// Record new viewport extents.
    ///
    /// Positions are left alone: a dot outside the new extents keeps its
    /// drift until its own motion carries it back inside.
    pub fn resize(&mut self, width: f32, height: f32) {
        log::debug!("[field] resize {}x{}", width, height);
        self.width = width;
        self.height = height;
    }
}
