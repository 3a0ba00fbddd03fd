use glam::Vec2;
use rand::Rng;

use crate::constants::{ALPHA_MIN, ALPHA_SPAN, DRIFT_MAX_PER_FRAME, RADIUS_MIN, RADIUS_SPAN};

/// A single dot in the background field.
///
/// `vel` is a per-frame displacement, not a rate: the field advances by
/// exactly one `vel` per step. Component magnitudes are fixed at spawn; only
/// their signs change afterwards, when the dot reflects off an edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Opacity of the fixed accent hue, set once at spawn.
    pub alpha: f32,
}

impl Particle {
    /// Spawn a dot at a random position inside `width x height`.
    pub fn spawn<R: Rng>(rng: &mut R, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
            vel: Vec2::new(drift_component(rng), drift_component(rng)),
            radius: RADIUS_MIN + rng.gen::<f32>() * RADIUS_SPAN,
            alpha: ALPHA_MIN + rng.gen::<f32>() * ALPHA_SPAN,
        }
    }
}

/// Uniform in `[-DRIFT_MAX_PER_FRAME, DRIFT_MAX_PER_FRAME]`, resampled on an
/// exact zero so every dot actually moves on both axes.
fn drift_component<R: Rng>(rng: &mut R) -> f32 {
    loop {
        let v = rng.gen_range(-DRIFT_MAX_PER_FRAME..=DRIFT_MAX_PER_FRAME);
        if v != 0.0 {
            return v;
        }
    }
}
