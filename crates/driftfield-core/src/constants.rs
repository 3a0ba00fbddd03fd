/// Field tuning constants.
///
/// These express intended behavior (population size, spawn ranges) and keep
/// magic numbers out of the field code.
// Dots in the field; fixed for the page lifetime.
pub const PARTICLE_COUNT: usize = 100;

// Dot radius spawn range (canvas px): uniform in [RADIUS_MIN, RADIUS_MIN + RADIUS_SPAN)
pub const RADIUS_MIN: f32 = 1.0;
pub const RADIUS_SPAN: f32 = 2.0;

// Per-axis drift cap (canvas px per frame); spawn draws from [-cap, cap]
pub const DRIFT_MAX_PER_FRAME: f32 = 0.25;

// Fill opacity spawn range for the fixed accent hue
pub const ALPHA_MIN: f32 = 0.3;
pub const ALPHA_SPAN: f32 = 0.7;
