// Host-side tests for the particle field model.

use driftfield_core::constants::{
    ALPHA_MIN, ALPHA_SPAN, DRIFT_MAX_PER_FRAME, RADIUS_MIN, RADIUS_SPAN,
};
use driftfield_core::ParticleField;

const W: f32 = 640.0;
const H: f32 = 480.0;

#[test]
fn population_is_fixed_after_construction() {
    let mut field = ParticleField::new(W, H, 100, 7);
    assert_eq!(field.particles().len(), 100);

    for _ in 0..1_000 {
        field.step();
    }
    assert_eq!(field.particles().len(), 100);

    field.resize(120.0, 90.0);
    field.step();
    assert_eq!(field.particles().len(), 100);
}

#[test]
fn spawn_ranges_hold_for_every_particle() {
    let field = ParticleField::new(W, H, 200, 11);
    for p in field.particles() {
        assert!(p.pos.x >= 0.0 && p.pos.x <= W);
        assert!(p.pos.y >= 0.0 && p.pos.y <= H);
        assert!(p.radius >= RADIUS_MIN && p.radius < RADIUS_MIN + RADIUS_SPAN);
        assert!(p.alpha >= ALPHA_MIN && p.alpha < ALPHA_MIN + ALPHA_SPAN);
        // Drift is nonzero on both axes and capped per frame
        assert!(p.vel.x != 0.0 && p.vel.x.abs() <= DRIFT_MAX_PER_FRAME);
        assert!(p.vel.y != 0.0 && p.vel.y.abs() <= DRIFT_MAX_PER_FRAME);
    }
}

#[test]
fn positions_stay_within_extents_modulo_one_frame_overshoot() {
    let mut field = ParticleField::new(W, H, 100, 3);
    for _ in 0..10_000 {
        field.step();
        for p in field.particles() {
            assert!(p.pos.x >= -DRIFT_MAX_PER_FRAME && p.pos.x <= W + DRIFT_MAX_PER_FRAME);
            assert!(p.pos.y >= -DRIFT_MAX_PER_FRAME && p.pos.y <= H + DRIFT_MAX_PER_FRAME);
        }
    }
}

#[test]
fn velocity_magnitude_is_invariant_only_signs_flip() {
    let mut field = ParticleField::new(W, H, 100, 5);
    let magnitudes: Vec<(f32, f32)> = field
        .particles()
        .iter()
        .map(|p| (p.vel.x.abs(), p.vel.y.abs()))
        .collect();

    for _ in 0..10_000 {
        field.step();
    }

    // Sign inversion is exact in IEEE arithmetic, so the magnitudes must
    // match bit-for-bit after any number of bounces.
    for (p, (mx, my)) in field.particles().iter().zip(&magnitudes) {
        assert_eq!(p.vel.x.abs(), *mx);
        assert_eq!(p.vel.y.abs(), *my);
    }
}

#[test]
fn resize_is_idempotent() {
    let mut once = ParticleField::new(W, H, 50, 9);
    let mut twice = ParticleField::new(W, H, 50, 9);

    once.resize(300.0, 200.0);
    twice.resize(300.0, 200.0);
    twice.resize(300.0, 200.0);

    assert_eq!(once.width(), twice.width());
    assert_eq!(once.height(), twice.height());
    assert_eq!(once.particles(), twice.particles());
}

#[test]
fn resize_does_not_touch_particles() {
    let mut field = ParticleField::new(W, H, 50, 13);
    let before: Vec<_> = field.particles().to_vec();

    field.resize(32.0, 24.0);

    assert_eq!(field.width(), 32.0);
    assert_eq!(field.height(), 24.0);
    assert_eq!(field.particles(), &before[..]);
}

#[test]
fn same_seed_reproduces_the_same_field() {
    let a = ParticleField::new(W, H, 100, 42);
    let b = ParticleField::new(W, H, 100, 42);
    assert_eq!(a.particles(), b.particles());

    let c = ParticleField::new(W, H, 100, 43);
    assert_ne!(a.particles(), c.particles());
}

#[test]
fn stranded_particles_head_back_after_a_shrinking_resize() {
    let mut field = ParticleField::new(W, H, 100, 21);
    field.resize(50.0, 50.0);
    field.step();

    // After one step every dot beyond an edge must be moving back toward it,
    // and further steps must not flip it outward again while it is outside.
    let inward = |pos: f32, vel: f32, extent: f32| -> bool {
        if pos > extent {
            vel < 0.0
        } else if pos < 0.0 {
            vel > 0.0
        } else {
            true
        }
    };
    for p in field.particles() {
        assert!(inward(p.pos.x, p.vel.x, 50.0));
        assert!(inward(p.pos.y, p.vel.y, 50.0));
    }

    let x_before: Vec<f32> = field.particles().iter().map(|p| p.pos.x).collect();
    for _ in 0..100 {
        field.step();
        for p in field.particles() {
            assert!(inward(p.pos.x, p.vel.x, 50.0));
            assert!(inward(p.pos.y, p.vel.y, 50.0));
        }
    }
    for (p, x0) in field.particles().iter().zip(&x_before) {
        if *x0 > 50.0 + DRIFT_MAX_PER_FRAME {
            assert!(p.pos.x <= *x0);
        }
    }
}
