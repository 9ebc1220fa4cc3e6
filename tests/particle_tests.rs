// Host-side tests for the particle field.
// The web crate is wasm-only; the simulation lives in portfolio-core.

use glam::Vec2;
use portfolio_core::{reflect_axis, Particle, ParticleConfig, ParticleField};

fn in_bounds(field: &ParticleField) -> bool {
    let b = field.bounds();
    field.particles().iter().all(|p| {
        p.position.x >= 0.0 && p.position.x <= b.x && p.position.y >= 0.0 && p.position.y <= b.y
    })
}

#[test]
fn particles_stay_in_bounds_over_many_ticks() {
    for seed in [1_u64, 7, 42, 1234] {
        let mut field = ParticleField::new(ParticleConfig::default(), 640.0, 480.0, seed).unwrap();
        assert!(in_bounds(&field));
        for tick in 0..20_000 {
            field.step();
            assert!(in_bounds(&field), "seed {seed} escaped at tick {tick}");
        }
    }
}

#[test]
fn fast_particles_in_a_tiny_box_stay_in_bounds() {
    let cfg = ParticleConfig {
        count: 50,
        max_speed: 3.0,
        max_radius: 1.0,
    };
    let mut field = ParticleField::new(cfg, 4.0, 4.0, 99).unwrap();
    for _ in 0..5_000 {
        field.step();
        assert!(in_bounds(&field));
    }
}

#[test]
fn velocity_flips_exactly_on_boundary_overshoot() {
    let mut field = ParticleField::new(ParticleConfig::default(), 300.0, 200.0, 5).unwrap();
    for _ in 0..2_000 {
        let before: Vec<Particle> = field.particles().to_vec();
        field.step();
        let b = field.bounds();
        for (old, new) in before.iter().zip(field.particles()) {
            let nx = old.position.x + old.velocity.x;
            let ny = old.position.y + old.velocity.y;
            let x_out = !(0.0..=b.x).contains(&nx);
            let y_out = !(0.0..=b.y).contains(&ny);
            assert_eq!(new.velocity.x == -old.velocity.x && old.velocity.x != 0.0, x_out);
            assert_eq!(new.velocity.y == -old.velocity.y && old.velocity.y != 0.0, y_out);
            // Speed is preserved: no energy loss
            assert_eq!(new.velocity.x.abs(), old.velocity.x.abs());
            assert_eq!(new.velocity.y.abs(), old.velocity.y.abs());
        }
    }
}

#[test]
fn particle_heading_into_wall_bounces_back() {
    let p = Particle {
        position: Vec2::new(99.9, 50.0),
        velocity: Vec2::new(0.25, 0.0),
        radius: 1.0,
    };
    let mut field = ParticleField::from_particles(vec![p], 100.0, 100.0).unwrap();
    field.step();
    let q = field.particles()[0];
    assert!(q.velocity.x < 0.0);
    assert!(q.position.x <= 100.0);
    field.step();
    assert!(field.particles()[0].position.x < q.position.x);
}

#[test]
fn interior_motion_is_plain_translation() {
    assert_eq!(reflect_axis(10.0, 0.5, 100.0), (10.5, 0.5));
    assert_eq!(reflect_axis(10.0, -0.5, 100.0), (9.5, -0.5));
    // Landing exactly on the edge is still inside
    assert_eq!(reflect_axis(99.5, 0.5, 100.0), (100.0, 0.5));
}

#[test]
fn resize_pulls_particles_into_new_bounds() {
    let mut field = ParticleField::new(ParticleConfig::default(), 1920.0, 1080.0, 3).unwrap();
    field.resize(320.0, 240.0).unwrap();
    assert_eq!(field.bounds(), Vec2::new(320.0, 240.0));
    assert!(in_bounds(&field));
    for _ in 0..1_000 {
        field.step();
    }
    assert!(in_bounds(&field));
}

#[test]
fn resize_to_empty_viewport_fails_and_keeps_bounds() {
    let mut field = ParticleField::new(ParticleConfig::default(), 800.0, 600.0, 3).unwrap();
    assert!(field.resize(0.0, 0.0).is_err());
    assert_eq!(field.bounds(), Vec2::new(800.0, 600.0));
}

#[test]
fn invalid_config_is_rejected() {
    let cfg = ParticleConfig {
        max_speed: f32::NAN,
        ..ParticleConfig::default()
    };
    assert!(cfg.validate().is_err());
    assert!(ParticleField::new(cfg, 100.0, 100.0, 1).is_err());
}
