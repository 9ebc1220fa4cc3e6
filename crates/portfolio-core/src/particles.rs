use crate::constants::{PARTICLE_COUNT, PARTICLE_MAX_RADIUS, PARTICLE_MAX_SPEED};
use crate::error::PortfolioError;
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleConfig {
    pub count: usize,
    pub max_speed: f32,
    pub max_radius: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            max_speed: PARTICLE_MAX_SPEED,
            max_radius: PARTICLE_MAX_RADIUS,
        }
    }
}

impl ParticleConfig {
    pub fn validate(&self) -> Result<(), PortfolioError> {
        if !(self.max_speed.is_finite() && self.max_speed >= 0.0) {
            return Err(PortfolioError::InvalidParticleConfig(
                "max_speed must be finite and non-negative",
            ));
        }
        if !(self.max_radius.is_finite() && self.max_radius >= 0.0) {
            return Err(PortfolioError::InvalidParticleConfig(
                "max_radius must be finite and non-negative",
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
}

/// Fixed-size pool of particles bouncing inside a `width` x `height` box.
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Vec2,
}

impl ParticleField {
    pub fn new(
        config: ParticleConfig,
        width: f32,
        height: f32,
        seed: u64,
    ) -> Result<Self, PortfolioError> {
        config.validate()?;
        let bounds = checked_bounds(width, height)?;
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..config.count)
            .map(|_| Particle {
                position: Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y),
                velocity: Vec2::new(
                    (rng.gen::<f32>() - 0.5) * 2.0 * config.max_speed,
                    (rng.gen::<f32>() - 0.5) * 2.0 * config.max_speed,
                ),
                radius: rng.gen::<f32>() * config.max_radius,
            })
            .collect();
        Ok(Self { particles, bounds })
    }

    /// Build a field from explicit particles. Positions are clamped into bounds.
    #[doc(hidden)]
    pub fn from_particles(
        mut particles: Vec<Particle>,
        width: f32,
        height: f32,
    ) -> Result<Self, PortfolioError> {
        let bounds = checked_bounds(width, height)?;
        for p in &mut particles {
            p.position = p.position.clamp(Vec2::ZERO, bounds);
        }
        Ok(Self { particles, bounds })
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Advance every particle by one frame.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            let (x, vx) = reflect_axis(p.position.x, p.velocity.x, self.bounds.x);
            let (y, vy) = reflect_axis(p.position.y, p.velocity.y, self.bounds.y);
            p.position = Vec2::new(x, y);
            p.velocity = Vec2::new(vx, vy);
        }
    }

    /// Follow a viewport resize. Particles left outside are pulled onto the edge.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), PortfolioError> {
        self.bounds = checked_bounds(width, height)?;
        for p in &mut self.particles {
            p.position = p.position.clamp(Vec2::ZERO, self.bounds);
        }
        Ok(())
    }
}

fn checked_bounds(width: f32, height: f32) -> Result<Vec2, PortfolioError> {
    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        Ok(Vec2::new(width, height))
    } else {
        Err(PortfolioError::EmptyViewport { width, height })
    }
}

/// One axis of elastic reflection inside `[0, limit]`.
///
/// The velocity sign flips exactly when `pos + vel` leaves the interval; the
/// overshoot is mirrored back so the returned position is always in range.
#[inline]
pub fn reflect_axis(pos: f32, vel: f32, limit: f32) -> (f32, f32) {
    let next = pos + vel;
    if next < 0.0 {
        ((-next).min(limit), -vel)
    } else if next > limit {
        ((2.0 * limit - next).max(0.0), -vel)
    } else {
        (next, vel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_field_respects_config() {
        let cfg = ParticleConfig::default();
        let field = ParticleField::new(cfg, 800.0, 600.0, 7).unwrap();
        assert_eq!(field.len(), PARTICLE_COUNT);
        for p in field.particles() {
            assert!(p.velocity.x.abs() <= cfg.max_speed);
            assert!(p.velocity.y.abs() <= cfg.max_speed);
            assert!(p.radius >= 0.0 && p.radius < cfg.max_radius);
        }
    }

    #[test]
    fn same_seed_same_field() {
        let a = ParticleField::new(ParticleConfig::default(), 320.0, 240.0, 42).unwrap();
        let b = ParticleField::new(ParticleConfig::default(), 320.0, 240.0, 42).unwrap();
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn zero_sized_viewport_is_rejected() {
        assert!(matches!(
            ParticleField::new(ParticleConfig::default(), 0.0, 600.0, 1),
            Err(PortfolioError::EmptyViewport { .. })
        ));
    }

    #[test]
    fn reflect_axis_mirrors_overshoot() {
        let (x, v) = reflect_axis(0.1, -0.3, 10.0);
        assert!((x - 0.2).abs() < 1e-5);
        assert_eq!(v, 0.3);
        let (x, v) = reflect_axis(9.9, 0.3, 10.0);
        assert!((x - 9.8).abs() < 1e-5);
        assert_eq!(v, -0.3);
        assert_eq!(reflect_axis(5.0, 0.25, 10.0), (5.25, 0.25));
    }
}
