// Shared animation/layout tuning constants used by the web frontend.

// Particle field
pub const PARTICLE_COUNT: usize = 100;
pub const PARTICLE_MAX_SPEED: f32 = 0.25; // px per frame, per axis
pub const PARTICLE_MAX_RADIUS: f32 = 2.0; // px

// Canvas paint styles
pub const TRAIL_FILL: &str = "rgba(0, 0, 0, 0.05)"; // low alpha leaves motion trails
pub const PARTICLE_FILL: &str = "rgba(0, 255, 159, 0.5)";

// Glitch timer
pub const GLITCH_PERIOD_MS: u32 = 5_000;
pub const GLITCH_ACTIVE_MS: u32 = 200;

// Mouse glow (w-96 element, centred on the pointer)
pub const GLOW_RADIUS_PX: f32 = 192.0;

// Staggered entrance delays
pub const SKILL_STAGGER_MS: u32 = 100;
pub const PROJECT_STAGGER_MS: u32 = 150;
pub const CERT_STAGGER_MS: u32 = 100;

// Skill levels are percentages
pub const MAX_SKILL_LEVEL: u8 = 100;
