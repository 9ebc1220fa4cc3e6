use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PortfolioError {
    #[error("skill `{name}` has level {level}, expected 0..=100")]
    SkillLevelOutOfRange { name: &'static str, level: u8 },
    #[error("invalid particle config: {0}")]
    InvalidParticleConfig(&'static str),
    #[error("viewport must be non-empty, got {width}x{height}")]
    EmptyViewport { width: f32, height: f32 },
}
