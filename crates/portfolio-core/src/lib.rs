pub mod constants;
pub mod content;
pub mod error;
pub mod glitch;
pub mod markup;
pub mod particles;
pub mod session;
pub mod slot;

pub use content::*;
pub use error::PortfolioError;
pub use glitch::GlitchCycle;
pub use particles::*;
pub use session::*;
pub use slot::MountSlot;
