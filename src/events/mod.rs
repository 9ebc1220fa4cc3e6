pub mod click;
pub mod glitch;
pub mod pointer;
pub mod viewport;

pub use click::wire_project_clicks;
pub use glitch::GlitchTimer;
pub use pointer::wire_pointer_glow;
pub use viewport::wire_viewport_resize;
