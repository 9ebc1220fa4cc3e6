// DOM hooks and browser-side tuning used by the web frontend.

// Elements provided by index.html
pub const ROOT_ID: &str = "portfolio-root";
pub const CANVAS_ID: &str = "particle-canvas";
pub const GLOW_ID: &str = "mouse-glow";

// Classes toggled at runtime
pub const GLITCH_CLASS: &str = "glitch";
pub const REVEALED_CLASS: &str = "revealed";

// document.readyState while the HTML is still being parsed
pub const READY_STATE_LOADING: &str = "loading";

// Fraction of a section that must be visible before it is revealed
pub const REVEAL_THRESHOLD: f64 = 0.15;

// Browsing context used for project links
pub const PROJECT_LINK_TARGET: &str = "_blank";
