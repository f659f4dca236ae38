//! Animated canvas backdrop.
//!
//! Paints a full-window canvas behind the page with:
//! - Bouncing translucent balls that reflect off the window edges
//! - Pulsing dashed rings and orbiting circles around the center
//! - Drifting particles that wrap around the edges
//! - Thin lines linking particles that drift close together
//!
//! The animation is skipped entirely when the user prefers reduced motion.
//!
//! # Example
//!
//! ```ignore
//! use portfolio_backdrop::{BackdropCanvas, BackdropConfig};
//!
//! let mut config = BackdropConfig::default();
//! config.balls.count = 6;
//!
//! view! { <BackdropCanvas config=config /> }
//! ```

mod ambient;
mod balls;
mod component;
pub mod config;
mod links;
mod motion;
mod particles;
mod render;
mod state;
pub mod style;
mod surface;
mod types;

pub use component::BackdropCanvas;
pub use config::BackdropConfig;
pub use state::{BackdropState, RunState};
pub use style::Color;
pub use surface::{Glow, Stroke, Surface};
pub use types::Viewport;
