//! Input handling: platform-agnostic event types and conversions from
//! winit scroll deltas.

/// Platform-agnostic input events.
pub mod event;

pub use event::{InputEvent, WheelEvent, PIXELS_PER_LINE};
