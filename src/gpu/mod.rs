//! GPU presentation for the native viewer.
//!
//! Owns the wgpu device/surface and clears each frame to the scene's
//! background color. Drawing the planets themselves belongs to the
//! rendering backend and is not done here.

pub mod render_context;

pub use render_context::{GpuSetupError, RenderContext};
