//! Scene surface: the collaborator the carousel animates.
//!
//! The carousel never touches a renderer directly. It reads and writes two
//! properties through [`SceneSurface`]: the shared vertical offset of the
//! heading captions and the yaw of the planet group. [`OrbitScene`] is the
//! in-memory implementation used by the native viewer and by tests.

mod layout;
mod loading;
mod orbit;

pub use layout::PlanetLayout;
pub use loading::{AssetManifest, LoadingTracker};
pub use orbit::OrbitScene;

/// Capabilities a scene must expose for the carousel to drive it.
pub trait SceneSurface {
    /// Number of heading captions, discovered once at initialization.
    fn caption_count(&self) -> usize;

    /// Current shared caption offset, in percent of one caption's height.
    fn caption_offset(&self) -> f32;

    /// Move every caption to `percent` at once.
    fn set_caption_offset(&mut self, percent: f32);

    /// Current planet group yaw in radians.
    fn group_yaw(&self) -> f32;

    /// Set the planet group yaw in radians.
    fn set_group_yaw(&mut self, radians: f32);

    /// Per-frame hook, called once after tweens are stepped.
    fn advance_frame(&mut self) {}
}
