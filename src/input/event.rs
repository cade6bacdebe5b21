/// Pixels reported per wheel notch for line-based scroll devices, matching
/// the `deltaY` a browser reports for one notch.
pub const PIXELS_PER_LINE: f32 = 100.0;

/// A single wheel-scroll event.
///
/// `delta_y` follows the DOM `WheelEvent.deltaY` convention: positive means
/// the user scrolled down (toward the next heading). `None` stands for an
/// event whose delta was missing or unreadable.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelEvent {
    /// Signed vertical scroll amount in pixels.
    pub delta_y: Option<f32>,
}

impl WheelEvent {
    /// Wheel event with a known vertical delta.
    #[must_use]
    pub fn new(delta_y: f32) -> Self {
        Self {
            delta_y: Some(delta_y),
        }
    }

    /// The vertical delta, or `None` if it is missing or not a finite
    /// number.
    #[must_use]
    pub fn finite_delta(&self) -> Option<f32> {
        self.delta_y.filter(|d| d.is_finite())
    }
}

/// Platform-agnostic input events consumed by the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Mouse wheel or touchpad scroll.
    Wheel(WheelEvent),
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseScrollDelta> for WheelEvent {
    /// winit reports positive `y` when content should move down (wheel
    /// pushed away), the opposite sign of DOM `deltaY`.
    fn from(delta: winit::event::MouseScrollDelta) -> Self {
        use winit::event::MouseScrollDelta;
        #[allow(clippy::cast_possible_truncation)]
        let delta_y = match delta {
            MouseScrollDelta::LineDelta(_, y) => -y * PIXELS_PER_LINE,
            MouseScrollDelta::PixelDelta(pos) => -(pos.y as f32),
        };
        Self::new(delta_y)
    }
}
