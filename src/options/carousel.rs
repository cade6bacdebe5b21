use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Carousel", inline)]
#[serde(default)]
/// Wheel filtering and transition timing for the heading carousel.
pub struct CarouselOptions {
    /// Minimum `|deltaY|` (pixels) a wheel event needs to trigger a
    /// transition. Events at or below it are dropped.
    #[schemars(title = "Wheel Threshold", range(min = 0.0, max = 200.0), extend("step" = 1.0))]
    pub wheel_threshold: f32,
    /// Transition duration in seconds.
    #[schemars(title = "Duration", range(min = 0.1, max = 3.0), extend("step" = 0.05))]
    pub duration_secs: f32,
    /// Easing curve shared by the caption and rotation tweens.
    #[schemars(skip)]
    pub easing: EasingFunction,
    /// Caption offset per heading, in percent of a caption's height.
    #[schemars(skip)]
    pub caption_step_percent: f32,
    /// Planet group rotation per transition, in degrees.
    #[schemars(title = "Rotation Step", range(min = 15.0, max = 180.0), extend("step" = 5.0))]
    pub rotation_step_degrees: f32,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            wheel_threshold: 30.0,
            duration_secs: 1.0,
            easing: EasingFunction::CubicInOut,
            caption_step_percent: 100.0,
            rotation_step_degrees: 90.0,
        }
    }
}
