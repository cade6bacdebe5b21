//! Easing curves and the frame-stepped tween engine.

pub mod easing;
pub mod tween;

pub use easing::EasingFunction;
pub use tween::{
    Tween, TweenCallback, TweenEngine, TweenId, TweenTarget, TweenValue,
    Tweener,
};
