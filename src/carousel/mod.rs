//! Scroll-driven heading carousel.
//!
//! [`CarouselController`] filters and debounces wheel input and cycles the
//! heading index; [`TransitionExecutor`] turns each accepted transition into
//! a caption tween and a planet-group rotation tween. The two are coupled
//! only through the [`CompletionSignal`] carried by the caption tween.
//!
//! ```text
//! Idle ──wheel(|Δy| > threshold)──▶ Transitioning ──caption done──▶ Idle
//!                                        │
//!                                        └─ wheel ▶ dropped
//! ```

mod controller;
mod executor;
mod state;
mod transition;

pub use controller::{CarouselController, Transition};
pub use executor::TransitionExecutor;
pub use state::{CarouselState, CompletionSignal};
pub use transition::{Direction, TransitionId, TransitionRequest};
