//! Wheel filtering, debouncing and heading cycling.

use super::state::{CarouselState, CompletionSignal};
use super::transition::{Direction, TransitionRequest};
use crate::input::WheelEvent;
use crate::options::CarouselOptions;

/// An accepted transition: the request plus the signal that ends it.
#[derive(Debug)]
pub struct Transition {
    /// What to animate.
    pub request: TransitionRequest,
    /// Fire once the caption animation finishes.
    pub completion: CompletionSignal,
}

/// Turns raw wheel input into at most one transition per animation window.
///
/// A wheel event starts a transition only if `|delta_y|` exceeds the
/// threshold **and** no transition is in flight. Everything else is
/// dropped, never queued. The heading index moves to the target as soon as
/// the transition is accepted.
#[derive(Debug)]
pub struct CarouselController {
    state: CarouselState,
    wheel_threshold: f32,
}

impl CarouselController {
    /// Controller for `total_headings` headings.
    #[must_use]
    pub fn new(total_headings: usize, wheel_threshold: f32) -> Self {
        Self {
            state: CarouselState::new(total_headings),
            wheel_threshold,
        }
    }

    /// Controller using the configured wheel threshold.
    #[must_use]
    pub fn from_options(
        total_headings: usize,
        options: &CarouselOptions,
    ) -> Self {
        Self::new(total_headings, options.wheel_threshold)
    }

    /// Read-only view of the carousel state.
    #[must_use]
    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    /// Index of the current (target) heading.
    #[must_use]
    pub fn heading_index(&self) -> usize {
        self.state.heading_index()
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.state.is_busy()
    }

    /// Minimum `|delta_y|` that can trigger a transition.
    #[must_use]
    pub fn wheel_threshold(&self) -> f32 {
        self.wheel_threshold
    }

    /// Process one wheel event.
    ///
    /// Returns the accepted transition, or `None` when the event was
    /// dropped: delta missing or not above the threshold, a transition
    /// already in flight, or no headings at all.
    pub fn handle_wheel(&mut self, event: WheelEvent) -> Option<Transition> {
        let Some(delta_y) = event.finite_delta() else {
            log::debug!("wheel dropped: no usable delta");
            return None;
        };
        if delta_y.abs() <= self.wheel_threshold {
            log::debug!("wheel dropped: |{delta_y}| below threshold");
            return None;
        }
        if self.state.is_busy() {
            log::debug!("wheel dropped: transition in flight");
            return None;
        }

        let direction = Direction::from_delta(delta_y);
        let from_index = self.state.heading_index();
        let to_index =
            direction.step(from_index, self.state.total_headings())?;

        let completion = self.state.begin_transition();
        self.state.set_heading_index(to_index);

        let request = TransitionRequest {
            id: completion.id(),
            direction,
            from_index,
            to_index,
        };
        log::info!(
            "carousel {direction:?}: heading {from_index} -> {to_index}"
        );
        Some(Transition {
            request,
            completion,
        })
    }
}
