//! Carousel state and the busy latch shared with in-flight transitions.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use super::transition::TransitionId;

/// Mutual-exclusion latch: holds the id of the transition in flight.
///
/// Release is keyed by transition id, so a late or repeated completion for
/// an earlier transition can never free a later one.
#[derive(Debug, Default)]
pub(crate) struct BusyLatch {
    active: Cell<Option<TransitionId>>,
}

impl BusyLatch {
    pub(crate) fn is_busy(&self) -> bool {
        self.active.get().is_some()
    }

    pub(crate) fn acquire(&self, id: TransitionId) {
        self.active.set(Some(id));
    }

    /// Clear the latch if `id` holds it. Returns whether anything changed.
    pub(crate) fn release(&self, id: TransitionId) -> bool {
        if self.active.get() == Some(id) {
            self.active.set(None);
            true
        } else {
            false
        }
    }
}

/// Heading position and busy flag of one carousel.
///
/// Starts at heading `0`, idle. Only [`CarouselController`] mutates it.
///
/// [`CarouselController`]: super::CarouselController
#[derive(Debug)]
pub struct CarouselState {
    heading_index: usize,
    total_headings: usize,
    latch: Rc<BusyLatch>,
    next_id: u64,
}

impl CarouselState {
    /// Idle state at heading `0` for a carousel of `total_headings`.
    #[must_use]
    pub fn new(total_headings: usize) -> Self {
        Self {
            heading_index: 0,
            total_headings,
            latch: Rc::new(BusyLatch::default()),
            next_id: 0,
        }
    }

    /// Index of the current (target) heading.
    #[must_use]
    pub fn heading_index(&self) -> usize {
        self.heading_index
    }

    /// Number of headings, fixed at construction.
    #[must_use]
    pub fn total_headings(&self) -> usize {
        self.total_headings
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.latch.is_busy()
    }

    pub(super) fn set_heading_index(&mut self, index: usize) {
        self.heading_index = index;
    }

    /// Mark busy under a fresh transition id and hand back the signal that
    /// will release it.
    pub(super) fn begin_transition(&mut self) -> CompletionSignal {
        let id = TransitionId(self.next_id);
        self.next_id += 1;
        self.latch.acquire(id);
        CompletionSignal {
            latch: Rc::downgrade(&self.latch),
            id,
        }
    }
}

/// Single-shot signal that ends one transition.
///
/// Consumed by [`complete`](Self::complete), so it fires at most once. It
/// holds only a weak handle to the latch: a signal that outlives its
/// carousel is inert.
#[derive(Debug)]
#[must_use = "the carousel stays busy until this signal is completed"]
pub struct CompletionSignal {
    latch: Weak<BusyLatch>,
    id: TransitionId,
}

impl CompletionSignal {
    /// The transition this signal belongs to.
    #[must_use]
    pub fn id(&self) -> TransitionId {
        self.id
    }

    /// Release the busy flag if this transition still holds it. Returns
    /// whether the carousel became idle.
    #[allow(clippy::must_use_candidate)]
    pub fn complete(self) -> bool {
        let released = self
            .latch
            .upgrade()
            .is_some_and(|latch| latch.release(self.id));
        log::debug!(
            "transition {:?} complete (released: {released})",
            self.id
        );
        released
    }
}
