/// Scroll direction of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward the previous heading (negative `deltaY`).
    Up,
    /// Toward the next heading (positive `deltaY`).
    Down,
}

impl Direction {
    /// Direction for a signed wheel delta. Zero scrolls up, matching a
    /// strict `delta > 0` test for down.
    #[must_use]
    pub fn from_delta(delta_y: f32) -> Self {
        if delta_y > 0.0 {
            Self::Down
        } else {
            Self::Up
        }
    }

    /// Index reached from `index` after one step in this direction, wrapping
    /// modulo `total`. `None` when there are no headings.
    #[must_use]
    pub fn step(self, index: usize, total: usize) -> Option<usize> {
        if total == 0 {
            return None;
        }
        let index = index % total;
        Some(match self {
            Self::Down => (index + 1) % total,
            Self::Up => (index + total - 1) % total,
        })
    }

    /// Signed yaw change for a rotation step of `step_radians`: down turns
    /// the group clockwise (negative), up counter-clockwise.
    #[must_use]
    pub fn yaw_delta(self, step_radians: f32) -> f32 {
        match self {
            Self::Down => -step_radians,
            Self::Up => step_radians,
        }
    }
}

/// Monotonic identifier of one transition, unique per controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionId(pub(crate) u64);

/// One discrete carousel step, emitted by the controller and consumed by
/// the executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRequest {
    /// Which transition this is.
    pub id: TransitionId,
    /// Scroll direction.
    pub direction: Direction,
    /// Heading index before the step.
    pub from_index: usize,
    /// Heading index after the step.
    pub to_index: usize,
}
