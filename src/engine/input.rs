//! Input handling for [`OrreryEngine`].

use super::OrreryEngine;
use crate::carousel::TransitionRequest;
use crate::input::InputEvent;
use crate::scene::SceneSurface;

impl<S: SceneSurface> OrreryEngine<S> {
    /// Process a platform-agnostic input event.
    ///
    /// Wheel events go through the carousel controller; an accepted
    /// transition is scheduled on the tween engine right away and its
    /// request is returned. Dropped events return `None`.
    ///
    /// ```ignore
    /// engine.handle_input(InputEvent::Wheel(WheelEvent::new(120.0)));
    /// engine.update(dt);
    /// ```
    pub fn handle_input(
        &mut self,
        event: InputEvent,
    ) -> Option<TransitionRequest> {
        match event {
            InputEvent::Wheel(wheel) => {
                let transition = self.controller.handle_wheel(wheel)?;
                let request = transition.request;
                self.executor.execute(transition, &mut self.tweens);
                Some(request)
            }
        }
    }
}
