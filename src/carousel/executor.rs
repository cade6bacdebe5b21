//! Turns a transition into the coupled caption and rotation tweens.

use super::controller::Transition;
use super::transition::TransitionRequest;
use crate::animation::{
    EasingFunction, Tween, TweenTarget, TweenValue, Tweener,
};
use crate::options::CarouselOptions;

/// Schedules the two animations of a transition.
///
/// Both tweens start together with the same duration and easing:
/// - every caption moves to `to_index * -caption_step` percent;
/// - the planet group yaw changes by one rotation step (negative for
///   down, positive for up).
///
/// Only the caption tween carries the completion signal; the rotation
/// finishes on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionExecutor {
    duration: f32,
    easing: EasingFunction,
    caption_step: f32,
    rotation_step: f32,
}

impl TransitionExecutor {
    /// Executor with explicit timing and step sizes (`rotation_step` in
    /// radians).
    #[must_use]
    pub fn new(
        duration: f32,
        easing: EasingFunction,
        caption_step: f32,
        rotation_step: f32,
    ) -> Self {
        Self {
            duration,
            easing,
            caption_step,
            rotation_step,
        }
    }

    /// Executor from the carousel options.
    #[must_use]
    pub fn from_options(options: &CarouselOptions) -> Self {
        Self::new(
            options.duration_secs,
            options.easing,
            options.caption_step_percent,
            options.rotation_step_degrees.to_radians(),
        )
    }

    /// Caption offset (percent) that brings heading `index` into view.
    #[must_use]
    pub fn caption_offset_for(&self, index: usize) -> f32 {
        index as f32 * -self.caption_step
    }

    /// Caption tween for `request`.
    #[must_use]
    pub fn caption_tween(&self, request: &TransitionRequest) -> Tween {
        Tween::new(self.duration, self.easing).with(
            TweenTarget::CaptionOffset,
            TweenValue::To(self.caption_offset_for(request.to_index)),
        )
    }

    /// Rotation tween for `request`, relative to the yaw at start.
    #[must_use]
    pub fn rotation_tween(&self, request: &TransitionRequest) -> Tween {
        Tween::new(self.duration, self.easing).with(
            TweenTarget::GroupYaw,
            TweenValue::By(request.direction.yaw_delta(self.rotation_step)),
        )
    }

    /// Schedule both tweens and return immediately.
    ///
    /// The transition's completion signal is attached to the caption tween
    /// only, so the carousel is released exactly once.
    pub fn execute(&self, transition: Transition, tweener: &mut dyn Tweener) {
        let Transition {
            request,
            completion,
        } = transition;

        let caption = tweener.animate(
            self.caption_tween(&request),
            Some(Box::new(move || {
                let _ = completion.complete();
            })),
        );
        let rotation = tweener.animate(self.rotation_tween(&request), None);
        log::debug!(
            "transition {:?}: caption tween {caption:?}, rotation tween \
             {rotation:?}",
            request.id
        );
    }
}

impl Default for TransitionExecutor {
    fn default() -> Self {
        Self::from_options(&CarouselOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;
    use crate::animation::{TweenCallback, TweenId};
    use crate::carousel::CarouselController;
    use crate::input::WheelEvent;
    use crate::options::Options;
    use crate::scene::{OrbitScene, SceneSurface};

    /// Records scheduled tweens and lets the test fire callbacks by hand.
    #[derive(Default)]
    struct RecordingTweener {
        tweens: Vec<Tween>,
        callbacks: Vec<Option<TweenCallback>>,
    }

    impl RecordingTweener {
        fn fire(&mut self, index: usize) {
            if let Some(cb) = self.callbacks[index].take() {
                cb();
            }
        }
    }

    impl Tweener for RecordingTweener {
        fn animate(
            &mut self,
            tween: Tween,
            on_complete: Option<TweenCallback>,
        ) -> TweenId {
            self.tweens.push(tween);
            self.callbacks.push(on_complete);
            TweenId::from_raw(self.tweens.len() as u64)
        }
    }

    /// Applies every tween instantly and fires its callback immediately.
    struct ImmediateTweener<'a> {
        surface: &'a mut OrbitScene,
    }

    impl Tweener for ImmediateTweener<'_> {
        fn animate(
            &mut self,
            tween: Tween,
            on_complete: Option<TweenCallback>,
        ) -> TweenId {
            for (target, value) in &tween.properties {
                let start = target.read(&*self.surface);
                let end = match *value {
                    TweenValue::To(v) => v,
                    TweenValue::By(d) => start + d,
                };
                target.write(&mut *self.surface, end);
            }
            if let Some(cb) = on_complete {
                cb();
            }
            TweenId::from_raw(0)
        }
    }

    fn assert_yaw_by(tween: &Tween, expected: f32) {
        match tween.properties[0].1 {
            TweenValue::By(d) => assert!((d - expected).abs() < 1e-6),
            TweenValue::To(_) => unreachable!("rotation must be relative"),
        }
    }

    fn setup() -> (CarouselController, TransitionExecutor) {
        (
            CarouselController::new(4, 30.0),
            TransitionExecutor::default(),
        )
    }

    #[test]
    fn schedules_caption_and_rotation_with_shared_timing() {
        let (mut c, exec) = setup();
        let mut tweener = RecordingTweener::default();
        let t = c.handle_wheel(WheelEvent::new(100.0)).unwrap();
        exec.execute(t, &mut tweener);

        assert_eq!(tweener.tweens.len(), 2);
        let caption = &tweener.tweens[0];
        let rotation = &tweener.tweens[1];
        assert_eq!(
            caption.properties,
            vec![(TweenTarget::CaptionOffset, TweenValue::To(-100.0))]
        );
        assert_eq!(rotation.properties.len(), 1);
        assert_eq!(rotation.properties[0].0, TweenTarget::GroupYaw);
        assert_yaw_by(rotation, -FRAC_PI_2);
        for tween in &tweener.tweens {
            assert_eq!(tween.duration, 1.0);
            assert_eq!(tween.easing, EasingFunction::CubicInOut);
        }
        // Only the caption tween reports back
        assert!(tweener.callbacks[0].is_some());
        assert!(tweener.callbacks[1].is_none());
    }

    #[test]
    fn up_transition_turns_positive() {
        let (mut c, exec) = setup();
        let mut tweener = RecordingTweener::default();
        let t = c.handle_wheel(WheelEvent::new(-100.0)).unwrap();
        exec.execute(t, &mut tweener);
        assert_eq!(
            tweener.tweens[0].properties[0].1,
            TweenValue::To(-300.0)
        );
        assert_yaw_by(&tweener.tweens[1], FRAC_PI_2);
    }

    #[test]
    fn busy_until_caption_callback_fires() {
        let (mut c, exec) = setup();
        let mut tweener = RecordingTweener::default();
        let t = c.handle_wheel(WheelEvent::new(100.0)).unwrap();
        exec.execute(t, &mut tweener);
        assert!(c.is_busy());

        assert!(c.handle_wheel(WheelEvent::new(100.0)).is_none());
        tweener.fire(0);
        assert!(!c.is_busy());
        // A second firing attempt has nothing left to run
        tweener.fire(0);
        assert!(!c.is_busy());
    }

    #[test]
    fn immediate_tweener_cycles_without_overlap() {
        let (mut c, exec) = setup();
        let mut scene = OrbitScene::from_options(&Options::default());
        for expected in [1, 2, 3, 0, 1] {
            let t = c.handle_wheel(WheelEvent::new(120.0)).unwrap();
            exec.execute(
                t,
                &mut ImmediateTweener {
                    surface: &mut scene,
                },
            );
            assert!(!c.is_busy());
            assert_eq!(c.heading_index(), expected);
            assert_eq!(scene.caption_offset(), expected as f32 * -100.0);
        }
        assert!((scene.group_yaw() + 5.0 * FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn down_then_up_nets_zero_rotation() {
        let (mut c, exec) = setup();
        let mut scene = OrbitScene::from_options(&Options::default());
        for delta in [100.0, -100.0] {
            let t = c.handle_wheel(WheelEvent::new(delta)).unwrap();
            exec.execute(
                t,
                &mut ImmediateTweener {
                    surface: &mut scene,
                },
            );
        }
        assert_eq!(c.heading_index(), 0);
        assert!(scene.group_yaw().abs() < 1e-6);
        assert_eq!(scene.caption_offset(), 0.0);
    }

    #[test]
    fn custom_steps_from_options() {
        let exec = TransitionExecutor::from_options(&CarouselOptions {
            caption_step_percent: 50.0,
            rotation_step_degrees: 180.0,
            ..CarouselOptions::default()
        });
        assert_eq!(exec.caption_offset_for(3), -150.0);
        let request = TransitionRequest {
            id: crate::carousel::TransitionId(0),
            direction: crate::carousel::Direction::Up,
            from_index: 0,
            to_index: 1,
        };
        assert_yaw_by(&exec.rotation_tween(&request), std::f32::consts::PI);
    }
}
