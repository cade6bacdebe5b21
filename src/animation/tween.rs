//! Frame-stepped property tweens.
//!
//! A [`Tween`] animates one or more [`TweenTarget`] properties on a
//! [`SceneSurface`] over a fixed duration. The [`TweenEngine`] owns the
//! running tweens and advances them each frame; completion callbacks fire
//! exactly once, after the final values have been written.

use crate::scene::SceneSurface;

use super::easing::EasingFunction;

/// Completion callback invoked once when a tween finishes.
pub type TweenCallback = Box<dyn FnOnce()>;

/// Identifier handed out by [`Tweener::animate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TweenId(u64);

impl TweenId {
    /// Wrap a raw id, for [`Tweener`] implementations that number their
    /// own tweens.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// An animatable property of the scene surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TweenTarget {
    /// Shared vertical offset of every caption, in percent of the caption
    /// height.
    CaptionOffset,
    /// Yaw of the planet group, in radians.
    GroupYaw,
}

impl TweenTarget {
    /// Read the current value of this property.
    #[must_use]
    pub fn read(self, surface: &dyn SceneSurface) -> f32 {
        match self {
            Self::CaptionOffset => surface.caption_offset(),
            Self::GroupYaw => surface.group_yaw(),
        }
    }

    /// Write a new value for this property.
    pub fn write(self, surface: &mut dyn SceneSurface, value: f32) {
        match self {
            Self::CaptionOffset => surface.set_caption_offset(value),
            Self::GroupYaw => surface.set_group_yaw(value),
        }
    }
}

/// End value of a tweened property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenValue {
    /// Animate to an absolute value.
    To(f32),
    /// Animate by a relative amount (`+=`), resolved against the value
    /// read when the tween starts.
    By(f32),
}

impl TweenValue {
    fn resolve(self, start: f32) -> f32 {
        match self {
            Self::To(end) => end,
            Self::By(delta) => start + delta,
        }
    }
}

/// Description of a single tween: duration, easing and animated properties.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    /// Duration in seconds. Non-positive durations finish on the next tick.
    pub duration: f32,
    /// Easing curve applied to normalized time.
    pub easing: EasingFunction,
    /// Properties animated together.
    pub properties: Vec<(TweenTarget, TweenValue)>,
}

impl Tween {
    /// Tween with no properties yet.
    #[must_use]
    pub fn new(duration: f32, easing: EasingFunction) -> Self {
        Self {
            duration,
            easing,
            properties: Vec::new(),
        }
    }

    /// Add an animated property.
    #[must_use]
    pub fn with(mut self, target: TweenTarget, value: TweenValue) -> Self {
        self.properties.push((target, value));
        self
    }
}

/// Capability to schedule tweens.
///
/// Implementations must invoke `on_complete` exactly once when the tween
/// finishes and must never block the caller.
pub trait Tweener {
    /// Schedule `tween`, returning its identifier.
    fn animate(
        &mut self,
        tween: Tween,
        on_complete: Option<TweenCallback>,
    ) -> TweenId;
}

/// Start/end pair for one property, read on the first tick.
#[derive(Debug, Clone, Copy)]
struct Track {
    target: TweenTarget,
    start: f32,
    end: f32,
}

struct ActiveTween {
    id: TweenId,
    tween: Tween,
    elapsed: f32,
    tracks: Option<Vec<Track>>,
    on_complete: Option<TweenCallback>,
}

impl ActiveTween {
    fn resolve_tracks(&self, surface: &dyn SceneSurface) -> Vec<Track> {
        self.tween
            .properties
            .iter()
            .map(|&(target, value)| {
                let start = target.read(surface);
                Track {
                    target,
                    start,
                    end: value.resolve(start),
                }
            })
            .collect()
    }

    /// Normalized progress in `[0, 1]`.
    fn progress(&self) -> f32 {
        if self.tween.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.tween.duration).min(1.0)
        }
    }
}

/// Default [`Tweener`]: tweens advance only when [`TweenEngine::tick`] is
/// called, once per rendered frame.
#[derive(Default)]
pub struct TweenEngine {
    next_id: u64,
    active: Vec<ActiveTween>,
}

impl TweenEngine {
    /// Engine with no running tweens.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tweens still running.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// `true` when no tween is running.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    /// Advance every running tween by `dt` seconds and write the eased
    /// values into `surface`.
    ///
    /// A tween's start values are read on its first tick, which also
    /// counts toward its duration.
    ///
    /// Tweens that reach their end are snapped to the exact end value and
    /// removed. Their completion callbacks run after all writes for this
    /// tick, in scheduling order. Returns the number of tweens finished.
    pub fn tick(&mut self, dt: f32, surface: &mut dyn SceneSurface) -> usize {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let mut finished = Vec::new();

        for active in &mut self.active {
            if active.tracks.is_none() {
                active.tracks = Some(active.resolve_tracks(surface));
            }
            active.elapsed += dt;

            let t = active.progress();
            let eased = active.tween.easing.evaluate(t);
            if let Some(tracks) = &active.tracks {
                for track in tracks {
                    let value = if t >= 1.0 {
                        track.end
                    } else {
                        track.start + (track.end - track.start) * eased
                    };
                    track.target.write(surface, value);
                }
            }
            if t >= 1.0 {
                finished.push(active.id);
            }
        }

        if finished.is_empty() {
            return 0;
        }

        let mut callbacks = Vec::new();
        self.active.retain_mut(|active| {
            if finished.contains(&active.id) {
                log::debug!("tween {:?} finished", active.id);
                if let Some(cb) = active.on_complete.take() {
                    callbacks.push(cb);
                }
                false
            } else {
                true
            }
        });
        for cb in callbacks {
            cb();
        }
        finished.len()
    }
}

impl Tweener for TweenEngine {
    fn animate(
        &mut self,
        tween: Tween,
        on_complete: Option<TweenCallback>,
    ) -> TweenId {
        let id = TweenId::from_raw(self.next_id);
        self.next_id += 1;
        log::debug!(
            "tween {id:?} scheduled: {} properties over {:.2}s",
            tween.properties.len(),
            tween.duration
        );
        self.active.push(ActiveTween {
            id,
            tween,
            elapsed: 0.0,
            tracks: None,
            on_complete,
        });
        id
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::scene::OrbitScene;

    fn scene() -> OrbitScene {
        OrbitScene::with_captions(vec!["A".into(), "B".into()])
    }

    fn counter() -> (Rc<Cell<u32>>, TweenCallback) {
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        (count, Box::new(move || c.set(c.get() + 1)))
    }

    #[test]
    fn first_tick_reads_start_and_advances() {
        let mut surface = scene();
        surface.set_caption_offset(-100.0);
        let mut engine = TweenEngine::new();
        let _ = engine.animate(
            Tween::new(1.0, EasingFunction::Linear)
                .with(TweenTarget::CaptionOffset, TweenValue::To(-200.0)),
            None,
        );

        assert_eq!(engine.tick(0.5, &mut surface), 0);
        assert!((surface.caption_offset() + 150.0).abs() < 1e-4);

        assert_eq!(engine.tick(0.5, &mut surface), 1);
        assert_eq!(surface.caption_offset(), -200.0);
    }

    #[test]
    fn one_second_tween_ends_after_ten_tenth_second_ticks() {
        let mut surface = scene();
        let mut engine = TweenEngine::new();
        let (count, cb) = counter();
        let _ = engine.animate(
            Tween::new(1.0, EasingFunction::CubicInOut)
                .with(TweenTarget::GroupYaw, TweenValue::By(1.0)),
            Some(cb),
        );
        for _ in 0..9 {
            let _ = engine.tick(0.1, &mut surface);
        }
        assert_eq!(count.get(), 0);
        assert_eq!(engine.tick(0.1, &mut surface), 1);
        assert_eq!(count.get(), 1);
        assert_eq!(surface.group_yaw(), 1.0);
    }

    #[test]
    fn finishes_exactly_at_end_value() {
        let mut surface = scene();
        let mut engine = TweenEngine::new();
        let (count, cb) = counter();
        let _ = engine.animate(
            Tween::new(1.0, EasingFunction::CubicInOut)
                .with(TweenTarget::CaptionOffset, TweenValue::To(-300.0)),
            Some(cb),
        );

        for _ in 0..3 {
            let _ = engine.tick(0.3, &mut surface);
        }
        assert_eq!(count.get(), 0);
        assert_eq!(engine.tick(0.3, &mut surface), 1);
        assert_eq!(surface.caption_offset(), -300.0);
        assert_eq!(count.get(), 1);
        assert!(engine.is_idle());

        // Further ticks never re-fire the callback
        let _ = engine.tick(1.0, &mut surface);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn relative_value_reads_current_at_start() {
        let mut surface = scene();
        surface.set_group_yaw(1.0);
        let mut engine = TweenEngine::new();
        let _ = engine.animate(
            Tween::new(0.5, EasingFunction::Linear)
                .with(TweenTarget::GroupYaw, TweenValue::By(0.5)),
            None,
        );
        // Value changes after scheduling but before the first tick
        surface.set_group_yaw(2.0);
        let _ = engine.tick(0.0, &mut surface);
        let _ = engine.tick(0.5, &mut surface);
        assert!((surface.group_yaw() - 2.5).abs() < 1e-6);
    }

    #[test]
    fn zero_duration_completes_on_first_tick() {
        let mut surface = scene();
        let mut engine = TweenEngine::new();
        let (count, cb) = counter();
        let _ = engine.animate(
            Tween::new(0.0, EasingFunction::Linear)
                .with(TweenTarget::GroupYaw, TweenValue::To(3.0)),
            Some(cb),
        );
        assert_eq!(engine.active_count(), 1);
        assert_eq!(engine.tick(0.0, &mut surface), 1);
        assert_eq!(surface.group_yaw(), 3.0);
        assert_eq!(count.get(), 1);
        assert!(engine.is_idle());
    }

    #[test]
    fn multiple_properties_animate_together() {
        let mut surface = scene();
        let mut engine = TweenEngine::new();
        let _ = engine.animate(
            Tween::new(1.0, EasingFunction::Linear)
                .with(TweenTarget::CaptionOffset, TweenValue::To(-100.0))
                .with(TweenTarget::GroupYaw, TweenValue::By(1.0)),
            None,
        );
        let _ = engine.tick(0.25, &mut surface);
        assert!((surface.caption_offset() + 25.0).abs() < 1e-4);
        assert!((surface.group_yaw() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn independent_tweens_complete_independently() {
        let mut surface = scene();
        let mut engine = TweenEngine::new();
        let (short_count, short_cb) = counter();
        let (long_count, long_cb) = counter();
        let _ = engine.animate(
            Tween::new(0.5, EasingFunction::Linear)
                .with(TweenTarget::CaptionOffset, TweenValue::To(-100.0)),
            Some(short_cb),
        );
        let _ = engine.animate(
            Tween::new(1.0, EasingFunction::Linear)
                .with(TweenTarget::GroupYaw, TweenValue::By(1.0)),
            Some(long_cb),
        );
        let _ = engine.tick(0.5, &mut surface);
        assert_eq!((short_count.get(), long_count.get()), (1, 0));
        assert_eq!(engine.active_count(), 1);
        let _ = engine.tick(0.5, &mut surface);
        assert_eq!((short_count.get(), long_count.get()), (1, 1));
    }

    #[test]
    fn non_finite_dt_does_not_advance() {
        let mut surface = scene();
        let mut engine = TweenEngine::new();
        let _ = engine.animate(
            Tween::new(1.0, EasingFunction::Linear)
                .with(TweenTarget::GroupYaw, TweenValue::To(1.0)),
            None,
        );
        let _ = engine.tick(0.0, &mut surface);
        assert_eq!(engine.tick(f32::NAN, &mut surface), 0);
        assert_eq!(engine.tick(-1.0, &mut surface), 0);
        assert_eq!(surface.group_yaw(), 0.0);
    }
}
