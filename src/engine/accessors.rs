//! Frame stepping and read-only queries for [`OrreryEngine`].

use super::OrreryEngine;
use crate::options::Options;
use crate::scene::{LoadingTracker, SceneSurface};

// ── Lifecycle ──

impl<S: SceneSurface> OrreryEngine<S> {
    /// Advance running tweens by `dt` seconds, then run the surface's
    /// per-frame hook.
    ///
    /// Call once per frame before rendering:
    /// ```ignore
    /// engine.update(dt);
    /// renderer.render()?;
    /// ```
    pub fn update(&mut self, dt: f32) {
        let _ = self.tweens.tick(dt, &mut self.surface);
        self.surface.advance_frame();
    }
}

// ── Carousel ──

impl<S: SceneSurface> OrreryEngine<S> {
    /// Index of the current (target) heading.
    #[must_use]
    pub fn heading_index(&self) -> usize {
        self.controller.heading_index()
    }

    /// Whether a carousel transition is in flight.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.controller.is_busy()
    }

    /// Number of tweens still running (caption and rotation tweens finish
    /// independently).
    #[must_use]
    pub fn active_tweens(&self) -> usize {
        self.tweens.active_count()
    }
}

// ── Scene & options ──

impl<S: SceneSurface> OrreryEngine<S> {
    /// Read-only access to the scene surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the scene surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The options this engine was built with.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Asset loading progress.
    pub fn loading(&self) -> &LoadingTracker {
        &self.loading
    }

    /// Mutable loading progress, for front ends that report asset loads.
    pub fn loading_mut(&mut self) -> &mut LoadingTracker {
        &mut self.loading
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use crate::engine::OrreryEngine;
    use crate::input::{InputEvent, WheelEvent};
    use crate::options::Options;
    use crate::scene::SceneSurface;

    fn wheel(delta: f32) -> InputEvent {
        InputEvent::Wheel(WheelEvent::new(delta))
    }

    #[test]
    fn update_spins_planets_every_frame() {
        let mut engine = OrreryEngine::new(Options::default());
        for _ in 0..5 {
            engine.update(1.0 / 60.0);
        }
        assert_eq!(engine.surface().frames(), 5);
        assert_eq!(engine.surface().group_yaw(), 0.0);
    }

    #[test]
    fn caption_and_rotation_finish_together() {
        let mut engine = OrreryEngine::new(Options::default());
        let _ = engine.handle_input(wheel(-100.0));
        assert_eq!(engine.active_tweens(), 2);

        engine.update(0.5);
        let yaw = engine.surface().group_yaw();
        assert!(yaw > 0.0 && yaw < FRAC_PI_2);
        // Cubic in-out passes exactly through the midpoint
        assert!((engine.surface().caption_offset() + 150.0).abs() < 1e-3);

        engine.update(0.5);
        assert_eq!(engine.active_tweens(), 0);
        assert!(!engine.is_transitioning());
        assert_eq!(engine.heading_index(), 3);
        assert_eq!(engine.surface().caption_offset(), -300.0);
        assert!((engine.surface().group_yaw() - FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn down_then_up_restores_scene() {
        let mut engine = OrreryEngine::new(Options::default());
        for delta in [100.0, -100.0] {
            assert!(engine.handle_input(wheel(delta)).is_some());
            engine.update(1.0);
        }
        assert_eq!(engine.heading_index(), 0);
        assert!(engine.surface().group_yaw().abs() < 1e-5);
        assert_eq!(engine.surface().caption_offset(), 0.0);
    }

    #[test]
    fn transition_releases_after_configured_duration() {
        let mut engine = OrreryEngine::new(Options::default());
        assert!(engine.handle_input(wheel(100.0)).is_some());
        let mut frames = 0;
        while engine.is_transitioning() && frames < 100 {
            engine.update(0.1);
            frames += 1;
        }
        assert_eq!(frames, 10);
        assert_eq!(engine.surface().caption_offset(), -100.0);
    }

    #[test]
    fn loading_tracks_default_manifest() {
        let mut engine = OrreryEngine::new(Options::default());
        assert!(!engine.loading().is_complete());
        for _ in 0..6 {
            engine.loading_mut().item_loaded();
        }
        assert!(engine.loading().is_complete());
    }
}
