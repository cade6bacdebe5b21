//! Engine tying the carousel, the tween engine and a scene surface together.
//!
//! The engine is single-threaded and frame-driven: input arrives through
//! [`OrreryEngine::handle_input`], and [`OrreryEngine::update`] advances
//! every running tween once per rendered frame before calling the
//! surface's per-frame hook.

mod accessors;
mod input;

use crate::animation::TweenEngine;
use crate::carousel::{CarouselController, TransitionExecutor};
use crate::options::Options;
use crate::scene::{AssetManifest, LoadingTracker, OrbitScene, SceneSurface};

/// Scroll-driven carousel engine over a [`SceneSurface`].
///
/// The heading count is read from the surface once, at construction.
pub struct OrreryEngine<S: SceneSurface = OrbitScene> {
    options: Options,
    surface: S,
    controller: CarouselController,
    executor: TransitionExecutor,
    tweens: TweenEngine,
    loading: LoadingTracker,
}

impl OrreryEngine<OrbitScene> {
    /// Engine over an [`OrbitScene`] built from `options`.
    #[must_use]
    pub fn new(options: Options) -> Self {
        let surface = OrbitScene::from_options(&options);
        Self::with_surface(options, surface)
    }
}

impl<S: SceneSurface> OrreryEngine<S> {
    /// Engine over a caller-provided surface.
    #[must_use]
    pub fn with_surface(options: Options, surface: S) -> Self {
        let total = surface.caption_count();
        if total == 0 {
            log::warn!("scene has no captions; wheel input will be ignored");
        }
        let controller =
            CarouselController::from_options(total, &options.carousel);
        let executor = TransitionExecutor::from_options(&options.carousel);
        let manifest = AssetManifest::from_options(&options.assets);
        log::debug!(
            "engine ready: {total} headings, {} assets",
            manifest.len()
        );
        Self {
            options,
            surface,
            controller,
            executor,
            tweens: TweenEngine::new(),
            loading: LoadingTracker::new(manifest.len()),
        }
    }
}
