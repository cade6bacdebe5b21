//! Standalone carousel window backed by winit.
//!
//! The window title doubles as the caption strip: it shows the loading
//! status until every asset has been read, then the heading currently in
//! view.
//!
//! ```no_run
//! # use orrery::Viewer;
//! Viewer::builder().with_title("Orrery").build().run().unwrap();
//! ```

use std::sync::Arc;

use web_time::Instant;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    error::OrreryError,
    gpu::RenderContext,
    input::{InputEvent, WheelEvent},
    options::Options,
    scene::{AssetManifest, LoadingTracker},
    OrreryEngine,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "Orrery", default
    /// options).
    fn new() -> Self {
        Self {
            options: None,
            title: "Orrery".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title prefix.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window running the planet carousel.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    pub fn run(self) -> Result<(), OrreryError> {
        let event_loop =
            EventLoop::new().map_err(|e| OrreryError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            context: None,
            engine: OrreryEngine::new(self.options),
            last_frame_time: Instant::now(),
            title: self.title,
            shown_title: String::new(),
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| OrreryError::Viewer(e.to_string()))
    }
}

// ── Asset loading ────────────────────────────────────────────────────────

/// Read every local asset in the manifest, reporting each to `tracker`.
///
/// Files are only read, never decoded. Remote assets are not fetched by the
/// native viewer and count as failed.
fn load_local_assets(manifest: &AssetManifest, tracker: &mut LoadingTracker) {
    for item in &manifest.items {
        if AssetManifest::is_remote(item) {
            log::warn!("remote asset not fetched natively: {item}");
            tracker.item_failed();
            continue;
        }
        match std::fs::read(item) {
            Ok(bytes) => {
                log::debug!("loaded {item} ({} bytes)", bytes.len());
                tracker.item_loaded();
            }
            Err(e) => {
                log::warn!("failed to load {item}: {e}");
                tracker.item_failed();
            }
        }
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    context: Option<RenderContext>,
    engine: OrreryEngine,
    last_frame_time: Instant,
    title: String,
    /// Last title pushed to the window, to avoid redundant updates.
    shown_title: String,
}

impl ViewerApp {
    /// Title for the current state: loading status, then visible caption.
    fn current_title(&self) -> String {
        let loading = self.engine.loading();
        if !loading.is_complete() {
            return format!("{} | {}", self.title, loading.status_text());
        }
        match self.engine.surface().visible_caption() {
            Some(caption) => format!("{} | {caption}", self.title),
            None => self.title.clone(),
        }
    }

    fn refresh_title(&mut self) {
        let title = self.current_title();
        if title != self.shown_title {
            if let Some(window) = &self.window {
                window.set_title(&title);
            }
            self.shown_title = title;
        }
    }

    fn redraw(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;

        self.engine.update(dt);
        self.refresh_title();

        if let Some(context) = &self.context {
            let color = self.engine.options().scene.clear_color;
            match context.clear_frame(color) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                    context.reconfigure();
                }
                Err(e) => {
                    log::error!("render error: {e:?}");
                }
            }
        }
        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes().with_title(&self.title);
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let inner = window.inner_size();
        let context = match pollster::block_on(RenderContext::new(
            window.clone(),
            (inner.width, inner.height),
        )) {
            Ok(c) => c,
            Err(e) => {
                log::error!("Failed to initialize GPU: {e}");
                event_loop.exit();
                return;
            }
        };

        let manifest = AssetManifest::from_options(&self.engine.options().assets);
        load_local_assets(&manifest, self.engine.loading_mut());

        window.request_redraw();
        self.window = Some(window);
        self.context = Some(context);
        self.last_frame_time = Instant::now();
        self.refresh_title();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(context) = &mut self.context {
                    context.resize(size.width, size.height);
                }
            }

            WindowEvent::RedrawRequested => self.redraw(),

            WindowEvent::MouseWheel { delta, .. } => {
                let _ = self
                    .engine
                    .handle_input(InputEvent::Wheel(WheelEvent::from(delta)));
            }

            _ => (),
        }
    }
}
