//! Browser entry point.
//!
//! Drives the carousel against the page itself: every top-level `h1` is a
//! caption, moved with a CSS `translateY`, and wheel input arrives through a
//! passive listener so the page's own scrolling is never cancelled. Frames
//! are stepped from `requestAnimationFrame`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::error::OrreryError;
use crate::input::{InputEvent, WheelEvent, PIXELS_PER_LINE};
use crate::options::Options;
use crate::scene::{OrbitScene, SceneSurface};
use crate::OrreryEngine;

/// Scene surface backed by DOM caption elements.
///
/// The planet group is modelled by an [`OrbitScene`]; only the captions
/// live in the page.
pub struct DomScene {
    captions: Vec<HtmlElement>,
    caption_offset: f32,
    orbit: OrbitScene,
}

impl DomScene {
    /// Collect every `h1` in `document` once, in document order.
    pub fn from_document(
        document: &web_sys::Document,
        options: &Options,
    ) -> Result<Self, OrreryError> {
        let nodes = document
            .query_selector_all("h1")
            .map_err(|e| OrreryError::Web(format!("{e:?}")))?;
        let captions: Vec<HtmlElement> = (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect();
        log::info!("found {} caption elements", captions.len());
        Ok(Self {
            captions,
            caption_offset: 0.0,
            orbit: OrbitScene::from_options(options),
        })
    }

    /// The modelled planet group.
    #[must_use]
    pub fn orbit(&self) -> &OrbitScene {
        &self.orbit
    }
}

impl SceneSurface for DomScene {
    fn caption_count(&self) -> usize {
        self.captions.len()
    }

    fn caption_offset(&self) -> f32 {
        self.caption_offset
    }

    fn set_caption_offset(&mut self, percent: f32) {
        self.caption_offset = percent;
        let transform = format!("translateY({percent}%)");
        for caption in &self.captions {
            if let Err(e) = caption.style().set_property("transform", &transform)
            {
                log::debug!("caption transform rejected: {e:?}");
            }
        }
    }

    fn group_yaw(&self) -> f32 {
        self.orbit.group_yaw()
    }

    fn set_group_yaw(&mut self, radians: f32) {
        self.orbit.set_group_yaw(radians);
    }

    fn advance_frame(&mut self) {
        self.orbit.advance_frame();
    }
}

type SharedEngine = Rc<RefCell<OrreryEngine<DomScene>>>;

fn js_error(e: &OrreryError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Pixel delta of a DOM wheel event; line-mode deltas are scaled to pixels.
fn wheel_delta(event: &web_sys::WheelEvent) -> f32 {
    let delta = event.delta_y() as f32;
    if event.delta_mode() == web_sys::WheelEvent::DOM_DELTA_LINE {
        delta * PIXELS_PER_LINE
    } else {
        delta
    }
}

fn listen_wheel(
    window: &web_sys::Window,
    engine: SharedEngine,
) -> Result<(), OrreryError> {
    let on_wheel =
        Closure::<dyn FnMut(web_sys::WheelEvent)>::new(move |event| {
            let wheel = WheelEvent::new(wheel_delta(&event));
            let _ = engine.borrow_mut().handle_input(InputEvent::Wheel(wheel));
        });

    let listener_options = web_sys::AddEventListenerOptions::new();
    listener_options.set_passive(true);
    window
        .add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            on_wheel.as_ref().unchecked_ref(),
            &listener_options,
        )
        .map_err(|e| OrreryError::Web(format!("{e:?}")))?;
    on_wheel.forget();
    Ok(())
}

fn request_frame(callback: &Closure<dyn FnMut(f64)>) {
    if let Some(window) = web_sys::window() {
        if let Err(e) =
            window.request_animation_frame(callback.as_ref().unchecked_ref())
        {
            log::error!("requestAnimationFrame failed: {e:?}");
        }
    }
}

fn run_frames(engine: SharedEngine) {
    let slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> =
        Rc::new(RefCell::new(None));
    let next = Rc::clone(&slot);
    let mut last_ms: Option<f64> = None;

    *slot.borrow_mut() = Some(Closure::new(move |now_ms: f64| {
        let dt = last_ms.map_or(0.0, |prev| ((now_ms - prev) / 1000.0) as f32);
        last_ms = Some(now_ms);
        engine.borrow_mut().update(dt);
        if let Some(callback) = next.borrow().as_ref() {
            request_frame(callback);
        }
    }));

    if let Some(callback) = slot.borrow().as_ref() {
        request_frame(callback);
    }
}

/// Start the carousel on the current page.
///
/// `options_json` optionally overrides the defaults with a JSON object of
/// the same shape as the TOML options.
#[wasm_bindgen]
pub fn start(options_json: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let options = match options_json {
        Some(json) => Options::from_json(&json).map_err(|e| js_error(&e))?,
        None => Options::default(),
    };

    let window = web_sys::window()
        .ok_or_else(|| js_error(&OrreryError::Web("no window".into())))?;
    let document = window
        .document()
        .ok_or_else(|| js_error(&OrreryError::Web("no document".into())))?;

    let surface =
        DomScene::from_document(&document, &options).map_err(|e| js_error(&e))?;
    let engine: SharedEngine =
        Rc::new(RefCell::new(OrreryEngine::with_surface(options, surface)));

    listen_wheel(&window, Rc::clone(&engine)).map_err(|e| js_error(&e))?;
    run_frames(engine);
    Ok(())
}
