// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Scroll-driven planet carousel for a single-page 3D scene.
//!
//! Mouse-wheel input cycles a strip of heading captions while a group of
//! orbiting planets turns a quarter step in lockstep. Wheel events are
//! filtered by magnitude and debounced: at most one transition is in flight
//! at a time, and input that arrives meanwhile is dropped.
//!
//! # Key entry points
//!
//! - [`carousel::CarouselController`] - wheel filtering, debouncing and
//!   heading cycling
//! - [`carousel::TransitionExecutor`] - the coupled caption/rotation tweens
//! - [`animation::TweenEngine`] - frame-stepped tweens with single-shot
//!   completion callbacks
//! - [`scene::SceneSurface`] - what the carousel animates
//! - [`OrreryEngine`] - ties the pieces together behind `handle_input` and
//!   `update`
//! - [`options::Options`] - runtime configuration (carousel timing, planet
//!   layout, assets, captions)
//!
//! # Architecture
//!
//! Everything runs on one thread. Input handlers call
//! [`OrreryEngine::handle_input`]; the frame loop calls
//! [`OrreryEngine::update`], which steps tweens and then the surface's
//! per-frame hook. The native viewer (`viewer` feature) hosts this in a
//! winit window; the `web` feature drives it from the browser.

pub mod animation;
pub mod carousel;
pub mod engine;
pub mod error;
#[cfg(feature = "viewer")]
pub mod gpu;
pub mod input;
pub mod options;
pub mod scene;
#[cfg(feature = "viewer")]
pub mod viewer;
#[cfg(feature = "web")]
pub mod web;

pub use engine::OrreryEngine;
pub use error::OrreryError;
pub use input::{InputEvent, WheelEvent};
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
