//! Client-side behavior layer for the portfolio site, compiled to WebAssembly.
//!
//! The static pages ship their own markup and styling; this crate attaches
//! the interactive behavior: theme switching, the mobile navigation menu,
//! tab switching, the back-to-top control, entrance animations, and the
//! project detail modal. Each feature finds its elements by id or class and
//! silently disables itself when they are absent, so individual pages can
//! omit any section without errors.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Pure, browser-free state machines per feature |
//! | [`projects`] | The immutable project catalog backing the modal |
//! | [`dom`] | Guarded typed accessors over the browser DOM |
//! | [`features`] | Event wiring connecting the DOM to the state layer |
//! | [`consts`] | Shared class names, storage keys, and thresholds |

pub mod consts;
pub mod dom;
pub mod features;
pub mod projects;
pub mod state;

use wasm_bindgen::prelude::*;

/// WASM entry point, called once when the module is instantiated.
///
/// The script tag loads with `defer`, so the DOM is complete by the time
/// this runs.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    features::wire_all();
}

/// Open the project modal for the given catalog id.
///
/// Exported for the inline `onclick` handlers on the project cards.
/// Unknown ids are a silent no-op.
#[wasm_bindgen(js_name = openModal)]
pub fn open_modal(project_id: &str) {
    features::modal::open(project_id);
}

/// Close the project modal. Safe to call when it is already closed.
#[wasm_bindgen(js_name = closeModal)]
pub fn close_modal() {
    features::modal::close();
}
