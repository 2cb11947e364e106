//! Guarded, typed access to the browser DOM.
//!
//! Every lookup returns `Option` and every mutation is a no-op when its
//! element is missing, so features degrade to disabled instead of throwing.
//! Only this module and [`crate::features`] touch web-sys.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, Window};

use crate::consts::HIDDEN_CLASS;

// ── Lookups ─────────────────────────────────────────────────────

/// The browser window, absent outside a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// The page document.
#[must_use]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Element lookup by id.
#[must_use]
pub fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// First element matching a selector, if any.
#[must_use]
pub fn first(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// All elements matching a selector. An invalid selector or a missing
/// document yields an empty list.
#[must_use]
pub fn all(selector: &str) -> Vec<Element> {
    let Some(doc) = document() else {
        return Vec::new();
    };
    let Ok(list) = doc.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Create a detached element. `None` when the tag name is invalid or there
/// is no document.
#[must_use]
pub fn create_element(tag: &str) -> Option<Element> {
    document()?.create_element(tag).ok()
}

// ── Class mutation ──────────────────────────────────────────────

/// Add or remove `class` according to `present`.
pub fn set_class(el: &Element, class: &str, present: bool) {
    let _ = el.class_list().toggle_with_force(class, present);
}

/// Flip `class`, returning whether it is present afterwards.
pub fn flip_class(el: &Element, class: &str) -> bool {
    el.class_list().toggle(class).unwrap_or(false)
}

/// Show or hide an element via the `hidden` utility class.
pub fn set_hidden(el: &Element, hidden: bool) {
    set_class(el, HIDDEN_CLASS, hidden);
}

// ── Events ──────────────────────────────────────────────────────

/// Attach a persistent event listener.
///
/// The closure is leaked deliberately: listeners live for the page lifetime
/// and are torn down with it on navigation.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

// ── Persistence & media queries ─────────────────────────────────

/// Read a localStorage value.
#[must_use]
pub fn storage_get(key: &str) -> Option<String> {
    window()?
        .local_storage()
        .ok()
        .flatten()?
        .get_item(key)
        .ok()
        .flatten()
}

/// Write a localStorage value. Silently dropped when storage is unavailable.
pub fn storage_set(key: &str, value: &str) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(key, value);
    }
}

/// Whether the OS/browser currently prefers a dark color scheme.
#[must_use]
pub fn system_prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map_or(false, |mq| mq.matches())
}
