//! Theme switching: dark class on the root, persisted choice, icon swap.
//!
//! Two controls (desktop and mobile header) share the same handler and stay
//! in sync because the document root class is the single source of truth
//! for the flip itself.

use crate::consts::{DARK_CLASS, THEME_STORAGE_KEY};
use crate::dom;
use crate::state::theme::{IconVisibility, Theme};

/// Apply the resolved initial theme and attach the toggle handlers.
pub fn wire() {
    let stored = dom::storage_get(THEME_STORAGE_KEY).and_then(|v| Theme::parse(&v));
    apply(Theme::initial(stored, dom::system_prefers_dark()));

    let mut wired = false;
    for id in ["theme-toggle", "theme-toggle-mobile"] {
        if let Some(button) = dom::by_id(id) {
            dom::listen(&button, "click", move |_| toggle());
            wired = true;
        }
    }
    if !wired {
        log::debug!("theme: no toggle control on this page");
    }
}

/// Flip the root class, then derive the new theme from the resulting class
/// presence rather than from prior state, persist it, and update the icons.
fn toggle() {
    let Some(root) = dom::document().and_then(|d| d.document_element()) else {
        return;
    };
    let theme = Theme::from_root_class(dom::flip_class(&root, DARK_CLASS));
    dom::storage_set(THEME_STORAGE_KEY, theme.as_str());
    update_icons(IconVisibility::for_theme(theme));
}

/// Set the root class and icons to match `theme` without persisting.
fn apply(theme: Theme) {
    if let Some(root) = dom::document().and_then(|d| d.document_element()) {
        dom::set_class(&root, DARK_CLASS, theme.is_dark());
    }
    update_icons(IconVisibility::for_theme(theme));
}

/// Every icon instance follows the same visibility, desktop and mobile alike.
fn update_icons(icons: IconVisibility) {
    for el in dom::all(".sun-icon") {
        dom::set_hidden(&el, !icons.sun);
    }
    for el in dom::all(".moon-icon") {
        dom::set_hidden(&el, !icons.moon);
    }
}
