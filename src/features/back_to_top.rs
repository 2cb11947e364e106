//! Back-to-top control revealed past a scroll threshold.

use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::dom;
use crate::state::scroll::BackToTop;

/// Classes that keep the control shifted off-screen and transparent.
const OFFSCREEN_CLASSES: [&str; 2] = ["translate-y-20", "opacity-0"];

/// Attach the scroll watcher and the click handler.
pub fn wire() {
    let Some(button) = dom::by_id("back-to-top") else {
        return;
    };
    let Some(window) = dom::window() else {
        return;
    };

    let mut watcher = BackToTop::new();
    {
        let button = button.clone();
        let win = window.clone();
        dom::listen(&window, "scroll", move |_| {
            let y = win.scroll_y().unwrap_or(0.0);
            if let Some(visible) = watcher.on_scroll(y) {
                for class in OFFSCREEN_CLASSES {
                    dom::set_class(&button, class, !visible);
                }
            }
        });
    }

    dom::listen(&button, "click", move |_| scroll_to_top());
}

/// Smooth-scroll the window back to the document origin.
fn scroll_to_top() {
    if let Some(window) = dom::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
