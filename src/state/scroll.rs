//! Scroll-position watcher driving the back-to-top control.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::consts::BACK_TO_TOP_THRESHOLD_PX;

/// Tracks the visibility last applied to the back-to-top control.
///
/// Scroll events fire at high frequency; the watcher yields a new visibility
/// only when the offset crosses the threshold, so repeated events on the
/// same side apply nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct BackToTop {
    visible: bool,
}

impl BackToTop {
    /// A watcher for a control that starts hidden.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current vertical scroll offset.
    ///
    /// Returns `Some(new_visibility)` on a transition across the threshold
    /// and `None` when nothing changes. The control is visible strictly
    /// above the threshold: at exactly the threshold it stays hidden.
    pub fn on_scroll(&mut self, scroll_y: f64) -> Option<bool> {
        let next = scroll_y > BACK_TO_TOP_THRESHOLD_PX;
        if next == self.visible {
            return None;
        }
        self.visible = next;
        Some(next)
    }

    /// The visibility last applied.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
