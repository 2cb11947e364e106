//! Tab group selection: exclusive visibility across named content panels.

#[cfg(test)]
#[path = "tabs_test.rs"]
mod tabs_test;

/// Outcome of activating a tab trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSwitch<'a> {
    /// The id the clicked trigger declared. Its styling becomes active
    /// regardless of whether a panel matches.
    pub active_target: &'a str,
    /// The single panel to show, or `None` when no panel id matches the
    /// declared target (every panel stays hidden).
    pub visible_panel: Option<&'a str>,
}

/// Decide the visible panel for a clicked trigger.
///
/// Exactly one panel is visible afterwards when the target exists among
/// `panel_ids`, zero otherwise.
#[must_use]
pub fn switch_to<'a>(target: &'a str, panel_ids: &[String]) -> TabSwitch<'a> {
    let exists = panel_ids.iter().any(|id| id == target);
    TabSwitch {
        active_target: target,
        visible_panel: exists.then_some(target),
    }
}
