//! Shared constants for the behavior layer.

// ── Persistence ─────────────────────────────────────────────────

/// localStorage key holding the explicit theme choice (`"dark"` / `"light"`).
pub const THEME_STORAGE_KEY: &str = "theme";

// ── Class markers ───────────────────────────────────────────────

/// Class on the document root that activates the dark palette.
pub const DARK_CLASS: &str = "dark";

/// Utility class that removes an element from the page flow.
pub const HIDDEN_CLASS: &str = "hidden";

// ── Scrolling ───────────────────────────────────────────────────

/// Vertical scroll offset in CSS pixels past which the back-to-top control
/// is revealed. At exactly this offset the control stays hidden.
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 300.0;
