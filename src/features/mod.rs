//! Event wiring for each interactive feature.
//!
//! DESIGN
//! ======
//! Features are independent: each queries the elements it needs and wires
//! itself only when they exist, so any page can omit a section. Decisions
//! come from [`crate::state`]; this layer only moves DOM events in and
//! class, text, and storage mutations out.

pub mod back_to_top;
pub mod menu;
pub mod modal;
pub mod reveal;
pub mod tabs;
pub mod theme;

/// Wire every feature once at module start.
pub fn wire_all() {
    reveal::wire();
    theme::wire();
    menu::wire();
    tabs::wire();
    back_to_top::wire();
    modal::wire();
}
