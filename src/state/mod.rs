//! Pure state machines for each interactive feature.
//!
//! DESIGN
//! ======
//! Each feature keeps its decision logic here, free of any browser types, so
//! it can be unit tested natively. The modules in [`crate::features`] are
//! thin adapters that feed DOM events in and apply the returned decisions as
//! class, text, and storage mutations.

pub mod menu;
pub mod modal;
pub mod scroll;
pub mod tabs;
pub mod theme;
