//! Project modal decision core.
//!
//! Holds the injected catalog and the open/closed state. The feature adapter
//! in [`crate::features::modal`] applies the returned record to the page;
//! nothing here touches the DOM.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::projects::{self, ProjectCatalog, ProjectRecord};

/// Modal lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    /// Overlay hidden, page scrolling free.
    #[default]
    Closed,
    /// Overlay shown, page scrolling suppressed.
    Open,
}

/// Decision core for the project modal.
#[derive(Debug)]
pub struct ModalController {
    state: ModalState,
    catalog: &'static ProjectCatalog,
}

impl ModalController {
    /// A closed controller over an immutable catalog.
    #[must_use]
    pub fn new(catalog: &'static ProjectCatalog) -> Self {
        Self {
            state: ModalState::Closed,
            catalog,
        }
    }

    /// Request the modal to open for `id`.
    ///
    /// Unknown ids leave the state untouched and return `None`, so nothing
    /// downstream is ever partially populated. A known id while already open
    /// repopulates in place.
    pub fn open(&mut self, id: &str) -> Option<&'static ProjectRecord> {
        let record = projects::find(self.catalog, id)?;
        self.state = ModalState::Open;
        Some(record)
    }

    /// Request the modal to close. Returns whether it was open; closing a
    /// closed modal is a no-op.
    pub fn close(&mut self) -> bool {
        let was_open = self.state == ModalState::Open;
        self.state = ModalState::Closed;
        was_open
    }

    /// Whether a window-level click at the given target should close the
    /// modal. Only the backdrop element itself counts, not its descendants,
    /// so clicks on the modal content keep it open.
    #[must_use]
    pub fn should_close_on_click(&self, target_is_backdrop: bool) -> bool {
        target_is_backdrop && self.state == ModalState::Open
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> ModalState {
        self.state
    }
}
