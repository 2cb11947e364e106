//! Project detail modal: populate-from-catalog, open/close, backdrop
//! dismissal, and page scroll locking.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlImageElement};

use crate::dom;
use crate::projects::{self, ProjectRecord};
use crate::state::modal::ModalController;

/// Utility classes for one tag chip.
const TAG_CHIP_CLASSES: &str =
    "px-2 py-1 bg-wood-100 dark:bg-wood-900 text-wood-700 dark:text-wood-300 text-xs rounded";

thread_local! {
    // One controller per page; the browser main thread is the only thread.
    static CONTROLLER: RefCell<ModalController> =
        RefCell::new(ModalController::new(projects::CATALOG));
}

/// Attach the window-level click listener that closes the modal when the
/// backdrop itself (not any descendant) is clicked.
pub fn wire() {
    let Some(window) = dom::window() else {
        return;
    };
    dom::listen(&window, "click", |event| {
        let Some(backdrop) = dom::by_id("modal-backdrop") else {
            return;
        };
        let is_backdrop = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .is_some_and(|el| el == backdrop);
        if CONTROLLER.with(|c| c.borrow().should_close_on_click(is_backdrop)) {
            close();
        }
    });
}

/// Open the modal for a catalog id. Unknown ids are a silent no-op and
/// nothing is populated.
pub fn open(project_id: &str) {
    let Some(overlay) = dom::by_id("project-modal") else {
        return;
    };
    let Some(record) = CONTROLLER.with(|c| c.borrow_mut().open(project_id)) else {
        return;
    };

    populate(record);
    dom::set_hidden(&overlay, false);
    set_page_scroll_locked(true);
}

/// Close the modal and restore page scrolling. A no-op when already closed.
pub fn close() {
    if !CONTROLLER.with(|c| c.borrow_mut().close()) {
        return;
    }
    if let Some(overlay) = dom::by_id("project-modal") {
        dom::set_hidden(&overlay, true);
    }
    set_page_scroll_locked(false);
}

/// Fill the modal fields from a record. Tags are rebuilt from scratch so a
/// previous project's chips never linger.
fn populate(record: &ProjectRecord) {
    if let Some(title) = dom::by_id("modal-title") {
        title.set_text_content(Some(record.title));
    }
    if let Some(image) = dom::by_id("modal-image").and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
    {
        image.set_src(record.image);
    }
    if let Some(description) = dom::by_id("modal-description") {
        description.set_text_content(Some(record.description));
    }
    if let Some(tags) = dom::by_id("modal-tags") {
        tags.set_inner_html("");
        for tag in record.tags {
            if let Some(chip) = dom::create_element("span") {
                chip.set_class_name(TAG_CHIP_CLASSES);
                chip.set_text_content(Some(tag));
                let _ = tags.append_child(&chip);
            }
        }
    }
}

/// Suppress or restore page-level scrolling while the overlay is up.
fn set_page_scroll_locked(locked: bool) {
    let Some(body) = dom::document().and_then(|d| d.body()) else {
        return;
    };
    let style = body.style();
    if locked {
        let _ = style.set_property("overflow", "hidden");
    } else {
        let _ = style.remove_property("overflow");
    }
}
