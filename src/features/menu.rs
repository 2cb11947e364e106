//! Mobile navigation menu: button toggle plus auto-close on link click.

use std::cell::Cell;
use std::rc::Rc;

use crate::dom;
use crate::state::menu::MenuState;

/// Wire the menu button and the navigation links inside the panel.
pub fn wire() {
    let (Some(button), Some(panel)) = (dom::by_id("mobile-menu-btn"), dom::by_id("mobile-menu"))
    else {
        log::debug!("mobile menu: controls missing, feature disabled");
        return;
    };

    let state = Rc::new(Cell::new(MenuState::Closed));

    {
        let state = Rc::clone(&state);
        let panel = panel.clone();
        dom::listen(&button, "click", move |_| {
            state.set(state.get().toggled());
            dom::set_hidden(&panel, !state.get().is_open());
        });
    }

    // Any navigation link inside the panel closes it.
    for link in dom::all("#mobile-menu a") {
        let state = Rc::clone(&state);
        let panel = panel.clone();
        dom::listen(&link, "click", move |_| {
            state.set(state.get().closed());
            dom::set_hidden(&panel, true);
        });
    }
}
