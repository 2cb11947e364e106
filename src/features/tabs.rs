//! Tab switching for the writings section.
//!
//! Triggers carry a `data-target` attribute naming their panel id. At most
//! one panel is visible after any click; a target with no matching panel
//! hides everything while the trigger styling still moves.

use web_sys::Element;

use crate::dom;
use crate::state::tabs;

/// Utility classes marking the active trigger.
const ACTIVE_CLASSES: [&str; 3] = ["border-wood-accent", "text-wood-700", "dark:text-wood-300"];

/// Utility classes marking inactive triggers.
const INACTIVE_CLASSES: [&str; 3] = ["border-transparent", "text-gray-500", "dark:text-gray-400"];

/// Attach a click handler to every tab trigger on the page.
pub fn wire() {
    let triggers = dom::all(".tab-btn");
    if triggers.is_empty() {
        return;
    }
    let panels = dom::all(".tab-content");

    for trigger in &triggers {
        let clicked = trigger.clone();
        let triggers = triggers.clone();
        let panels = panels.clone();
        dom::listen(trigger, "click", move |_| {
            activate(&clicked, &triggers, &panels);
        });
    }
}

/// Move the active styling to `clicked` and show its declared panel.
fn activate(clicked: &Element, triggers: &[Element], panels: &[Element]) {
    // Styling moves even when the declared target matches no panel.
    for trigger in triggers {
        style_trigger(trigger, trigger == clicked);
    }

    let target = clicked.get_attribute("data-target").unwrap_or_default();
    let panel_ids: Vec<String> = panels.iter().map(Element::id).collect();
    let switch = tabs::switch_to(&target, &panel_ids);

    for panel in panels {
        let id = panel.id();
        dom::set_hidden(panel, switch.visible_panel != Some(id.as_str()));
    }
}

fn style_trigger(trigger: &Element, active: bool) {
    for class in ACTIVE_CLASSES {
        dom::set_class(trigger, class, active);
    }
    for class in INACTIVE_CLASSES {
        dom::set_class(trigger, class, !active);
    }
}
