use super::*;

fn panels() -> Vec<String> {
    vec!["essays".to_owned(), "notes".to_owned(), "talks".to_owned()]
}

// --- Matching target ---

#[test]
fn matching_target_shows_exactly_that_panel() {
    let switch = switch_to("notes", &panels());
    assert_eq!(switch.visible_panel, Some("notes"));
    assert_eq!(switch.active_target, "notes");
}

#[test]
fn every_trigger_selects_its_own_panel() {
    let panels = panels();
    for id in &panels {
        let switch = switch_to(id, &panels);
        assert_eq!(switch.visible_panel, Some(id.as_str()));
    }
}

// --- Missing target ---

#[test]
fn unknown_target_shows_no_panel_but_still_activates_trigger() {
    let switch = switch_to("missing", &panels());
    assert_eq!(switch.visible_panel, None);
    assert_eq!(switch.active_target, "missing");
}

#[test]
fn empty_panel_group_shows_nothing() {
    let switch = switch_to("essays", &[]);
    assert_eq!(switch.visible_panel, None);
}

#[test]
fn empty_target_matches_no_panel() {
    let switch = switch_to("", &panels());
    assert_eq!(switch.visible_panel, None);
}
