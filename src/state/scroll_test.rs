use super::*;

#[test]
fn starts_hidden() {
    assert!(!BackToTop::new().is_visible());
}

// --- Threshold boundary ---

#[test]
fn hidden_at_exactly_the_threshold() {
    let mut watcher = BackToTop::new();
    assert_eq!(watcher.on_scroll(300.0), None);
    assert!(!watcher.is_visible());
}

#[test]
fn visible_one_pixel_past_the_threshold() {
    let mut watcher = BackToTop::new();
    assert_eq!(watcher.on_scroll(301.0), Some(true));
    assert!(watcher.is_visible());
}

#[test]
fn hides_again_when_scrolling_back_up() {
    let mut watcher = BackToTop::new();
    watcher.on_scroll(500.0);
    assert_eq!(watcher.on_scroll(120.0), Some(false));
    assert!(!watcher.is_visible());
}

// --- Idempotence ---

#[test]
fn repeated_offsets_apply_nothing() {
    let mut watcher = BackToTop::new();
    assert_eq!(watcher.on_scroll(400.0), Some(true));
    assert_eq!(watcher.on_scroll(400.0), None);
    assert_eq!(watcher.on_scroll(999.0), None);
}

#[test]
fn repeated_offsets_below_threshold_apply_nothing() {
    let mut watcher = BackToTop::new();
    assert_eq!(watcher.on_scroll(0.0), None);
    assert_eq!(watcher.on_scroll(299.9), None);
}
