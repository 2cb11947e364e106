use super::*;

static EMPTY: &ProjectCatalog = &[];

fn controller() -> ModalController {
    ModalController::new(projects::CATALOG)
}

// --- Open ---

#[test]
fn open_known_id_returns_record_and_opens() {
    let mut modal = controller();
    let record = modal.open("project1").unwrap();
    assert_eq!(record.title, "E-commerce Dashboard");
    assert_eq!(record.tags.len(), 4);
    assert_eq!(modal.state(), ModalState::Open);
}

#[test]
fn open_unknown_id_is_a_no_op() {
    let mut modal = controller();
    assert!(modal.open("nonexistent").is_none());
    assert_eq!(modal.state(), ModalState::Closed);
}

#[test]
fn open_unknown_id_while_open_stays_open() {
    let mut modal = controller();
    modal.open("project1");
    assert!(modal.open("nonexistent").is_none());
    assert_eq!(modal.state(), ModalState::Open);
}

#[test]
fn open_while_open_repopulates() {
    let mut modal = controller();
    modal.open("project1");
    let record = modal.open("project2").unwrap();
    assert_eq!(record.title, "FinTrack Mobile App");
    assert_eq!(modal.state(), ModalState::Open);
}

#[test]
fn empty_catalog_never_opens() {
    let mut modal = ModalController::new(EMPTY);
    assert!(modal.open("project1").is_none());
    assert_eq!(modal.state(), ModalState::Closed);
}

// --- Close ---

#[test]
fn close_after_open_reports_transition() {
    let mut modal = controller();
    modal.open("project1");
    assert!(modal.close());
    assert_eq!(modal.state(), ModalState::Closed);
}

#[test]
fn close_when_already_closed_is_a_no_op() {
    let mut modal = controller();
    assert!(!modal.close());
    modal.open("project1");
    modal.close();
    assert!(!modal.close());
}

// --- Backdrop clicks ---

#[test]
fn backdrop_click_closes_only_while_open() {
    let mut modal = controller();
    assert!(!modal.should_close_on_click(true));
    modal.open("project1");
    assert!(modal.should_close_on_click(true));
}

#[test]
fn content_click_never_closes() {
    let mut modal = controller();
    modal.open("project1");
    assert!(!modal.should_close_on_click(false));
}
