use super::*;

// --- Catalog contents ---

#[test]
fn catalog_has_two_projects() {
    assert_eq!(CATALOG.len(), 2);
}

#[test]
fn project1_title_and_tags() {
    let record = find(CATALOG, "project1").unwrap();
    assert_eq!(record.title, "E-commerce Dashboard");
    assert_eq!(record.tags, ["React", "Tailwind", "Chart.js", "Node.js"]);
}

#[test]
fn project2_title_and_tags() {
    let record = find(CATALOG, "project2").unwrap();
    assert_eq!(record.title, "FinTrack Mobile App");
    assert_eq!(record.tags, ["Vue.js", "D3.js", "Firebase", "PWA"]);
}

#[test]
fn records_have_image_and_description() {
    for (id, record) in CATALOG {
        assert!(record.image.starts_with("https://"), "{id} image");
        assert!(!record.description.is_empty(), "{id} description");
    }
}

// --- Lookup ---

#[test]
fn find_unknown_id_is_none() {
    assert!(find(CATALOG, "nonexistent").is_none());
}

#[test]
fn find_is_case_sensitive() {
    assert!(find(CATALOG, "Project1").is_none());
}

#[test]
fn find_empty_id_is_none() {
    assert!(find(CATALOG, "").is_none());
}
