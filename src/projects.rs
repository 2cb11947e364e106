//! The static project catalog backing the project-detail modal.
//!
//! A read-only lookup table fixed at build time. Nothing creates, mutates,
//! or destroys records at runtime; the modal controller borrows the table
//! for the lifetime of the page.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

/// One portfolio project as shown in the detail modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectRecord {
    /// Headline shown in the modal title.
    pub title: &'static str,
    /// URL of the hero image.
    pub image: &'static str,
    /// Longer description paragraph.
    pub description: &'static str,
    /// Technology tags, rendered as chips in this order.
    pub tags: &'static [&'static str],
}

/// Catalog entries keyed by the id used in the markup's `onclick` handlers.
pub type ProjectCatalog = [(&'static str, ProjectRecord)];

/// The full project catalog.
pub static CATALOG: &ProjectCatalog = &[
    (
        "project1",
        ProjectRecord {
            title: "E-commerce Dashboard",
            image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?ixlib=rb-1.2.1&auto=format&fit=crop&w=1200&q=80",
            description: "A React-based dashboard for managing orders, analytics, and inventory. Features include real-time data visualization with Chart.js, dark mode support, and full responsiveness using Tailwind CSS.",
            tags: &["React", "Tailwind", "Chart.js", "Node.js"],
        },
    ),
    (
        "project2",
        ProjectRecord {
            title: "FinTrack Mobile App",
            image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?ixlib=rb-1.2.1&auto=format&fit=crop&w=1200&q=80",
            description: "A Vue.js progressive web application for tracking personal finances. Users can link bank accounts, categorize transactions, and set budget goals. Visualizations powered by D3.js.",
            tags: &["Vue.js", "D3.js", "Firebase", "PWA"],
        },
    ),
];

/// Look up a record by id. Unknown ids resolve to `None`.
#[must_use]
pub fn find(catalog: &'static ProjectCatalog, id: &str) -> Option<&'static ProjectRecord> {
    catalog
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, record)| record)
}
