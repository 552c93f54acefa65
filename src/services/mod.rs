pub mod analytics;
pub mod disputes;
pub mod orders;
pub mod returns;

use serde::Serialize;

/// One page of a list view.
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub total_pages: u64,
    pub total_items: u64,
}

/// A selectable record for form choice widgets.
#[derive(Debug, Clone, Serialize)]
pub struct Choice {
    pub id: i32,
    pub label: String,
}
