//! Presentation order and paging for the workout list.

use serde::{Deserialize, Serialize};

use crate::workout::{Quantity, WorkoutRecord};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One page of results plus the paging metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// Newest date first, ties broken by id, both descending.
pub fn sort_workouts(mut items: Vec<WorkoutRecord>) -> Vec<WorkoutRecord> {
    items.sort_by(|a, b| (&b.date, &b.id).cmp(&(&a.date, &a.id)));
    items
}

/// Slice out `page` (1-based). Out-of-range pages are clamped to the nearest
/// valid one; an empty list still has one (empty) page.
pub fn paginate<T>(items: Vec<T>, page: i64, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total = items.len();
    let total_pages = total.div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages as i64) as usize;

    let start = (page - 1) * page_size;
    let items = items.into_iter().skip(start).take(page_size).collect();

    Page {
        items,
        page,
        page_size,
        total,
        total_pages,
    }
}

/// Read the `page` query value: numeric text truncated toward zero, else 1.
pub fn parse_page(raw: Option<&str>) -> i64 {
    let value = raw.map(|s| serde_json::Value::String(s.to_string()));
    Quantity::coerce(value.as_ref(), Quantity::Int(1)).truncate()
}
