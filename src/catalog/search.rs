//! Client-side filtering over an already-built catalog
//!
//! Operates on engine output only; it never re-scans playlist text.

use crate::models::{Category, Entry};

/// Keep entries whose name contains `query`, ignoring case
///
/// Categories left without members are dropped. A blank query returns the
/// catalog unchanged.
pub fn filter_by_query(categories: &[Category], query: &str) -> Vec<Category> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return categories.to_vec();
    }

    categories
        .iter()
        .filter_map(|category| {
            let members: Vec<Entry> = category
                .members
                .iter()
                .filter(|entry| entry.name.to_lowercase().contains(&needle))
                .cloned()
                .collect();

            if members.is_empty() {
                None
            } else {
                Some(Category {
                    label: category.label.clone(),
                    members,
                })
            }
        })
        .collect()
}

/// First `limit` members of a category, for a scroll-row style display
pub fn row_preview(category: &Category, limit: usize) -> &[Entry] {
    let end = limit.min(category.members.len());
    &category.members[..end]
}
