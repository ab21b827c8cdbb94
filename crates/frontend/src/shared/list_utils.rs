//! Client-side filtering and sorting over an already loaded page.
//!
//! Only the rows of the current page are touched; the server still decides
//! which rows a page contains.

use std::cmp::Ordering;

/// Row types that can be filtered by a free-text box
pub trait Searchable {
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Row types that can be sorted by a column key
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Case-insensitive substring match, shared by `Searchable` impls
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Sorts the list by the given field
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Keeps rows matching `filter`; a blank filter keeps everything
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    let filter = filter.trim();
    if filter.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Column sort currently applied on a list screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub field: &'static str,
    pub ascending: bool,
}

impl SortState {
    pub fn new(field: &'static str) -> Self {
        Self {
            field,
            ascending: true,
        }
    }

    /// Clicking the active column flips the direction, another column
    /// starts ascending.
    pub fn toggle(&mut self, field: &'static str) {
        if self.field == field {
            self.ascending = !self.ascending;
        } else {
            self.field = field;
            self.ascending = true;
        }
    }
}

/// Arrow shown next to a sortable column header
pub fn get_sort_indicator(sort: &SortState, field: &str) -> &'static str {
    if sort.field != field {
        "⇅"
    } else if sort.ascending {
        "▲"
    } else {
        "▼"
    }
}

/// Filter and sort a page for display
pub fn visible_rows<T: Searchable + Sortable + Clone>(
    items: &[T],
    filter: &str,
    sort: &SortState,
) -> Vec<T> {
    let mut rows = filter_list(items.to_vec(), filter);
    sort_list(&mut rows, sort.field, sort.ascending);
    rows
}
