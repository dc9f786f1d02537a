//! Entry Filtering
//!
//! Client-side narrowing of the fetched list and the rule for how a
//! displayed row is identified to the backend.

use crate::models::{EntryKey, RedirectEntry};

/// Two independent case-insensitive substring queries, ANDed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    pub request: String,
    pub redirect: String,
}

impl EntryFilter {
    pub fn new(request: impl Into<String>, redirect: impl Into<String>) -> Self {
        Self {
            request: request.into(),
            redirect: redirect.into(),
        }
    }

    pub fn matches(&self, entry: &RedirectEntry) -> bool {
        contains_ignore_case(&entry.request_url, &self.request)
            && contains_ignore_case(&entry.redirect_url, &self.redirect)
    }

    /// Matching entries in server order, each tagged with its server position
    pub fn apply(&self, entries: &[RedirectEntry]) -> FilteredRows {
        let rows = entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| self.matches(entry))
            .map(|(i, entry)| VisibleRow {
                position: i as u32 + 1,
                entry: entry.clone(),
            })
            .collect();
        FilteredRows { rows, total: entries.len() }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// An entry as rendered, with its 1-based position in the unfiltered list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleRow {
    pub position: u32,
    pub entry: RedirectEntry,
}

/// Result of applying a filter to the full list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredRows {
    pub rows: Vec<VisibleRow>,
    /// Length of the unfiltered list
    pub total: usize,
}

impl FilteredRows {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, row: usize) -> Option<&VisibleRow> {
        self.rows.get(row)
    }

    /// True when every fetched entry is on screen, so rendered order
    /// matches server order
    pub fn is_unfiltered(&self) -> bool {
        self.rows.len() == self.total
    }

    /// How the backend should find the entry rendered at `row` (0-based).
    ///
    /// Unfiltered rows go by position (`row + 1`); filtered rows go by the
    /// request URL the entry had before editing.
    pub fn key_for(&self, row: usize, init_request_url: &str) -> EntryKey {
        if self.is_unfiltered() {
            EntryKey::Position(row as u32 + 1)
        } else {
            EntryKey::RequestUrl(init_request_url.to_string())
        }
    }

    /// Rendered row currently showing the entry at server `position`
    pub fn row_of_position(&self, position: u32) -> Option<usize> {
        if self.is_unfiltered() {
            let row = position.checked_sub(1)? as usize;
            return (row < self.rows.len()).then_some(row);
        }
        self.rows.iter().position(|r| r.position == position)
    }
}
