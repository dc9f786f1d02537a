//! Mutation Outcomes and Edit State
//!
//! Decides what the UI does with a backend answer, and tracks the
//! add form and the row being edited.

use crate::error::{ApiError, Operation};
use crate::filter::FilteredRows;
use crate::models::{MutationResponse, RedirectEntry};

/// What the UI should do once a mutation request has finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// Accepted: reset the form, re-fetch, then scroll if a position is given
    Applied { scroll_to: Option<u32> },
    /// Refused by the backend: show its message, keep the form as it is
    Rejected { message: String, scroll_to: Option<u32> },
    /// The request never got an answer: show the fixed message
    Failed { message: &'static str },
}

impl MutationOutcome {
    pub fn from_result(op: Operation, result: Result<MutationResponse, ApiError>) -> Self {
        match result {
            Ok(resp) if resp.success => Self::Applied { scroll_to: resp.scroll_position() },
            Ok(resp) => Self::Rejected {
                scroll_to: resp.scroll_position(),
                message: resp
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| op.failure_message().to_string()),
            },
            Err(err) => {
                log::error!("[API] {:?} failed: {}", op, err);
                Self::Failed { message: op.failure_message() }
            }
        }
    }

    /// Whether the table must re-fetch
    pub fn refetch(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }

    /// Whether the add/edit form should be cleared
    pub fn clears_form(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }

    pub fn scroll_to(&self) -> Option<u32> {
        match self {
            Self::Applied { scroll_to } | Self::Rejected { scroll_to, .. } => *scroll_to,
            Self::Failed { .. } => None,
        }
    }

    /// Alert text, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Applied { .. } => None,
            Self::Rejected { message, .. } => Some(message.as_str()),
            Self::Failed { message } => Some(*message),
        }
    }

    /// The backend's refusal text; transport failures are logged in `from_result`
    pub fn refusal(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Pending add form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddDraft {
    pub active: bool,
    pub request_url: String,
    pub redirect_url: String,
}

impl AddDraft {
    pub fn open(&mut self) {
        self.active = true;
    }

    /// Close and forget typed values
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn entry(&self) -> RedirectEntry {
        RedirectEntry::new(self.request_url.clone(), self.redirect_url.clone())
    }

    pub fn apply(&mut self, outcome: &MutationOutcome) {
        if outcome.clears_form() {
            self.reset();
        }
    }
}

/// Per-table edit state; at most one row is being edited
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RowEdit {
    #[default]
    Viewing,
    Editing {
        /// Rendered row (0-based)
        row: usize,
        /// Request URL before editing, used as the match key when filtered
        init_request_url: String,
        request_url: String,
        redirect_url: String,
    },
}

impl RowEdit {
    /// Enter editing for `row`, pre-filled with its current values
    pub fn begin(row: usize, entry: &RedirectEntry) -> Self {
        Self::Editing {
            row,
            init_request_url: entry.request_url.clone(),
            request_url: entry.request_url.clone(),
            redirect_url: entry.redirect_url.clone(),
        }
    }

    pub fn is_editing(&self, target: usize) -> bool {
        matches!(self, Self::Editing { row, .. } if *row == target)
    }

    /// Values currently typed into the edit fields
    pub fn draft(&self) -> Option<RedirectEntry> {
        match self {
            Self::Editing { request_url, redirect_url, .. } => {
                Some(RedirectEntry::new(request_url.clone(), redirect_url.clone()))
            }
            Self::Viewing => None,
        }
    }

    pub fn set_request_url(&mut self, value: String) {
        if let Self::Editing { request_url, .. } = self {
            *request_url = value;
        }
    }

    pub fn set_redirect_url(&mut self, value: String) {
        if let Self::Editing { redirect_url, .. } = self {
            *redirect_url = value;
        }
    }

    /// Save success and Cancel go back to viewing; a failed save stays put
    pub fn apply(&mut self, outcome: &MutationOutcome) {
        if outcome.clears_form() {
            *self = Self::Viewing;
        }
    }

    pub fn cancel(&mut self) {
        *self = Self::Viewing;
    }

    /// Follow the edited entry to its new rendered row after the list or
    /// filter changed; drop the edit if the entry is no longer shown.
    pub fn reanchor(&mut self, rows: &FilteredRows) {
        let Self::Editing { row, init_request_url, .. } = self else { return };
        match rows.rows.iter().position(|r| r.entry.request_url == *init_request_url) {
            Some(found) => *row = found,
            None => *self = Self::Viewing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::EntryFilter;
    use crate::models::EntryKey;

    fn response(success: bool, message: Option<&str>, index: Option<i64>) -> MutationResponse {
        MutationResponse {
            success,
            message: message.map(String::from),
            index,
        }
    }

    #[test]
    fn test_applied_refetches_and_scrolls() {
        let outcome = MutationOutcome::from_result(Operation::Add, Ok(response(true, None, Some(3))));
        assert_eq!(outcome, MutationOutcome::Applied { scroll_to: Some(3) });
        assert!(outcome.refetch());
        assert_eq!(outcome.scroll_to(), Some(3));
        assert_eq!(outcome.message(), None);
    }

    #[test]
    fn test_rejected_keeps_form_and_skips_refetch() {
        let outcome = MutationOutcome::from_result(
            Operation::Add,
            Ok(response(false, Some("Request URL already exists at index 2"), Some(2))),
        );
        assert!(!outcome.refetch());
        assert!(!outcome.clears_form());
        assert_eq!(outcome.scroll_to(), Some(2));
        assert_eq!(outcome.message(), Some("Request URL already exists at index 2"));
        assert_eq!(outcome.refusal(), outcome.message());

        let mut draft = AddDraft {
            active: true,
            request_url: "/a".into(),
            redirect_url: "/b".into(),
        };
        draft.apply(&outcome);
        assert!(draft.active);
        assert_eq!(draft.request_url, "/a");
    }

    #[test]
    fn test_rejected_without_message_uses_fixed_text() {
        let outcome = MutationOutcome::from_result(Operation::Delete, Ok(response(false, None, Some(-1))));
        assert_eq!(outcome.message(), Some(Operation::Delete.failure_message()));
        assert_eq!(outcome.scroll_to(), None);
    }

    #[test]
    fn test_transport_failure() {
        let outcome = MutationOutcome::from_result(Operation::Save, Err(ApiError::Transport("offline".into())));
        assert_eq!(outcome, MutationOutcome::Failed { message: Operation::Save.failure_message() });
        assert!(!outcome.refetch());
        assert_eq!(outcome.scroll_to(), None);
        assert_eq!(outcome.refusal(), None);
    }

    #[test]
    fn test_add_draft_cleared_on_success() {
        let mut draft = AddDraft::default();
        draft.open();
        draft.request_url = "/a".into();
        draft.redirect_url = "/b".into();
        assert_eq!(draft.entry(), RedirectEntry::new("/a", "/b"));

        draft.apply(&MutationOutcome::Applied { scroll_to: None });
        assert_eq!(draft, AddDraft::default());
    }

    #[test]
    fn test_row_edit_lifecycle() {
        let entry = RedirectEntry::new("/old", "/target");
        let mut edit = RowEdit::begin(2, &entry);
        assert!(edit.is_editing(2));
        assert!(!edit.is_editing(1));

        edit.set_request_url("/new".into());
        assert_eq!(edit.draft(), Some(RedirectEntry::new("/new", "/target")));
        match &edit {
            RowEdit::Editing { init_request_url, request_url, .. } => {
                assert_eq!(init_request_url, "/old");
                assert_eq!(request_url, "/new");
            }
            RowEdit::Viewing => panic!("expected editing"),
        }

        // failed save leaves the row editing
        edit.apply(&MutationOutcome::Rejected { message: "no".into(), scroll_to: None });
        assert!(edit.is_editing(2));
        edit.apply(&MutationOutcome::Failed { message: "down" });
        assert!(edit.is_editing(2));

        edit.apply(&MutationOutcome::Applied { scroll_to: Some(1) });
        assert_eq!(edit, RowEdit::Viewing);
    }

    #[test]
    fn test_row_edit_cancel() {
        let mut edit = RowEdit::begin(0, &RedirectEntry::new("/a", "/b"));
        edit.cancel();
        assert_eq!(edit, RowEdit::Viewing);
        // setters are no-ops when not editing
        edit.set_redirect_url("/c".into());
        assert_eq!(edit, RowEdit::Viewing);
        assert_eq!(edit.draft(), None);
    }

    fn list(urls: &[&str]) -> Vec<RedirectEntry> {
        urls.iter().map(|u| RedirectEntry::new(*u, format!("https://target{}", u))).collect()
    }

    #[test]
    fn test_edit_follows_entry_after_refetch() {
        let before = EntryFilter::default().apply(&list(&["/a", "/b", "/c", "/d"]));
        let mut edit = RowEdit::begin(2, &before.rows[2].entry);

        // an earlier entry was deleted elsewhere; the list shifted up by one
        let after = EntryFilter::default().apply(&list(&["/b", "/c", "/d"]));
        edit.reanchor(&after);
        assert!(edit.is_editing(1));

        let RowEdit::Editing { row, init_request_url, .. } = &edit else {
            panic!("expected editing");
        };
        assert_eq!(after.key_for(*row, init_request_url), EntryKey::Position(2));
        assert_eq!(after.rows[*row].entry.request_url, "/c");
    }

    #[test]
    fn test_edit_dropped_when_entry_disappears() {
        let before = EntryFilter::default().apply(&list(&["/a", "/b", "/c"]));
        let mut edit = RowEdit::begin(1, &before.rows[1].entry);
        edit.set_request_url("/typed".into());

        edit.reanchor(&EntryFilter::default().apply(&list(&["/a", "/c"])));
        assert_eq!(edit, RowEdit::Viewing);
    }

    #[test]
    fn test_edit_follows_entry_through_filter_change() {
        let data = list(&["/shop/a", "/blog/b", "/shop/c"]);
        let all = EntryFilter::default().apply(&data);
        let mut edit = RowEdit::begin(2, &all.rows[2].entry);

        let shop = EntryFilter::new("shop", "").apply(&data);
        edit.reanchor(&shop);
        assert!(edit.is_editing(1));

        // filtered out entirely
        edit.reanchor(&EntryFilter::new("blog", "").apply(&data));
        assert_eq!(edit, RowEdit::Viewing);
    }

    #[test]
    fn test_reanchor_ignored_while_viewing() {
        let mut edit = RowEdit::Viewing;
        edit.reanchor(&EntryFilter::default().apply(&list(&["/a"])));
        assert_eq!(edit, RowEdit::Viewing);
    }
}
