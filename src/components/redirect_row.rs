//! Redirect Row Component
//!
//! One table row, either showing an entry or editing it in place.

use leptos::prelude::*;

use crate::components::ConfirmButton;
use crate::error::Operation;
use crate::filter::FilteredRows;
use crate::mutation::RowEdit;

#[component]
pub fn RedirectRow(
    /// Rendered row (0-based)
    row: usize,
    rows: Memo<FilteredRows>,
    edit: RwSignal<RowEdit>,
    #[prop(into)] on_save: Callback<usize>,
    #[prop(into)] on_delete: Callback<usize>,
) -> impl IntoView {
    // Memos so typing into the edit fields does not rebuild the row
    let entry = Memo::new(move |_| rows.with(|r| r.get(row).map(|visible| visible.entry.clone())));
    let editing = Memo::new(move |_| edit.with(|e| e.is_editing(row)));

    move || {
        let Some(entry) = entry.get() else {
            return view! { <div class="row"></div> }.into_any();
        };

        if editing.get() {
            // Rows are recycled while scrolling; restore what was typed
            let draft = edit.with_untracked(RowEdit::draft).unwrap_or_else(|| entry.clone());
            view! {
                <div class="row editing">
                    <div class="cell">{row + 1}</div>
                    <input
                        class="cell"
                        type="text"
                        name="request_url"
                        prop:value=draft.request_url.clone()
                        on:input=move |ev| edit.update(|e| e.set_request_url(event_target_value(&ev)))
                    />
                    <input
                        class="cell"
                        type="text"
                        name="redirect_url"
                        prop:value=draft.redirect_url.clone()
                        on:input=move |ev| edit.update(|e| e.set_redirect_url(event_target_value(&ev)))
                    />
                    <ConfirmButton
                        label="Save"
                        prompt=Operation::Save.confirm_prompt()
                        button_class="cell add-save"
                        on_confirm=move |_: ()| on_save.run(row)
                    />
                    <button class="cell cancel" on:click=move |_| edit.update(RowEdit::cancel)>
                        "Cancel"
                    </button>
                </div>
            }
            .into_any()
        } else {
            let begin = entry.clone();
            view! {
                <div class="row">
                    <div class="cell">{row + 1}</div>
                    <div class="cell" title=entry.request_url.clone()>{entry.request_url.clone()}</div>
                    <div class="cell" title=entry.redirect_url.clone()>{entry.redirect_url.clone()}</div>
                    <button class="cell" on:click=move |_| edit.set(RowEdit::begin(row, &begin))>
                        "Edit"
                    </button>
                    <ConfirmButton
                        label="Delete"
                        prompt=Operation::Delete.confirm_prompt()
                        button_class="cell"
                        on_confirm=move |_: ()| on_delete.run(row)
                    />
                </div>
            }
            .into_any()
        }
    }
}
