//! Redirect Table Component
//!
//! Fetches the entry list, filters it locally and renders it through a
//! virtualized list. Owns update and delete round-trips.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_virtual_list::{Align, VirtualList, VirtualListHandle};

use crate::api;
use crate::components::RedirectRow;
use crate::config::{AppConfig, ROW_HEIGHT_PX, TABLE_OVERSCAN};
use crate::context::AppContext;
use crate::error::Operation;
use crate::filter::FilteredRows;
use crate::models::{RedirectAction, RedirectEntry};
use crate::mutation::{MutationOutcome, RowEdit};
use crate::notify;
use crate::store::{store_set_entries, use_app_store, AppStateStoreFields};

#[component]
pub fn RedirectTable() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let config = StoredValue::new(use_context::<AppConfig>().expect("AppConfig should be provided"));
    let store = use_app_store();
    let handle = VirtualListHandle::new();
    let edit = RwSignal::new(RowEdit::Viewing);

    let rows: Memo<FilteredRows> = Memo::new(move |_| {
        let filter = store.filter().get();
        store.entries().with(|entries| filter.apply(entries))
    });

    // Fetch on mount and whenever a reload is requested
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let config = config.get_value();
        spawn_local(async move {
            match api::list_redirects(&config).await {
                Ok(loaded) => {
                    log::info!("[TABLE] Loaded {} entries (trigger={})", loaded.len(), trigger);
                    store_set_entries(&store, loaded);
                    if let Some(position) = ctx.take_pending_scroll() {
                        ctx.scroll_to(position);
                    }
                }
                Err(err) => {
                    log::error!("[TABLE] fetch failed: {}", err);
                    let _ = ctx.take_pending_scroll();
                    notify::alert(Operation::Fetch.failure_message());
                }
            }
        });
    });

    // Bring a server position into view, translated to the rendered row
    Effect::new(move |_| {
        let Some(position) = ctx.scroll_target.get() else { return };
        ctx.clear_scroll_target();
        match rows.with_untracked(|r| r.row_of_position(position)) {
            Some(row) => handle.scroll_to_item(row, Align::Center),
            None => log::debug!("[TABLE] position {} not on screen, not scrolling", position),
        }
    });

    // Rendered positions shift on re-fetch and on filter changes
    Effect::new(move |_| {
        rows.with(|r| edit.update(|e| e.reanchor(r)));
    });

    let save = Callback::new(move |row: usize| {
        let RowEdit::Editing { row: editing_row, init_request_url, request_url, redirect_url } = edit.get_untracked() else {
            return;
        };
        if editing_row != row {
            return;
        }
        let key = rows.with_untracked(|r| r.key_for(row, &init_request_url));
        let action = RedirectAction::update(key, RedirectEntry::new(request_url, redirect_url));
        run_mutation(ctx, config.get_value(), Operation::Save, action, move |outcome| {
            edit.update(|e| e.apply(outcome));
        });
    });

    let delete = Callback::new(move |row: usize| {
        let Some(key) = rows.with_untracked(|r| r.get(row).map(|visible| r.key_for(row, &visible.entry.request_url))) else {
            return;
        };
        run_mutation(ctx, config.get_value(), Operation::Delete, RedirectAction::delete(key), |_| {});
    });

    view! {
        <div class="table-body">
            <VirtualList
                item_count=Signal::derive(move || rows.with(|r| r.len()))
                item_size=ROW_HEIGHT_PX
                overscan=TABLE_OVERSCAN
                handle=handle
                class="redirect-table"
                row=move |index| view! {
                    <RedirectRow row=index rows=rows edit=edit on_save=save on_delete=delete />
                }
            />
        </div>
    }
}

/// Send one mutation, report failures, and re-fetch on success
fn run_mutation(
    ctx: AppContext,
    config: AppConfig,
    op: Operation,
    action: RedirectAction,
    on_outcome: impl FnOnce(&MutationOutcome) + 'static,
) {
    spawn_local(async move {
        let outcome = MutationOutcome::from_result(op, api::mutate_redirect(&config, &action).await);
        if let Some(message) = outcome.refusal() {
            log::warn!("[TABLE] {} not applied: {}", action.name(), message);
        }
        if let Some(message) = outcome.message() {
            notify::alert(message);
        }
        on_outcome(&outcome);
        if outcome.refetch() {
            ctx.reload_then_scroll(outcome.scroll_to());
        }
    });
}
