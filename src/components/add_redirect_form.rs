//! Add Redirect Form Component
//!
//! "Add a Redirect" button that expands into an inline row for a new entry.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::Operation;
use crate::components::ConfirmButton;
use crate::models::RedirectAction;
use crate::mutation::MutationOutcome;
use crate::notify;
use crate::store::{use_app_store, AppStateStoreFields};

/// Form for posting a new entry below the table
#[component]
pub fn AddRedirectForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let config = use_context::<AppConfig>().expect("AppConfig should be provided");
    let store = use_app_store();
    let config = StoredValue::new(config);

    let add_entry = move |_: ()| {
        let entry = store.add_draft().read_untracked().entry();
        let config = config.get_value();

        spawn_local(async move {
            let action = RedirectAction::add(entry);
            let outcome = MutationOutcome::from_result(Operation::Add, api::mutate_redirect(&config, &action).await);
            if let Some(message) = outcome.refusal() {
                log::warn!("[ADD] not applied: {}", message);
            }
            if let Some(message) = outcome.message() {
                notify::alert(message);
            }
            store.add_draft().write().apply(&outcome);
            if outcome.refetch() {
                ctx.reload_then_scroll(outcome.scroll_to());
            } else if let Some(position) = outcome.scroll_to() {
                ctx.scroll_to(position);
            }
        });
    };

    view! {
        <Show
            when=move || store.add_draft().read().active
            fallback=move || view! {
                <button class="add-redirect" on:click=move |_| store.add_draft().write().open()>
                    "Add a Redirect"
                </button>
            }
        >
            <div class="add-section">
                <input
                    class="cell"
                    type="text"
                    name="request_url"
                    placeholder="Request URL"
                    prop:value=move || store.add_draft().read().request_url.clone()
                    on:input=move |ev| store.add_draft().write().request_url = event_target_value(&ev)
                />
                <input
                    class="cell"
                    type="text"
                    name="redirect_url"
                    placeholder="Redirect URL"
                    prop:value=move || store.add_draft().read().redirect_url.clone()
                    on:input=move |ev| store.add_draft().write().redirect_url = event_target_value(&ev)
                />
                <ConfirmButton
                    label="Add"
                    prompt=Operation::Add.confirm_prompt()
                    button_class="cell add-save"
                    on_confirm=add_entry
                />
                <button class="cell cancel" on:click=move |_| store.add_draft().write().reset()>
                    "Cancel"
                </button>
            </div>
        </Show>
    }
}
