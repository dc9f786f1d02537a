//! Search Inputs Component
//!
//! Two live filters over the fetched entries.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SearchInputs() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="search-inputs">
            <h3>"Search by:"</h3>
            <input
                type="text"
                placeholder="Search by Request URL..."
                prop:value=move || store.filter().read().request.clone()
                on:input=move |ev| store.filter().write().request = event_target_value(&ev)
            />
            <input
                type="text"
                placeholder="Search by Redirect URL..."
                prop:value=move || store.filter().read().redirect.clone()
                on:input=move |ev| store.filter().write().redirect = event_target_value(&ev)
            />
        </div>
    }
}
