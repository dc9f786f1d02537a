//! Header Component
//!
//! Page title with the Login/Logout control.

use leptos::prelude::*;

use crate::store::{store_logout, use_app_store, AppStateStoreFields};

#[component]
pub fn Header() -> impl IntoView {
    let store = use_app_store();
    let logged_in = move || store.session().get().logged_in;

    view! {
        <header class="app-header">
            <h1>"Redirect Library"</h1>
            <Show
                when=logged_in
                fallback=move || view! {
                    <button class="header-btn" on:click=move |_| store.session().write().open_login()>
                        "Login"
                    </button>
                }
            >
                <button
                    class="header-btn"
                    on:click=move |_| {
                        log::info!("[AUTH] logged out");
                        store_logout(&store);
                    }
                >
                    "Logout"
                </button>
            </Show>
        </header>
    }
}
