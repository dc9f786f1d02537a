//! Redirect Library App
//!
//! Shell: header, login dialog, and the redirect management page once
//! logged in.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{AddRedirectForm, Header, LoginModal, RedirectTable, SearchInputs};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::notify;
use crate::session::LoginOutcome;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    let reload_trigger = signal(0u32);
    let scroll_target = signal::<Option<u32>>(None);

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new(reload_trigger, scroll_target));
    provide_context(config.clone());
    let config = StoredValue::new(config);

    let logged_in = move || store.session().read().logged_in;

    let handle_login = move |(username, password): (String, String)| {
        let config = config.get_value();
        spawn_local(async move {
            let outcome = LoginOutcome::from_result(api::login(&config, &username, &password).await);
            if outcome == LoginOutcome::Accepted {
                log::info!("[AUTH] logged in as {}", username);
            } else if let Some(message) = outcome.refusal() {
                log::warn!("[AUTH] login refused: {}", message);
            }
            if let Some(message) = outcome.message() {
                notify::alert(message);
            }
            store.session().write().apply(&outcome);
        });
    };

    view! {
        <div id="redirects-page">
            <Header />
            <main>
                <Show
                    when=logged_in
                    fallback=|| view! {
                        <p class="notice">
                            "You are not logged in. You must be logged in to access the redirect library."
                        </p>
                    }
                >
                    <div class="main-page">
                        <SearchInputs />
                        <div class="box">
                            <div class="table-header">
                                <h3>"Index"</h3>
                                <h3>"Request URL"</h3>
                                <h3>"Redirect URL"</h3>
                                <h3>"Edit"</h3>
                                <h3>"Delete"</h3>
                            </div>
                            <RedirectTable />
                            <AddRedirectForm />
                        </div>
                    </div>
                </Show>
                <LoginModal
                    open=Signal::derive(move || store.session().read().login_open)
                    on_close=move |_: ()| store.session().write().close_login()
                    on_login=handle_login
                />
            </main>
        </div>
    }
}
