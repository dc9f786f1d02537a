//! Login Modal Component
//!
//! Credential form shown over the page. Validation is left to the
//! browser's `required`; the caller handles the result.

use leptos::prelude::*;

#[component]
pub fn LoginModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    /// Receives (username, password)
    #[prop(into)] on_login: Callback<(String, String)>,
) -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_login.run((username.get_untracked(), password.get_untracked()));
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay">
                <div class="modal-content">
                    <button class="modal-close" on:click=move |_| on_close.run(())>"×"</button>
                    <h2>"Login"</h2>
                    <form on:submit=submit>
                        <input
                            type="text"
                            placeholder="Username"
                            required=true
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />
                        <input
                            type="password"
                            placeholder="Password"
                            required=true
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                        <button type="submit">"Login"</button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
