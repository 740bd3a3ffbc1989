//! Login / Register View
//!
//! Gates the dashboard behind the demo auth endpoints. One form, two
//! modes; the submit control is disabled while the call is in flight and
//! restored in all outcomes.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::i18n::{error_text, translate};
use crate::store::{store_set_session, use_session, SessionStoreFields};

#[component]
pub fn LoginView() -> impl IntoView {
    let session = use_session();
    let lang = session.lang();

    let (registering, set_registering) = signal(false);
    let (identifier, set_identifier) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (submitting, set_submitting) = signal(false);

    let switch_mode = move |_| {
        set_registering.update(|v| *v = !*v);
        set_error.set(None);
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let is_register = registering.get();
        let identifier_value = identifier.get().trim().to_string();
        let name_value = name.get().trim().to_string();
        let email_value = email.get().trim().to_string();
        let password_value = password.get();

        let complete = if is_register {
            !name_value.is_empty() && !email_value.is_empty() && !password_value.is_empty()
        } else {
            !identifier_value.is_empty() && !password_value.is_empty()
        };
        if !complete {
            set_error.set(Some("error.fields_required".to_string()));
            return;
        }

        set_submitting.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = if is_register {
                api::auth::register(&name_value, &email_value, &password_value).await
            } else {
                api::auth::login(&identifier_value, &password_value).await
            };
            set_submitting.set(false);
            match result {
                Ok(auth) => {
                    store_set_session(&session, auth.token, auth.user.name, auth.user.email);
                }
                Err(message) => set_error.set(Some(message)),
            }
        });
    };

    view! {
        <div class="auth-layout">
            <form class="auth-card" on:submit=submit>
                <h2>
                    {move || {
                        let key = if registering.get() { "auth.register_title" } else { "auth.login_title" };
                        translate(lang.get(), key)
                    }}
                </h2>
                <Show when=move || registering.get()>
                    <label>
                        {move || translate(lang.get(), "auth.name")}
                        <input
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        {move || translate(lang.get(), "auth.email")}
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </label>
                </Show>
                <Show when=move || !registering.get()>
                    <label>
                        {move || translate(lang.get(), "auth.identifier")}
                        <input
                            type="text"
                            prop:value=move || identifier.get()
                            on:input=move |ev| set_identifier.set(event_target_value(&ev))
                        />
                    </label>
                </Show>
                <label>
                    {move || translate(lang.get(), "auth.password")}
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                {move || {
                    error
                        .get()
                        .map(|message| view! { <p class="error-text">{error_text(lang.get(), &message)}</p> })
                }}
                <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                    {move || {
                        let key = if submitting.get() {
                            "auth.working"
                        } else if registering.get() {
                            "auth.submit_register"
                        } else {
                            "auth.submit_login"
                        };
                        translate(lang.get(), key)
                    }}
                </button>
                <button type="button" class="link-btn" on:click=switch_mode>
                    {move || {
                        let key = if registering.get() { "auth.switch_to_login" } else { "auth.switch_to_register" };
                        translate(lang.get(), key)
                    }}
                </button>
            </form>
        </div>
    }
}
