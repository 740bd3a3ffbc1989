//! Profile Section
//!
//! Read-only security/stats/preferences panels plus two limited forms:
//! name/email update and password change. Saved notices clear themselves
//! after a short delay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::format;
use crate::i18n::{error_text, translate};
use crate::models::{LoadState, Profile};
use crate::router::Section;
use crate::store::{use_session, SessionStoreFields};

const NOTICE_MS: u32 = 2500;

#[component]
pub fn ProfileSection() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();
    let lang = session.lang();

    let (profile, set_profile) = signal(LoadState::<Profile>::Loading);

    // editable fields, pre-filled from the last loaded profile
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (info_error, set_info_error) = signal(Option::<String>::None);
    let (info_saving, set_info_saving) = signal(false);
    let (info_saved, set_info_saved) = signal(false);

    let (current_password, set_current_password) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (password_error, set_password_error) = signal(Option::<String>::None);
    let (password_saving, set_password_saving) = signal(false);
    let (password_saved, set_password_saved) = signal(false);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        if ctx.section.get() != Section::Profile {
            return;
        }
        set_profile.set(LoadState::Loading);
        spawn_local(async move {
            match api::profile::fetch().await {
                Ok(payload) => {
                    set_name.set(payload.name.clone());
                    set_email.set(payload.email.clone());
                    set_profile.set(LoadState::Ready(payload));
                }
                Err(message) => set_profile.set(LoadState::Error(message)),
            }
        });
    });

    let save_info = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name_value = name.get().trim().to_string();
        let email_value = email.get().trim().to_string();
        if name_value.is_empty() || email_value.is_empty() {
            set_info_error.set(Some("error.fields_required".to_string()));
            return;
        }
        set_info_saving.set(true);
        set_info_error.set(None);
        spawn_local(async move {
            let result = api::profile::update(&name_value, &email_value).await;
            set_info_saving.set(false);
            match result {
                Ok(()) => {
                    // keep the header in sync with the new identity
                    session.user_name().set(name_value);
                    session.user_email().set(email_value);
                    ctx.reload();
                    set_info_saved.set(true);
                    spawn_local(async move {
                        TimeoutFuture::new(NOTICE_MS).await;
                        set_info_saved.set(false);
                    });
                }
                Err(message) => set_info_error.set(Some(message)),
            }
        });
    };

    let save_password = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = current_password.get();
        let new = new_password.get();
        let confirm = confirm_password.get();
        if current.is_empty() || new.is_empty() || confirm.is_empty() {
            set_password_error.set(Some("error.fields_required".to_string()));
            return;
        }
        if new.chars().count() < 8 {
            set_password_error.set(Some("error.password_too_short".to_string()));
            return;
        }
        if new != confirm {
            set_password_error.set(Some("error.password_mismatch".to_string()));
            return;
        }
        set_password_saving.set(true);
        set_password_error.set(None);
        spawn_local(async move {
            let result = api::profile::change_password(&current, &new).await;
            set_password_saving.set(false);
            match result {
                Ok(()) => {
                    set_current_password.set(String::new());
                    set_new_password.set(String::new());
                    set_confirm_password.set(String::new());
                    set_password_saved.set(true);
                    spawn_local(async move {
                        TimeoutFuture::new(NOTICE_MS).await;
                        set_password_saved.set(false);
                    });
                }
                Err(message) => set_password_error.set(Some(message)),
            }
        });
    };

    view! {
        <section class="section">
            {move || match profile.get() {
                LoadState::Loading => {
                    view! { <p class="placeholder">{translate(lang.get(), "common.loading")}</p> }
                        .into_any()
                }
                LoadState::Error(message) => {
                    view! { <p class="error-text">{error_text(lang.get(), &message)}</p> }.into_any()
                }
                LoadState::Ready(payload) => {
                    let security = payload.security.clone();
                    let stats = payload.stats.clone();
                    let preferences = payload.preferences.clone();
                    view! {
                        <div class="profile-grid">
                            <div class="profile-panel">
                                <h3>{move || translate(lang.get(), "profile.security_title")}</h3>
                                <dl>
                                    <dt>{move || translate(lang.get(), "profile.last_login")}</dt>
                                    <dd>
                                        {match security.last_login.clone() {
                                            Some(raw) => {
                                                view! { <span>{format::format_datetime(&raw)}</span> }
                                                    .into_any()
                                            }
                                            None => {
                                                view! {
                                                    <span>{move || translate(lang.get(), "profile.never")}</span>
                                                }
                                                    .into_any()
                                            }
                                        }}
                                    </dd>
                                    <dt>{move || translate(lang.get(), "profile.two_factor")}</dt>
                                    <dd>
                                        {move || {
                                            let key = if security.two_factor {
                                                "profile.enabled"
                                            } else {
                                                "profile.disabled"
                                            };
                                            translate(lang.get(), key)
                                        }}
                                    </dd>
                                </dl>
                            </div>
                            <div class="profile-panel">
                                <h3>{move || translate(lang.get(), "profile.stats_title")}</h3>
                                <dl>
                                    <dt>{move || translate(lang.get(), "profile.stat_appointments")}</dt>
                                    <dd>{stats.appointments_total}</dd>
                                    <dt>{move || translate(lang.get(), "profile.stat_tasks_open")}</dt>
                                    <dd>{stats.tasks_open}</dd>
                                    <dt>{move || translate(lang.get(), "profile.member_since")}</dt>
                                    <dd>
                                        {stats
                                            .member_since
                                            .clone()
                                            .map(|raw| format::format_date(&raw))
                                            .unwrap_or_default()}
                                    </dd>
                                </dl>
                            </div>
                            <div class="profile-panel">
                                <h3>{move || translate(lang.get(), "profile.prefs_title")}</h3>
                                <dl>
                                    <dt>{move || translate(lang.get(), "profile.pref_language")}</dt>
                                    <dd>{preferences.language.clone().to_uppercase()}</dd>
                                    <dt>{move || translate(lang.get(), "profile.pref_notifications")}</dt>
                                    <dd>
                                        {move || {
                                            let key = if preferences.notifications {
                                                "profile.enabled"
                                            } else {
                                                "profile.disabled"
                                            };
                                            translate(lang.get(), key)
                                        }}
                                    </dd>
                                </dl>
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }}
            <div class="profile-grid">
                <form class="profile-panel" on:submit=save_info>
                    <h3>{move || translate(lang.get(), "profile.info_title")}</h3>
                    <label>
                        {move || translate(lang.get(), "profile.name_label")}
                        <input
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        {move || translate(lang.get(), "profile.email_label")}
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </label>
                    {move || {
                        info_error
                            .get()
                            .map(|message| {
                                view! { <p class="error-text">{error_text(lang.get(), &message)}</p> }
                            })
                    }}
                    <Show when=move || info_saved.get()>
                        <p class="notice">{move || translate(lang.get(), "profile.saved")}</p>
                    </Show>
                    <button type="submit" class="primary-btn" disabled=move || info_saving.get()>
                        {move || {
                            let key = if info_saving.get() { "action.saving" } else { "action.save" };
                            translate(lang.get(), key)
                        }}
                    </button>
                </form>
                <form class="profile-panel" on:submit=save_password>
                    <h3>{move || translate(lang.get(), "profile.password_title")}</h3>
                    <label>
                        {move || translate(lang.get(), "profile.current_password")}
                        <input
                            type="password"
                            prop:value=move || current_password.get()
                            on:input=move |ev| set_current_password.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        {move || translate(lang.get(), "profile.new_password")}
                        <input
                            type="password"
                            prop:value=move || new_password.get()
                            on:input=move |ev| set_new_password.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        {move || translate(lang.get(), "profile.confirm_password")}
                        <input
                            type="password"
                            prop:value=move || confirm_password.get()
                            on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                        />
                    </label>
                    {move || {
                        password_error
                            .get()
                            .map(|message| {
                                view! { <p class="error-text">{error_text(lang.get(), &message)}</p> }
                            })
                    }}
                    <Show when=move || password_saved.get()>
                        <p class="notice">{move || translate(lang.get(), "profile.password_saved")}</p>
                    </Show>
                    <button type="submit" class="primary-btn" disabled=move || password_saving.get()>
                        {move || {
                            let key = if password_saving.get() { "action.saving" } else { "action.save" };
                            translate(lang.get(), key)
                        }}
                    </button>
                </form>
            </div>
        </section>
    }
}
