//! Shell Header
//!
//! Brand, section navigation, language switcher, user menu and logout.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::i18n::{set_language, translate};
use crate::router::Section;
use crate::store::{store_clear_session, use_session, SessionStoreFields};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();
    let lang = session.lang();

    view! {
        <header class="top-bar">
            <span class="brand">"RDV Planner"</span>
            <nav class="section-nav">
                {Section::ALL
                    .iter()
                    .map(|section| {
                        let section = *section;
                        view! {
                            <a
                                href=section.hash()
                                class=move || {
                                    if ctx.section.get() == section { "nav-link active" } else { "nav-link" }
                                }
                                // the anchor updates the hash; clicking the
                                // already-active link fires no hashchange,
                                // so this forces the reload instead
                                on:click=move |_| ctx.link_clicked(section)
                            >
                                {move || translate(lang.get(), section.title_key())}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="top-bar-right">
                <div class="lang-switch">
                    {["fr", "en"]
                        .iter()
                        .map(|code| {
                            let code = *code;
                            view! {
                                <button
                                    type="button"
                                    class=move || {
                                        if lang.get().code() == code { "lang-btn active" } else { "lang-btn" }
                                    }
                                    on:click=move |_| set_language(session, code)
                                >
                                    {code.to_uppercase()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <span class="user-name">{move || session.user_name().get()}</span>
                <button
                    type="button"
                    class="ghost-btn"
                    on:click=move |_| store_clear_session(&session)
                >
                    {move || translate(lang.get(), "common.logout")}
                </button>
            </div>
        </header>
    }
}
