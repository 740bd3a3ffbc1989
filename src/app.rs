//! RDV Planner App Shell
//!
//! Provides the session store and navigation context, gates the dashboard
//! behind login, and switches between hash-routed sections. All sections
//! stay mounted; only the active one is visible, so a response arriving
//! after the user navigated away lands in a hidden section's own state and
//! never overwrites the visible one.

use leptos::ev;
use leptos::prelude::*;

use crate::components::{
    AppointmentsSection, CategoriesSection, DashboardSection, Header, LoginView, ProfileSection,
    TasksSection,
};
use crate::context::AppContext;
use crate::i18n::{self, translate};
use crate::router::{self, Section};
use crate::store::{Session, SessionStore, SessionStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let session = SessionStore::new(Session::default());
    provide_context(session);
    let lang = session.lang();

    let (section, set_section) = signal(router::current_section());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new((section, set_section), (reload_trigger, set_reload_trigger));
    provide_context(ctx);

    i18n::set_document_lang(lang.get_untracked());

    // hash navigation drives the visible section
    let _hash_listener = window_event_listener(ev::hashchange, move |_| {
        ctx.set_section(router::current_section());
    });

    let logged_in = Signal::derive(move || session.token().get().is_some());

    view! {
        <Show when=move || !logged_in.get()>
            <LoginView />
        </Show>
        <Show when=move || logged_in.get()>
            <div class="app-layout">
                <Header />
                <main class="main-content">
                    <h1 class="section-title">
                        {move || translate(lang.get(), section.get().title_key())}
                    </h1>
                    <div class="section-wrap" class:hidden=move || section.get() != Section::Dashboard>
                        <DashboardSection />
                    </div>
                    <div class="section-wrap" class:hidden=move || section.get() != Section::Categories>
                        <CategoriesSection />
                    </div>
                    <div
                        class="section-wrap"
                        class:hidden=move || section.get() != Section::Appointments
                    >
                        <AppointmentsSection />
                    </div>
                    <div class="section-wrap" class:hidden=move || section.get() != Section::Tasks>
                        <TasksSection />
                    </div>
                    <div class="section-wrap" class:hidden=move || section.get() != Section::Profile>
                        <ProfileSection />
                    </div>
                </main>
            </div>
        </Show>
    }
}
