//! Dashboard Summary Section
//!
//! Aggregate KPI cards plus the "today" appointment and task lists.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::format;
use crate::i18n::{error_text, translate};
use crate::models::{DashboardData, LoadState};
use crate::router::Section;
use crate::store::{use_session, SessionStoreFields};

#[component]
pub fn DashboardSection() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();
    let lang = session.lang();

    let (data, set_data) = signal(LoadState::<DashboardData>::Loading);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        if ctx.section.get() != Section::Dashboard {
            return;
        }
        set_data.set(LoadState::Loading);
        spawn_local(async move {
            match api::dashboard::fetch().await {
                Ok(payload) => set_data.set(LoadState::Ready(payload)),
                Err(message) => set_data.set(LoadState::Error(message)),
            }
        });
    });

    view! {
        <section class="section">
            {move || match data.get() {
                LoadState::Loading => {
                    view! { <p class="placeholder">{translate(lang.get(), "common.loading")}</p> }
                        .into_any()
                }
                LoadState::Error(message) => {
                    view! { <p class="error-text">{error_text(lang.get(), &message)}</p> }.into_any()
                }
                LoadState::Ready(payload) => {
                    let stats = payload.stats.clone();
                    let appointments = payload.today_appointments.clone();
                    let tasks = payload.today_tasks.clone();
                    view! {
                        <div class="kpi-grid">
                            <KpiCard label_key="dashboard.appointments_today" value=stats.appointments_today />
                            <KpiCard label_key="dashboard.appointments_pending" value=stats.appointments_pending />
                            <KpiCard label_key="dashboard.tasks_open" value=stats.tasks_open />
                            <KpiCard label_key="dashboard.categories_total" value=stats.categories_total />
                        </div>
                        <div class="today-grid">
                            <div class="today-panel">
                                <h3>{move || translate(lang.get(), "dashboard.today_appointments")}</h3>
                                {if appointments.is_empty() {
                                    view! {
                                        <p class="placeholder">
                                            {move || translate(lang.get(), "dashboard.no_appointments_today")}
                                        </p>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <ul class="today-list">
                                            {appointments
                                                .into_iter()
                                                .map(|appointment| {
                                                    let status = appointment.status;
                                                    view! {
                                                        <li>
                                                            <span class="today-time">
                                                                {format::format_time(&appointment.start_time)}
                                                            </span>
                                                            <span class="today-title">{appointment.title}</span>
                                                            <span class=format!("badge status-{}", status.as_str())>
                                                                {move || {
                                                                    translate(lang.get(), &format!("status.{}", status.as_str()))
                                                                }}
                                                            </span>
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                    }
                                        .into_any()
                                }}
                            </div>
                            <div class="today-panel">
                                <h3>{move || translate(lang.get(), "dashboard.today_tasks")}</h3>
                                {if tasks.is_empty() {
                                    view! {
                                        <p class="placeholder">
                                            {move || translate(lang.get(), "dashboard.no_tasks_today")}
                                        </p>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <ul class="today-list">
                                            {tasks
                                                .into_iter()
                                                .map(|task| {
                                                    let priority = task.priority;
                                                    view! {
                                                        <li>
                                                            <span class="today-title">{task.title}</span>
                                                            <span class=format!("badge priority-{}", priority.as_str())>
                                                                {move || {
                                                                    translate(lang.get(), &format!("priority.{}", priority.as_str()))
                                                                }}
                                                            </span>
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                    }
                                        .into_any()
                                }}
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn KpiCard(label_key: &'static str, value: u32) -> impl IntoView {
    let session = use_session();
    let lang = session.lang();
    view! {
        <div class="kpi-card">
            <span class="kpi-value">{value}</span>
            <span class="kpi-label">{move || translate(lang.get(), label_key)}</span>
        </div>
    }
}
