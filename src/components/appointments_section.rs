//! Appointments Section
//!
//! Table view with a category filter, one modal for both create and edit,
//! quick status confirmation, and cancel-with-confirmation. Start and end
//! are entered as separate date and time-of-day fields and validated
//! locally (end strictly after start) before any network call.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::api::appointments::AppointmentInput;
use crate::components::modal::Modal;
use crate::context::AppContext;
use crate::format;
use crate::i18n::{error_text, translate};
use crate::models::{
    submit_outcome, Appointment, AppointmentStatus, Category, ListView, LoadState, SubmitOutcome,
};
use crate::router::Section;
use crate::store::{use_session, SessionStoreFields};

/// What the form modal is editing: a new appointment or an existing one.
#[derive(Debug, Clone, PartialEq)]
enum FormTarget {
    Create,
    Edit(Appointment),
}

#[component]
pub fn AppointmentsSection() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();
    let lang = session.lang();

    let (appointments, set_appointments) = signal(LoadState::<Vec<Appointment>>::Loading);
    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (filter, set_filter) = signal(Option::<u32>::None);
    let (form_target, set_form_target) = signal(Option::<FormTarget>::None);

    // categories feed the filter dropdown and the form's category select
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        if ctx.section.get() != Section::Appointments {
            return;
        }
        spawn_local(async move {
            if let Ok(list) = api::categories::list().await {
                set_categories.set(list);
            }
        });
    });

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        if ctx.section.get() != Section::Appointments {
            return;
        }
        let category_id = filter.get();
        set_appointments.set(LoadState::Loading);
        spawn_local(async move {
            match api::appointments::list(category_id).await {
                Ok(list) => set_appointments.set(LoadState::Ready(list)),
                Err(message) => set_appointments.set(LoadState::Error(message)),
            }
        });
    });

    view! {
        <section class="section">
            <div class="section-toolbar">
                <select
                    class="filter-select"
                    on:change=move |ev| set_filter.set(event_target_value(&ev).parse().ok())
                >
                    <option value="">{move || translate(lang.get(), "appointments.filter_all")}</option>
                    {move || {
                        categories
                            .get()
                            .into_iter()
                            .map(|category| {
                                view! { <option value=category.id.to_string()>{category.title}</option> }
                            })
                            .collect_view()
                    }}
                </select>
                <button
                    type="button"
                    class="primary-btn"
                    on:click=move |_| set_form_target.set(Some(FormTarget::Create))
                >
                    {move || translate(lang.get(), "appointments.new")}
                </button>
            </div>
            {move || match appointments.get().into_list_view() {
                ListView::Loading => {
                    view! { <p class="placeholder">{translate(lang.get(), "common.loading")}</p> }
                        .into_any()
                }
                ListView::Error(message) => {
                    view! { <p class="error-text">{error_text(lang.get(), &message)}</p> }.into_any()
                }
                ListView::Empty => {
                    view! { <p class="placeholder">{translate(lang.get(), "appointments.empty")}</p> }
                        .into_any()
                }
                ListView::Rows(list) => {
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>{move || translate(lang.get(), "appointments.col_title")}</th>
                                    <th>{move || translate(lang.get(), "appointments.col_client")}</th>
                                    <th>{move || translate(lang.get(), "appointments.col_start")}</th>
                                    <th>{move || translate(lang.get(), "appointments.col_end")}</th>
                                    <th>{move || translate(lang.get(), "appointments.col_status")}</th>
                                    <th>{move || translate(lang.get(), "appointments.col_actions")}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {list
                                    .into_iter()
                                    .map(|appointment| {
                                        view! {
                                            <AppointmentRow
                                                appointment=appointment
                                                set_form_target=set_form_target
                                            />
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                        .into_any()
                }
            }}
            <AppointmentFormModal
                form_target=form_target
                set_form_target=set_form_target
                categories=categories
            />
        </section>
    }
}

#[component]
fn AppointmentRow(
    appointment: Appointment,
    set_form_target: WriteSignal<Option<FormTarget>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();
    let lang = session.lang();

    let (working, set_working) = signal(false);
    let (confirming_cancel, set_confirming_cancel) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let id = appointment.id;
    let status = appointment.status;

    let set_status = move |status: AppointmentStatus| {
        set_working.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::appointments::update_status(id, status).await {
                // the reload replaces the whole table, row included
                Ok(()) => ctx.reload(),
                Err(message) => {
                    set_working.set(false);
                    set_error.set(Some(message));
                }
            }
        });
    };

    // edit works on the server's current record, not the possibly stale row
    let open_edit = move |_| {
        set_working.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = api::appointments::get(id).await;
            set_working.set(false);
            match result {
                Ok(fresh) => set_form_target.set(Some(FormTarget::Edit(fresh))),
                Err(message) => set_error.set(Some(message)),
            }
        });
    };

    view! {
        <tr>
            <td>{appointment.title.clone()}</td>
            <td>{appointment.client_name.clone().unwrap_or_default()}</td>
            <td>{format::format_datetime(&appointment.start_time)}</td>
            <td>{format::format_datetime(&appointment.end_time)}</td>
            <td>
                <span class=format!("badge status-{}", status.as_str())>
                    {move || translate(lang.get(), &format!("status.{}", status.as_str()))}
                </span>
            </td>
            <td class="row-actions">
                <button
                    type="button"
                    class="ghost-btn"
                    disabled=move || working.get()
                    on:click=open_edit
                >
                    {move || translate(lang.get(), "action.edit")}
                </button>
                <Show when=move || status == AppointmentStatus::Pending>
                    <button
                        type="button"
                        class="ghost-btn"
                        disabled=move || working.get()
                        on:click=move |_| set_status(AppointmentStatus::Confirmed)
                    >
                        {move || translate(lang.get(), "appointments.confirm_action")}
                    </button>
                </Show>
                <Show when=move || status != AppointmentStatus::Canceled && !confirming_cancel.get()>
                    <button
                        type="button"
                        class="danger-link"
                        on:click=move |_| set_confirming_cancel.set(true)
                    >
                        {move || translate(lang.get(), "appointments.cancel_action")}
                    </button>
                </Show>
                <Show when=move || confirming_cancel.get()>
                    <span class="delete-confirm">
                        <span class="delete-confirm-text">
                            {move || translate(lang.get(), "appointments.confirm_cancel")}
                        </span>
                        <button
                            type="button"
                            class="confirm-btn"
                            disabled=move || working.get()
                            on:click=move |_| set_status(AppointmentStatus::Canceled)
                        >
                            "✓"
                        </button>
                        <button
                            type="button"
                            class="cancel-btn"
                            on:click=move |_| set_confirming_cancel.set(false)
                        >
                            "✗"
                        </button>
                    </span>
                </Show>
                {move || {
                    error
                        .get()
                        .map(|message| {
                            view! { <span class="error-text">{error_text(lang.get(), &message)}</span> }
                        })
                }}
            </td>
        </tr>
    }
}

#[component]
fn AppointmentFormModal(
    form_target: ReadSignal<Option<FormTarget>>,
    set_form_target: WriteSignal<Option<FormTarget>>,
    categories: ReadSignal<Vec<Category>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();
    let lang = session.lang();

    let (title, set_title) = signal(String::new());
    let (client, set_client) = signal(String::new());
    let (category_id, set_category_id) = signal(Option::<u32>::None);
    let (start_date, set_start_date) = signal(String::new());
    let (start_time, set_start_time) = signal(String::new());
    let (end_date, set_end_date) = signal(String::new());
    let (end_time, set_end_time) = signal(String::new());
    let (notes, set_notes) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (submitting, set_submitting) = signal(false);

    // opening resets the error and resets (create) or pre-fills (edit)
    Effect::new(move |_| match form_target.get() {
        Some(FormTarget::Create) => {
            set_error.set(None);
            set_title.set(String::new());
            set_client.set(String::new());
            set_category_id.set(None);
            set_start_date.set(String::new());
            set_start_time.set(String::new());
            set_end_date.set(String::new());
            set_end_time.set(String::new());
            set_notes.set(String::new());
        }
        Some(FormTarget::Edit(appointment)) => {
            set_error.set(None);
            set_title.set(appointment.title);
            set_client.set(appointment.client_name.unwrap_or_default());
            set_category_id.set(appointment.category_id);
            set_start_date.set(format::date_input_value(&appointment.start_time));
            set_start_time.set(format::time_input_value(&appointment.start_time));
            set_end_date.set(format::date_input_value(&appointment.end_time));
            set_end_time.set(format::time_input_value(&appointment.end_time));
            set_notes.set(appointment.notes.unwrap_or_default());
        }
        None => {}
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title_value = title.get().trim().to_string();
        if title_value.is_empty() {
            set_error.set(Some("error.title_required".to_string()));
            return;
        }
        let start = match format::combine_date_time(&start_date.get(), &start_time.get()) {
            Ok(value) => value,
            Err(key) => {
                set_error.set(Some(key));
                return;
            }
        };
        let end = match format::combine_date_time(&end_date.get(), &end_time.get()) {
            Ok(value) => value,
            Err(key) => {
                set_error.set(Some(key));
                return;
            }
        };
        if let Err(key) = format::validate_time_range(&start, &end) {
            set_error.set(Some(key));
            return;
        }

        let client_value = client.get().trim().to_string();
        let notes_value = notes.get().trim().to_string();
        let input = AppointmentInput {
            title: title_value,
            category_id: category_id.get(),
            client_name: (!client_value.is_empty()).then_some(client_value),
            start_time: format::to_wire(&start),
            end_time: format::to_wire(&end),
            notes: (!notes_value.is_empty()).then_some(notes_value),
        };
        let editing_id = match form_target.get() {
            Some(FormTarget::Edit(appointment)) => Some(appointment.id),
            _ => None,
        };

        set_submitting.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = match editing_id {
                Some(id) => api::appointments::update(id, &input).await,
                None => api::appointments::create(&input).await,
            };
            set_submitting.set(false);
            match submit_outcome(result) {
                SubmitOutcome::CloseAndReload => {
                    set_form_target.set(None);
                    ctx.reload();
                }
                SubmitOutcome::KeepOpen(message) => set_error.set(Some(message)),
            }
        });
    };

    let open = Signal::derive(move || form_target.get().is_some());
    let modal_title = Signal::derive(move || {
        let key = match form_target.get() {
            Some(FormTarget::Edit(_)) => "appointments.edit",
            _ => "appointments.new",
        };
        translate(lang.get(), key)
    });

    view! {
        <Modal open=open title=modal_title on_close=move |_| set_form_target.set(None)>
            <form class="modal-form" on:submit=submit>
                <label>
                    {move || translate(lang.get(), "appointments.title_label")}
                    <input
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    {move || translate(lang.get(), "appointments.client_label")}
                    <input
                        type="text"
                        prop:value=move || client.get()
                        on:input=move |ev| set_client.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    {move || translate(lang.get(), "appointments.category_label")}
                    <select on:change=move |ev| set_category_id.set(event_target_value(&ev).parse().ok())>
                        <option value="" selected=move || category_id.get().is_none()>
                            {move || translate(lang.get(), "appointments.no_category")}
                        </option>
                        {move || {
                            categories
                                .get()
                                .into_iter()
                                .map(|category| {
                                    let id = category.id;
                                    view! {
                                        <option
                                            value=id.to_string()
                                            selected=move || category_id.get() == Some(id)
                                        >
                                            {category.title}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </label>
                <div class="field-row">
                    <label>
                        {move || translate(lang.get(), "appointments.start_date_label")}
                        <input
                            type="date"
                            prop:value=move || start_date.get()
                            on:input=move |ev| set_start_date.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        {move || translate(lang.get(), "appointments.start_time_label")}
                        <input
                            type="time"
                            prop:value=move || start_time.get()
                            on:input=move |ev| set_start_time.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <div class="field-row">
                    <label>
                        {move || translate(lang.get(), "appointments.end_date_label")}
                        <input
                            type="date"
                            prop:value=move || end_date.get()
                            on:input=move |ev| set_end_date.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        {move || translate(lang.get(), "appointments.end_time_label")}
                        <input
                            type="time"
                            prop:value=move || end_time.get()
                            on:input=move |ev| set_end_time.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <label>
                    {move || translate(lang.get(), "appointments.notes_label")}
                    <textarea
                        prop:value=move || notes.get()
                        on:input=move |ev| set_notes.set(event_target_value(&ev))
                    ></textarea>
                </label>
                {move || {
                    error
                        .get()
                        .map(|message| view! { <p class="error-text">{error_text(lang.get(), &message)}</p> })
                }}
                <div class="modal-actions">
                    <button type="button" class="ghost-btn" on:click=move |_| set_form_target.set(None)>
                        {move || translate(lang.get(), "action.cancel")}
                    </button>
                    <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                        {move || {
                            let key = if submitting.get() { "action.saving" } else { "action.save" };
                            translate(lang.get(), key)
                        }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
