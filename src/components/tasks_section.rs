//! Tasks Section
//!
//! Table view with per-row status select, inline delete confirmation and a
//! create modal. Same fetch-mutate-refetch lifecycle as appointments.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::api::tasks::TaskInput;
use crate::components::modal::Modal;
use crate::context::AppContext;
use crate::format;
use crate::i18n::{error_text, translate};
use crate::models::{submit_outcome, ListView, LoadState, SubmitOutcome, Task, TaskPriority, TaskStatus};
use crate::router::Section;
use crate::store::{use_session, SessionStoreFields};

#[component]
pub fn TasksSection() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();
    let lang = session.lang();

    let (tasks, set_tasks) = signal(LoadState::<Vec<Task>>::Loading);
    let (show_create, set_show_create) = signal(false);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        if ctx.section.get() != Section::Tasks {
            return;
        }
        set_tasks.set(LoadState::Loading);
        spawn_local(async move {
            match api::tasks::list().await {
                Ok(list) => set_tasks.set(LoadState::Ready(list)),
                Err(message) => set_tasks.set(LoadState::Error(message)),
            }
        });
    });

    view! {
        <section class="section">
            <div class="section-toolbar">
                <button type="button" class="primary-btn" on:click=move |_| set_show_create.set(true)>
                    {move || translate(lang.get(), "tasks.new")}
                </button>
            </div>
            {move || match tasks.get().into_list_view() {
                ListView::Loading => {
                    view! { <p class="placeholder">{translate(lang.get(), "common.loading")}</p> }
                        .into_any()
                }
                ListView::Error(message) => {
                    view! { <p class="error-text">{error_text(lang.get(), &message)}</p> }.into_any()
                }
                ListView::Empty => {
                    view! { <p class="placeholder">{translate(lang.get(), "tasks.empty")}</p> }
                        .into_any()
                }
                ListView::Rows(list) => {
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>{move || translate(lang.get(), "tasks.col_title")}</th>
                                    <th>{move || translate(lang.get(), "tasks.col_due")}</th>
                                    <th>{move || translate(lang.get(), "tasks.col_assignee")}</th>
                                    <th>{move || translate(lang.get(), "tasks.col_priority")}</th>
                                    <th>{move || translate(lang.get(), "tasks.col_status")}</th>
                                    <th>{move || translate(lang.get(), "tasks.col_actions")}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {list
                                    .into_iter()
                                    .map(|task| view! { <TaskRow task=task /> })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                        .into_any()
                }
            }}
            <CreateTaskModal open=show_create set_open=set_show_create />
        </section>
    }
}

#[component]
fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();
    let lang = session.lang();

    let (working, set_working) = signal(false);
    let (confirming, set_confirming) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let id = task.id;
    let status = task.status;
    let priority = task.priority;
    let completed = task.completed;

    // what the select shows; reverts to the server status on failure
    let (selected, set_selected) = signal(status);

    let change_status = move |ev: web_sys::Event| {
        let Some(new_status) = TaskStatus::from_str(&event_target_value(&ev)) else {
            return;
        };
        if new_status == status {
            return;
        }
        set_selected.set(new_status);
        set_working.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = api::tasks::update_status(id, new_status).await;
            set_selected.set(displayed_status(status, new_status, result.is_ok()));
            match result {
                Ok(()) => ctx.reload(),
                Err(message) => {
                    set_working.set(false);
                    set_error.set(Some(message));
                }
            }
        });
    };

    let delete = move |_| {
        set_working.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::tasks::delete(id).await {
                Ok(()) => ctx.reload(),
                Err(message) => {
                    set_working.set(false);
                    set_error.set(Some(message));
                }
            }
        });
    };

    view! {
        <tr class=move || if completed { "task-row done" } else { "task-row" }>
            <td>{task.title.clone()}</td>
            <td>{task.due_date.clone().map(|raw| format::format_date(&raw)).unwrap_or_default()}</td>
            <td>{task.assignee.clone().unwrap_or_default()}</td>
            <td>
                <span class=format!("badge priority-{}", priority.as_str())>
                    {move || translate(lang.get(), &format!("priority.{}", priority.as_str()))}
                </span>
            </td>
            <td>
                <select
                    class="status-select"
                    prop:value=move || selected.get().as_str().to_string()
                    disabled=move || working.get()
                    on:change=change_status
                >
                    {TaskStatus::ALL
                        .iter()
                        .map(|candidate| {
                            let candidate = *candidate;
                            view! {
                                <option value=candidate.as_str() selected=candidate == status>
                                    {move || translate(lang.get(), &format!("taskstatus.{}", candidate.as_str()))}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </td>
            <td class="row-actions">
                <Show when=move || !confirming.get()>
                    <button type="button" class="danger-link" on:click=move |_| set_confirming.set(true)>
                        {move || translate(lang.get(), "action.delete")}
                    </button>
                </Show>
                <Show when=move || confirming.get()>
                    <span class="delete-confirm">
                        <span class="delete-confirm-text">
                            {move || translate(lang.get(), "action.confirm_delete")}
                        </span>
                        <button
                            type="button"
                            class="confirm-btn"
                            disabled=move || working.get()
                            on:click=delete
                        >
                            "✓"
                        </button>
                        <button type="button" class="cancel-btn" on:click=move |_| set_confirming.set(false)>
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
fn CreateTaskModal(open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();
    let lang = session.lang();

    let (title, set_title) = signal(String::new());
    let (due_date, set_due_date) = signal(String::new());
    let (assignee, set_assignee) = signal(String::new());
    let (priority, set_priority) = signal(TaskPriority::Medium);
    let (department, set_department) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (submitting, set_submitting) = signal(false);

    Effect::new(move |_| {
        if open.get() {
            set_error.set(None);
            set_title.set(String::new());
            set_due_date.set(String::new());
            set_assignee.set(String::new());
            set_priority.set(TaskPriority::Medium);
            set_department.set(String::new());
        }
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title_value = title.get().trim().to_string();
        if title_value.is_empty() {
            set_error.set(Some("error.title_required".to_string()));
            return;
        }
        let due_value = due_date.get();
        let assignee_value = assignee.get().trim().to_string();
        let department_value = department.get().trim().to_string();
        let input = TaskInput {
            title: title_value,
            due_date: (!due_value.is_empty()).then_some(due_value),
            assignee: (!assignee_value.is_empty()).then_some(assignee_value),
            priority: priority.get(),
            department: (!department_value.is_empty()).then_some(department_value),
        };

        set_submitting.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = api::tasks::create(&input).await;
            set_submitting.set(false);
            match submit_outcome(result) {
                SubmitOutcome::CloseAndReload => {
                    set_open.set(false);
                    ctx.reload();
                }
                SubmitOutcome::KeepOpen(message) => set_error.set(Some(message)),
            }
        });
    };

    view! {
        <Modal
            open=open
            title=Signal::derive(move || translate(lang.get(), "tasks.new"))
            on_close=move |_| set_open.set(false)
        >
            <form class="modal-form" on:submit=submit>
                <label>
                    {move || translate(lang.get(), "tasks.title_label")}
                    <input
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                </label>
                <div class="field-row">
                    <label>
                        {move || translate(lang.get(), "tasks.due_label")}
                        <input
                            type="date"
                            prop:value=move || due_date.get()
                            on:input=move |ev| set_due_date.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        {move || translate(lang.get(), "tasks.priority_label")}
                        <select on:change=move |ev| {
                            if let Some(value) = TaskPriority::from_str(&event_target_value(&ev)) {
                                set_priority.set(value);
                            }
                        }>
                            {[TaskPriority::Low, TaskPriority::Medium, TaskPriority::High]
                                .iter()
                                .map(|candidate| {
                                    let candidate = *candidate;
                                    view! {
                                        <option
                                            value=candidate.as_str()
                                            selected=move || priority.get() == candidate
                                        >
                                            {move || {
                                                translate(lang.get(), &format!("priority.{}", candidate.as_str()))
                                            }}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>
                </div>
                <label>
                    {move || translate(lang.get(), "tasks.assignee_label")}
                    <input
                        type="text"
                        prop:value=move || assignee.get()
                        on:input=move |ev| set_assignee.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    {move || translate(lang.get(), "tasks.department_label")}
                    <input
                        type="text"
                        prop:value=move || department.get()
                        on:input=move |ev| set_department.set(event_target_value(&ev))
                    />
                </label>
                {move || {
                    error
                        .get()
                        .map(|message| view! { <p class="error-text">{error_text(lang.get(), &message)}</p> })
                }}
                <div class="modal-actions">
                    <button type="button" class="ghost-btn" on:click=move |_| set_open.set(false)>
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

/// Status the select should display after an update attempt: the server
/// keeps the old status on failure, so the control falls back to it.
fn displayed_status(original: TaskStatus, attempted: TaskStatus, succeeded: bool) -> TaskStatus {
    if succeeded {
        attempted
    } else {
        original
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_status_update_reverts_the_displayed_status() {
        assert_eq!(
            displayed_status(TaskStatus::Todo, TaskStatus::Done, false),
            TaskStatus::Todo
        );
        assert_eq!(
            displayed_status(TaskStatus::Inprogress, TaskStatus::Todo, false),
            TaskStatus::Inprogress
        );
    }

    #[test]
    fn successful_status_update_keeps_the_new_status() {
        assert_eq!(
            displayed_status(TaskStatus::Todo, TaskStatus::Done, true),
            TaskStatus::Done
        );
    }
}
