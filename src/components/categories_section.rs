//! Categories Section
//!
//! Card grid with a create modal and inline delete confirmation. Every
//! mutation triggers a full list reload; the grid always shows exactly the
//! last server response.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::modal::Modal;
use crate::context::AppContext;
use crate::i18n::{error_text, translate};
use crate::models::{submit_outcome, Category, ListView, LoadState, SubmitOutcome};
use crate::router::Section;
use crate::store::{use_session, SessionStoreFields};

#[component]
pub fn CategoriesSection() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();
    let lang = session.lang();

    let (categories, set_categories) = signal(LoadState::<Vec<Category>>::Loading);
    let (show_create, set_show_create) = signal(false);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        if ctx.section.get() != Section::Categories {
            return;
        }
        set_categories.set(LoadState::Loading);
        spawn_local(async move {
            match api::categories::list().await {
                Ok(list) => set_categories.set(LoadState::Ready(list)),
                Err(message) => set_categories.set(LoadState::Error(message)),
            }
        });
    });

    view! {
        <section class="section">
            <div class="section-toolbar">
                <button type="button" class="primary-btn" on:click=move |_| set_show_create.set(true)>
                    {move || translate(lang.get(), "categories.new")}
                </button>
            </div>
            {move || match categories.get().into_list_view() {
                ListView::Loading => {
                    view! { <p class="placeholder">{translate(lang.get(), "common.loading")}</p> }
                        .into_any()
                }
                ListView::Error(message) => {
                    view! { <p class="error-text">{error_text(lang.get(), &message)}</p> }.into_any()
                }
                ListView::Empty => {
                    view! { <p class="placeholder">{translate(lang.get(), "categories.empty")}</p> }
                        .into_any()
                }
                ListView::Rows(list) => {
                    view! {
                        <div class="card-grid">
                            {list
                                .into_iter()
                                .map(|category| view! { <CategoryCard category=category /> })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
            <CreateCategoryModal open=show_create set_open=set_show_create />
        </section>
    }
}

#[component]
fn CategoryCard(category: Category) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();
    let lang = session.lang();

    let (confirming, set_confirming) = signal(false);
    let (deleting, set_deleting) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let Category {
        id,
        title,
        description,
        color,
        icon,
        department,
        ..
    } = category;

    let delete = move |_| {
        set_deleting.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::categories::delete(id).await {
                // the reload re-renders the grid and drops this card
                Ok(()) => ctx.reload(),
                Err(message) => {
                    set_deleting.set(false);
                    set_error.set(Some(message));
                }
            }
        });
    };

    view! {
        <div class="card" style=format!("border-left: 4px solid {color}")>
            <div class="card-head">
                <span class="card-icon">{icon}</span>
                <h4>{title}</h4>
            </div>
            <p class="card-body">{description}</p>
            <span class="card-meta">{department}</span>
            <div class="card-actions">
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
                            disabled=move || deleting.get()
                            on:click=delete
                        >
                            "✓"
                        </button>
                        <button type="button" class="cancel-btn" on:click=move |_| set_confirming.set(false)>
                            "✗"
                        </button>
                    </span>
                </Show>
            </div>
            {move || {
                error
                    .get()
                    .map(|message| view! { <p class="error-text">{error_text(lang.get(), &message)}</p> })
            }}
        </div>
    }
}

#[component]
fn CreateCategoryModal(open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();
    let lang = session.lang();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (color, set_color) = signal(String::from("#4f6df5"));
    let (icon, set_icon) = signal(String::from("📅"));
    let (department, set_department) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (submitting, set_submitting) = signal(false);

    // opening resets the previous error and the form fields
    Effect::new(move |_| {
        if open.get() {
            set_error.set(None);
            set_title.set(String::new());
            set_description.set(String::new());
            set_color.set(String::from("#4f6df5"));
            set_icon.set(String::from("📅"));
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
        let description_value = description.get();
        let color_value = color.get();
        let icon_value = icon.get();
        let department_value = department.get();

        set_submitting.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = api::categories::create(
                &title_value,
                &description_value,
                &color_value,
                &icon_value,
                &department_value,
            )
            .await
            .map(|_| ());
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
            title=Signal::derive(move || translate(lang.get(), "categories.new"))
            on_close=move |_| set_open.set(false)
        >
            <form class="modal-form" on:submit=submit>
                <label>
                    {move || translate(lang.get(), "categories.title_label")}
                    <input
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    {move || translate(lang.get(), "categories.description_label")}
                    <textarea
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="field-row">
                    <label>
                        {move || translate(lang.get(), "categories.color_label")}
                        <input
                            type="color"
                            prop:value=move || color.get()
                            on:input=move |ev| set_color.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        {move || translate(lang.get(), "categories.icon_label")}
                        <input
                            type="text"
                            prop:value=move || icon.get()
                            on:input=move |ev| set_icon.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <label>
                    {move || translate(lang.get(), "categories.department_label")}
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
