//! Modal Dialog Component
//!
//! Two-state (hidden/active) dialog. Clicking the backdrop — the click
//! target is the overlay itself, not a descendant — or the close button
//! closes without side effects.

use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div
                class="modal-overlay"
                on:click=move |ev| {
                    if let (Some(target), Some(current)) = (ev.target(), ev.current_target()) {
                        if target == current {
                            on_close.run(());
                        }
                    }
                }
            >
                <div class="modal">
                    <div class="modal-header">
                        <h3>{move || title.get()}</h3>
                        <button type="button" class="modal-close" on:click=move |_| on_close.run(())>
                            "×"
                        </button>
                    </div>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
