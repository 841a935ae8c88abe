use contracts::domain::catalog::{Catalog, Vertical};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::view_model::{CatalogDetailsViewModel, SaveOutcome};
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use crate::system::auth::context::use_auth;

#[component]
pub fn CatalogDetails(
    /// Record being edited; `None` creates a new catalog.
    existing: Option<Catalog>,
    on_saved: Callback<SaveOutcome>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let (_, set_auth_state) = use_auth();
    let vm = CatalogDetailsViewModel::new(existing.as_ref());
    let (new_locale, set_new_locale) = signal(String::new());

    // Clone vm for the closures below
    let vm_clone = vm.clone();

    let add_locale = {
        let vm = vm.clone();
        move || {
            let candidate = new_locale.get_untracked();
            match vm.add_locale(&candidate) {
                Ok(()) => set_new_locale.set(String::new()),
                Err(e) => toast.error(e.to_string()),
            }
        }
    };
    let add_locale_on_enter = add_locale.clone();

    let request_cancel = move || {
        spawn_local(async move {
            // Defer to the next tick so the overlay is not torn down during
            // its own event dispatch.
            TimeoutFuture::new(0).await;
            on_cancel.run(());
        });
    };

    let handle_overlay_click = move |ev: leptos::ev::MouseEvent| {
        let direct = match (ev.target(), ev.current_target()) {
            (Some(target), Some(current)) => target == current,
            _ => false,
        };
        if direct {
            request_cancel();
        }
    };

    view! {
        <div class="modal-overlay" on:click=handle_overlay_click>
            <div class="modal catalog-details" on:click=|ev| ev.stop_propagation()>
                <div class="details-header">
                    <h3>
                        {
                            let vm = vm_clone.clone();
                            move || if vm.is_edit_mode() { "Edit Catalog" } else { "Create Catalog" }
                        }
                    </h3>
                </div>

                {
                    let vm = vm_clone.clone();
                    move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
                }

                <div class="details-form">
                    <div class="form-group">
                        <label for="name">"Name"</label>
                        <input
                            type="text"
                            id="name"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().name
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.name = event_target_value(&ev));
                                }
                            }
                            placeholder="Enter catalog name"
                        />
                    </div>

                    <div class="form-group">
                        <label for="vertical">"Vertical"</label>
                        <select
                            id="vertical"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().vertical.as_str().to_string()
                            }
                            on:change={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    if let Some(vertical) = Vertical::from_str(&event_target_value(&ev)) {
                                        vm.form.update(|f| f.vertical = vertical);
                                    }
                                }
                            }
                        >
                            {Vertical::all().into_iter().map(|vertical| view! {
                                <option value=vertical.as_str()>{vertical.display_name()}</option>
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form-group form-group--inline">
                        <label>
                            <input
                                type="checkbox"
                                prop:checked={
                                    let vm = vm_clone.clone();
                                    move || vm.form.get().primary
                                }
                                on:change={
                                    let vm = vm_clone.clone();
                                    move |ev| {
                                        vm.form.update(|f| f.primary = event_target_checked(&ev));
                                    }
                                }
                            />
                            "Primary Catalog"
                        </label>
                    </div>

                    <div class="form-group">
                        <label for="add-locale">"Add Locale"</label>
                        <div class="locale-input">
                            <input
                                type="text"
                                id="add-locale"
                                prop:value=move || new_locale.get()
                                on:input=move |ev| set_new_locale.set(event_target_value(&ev))
                                on:keydown=move |ev: web_sys::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        ev.prevent_default();
                                        add_locale_on_enter();
                                    }
                                }
                                placeholder="en_US"
                            />
                            <button
                                class="button button--secondary"
                                title="Add locale"
                                on:click=move |_| add_locale()
                            >
                                {icon("plus")}
                            </button>
                        </div>
                        <span class="form-hint">
                            "Press Enter or click Add to add a locale (format: en_US)"
                        </span>

                        <div class="chip-list">
                            <For
                                each={
                                    let vm = vm_clone.clone();
                                    move || vm.form.get().locales
                                }
                                key=|locale| locale.clone()
                                children={
                                    let vm = vm_clone.clone();
                                    move |locale: String| {
                                        let vm = vm.clone();
                                        let label = locale.clone();
                                        view! {
                                            <span class="chip">
                                                {label}
                                                <button
                                                    class="chip__remove"
                                                    title="Remove locale"
                                                    on:click=move |_| vm.remove_locale(&locale)
                                                >
                                                    {icon("x")}
                                                </button>
                                            </span>
                                        }
                                    }
                                }
                            />
                        </div>
                    </div>
                </div>

                <div class="details-actions">
                    <button
                        class="button button--primary"
                        on:click={
                            let vm = vm_clone.clone();
                            move |_| vm.save(toast, set_auth_state, on_saved)
                        }
                        disabled={
                            let vm = vm_clone.clone();
                            move || vm.saving.get()
                        }
                    >
                        {icon("save")}
                        {
                            let vm = vm_clone.clone();
                            move || {
                                if vm.saving.get() {
                                    "Saving..."
                                } else if vm.is_edit_mode() {
                                    "Update"
                                } else {
                                    "Create"
                                }
                            }
                        }
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| request_cancel()
                    >
                        "Cancel"
                    </button>
                </div>
            </div>
        </div>
    }
}
