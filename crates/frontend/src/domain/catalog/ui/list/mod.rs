pub mod state;

use contracts::domain::catalog::{reconcile, Catalog, CatalogId, CatalogQuery};
use leptos::prelude::*;
use leptos::task::spawn_local;

use self::state::{create_state, CatalogListState};
use crate::domain::catalog::api;
use crate::domain::catalog::ui::details::{CatalogDetails, DialogState, SaveOutcome};
use crate::shared::api_utils::ApiError;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::date_utils::format_indexed_at;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use crate::system::auth::context::{clear_session, use_auth};

#[component]
pub fn CatalogList() -> impl IntoView {
    let toast = use_toast();
    let (_, set_auth_state) = use_auth();
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let dialog = RwSignal::new(DialogState::Closed);

    // Stale-response guard: each fetch bumps the generation; only a
    // response carrying the latest generation may touch the state.
    let fetch_generation = StoredValue::new(0u64);

    let fetch = move || {
        let generation = fetch_generation.with_value(|g| g + 1);
        fetch_generation.set_value(generation);

        let query = state.with_untracked(|s| CatalogQuery {
            name: {
                let text = s.search_text.trim();
                if text.is_empty() {
                    None
                } else {
                    Some(text.to_string())
                }
            },
            multi_locale: if s.multi_locale_only { Some(true) } else { None },
            page: (s.page + 1) as u32,
            rows_per_page: s.rows_per_page as u32,
        });

        set_loading.set(true);
        spawn_local(async move {
            let result = api::fetch_catalogs(&query).await;
            if fetch_generation.get_value() != generation {
                // Superseded by a newer fetch.
                return;
            }
            set_loading.set(false);
            match result {
                Ok(page) => state.update(|s| {
                    s.items = page.data;
                    s.total_count = page.total as usize;
                }),
                Err(ApiError::AuthExpired) => clear_session(set_auth_state),
                Err(e) => {
                    log::warn!("fetch catalogs failed: {}", e);
                    toast.error("Failed to fetch catalogs");
                }
            }
        });
    };

    let handle_search = move |text: String| {
        state.update(|s| {
            s.search_text = text;
            s.page = 0;
        });
        fetch();
    };

    let handle_multi_locale = move |checked: bool| {
        state.update(|s| {
            s.multi_locale_only = checked;
            s.page = 0;
        });
        fetch();
    };

    let go_to_page = move |new_page: usize| {
        state.update(|s| s.page = new_page);
        fetch();
    };

    let change_page_size = move |new_size: usize| {
        state.update(|s| {
            s.rows_per_page = new_size;
            s.page = 0;
        });
        fetch();
    };

    let toggle_select = move |id: CatalogId, checked: bool| {
        state.update(|s| {
            if checked {
                s.selected_ids.insert(id);
            } else {
                s.selected_ids.remove(&id);
            }
        });
    };

    let toggle_all = move |checked: bool| {
        state.update(|s| {
            if checked {
                s.selected_ids = s.items.iter().map(|c| c.id).collect();
            } else {
                s.selected_ids.clear();
            }
        });
    };

    let delete_one = move |id: CatalogId| {
        spawn_local(async move {
            match api::delete_catalog(id).await {
                Ok(()) => {
                    state.update(|s| {
                        let CatalogListState {
                            items,
                            selected_ids,
                            ..
                        } = s;
                        reconcile::apply_delete(items, selected_ids, id);
                        s.total_count = s.total_count.saturating_sub(1);
                    });
                    toast.success("Catalog deleted successfully");
                }
                Err(ApiError::AuthExpired) => clear_session(set_auth_state),
                Err(e) => {
                    log::warn!("delete catalog {} failed: {}", id, e);
                    toast.error("Failed to delete catalog");
                }
            }
        });
    };

    let bulk_delete = move || {
        let ids: Vec<CatalogId> =
            state.with_untracked(|s| s.selected_ids.iter().copied().collect());
        if ids.is_empty() {
            toast.error("No catalogs selected for deletion");
            return;
        }
        spawn_local(async move {
            match api::bulk_delete_catalogs(ids.clone()).await {
                Ok(response) => {
                    state.update(|s| {
                        let removed = ids.len();
                        let CatalogListState {
                            items,
                            selected_ids,
                            ..
                        } = s;
                        if reconcile::apply_bulk_delete(items, selected_ids, &ids).is_ok() {
                            s.total_count = s.total_count.saturating_sub(removed);
                        }
                    });
                    toast.success(format!("Deleted {} catalogs", response.deleted_count));
                }
                Err(ApiError::AuthExpired) => clear_session(set_auth_state),
                Err(e) => {
                    log::warn!("bulk delete failed: {}", e);
                    toast.error("Failed to delete catalogs");
                }
            }
        });
    };

    let index_selected = move || {
        let ids: Vec<CatalogId> =
            state.with_untracked(|s| s.selected_ids.iter().copied().collect());
        if ids.is_empty() {
            toast.error("No catalogs selected for indexing");
            return;
        }
        spawn_local(async move {
            match api::index_selected(ids).await {
                Ok(response) => {
                    let indexed = response.indexed_catalogs;
                    state.update(|s| {
                        let CatalogListState {
                            items,
                            selected_ids,
                            ..
                        } = s;
                        reconcile::apply_index_result(items, selected_ids, &indexed);
                    });
                    toast.success(format!("Indexed {} catalogs", indexed.len()));
                }
                Err(ApiError::AuthExpired) => clear_session(set_auth_state),
                Err(e) => {
                    log::warn!("index selected failed: {}", e);
                    toast.error("Failed to index catalogs");
                }
            }
        });
    };

    let index_all = move || {
        spawn_local(async move {
            match api::index_all().await {
                Ok(()) => {
                    toast.success("All catalogs indexed successfully");
                    fetch();
                }
                Err(ApiError::AuthExpired) => clear_session(set_auth_state),
                Err(e) => {
                    log::warn!("index all failed: {}", e);
                    toast.error("Failed to index all catalogs");
                }
            }
        });
    };

    let handle_saved = move |outcome: SaveOutcome| {
        dialog.set(DialogState::Closed);
        match outcome {
            SaveOutcome::Created(catalog) => {
                state.update(|s| {
                    let limit = s.rows_per_page;
                    reconcile::apply_create(&mut s.items, catalog, Some(limit));
                    s.total_count += 1;
                });
                toast.success("Catalog created successfully");
            }
            SaveOutcome::Updated(catalog) => {
                state.update(|s| reconcile::apply_update(&mut s.items, catalog));
                toast.success("Catalog updated successfully");
            }
        }
    };

    let selected_count = Signal::derive(move || state.with(|s| s.selected_ids.len()));
    let total_pages = Signal::derive(move || {
        let s = state.get();
        if s.total_count == 0 {
            0
        } else {
            (s.total_count + s.rows_per_page - 1) / s.rows_per_page
        }
    });
    let all_selected = move || {
        state.with(|s| {
            !s.items.is_empty() && s.items.iter().all(|c| s.selected_ids.contains(&c.id))
        })
    };

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>"Catalogs Management"</h2>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| dialog.set(DialogState::Create)
                    >
                        {icon("plus")}
                        "Add Catalog"
                    </button>
                    <button class="button button--secondary" on:click=move |_| index_all()>
                        {icon("database")}
                        "Index All Catalogs"
                    </button>
                    <button class="button button--secondary" on:click=move |_| index_selected()>
                        {icon("database")}
                        {move || format!("Index Selected ({})", selected_count.get())}
                    </button>
                    <button class="button button--danger" on:click=move |_| bulk_delete()>
                        {icon("delete")}
                        {move || format!("Delete Selected ({})", selected_count.get())}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            <div class="filter-bar">
                <SearchInput
                    value=Signal::derive(move || state.with(|s| s.search_text.clone()))
                    on_change=Callback::new(handle_search)
                    placeholder="Search by name..."
                />
                <label class="filter-checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || state.with(|s| s.multi_locale_only)
                        prop:disabled=move || loading.get()
                        on:change=move |ev| handle_multi_locale(event_target_checked(&ev))
                    />
                    "Multi-Locale Only"
                </label>
                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.page))
                    total_pages=total_pages
                    total_count=Signal::derive(move || state.with(|s| s.total_count))
                    page_size=Signal::derive(move || state.with(|s| s.rows_per_page))
                    on_page_change=Callback::new(go_to_page)
                    on_page_size_change=Callback::new(change_page_size)
                />
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading">"Loading..."</div> }
            >
                <div class="table-container">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell table__header-cell--checkbox">
                                    <input
                                        type="checkbox"
                                        class="table__checkbox"
                                        prop:checked=all_selected
                                        on:change=move |ev| toggle_all(event_target_checked(&ev))
                                    />
                                </th>
                                <th class="table__header-cell">"Name"</th>
                                <th class="table__header-cell">"Vertical"</th>
                                <th class="table__header-cell">"Multi-Locale"</th>
                                <th class="table__header-cell">"Primary"</th>
                                <th class="table__header-cell">"Last Indexed"</th>
                                <th class="table__header-cell">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || state.get().items
                                key=|catalog| catalog.id
                                children=move |catalog: Catalog| {
                                    let id = catalog.id;
                                    let catalog_for_edit = catalog.clone();
                                    view! {
                                        <tr
                                            class="table__row"
                                            class:table__row--selected=move || {
                                                state.with(|s| s.selected_ids.contains(&id))
                                            }
                                        >
                                            <TableCheckbox
                                                checked=Signal::derive(move || {
                                                    state.with(|s| s.selected_ids.contains(&id))
                                                })
                                                on_change=Callback::new(move |checked| {
                                                    toggle_select(id, checked)
                                                })
                                            />
                                            <td class="table__cell">{catalog.name.clone()}</td>
                                            <td class="table__cell">{catalog.vertical.display_name()}</td>
                                            <td class="table__cell">
                                                {if catalog.is_multi_locale() { "Yes" } else { "No" }}
                                            </td>
                                            <td class="table__cell">
                                                {if catalog.primary { "Yes" } else { "No" }}
                                            </td>
                                            <td class="table__cell">
                                                {format_indexed_at(catalog.indexed_at)}
                                            </td>
                                            <td class="table__cell table__cell--actions">
                                                <button
                                                    class="icon-button"
                                                    title="Edit"
                                                    on:click=move |_| {
                                                        dialog.set(DialogState::Edit(catalog_for_edit.clone()))
                                                    }
                                                >
                                                    {icon("edit")}
                                                </button>
                                                <button
                                                    class="icon-button icon-button--danger"
                                                    title="Delete"
                                                    on:click=move |_| delete_one(id)
                                                >
                                                    {icon("delete")}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </Show>

            {move || match dialog.get() {
                DialogState::Closed => view! { <></> }.into_any(),
                DialogState::Create => view! {
                    <CatalogDetails
                        existing=None
                        on_saved=Callback::new(handle_saved)
                        on_cancel=Callback::new(move |_| dialog.set(DialogState::Closed))
                    />
                }
                .into_any(),
                DialogState::Edit(catalog) => view! {
                    <CatalogDetails
                        existing=Some(catalog)
                        on_saved=Callback::new(handle_saved)
                        on_cancel=Callback::new(move |_| dialog.set(DialogState::Closed))
                    />
                }
                .into_any(),
            }}
        </div>
    }
}
