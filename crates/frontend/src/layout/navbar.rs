use leptos::prelude::*;

use crate::routes::routes::Page;
use crate::shared::icons::icon;
use crate::system::auth::context::{clear_session, use_auth};

#[component]
pub fn Navbar(page: RwSignal<Page>) -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let link_class = move |target: Page| {
        if page.get() == target {
            "navbar__link navbar__link--active"
        } else {
            "navbar__link"
        }
    };

    view! {
        <header class="navbar">
            <span class="navbar__title">"Catalogs Admin"</span>

            <nav class="navbar__links">
                <button
                    class=move || link_class(Page::Dashboard)
                    on:click=move |_| page.set(Page::Dashboard)
                >
                    "Dashboard"
                </button>
                <button
                    class=move || link_class(Page::Catalogs)
                    on:click=move |_| page.set(Page::Catalogs)
                >
                    "Catalogs"
                </button>
            </nav>

            <div class="navbar__session">
                {move || {
                    auth_state
                        .get()
                        .username
                        .map(|name| view! { <span class="navbar__user">{name}</span> })
                }}
                <button
                    class="navbar__logout"
                    on:click=move |_| clear_session(set_auth_state)
                >
                    {icon("log-out")}
                    "Logout"
                </button>
            </div>
        </header>
    }
}
