use leptos::prelude::*;

use crate::routes::routes::Page;
use crate::system::auth::context::use_auth;

#[component]
pub fn DashboardPage(page: RwSignal<Page>) -> impl IntoView {
    let (auth_state, _) = use_auth();

    let greeting = move || {
        match auth_state.get().username {
            Some(name) => format!("Hello, {}! Here are your options:", name),
            None => "Hello! Here are your options:".to_string(),
        }
    };

    view! {
        <div class="dashboard">
            <h1 class="dashboard__title">"Welcome to the Catalogs Dashboard"</h1>
            <p class="dashboard__subtitle">{greeting}</p>

            <div class="dashboard__cards">
                <div class="card">
                    <h3>"Manage Catalogs"</h3>
                    <p>"View and manage your catalogs here."</p>
                    <button
                        class="button button--primary"
                        on:click=move |_| page.set(Page::Catalogs)
                    >
                        "Go to Catalogs"
                    </button>
                </div>

                <div class="card">
                    <h3>"Analytics"</h3>
                    <p>"View your catalog analytics and reports (coming soon)."</p>
                    <button class="button button--secondary" disabled>
                        "View Analytics"
                    </button>
                </div>
            </div>
        </div>
    }
}
