use leptos::prelude::*;

use crate::domain::catalog::ui::list::CatalogList;
use crate::layout::navbar::Navbar;
use crate::system::auth::context::use_auth;
use crate::system::pages::dashboard::DashboardPage;
use crate::system::pages::login::LoginPage;

/// Pages reachable inside the authenticated shell. Navigation is plain
/// state, no router involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Catalogs,
}

#[component]
fn MainLayout() -> impl IntoView {
    let page = RwSignal::new(Page::Dashboard);

    view! {
        <div class="app-shell">
            <Navbar page=page />
            <main class="app-shell__content">
                {move || match page.get() {
                    Page::Dashboard => view! { <DashboardPage page=page /> }.into_any(),
                    Page::Catalogs => view! { <CatalogList /> }.into_any(),
                }}
            </main>
        </div>
    }
}

/// Auth gate: everything behind it requires a live session. When the data
/// layer reports an expired session the state resets and this falls back to
/// the login screen on its own.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().access_token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
