use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    // Toasts are app-wide; the host renders above whatever the gate shows.
    provide_context(ToastService::new());

    view! {
        <AuthProvider>
            <ToastHost />
            <AppRoutes />
        </AuthProvider>
    }
}
