use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub username: Option<String>,
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    // Restore a token persisted earlier in this browser session. The
    // username is not persisted; it reappears on the next login.
    let initial = match storage::get_token() {
        Some(token) => AuthState {
            access_token: Some(token),
            username: None,
        },
        None => AuthState::default(),
    };
    let (auth_state, set_auth_state) = signal(initial);

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Drop the current session: clear the stored token and reset the state.
/// Used by the logout button and by pages observing `ApiError::AuthExpired`;
/// the auth gate in `routes` reacts by rendering the login screen.
pub fn clear_session(set_auth_state: WriteSignal<AuthState>) {
    storage::remove_token();
    set_auth_state.set(AuthState::default());
}
