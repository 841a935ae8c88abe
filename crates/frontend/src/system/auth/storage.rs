use web_sys::window;

// Session-scoped: the token does not survive the browser session.
const TOKEN_KEY: &str = "token";

fn session_storage() -> Option<web_sys::Storage> {
    window()?.session_storage().ok()?
}

pub fn set_token(token: &str) {
    if let Some(storage) = session_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

pub fn get_token() -> Option<String> {
    session_storage()?.get_item(TOKEN_KEY).ok()?
}

pub fn remove_token() {
    if let Some(storage) = session_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}
