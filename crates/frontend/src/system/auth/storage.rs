use contracts::system::auth::Session;
use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "pkwt_access_token";
const SESSION_KEY: &str = "pkwt_session";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    get_local_storage()?
        .get_item(ACCESS_TOKEN_KEY)
        .ok()?
        .filter(|t| !t.trim().is_empty())
}

/// Get the session identity stored by the login page
pub fn get_session() -> Option<Session> {
    let raw = get_local_storage()?.get_item(SESSION_KEY).ok()??;
    match serde_json::from_str::<Session>(&raw) {
        Ok(session) => Some(session),
        Err(e) => {
            log::warn!("Stored session is unreadable, ignoring it: {}", e);
            None
        }
    }
}

/// Clear token and session
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(SESSION_KEY);
    }
}
