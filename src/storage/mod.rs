use crate::models::AccountInfo;
use serde::Deserialize;

pub(crate) const TOKEN_KEY: &str = "notegrid_token";
pub(crate) const USER_KEY: &str = "notegrid_user";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub(crate) fn load_json_from_storage<T: for<'de> Deserialize<'de>>(key: &str) -> Option<T> {
    let json = local_storage()?.get_item(key).ok().flatten()?;
    match serde_json::from_str(&json) {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("ignoring unreadable {key} in localStorage: {e}");
            None
        }
    }
}

/// Stands in for the sign-in flow in browser tests.
#[cfg(test)]
pub(crate) fn save_json_to_storage<T: serde::Serialize>(key: &str, value: &T) {
    let json = serde_json::to_string(value).expect("value should serialize");
    local_storage()
        .expect("localStorage should be available")
        .set_item(key, &json)
        .expect("localStorage write should succeed");
}

/// The user record is written by the sign-in flow; this crate only reads it.
pub(crate) fn load_user_from_storage() -> Option<AccountInfo> {
    load_json_from_storage::<AccountInfo>(USER_KEY)
}
