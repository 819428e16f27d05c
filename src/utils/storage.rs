use gloo_storage::{LocalStorage, Storage};
use web_sys::window;

use crate::utils::constants::STORAGE_KEY_USER_EMAIL;

pub fn get_local_storage() -> Option<web_sys::Storage> {
    // gloo hace panic si no hay window (tests, workers)
    window()?;
    Some(LocalStorage::raw())
}

/// Valor crudo (sin JSON) guardado por el resto de la app
pub fn load_raw_from_storage(key: &str) -> Option<String> {
    let storage = get_local_storage()?;
    storage
        .get_item(key)
        .ok()
        .flatten()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Email de la sesión, usado al crear productos
pub fn load_session_email() -> Option<String> {
    let email = load_raw_from_storage(STORAGE_KEY_USER_EMAIL);
    if email.is_none() {
        log::warn!("⚠️ No hay '{}' en localStorage", STORAGE_KEY_USER_EMAIL);
    }
    email
}
