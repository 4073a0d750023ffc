//! Typed wrappers over localStorage. The two ledgers and the client notes
//! are the only persisted state; everything else is derived on read.

use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::window;

pub const SALES_KEY: &str = "skg_sales_data_v8";
pub const PROJECTIONS_KEY: &str = "skg_client_projections_v9";
pub const NOTES_KEY: &str = "skg_client_notes_v9";

fn storage() -> Option<web_sys::Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load and decode one blob. Absent blobs are `None`; undecodable blobs
/// are logged and also read as `None`, so the caller falls back to its
/// default value instead of crashing on stale state.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = storage()?.get_item(key).ok().flatten()?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("discarding unreadable blob under '{}': {}", key, err);
            None
        }
    }
}

/// Persist one blob, last write wins. Write failures (quota, private
/// browsing) are logged and otherwise ignored; the in-memory state stays
/// authoritative for the session.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    let Some(storage) = storage() else { return };
    match serde_json::to_string(value) {
        Ok(raw) => {
            if storage.set_item(key, &raw).is_err() {
                log::warn!("failed to persist '{}'", key);
            }
        }
        Err(err) => log::error!("failed to encode '{}': {}", key, err),
    }
}
