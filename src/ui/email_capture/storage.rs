//! localStorage access for the capture flags

use crate::core::email_capture::{CaptureFlag, CaptureFlags, FLAG_SET_VALUE};

use leptos::web_sys;

fn local_storage() -> Result<web_sys::Storage, String> {
    let window = web_sys::window().ok_or("No window available")?;
    window
        .local_storage()
        .map_err(|_| "Failed to get localStorage")?
        .ok_or_else(|| "localStorage not available".to_string())
}

/// Read the three flags. Unreadable storage counts as "nothing set".
pub fn load_flags() -> CaptureFlags {
    match local_storage() {
        Ok(storage) => CaptureFlags::load(|key| storage.get_item(key).ok().flatten()),
        Err(e) => {
            leptos::logging::warn!("email capture: {}", e);
            CaptureFlags::default()
        }
    }
}

/// Write `"true"` under the flag's key.
pub fn persist_flag(flag: CaptureFlag) -> Result<(), String> {
    local_storage()?
        .set_item(flag.storage_key(), FLAG_SET_VALUE)
        .map_err(|_| format!("Failed to set {}", flag.storage_key()))
}
