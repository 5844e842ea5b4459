use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Read a value from localStorage
pub fn get_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

/// Write a value to localStorage
pub fn set_item(key: &str, value: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or_else(|| "localStorage unavailable".to_string())?;
    storage
        .set_item(key, value)
        .map_err(|e| format!("Failed to write '{}': {:?}", key, e))
}
