use tauri_plugin_store::StoreExt;

use crate::error::AppError;
use crate::models::settings::AppSettings;
use crate::services::destination::DestinationTemplate;

const STORE_FILE: &str = "settings.json";
const SETTINGS_KEY: &str = "settings";

/// Read application settings. Returns defaults if no settings saved.
pub fn get_settings(app: &tauri::AppHandle) -> crate::error::Result<AppSettings> {
    let store = app
        .store(STORE_FILE)
        .map_err(|e| AppError::Storage(e.to_string()))?;
    let settings = store
        .get(SETTINGS_KEY)
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default();
    Ok(settings)
}

/// Save application settings. Persists to disk immediately.
///
/// The destination template is checked first so a broken template never
/// reaches the store.
pub fn save_settings(app: &tauri::AppHandle, settings: AppSettings) -> crate::error::Result<()> {
    DestinationTemplate::new(&settings.destination_template)?;
    let store = app
        .store(STORE_FILE)
        .map_err(|e| AppError::Storage(e.to_string()))?;
    store.set(SETTINGS_KEY, serde_json::to_value(&settings)?);
    store
        .save()
        .map_err(|e| AppError::Storage(e.to_string()))?;
    log::info!("Settings saved: server_url={}", settings.server_url);
    Ok(())
}
