//! Settings and partner list commands.

use tauri::Manager;

use crate::models::partner::Partner;
use crate::models::settings::AppSettings;
use crate::storage::partners::{load_partners, PARTNERS_FILE};
use crate::storage::settings;

#[tauri::command]
pub fn get_settings(app: tauri::AppHandle) -> Result<AppSettings, String> {
    settings::get_settings(&app).map_err(|e| e.to_string())
}

/// Takes effect from the next submission.
#[tauri::command]
pub fn save_settings(settings_data: AppSettings, app: tauri::AppHandle) -> Result<(), String> {
    settings::save_settings(&app, settings_data).map_err(|e| e.to_string())
}

/// Partner projects for the picker, from `partners.json` in the app config directory.
#[tauri::command]
pub async fn list_partners(app: tauri::AppHandle) -> Result<Vec<Partner>, String> {
    let dir = app.path().app_config_dir().map_err(|e| e.to_string())?;
    load_partners(&dir.join(PARTNERS_FILE))
        .await
        .map_err(|e| e.to_string())
}
