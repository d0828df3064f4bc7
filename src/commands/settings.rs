use tauri::AppHandle;

use super::AppStateExt;
use crate::models::Theme;
use crate::settings;

#[tauri::command]
pub fn get_theme(app: AppHandle) -> Result<Theme, String> {
    let tracker = app.ledger().tracker.lock().map_err(|e| e.to_string())?;
    settings::theme(tracker.store()).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn toggle_theme(app: AppHandle) -> Result<Theme, String> {
    let tracker = app.ledger().tracker.lock().map_err(|e| e.to_string())?;
    settings::toggle_theme(tracker.store()).map_err(|e| e.to_string())
}
