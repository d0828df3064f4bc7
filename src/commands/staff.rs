use tauri::AppHandle;

use super::AppStateExt;
use crate::settings;

#[tauri::command]
pub fn get_staff(app: AppHandle) -> Result<Vec<String>, String> {
    let tracker = app.ledger().tracker.lock().map_err(|e| e.to_string())?;
    settings::staff(tracker.store()).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn add_staff(app: AppHandle, name: String) -> Result<Vec<String>, String> {
    let tracker = app.ledger().tracker.lock().map_err(|e| e.to_string())?;
    settings::add_staff(tracker.store(), &name).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn remove_staff(app: AppHandle, name: String) -> Result<Vec<String>, String> {
    let tracker = app.ledger().tracker.lock().map_err(|e| e.to_string())?;
    settings::remove_staff(tracker.store(), &name).map_err(|e| e.to_string())
}
