use chrono::NaiveDate;
use tauri::AppHandle;

use super::AppStateExt;
use crate::models::{Center, DailyRecord, MaintenanceTask, StockField, UpdatePreset};

#[tauri::command]
pub fn open_day(app: AppHandle, date: NaiveDate, center: Center) -> Result<DailyRecord, String> {
    let mut tracker = app.ledger().tracker.lock().map_err(|e| e.to_string())?;
    let record = tracker.open_day(date, center).map_err(|e| e.to_string())?;
    Ok(record.clone())
}

#[tauri::command]
pub fn get_current_record(app: AppHandle) -> Result<Option<DailyRecord>, String> {
    let tracker = app.ledger().tracker.lock().map_err(|e| e.to_string())?;
    Ok(tracker.record().cloned())
}

#[tauri::command]
pub fn set_staff(app: AppHandle, name: String) -> Result<DailyRecord, String> {
    let mut tracker = app.ledger().tracker.lock().map_err(|e| e.to_string())?;
    let record = tracker.set_staff(&name).map_err(|e| e.to_string())?;
    Ok(record.clone())
}

#[tauri::command]
pub fn set_court_hours(app: AppHandle, label: String, hours: f64) -> Result<DailyRecord, String> {
    let mut tracker = app.ledger().tracker.lock().map_err(|e| e.to_string())?;
    let record = tracker.set_court_hours(&label, hours).map_err(|e| e.to_string())?;
    Ok(record.clone())
}

#[tauri::command]
pub fn add_court_preset(app: AppHandle, label: String, price: f64) -> Result<DailyRecord, String> {
    let mut tracker = app.ledger().tracker.lock().map_err(|e| e.to_string())?;
    let record = tracker.add_court_preset(&label, price).map_err(|e| e.to_string())?;
    Ok(record.clone())
}

#[tauri::command]
pub fn update_court_preset(app: AppHandle, preset: UpdatePreset) -> Result<DailyRecord, String> {
    let mut tracker = app.ledger().tracker.lock().map_err(|e| e.to_string())?;
    let record = tracker
        .update_court_preset(&preset.id, preset.label.as_deref(), preset.default_price)
        .map_err(|e| e.to_string())?;
    Ok(record.clone())
}

#[tauri::command]
pub fn remove_court_preset(app: AppHandle, id: String) -> Result<DailyRecord, String> {
    let mut tracker = app.ledger().tracker.lock().map_err(|e| e.to_string())?;
    let record = tracker.remove_court_preset(&id).map_err(|e| e.to_string())?;
    Ok(record.clone())
}

#[tauri::command]
pub fn set_shoe_rentals(app: AppHandle, shoes: i64) -> Result<DailyRecord, String> {
    let mut tracker = app.ledger().tracker.lock().map_err(|e| e.to_string())?;
    let record = tracker.set_shoe_rentals(shoes).map_err(|e| e.to_string())?;
    Ok(record.clone())
}

#[tauri::command]
pub fn adjust_shoe_rentals(app: AppHandle, delta: i64) -> Result<DailyRecord, String> {
    let mut tracker = app.ledger().tracker.lock().map_err(|e| e.to_string())?;
    let record = tracker.adjust_shoe_rentals(delta).map_err(|e| e.to_string())?;
    Ok(record.clone())
}

#[tauri::command]
pub fn set_discount(app: AppHandle, amount: f64) -> Result<DailyRecord, String> {
    let mut tracker = app.ledger().tracker.lock().map_err(|e| e.to_string())?;
    let record = tracker.set_discount(amount).map_err(|e| e.to_string())?;
    Ok(record.clone())
}

#[tauri::command]
pub fn set_discount_description(app: AppHandle, description: String) -> Result<DailyRecord, String> {
    let mut tracker = app.ledger().tracker.lock().map_err(|e| e.to_string())?;
    let record = tracker
        .set_discount_description(&description)
        .map_err(|e| e.to_string())?;
    Ok(record.clone())
}

#[tauri::command]
pub fn update_stock(
    app: AppHandle,
    name: String,
    field: StockField,
    value: i64,
) -> Result<DailyRecord, String> {
    let mut tracker = app.ledger().tracker.lock().map_err(|e| e.to_string())?;
    let record = tracker
        .update_stock(&name, field, value)
        .map_err(|e| e.to_string())?;
    Ok(record.clone())
}

#[tauri::command]
pub fn set_cash_collected(app: AppHandle, amount: f64) -> Result<DailyRecord, String> {
    let mut tracker = app.ledger().tracker.lock().map_err(|e| e.to_string())?;
    let record = tracker.set_cash_collected(amount).map_err(|e| e.to_string())?;
    Ok(record.clone())
}

#[tauri::command]
pub fn set_drink_price(app: AppHandle, name: String, price: f64) -> Result<DailyRecord, String> {
    let mut tracker = app.ledger().tracker.lock().map_err(|e| e.to_string())?;
    let record = tracker.set_drink_price(&name, price).map_err(|e| e.to_string())?;
    Ok(record.clone())
}

#[tauri::command]
pub fn add_drink(app: AppHandle, name: String) -> Result<DailyRecord, String> {
    let mut tracker = app.ledger().tracker.lock().map_err(|e| e.to_string())?;
    let record = tracker.add_drink(&name).map_err(|e| e.to_string())?;
    Ok(record.clone())
}

#[tauri::command]
pub fn remove_drink(app: AppHandle, name: String) -> Result<DailyRecord, String> {
    let mut tracker = app.ledger().tracker.lock().map_err(|e| e.to_string())?;
    let record = tracker.remove_drink(&name).map_err(|e| e.to_string())?;
    Ok(record.clone())
}

#[tauri::command]
pub fn toggle_maintenance(app: AppHandle, task: MaintenanceTask) -> Result<DailyRecord, String> {
    let mut tracker = app.ledger().tracker.lock().map_err(|e| e.to_string())?;
    let record = tracker.toggle_maintenance(task).map_err(|e| e.to_string())?;
    Ok(record.clone())
}

#[tauri::command]
pub fn set_maintenance_notes(app: AppHandle, notes: String) -> Result<DailyRecord, String> {
    let mut tracker = app.ledger().tracker.lock().map_err(|e| e.to_string())?;
    let record = tracker.set_maintenance_notes(&notes).map_err(|e| e.to_string())?;
    Ok(record.clone())
}
