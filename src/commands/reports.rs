use tauri::AppHandle;
use tracing::warn;

use super::AppStateExt;
use crate::insight;
use crate::report;
use crate::store::RecordStore;

#[tauri::command]
pub fn get_daily_report(app: AppHandle, insight: Option<String>) -> Result<String, String> {
    let tracker = app.ledger().tracker.lock().map_err(|e| e.to_string())?;
    let record = tracker
        .record()
        .ok_or_else(|| "No day sheet is open".to_string())?;
    Ok(report::daily(record, insight.as_deref()))
}

#[tauri::command]
pub fn get_monthly_report(app: AppHandle) -> Result<String, String> {
    let tracker = app.ledger().tracker.lock().map_err(|e| e.to_string())?;
    let record = tracker
        .record()
        .ok_or_else(|| "No day sheet is open".to_string())?;
    let all = tracker.store().list_all().map_err(|e| e.to_string())?;
    Ok(report::monthly(&all, record.date, record.center))
}

#[tauri::command]
pub async fn generate_insight(app: AppHandle) -> Result<String, String> {
    // Snapshot the sheet and release the lock before the request goes out
    let record = {
        let tracker = app.ledger().tracker.lock().map_err(|e| e.to_string())?;
        tracker
            .record()
            .cloned()
            .ok_or_else(|| "No day sheet is open".to_string())?
    };
    let config = app.ledger().insight.clone();

    let text = insight::spawn_daily_insight(config, record)
        .await
        .unwrap_or_else(|e| {
            warn!(error = %e, "insight task did not finish");
            insight::INSIGHT_UNAVAILABLE.to_string()
        });
    Ok(text)
}

#[tauri::command]
pub async fn scan_receipt(app: AppHandle, image_base64: String) -> Result<String, String> {
    let config = app.ledger().insight.clone();
    Ok(insight::scan_receipt(&config, &image_base64).await)
}
