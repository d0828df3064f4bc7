pub mod cash;
pub mod db;
pub mod defaults;
pub mod error;
pub mod insight;
pub mod lifecycle;
pub mod models;
pub mod pricing;
pub mod report;
pub mod revenue;
pub mod settings;
pub mod stock;
pub mod store;
pub mod tracker;

#[cfg(feature = "desktop")]
mod commands;


use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub use db::Database;
pub use error::LedgerError;
pub use store::RecordStore;
pub use tracker::Tracker;

/// Money and price inputs: non-numeric or negative becomes zero.
pub(crate) fn clamp_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
/// Later calls are no-ops.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,badminton_ledger_lib=debug"));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false))
        .try_init();
}

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use commands::{records, reports, settings as prefs, staff, AppState};
    use std::sync::Mutex;
    use tauri::Manager;

    init_logging();

    tauri::Builder::default()
        .setup(|app| {
            let db = Database::new(app.handle())?;
            db.initialize()?;
            app.manage(AppState {
                tracker: Mutex::new(Tracker::new(db)),
                insight: insight::InsightConfig::from_env(),
            });
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Day sheet
            records::open_day,
            records::get_current_record,
            records::set_staff,
            records::set_court_hours,
            records::add_court_preset,
            records::update_court_preset,
            records::remove_court_preset,
            records::set_shoe_rentals,
            records::adjust_shoe_rentals,
            records::set_discount,
            records::set_discount_description,
            records::update_stock,
            records::set_cash_collected,
            records::set_drink_price,
            records::add_drink,
            records::remove_drink,
            records::toggle_maintenance,
            records::set_maintenance_notes,
            // Staff
            staff::get_staff,
            staff::add_staff,
            staff::remove_staff,
            // Reports
            reports::get_daily_report,
            reports::get_monthly_report,
            reports::generate_insight,
            reports::scan_receipt,
            // Preferences
            prefs::get_theme,
            prefs::toggle_theme,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
