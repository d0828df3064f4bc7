pub mod records;
pub mod reports;
pub mod settings;
pub mod staff;

use std::sync::Mutex;
use tauri::{AppHandle, Manager};

use crate::db::Database;
use crate::insight::InsightConfig;
use crate::tracker::Tracker;

pub struct AppState {
    pub tracker: Mutex<Tracker<Database>>,
    pub insight: InsightConfig,
}

pub trait AppStateExt {
    fn ledger(&self) -> &AppState;
}

impl AppStateExt for AppHandle {
    fn ledger(&self) -> &AppState {
        self.state::<AppState>().inner()
    }
}
