use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info};

use crate::defaults;
use crate::error::Result;
use crate::lifecycle;
use crate::models::DailyRecord;
use crate::store::{RecordStore, RECORDS_KEY, STAFF_KEY};

/// Key/value store on SQLite. Every value is a JSON document.
pub struct Database {
    pub conn: Mutex<Connection>,
}

impl Database {
    #[cfg(feature = "desktop")]
    pub fn new(app_handle: &tauri::AppHandle) -> Result<Self> {
        use crate::error::LedgerError;
        use tauri::Manager;

        let app_dir = app_handle
            .path()
            .app_data_dir()
            .map_err(|e| LedgerError::AppDir(e.to_string()))?;

        std::fs::create_dir_all(&app_dir)?;

        Self::open(app_dir.join("badminton_ledger.db"))
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path.as_ref())?;
        info!(path = %path.as_ref().display(), "opened ledger database");
        Ok(Database {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Database {
            conn: Mutex::new(Connection::open_in_memory()?),
        })
    }

    fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn initialize(&self) -> Result<()> {
        let conn = self.conn();

        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS kv_store (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );
            ",
        )?;

        // Older databases predate updated_at (pass connection to avoid deadlock)
        Self::migrate_conn(&conn)?;

        Ok(())
    }

    fn migrate_conn(conn: &Connection) -> Result<()> {
        let columns: Vec<String> = conn
            .prepare("PRAGMA table_info(kv_store)")?
            .query_map([], |row| row.get::<_, String>(1))?
            .filter_map(|r| r.ok())
            .collect();

        if !columns.contains(&"updated_at".to_string()) {
            conn.execute("ALTER TABLE kv_store ADD COLUMN updated_at DATETIME", [])?;
        }

        Ok(())
    }

    fn read_value(conn: &Connection, key: &str) -> Result<Option<String>> {
        let value = conn
            .query_row("SELECT value FROM kv_store WHERE key = ?1", [key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    fn write_value(conn: &Connection, key: &str, value: &str) -> Result<()> {
        conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, CURRENT_TIMESTAMP)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at",
            params![key, value],
        )?;
        Ok(())
    }

    pub fn get_value(&self, key: &str) -> Result<Option<String>> {
        Self::read_value(&self.conn(), key)
    }

    pub fn set_value(&self, key: &str, value: &str) -> Result<()> {
        Self::write_value(&self.conn(), key, value)
    }

    fn stored_records(conn: &Connection) -> Result<Vec<Value>> {
        match Self::read_value(conn, RECORDS_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }
}

fn same_sheet(stored: &Value, record: &DailyRecord) -> bool {
    let date = record.date.format("%Y-%m-%d").to_string();
    stored.get("date").and_then(Value::as_str) == Some(date.as_str())
        && stored.get("center").and_then(Value::as_str) == Some(record.center.name())
}

impl RecordStore for Database {
    fn list_all(&self) -> Result<Vec<DailyRecord>> {
        let stored = Self::stored_records(&self.conn())?;
        Ok(lifecycle::upgrade_all(stored))
    }

    fn upsert(&self, record: &DailyRecord) -> Result<()> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;

        // Work on the raw documents so entries this build cannot decode survive.
        let mut stored = Self::stored_records(&tx)?;
        let value = serde_json::to_value(record)?;
        match stored.iter().position(|v| same_sheet(v, record)) {
            Some(index) => stored[index] = value,
            None => stored.push(value),
        }

        Self::write_value(&tx, RECORDS_KEY, &serde_json::to_string(&stored)?)?;
        tx.commit()?;

        debug!(id = %record.id, total = record.sales.total_revenue, "saved day sheet");
        Ok(())
    }

    fn list_staff(&self) -> Result<Vec<String>> {
        match self.get_value(STAFF_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(defaults::staff_roster()),
        }
    }

    fn save_staff(&self, staff: &[String]) -> Result<()> {
        self.set_value(STAFF_KEY, &serde_json::to_string(staff)?)
    }

    fn get_preference(&self, key: &str) -> Result<Option<String>> {
        self.get_value(key)
    }

    fn set_preference(&self, key: &str, value: &str) -> Result<()> {
        self.set_value(key, value)
    }
}
