//! Opening a day sheet: load the saved one, or build a fresh one from the
//! center's most recent earlier sheet.

use chrono::NaiveDate;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::defaults;
use crate::models::{Center, DailyRecord, InventoryData, RecordOrigin};
use crate::revenue;
use crate::stock;

pub fn record_key(date: NaiveDate, center: Center) -> String {
    format!("{}-{}", date.format("%Y-%m-%d"), center)
}

pub fn find_record(history: &[DailyRecord], date: NaiveDate, center: Center) -> Option<&DailyRecord> {
    history.iter().find(|r| r.date == date && r.center == center)
}

/// Latest sheet for `center` dated strictly before `date`.
pub fn previous_record(history: &[DailyRecord], date: NaiveDate, center: Center) -> Option<&DailyRecord> {
    history
        .iter()
        .filter(|r| r.center == center && r.date < date)
        .max_by_key(|r| r.date)
}

/// Decode one stored record into the current shape. Absent fields were
/// already filled by serde defaults; only the id needs rebuilding.
pub fn upgrade(value: Value) -> Result<DailyRecord, serde_json::Error> {
    let mut record: DailyRecord = serde_json::from_value(value)?;
    if record.id.is_empty() {
        record.id = record_key(record.date, record.center);
    }
    Ok(record)
}

/// Decode every stored record, skipping entries too damaged to identify.
pub fn upgrade_all(values: Vec<Value>) -> Vec<DailyRecord> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match upgrade(value) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(index, error = %e, "skipping unreadable stored record");
                None
            }
        })
        .collect()
}

pub fn create_record(date: NaiveDate, center: Center, history: &[DailyRecord]) -> DailyRecord {
    let previous = previous_record(history, date, center);

    let inventory = InventoryData {
        items: stock::carry_forward(previous.map(|r| &r.inventory)),
        ..defaults::inventory_data()
    };

    let mut sales = defaults::sales_data();
    for name in inventory.items.keys() {
        sales
            .drinks
            .entry(name.clone())
            .or_insert_with(defaults::drink_entry);
    }
    if let Some(previous) = previous {
        sales.courts.presets = previous.sales.courts.presets.clone();
    }

    debug!(
        %date,
        %center,
        carried_from = ?previous.map(|r| r.date),
        "built new day sheet"
    );

    DailyRecord {
        id: record_key(date, center),
        date,
        center,
        sales: revenue::recompute_totals(sales),
        inventory,
        synced: false,
    }
}

pub fn load_or_create(
    date: NaiveDate,
    center: Center,
    history: &[DailyRecord],
) -> (DailyRecord, RecordOrigin) {
    match find_record(history, date, center) {
        Some(saved) => {
            info!(%date, %center, "loaded saved day sheet");
            (saved.clone(), RecordOrigin::Loaded)
        }
        None => {
            info!(%date, %center, "creating day sheet");
            (create_record(date, center, history), RecordOrigin::Created)
        }
    }
}
