use std::collections::BTreeMap;

use crate::defaults;
use crate::models::{InventoryData, InventoryItem, StockField};

/// Units sold from a stock take. Never negative.
pub fn sold(opening: i64, closing: i64) -> i64 {
    opening.saturating_sub(closing).max(0)
}

pub fn update_stock(item: &InventoryItem, field: StockField, value: i64) -> InventoryItem {
    let mut updated = item.clone();
    match field {
        StockField::Opening => updated.opening = value,
        StockField::Closing => updated.closing = value,
    }
    updated.sold_calculated = sold(updated.opening, updated.closing);
    updated
}

/// Opening stock for a new day: yesterday's closing count for every item the
/// previous sheet tracked, on top of the zeroed default catalogue.
pub fn carry_forward(previous: Option<&InventoryData>) -> BTreeMap<String, InventoryItem> {
    let mut items = defaults::inventory_data().items;
    if let Some(previous) = previous {
        for (name, item) in &previous.items {
            items.entry(name.clone()).or_default().opening = item.closing;
        }
    }
    items
}
