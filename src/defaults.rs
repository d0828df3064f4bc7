//! Fixed catalogue every fresh record starts from.

use crate::models::{
    CourtPreset, Courts, Deductions, DrinkEntry, InventoryData, InventoryItem, Maintenance, Rentals,
    SalesData,
};

pub const DEFAULT_DRINKS: [&str; 4] = ["Mineral Water", "100 Plus", "100 Plus Lime", "Milo"];

pub const DEFAULT_STAFF: [&str; 4] = ["Staff", "Owner", "Manager", "Cleaner"];

pub const DEFAULT_DRINK_PRICE: f64 = 1.00;

/// Price per pair of rented shoes.
pub const SHOE_RENTAL_PRICE: f64 = 3.00;

const DEFAULT_PRESETS: [(&str, &str, f64); 5] = [
    ("p1", "Court 8 AM-5 PM", 7.00),
    ("p2", "Court 5 PM-10 PM", 12.00),
    ("p3", "Court 10 PM-12 AM", 9.00),
    ("p4", "Weekend", 7.00),
    ("p5", "Court (Staff)", 10.00),
];

pub fn court_presets() -> Vec<CourtPreset> {
    DEFAULT_PRESETS
        .iter()
        .map(|(id, label, price)| CourtPreset {
            id: id.to_string(),
            label: label.to_string(),
            default_price: *price,
        })
        .collect()
}

pub fn staff_roster() -> Vec<String> {
    DEFAULT_STAFF.iter().map(|s| s.to_string()).collect()
}

pub fn drink_entry() -> DrinkEntry {
    DrinkEntry {
        qty: 0,
        price: DEFAULT_DRINK_PRICE,
    }
}

pub fn sales_data() -> SalesData {
    SalesData {
        staff: String::new(),
        drinks: DEFAULT_DRINKS
            .iter()
            .map(|name| (name.to_string(), drink_entry()))
            .collect(),
        courts: Courts {
            presets: court_presets(),
            bookings: Vec::new(),
        },
        rentals: Rentals::default(),
        deductions: Deductions::default(),
        total_revenue: 0.0,
    }
}

pub fn inventory_data() -> InventoryData {
    InventoryData {
        items: DEFAULT_DRINKS
            .iter()
            .map(|name| (name.to_string(), InventoryItem::default()))
            .collect(),
        maintenance: Maintenance::default(),
        cash_collected: 0.0,
    }
}
