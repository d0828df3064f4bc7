//! The open day sheet and every edit that can be made to it.
//!
//! Each edit that changes something derives the dependent fields again and
//! writes the whole sheet back to the store before returning. The open sheet
//! only takes the edit once the write has succeeded.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::clamp_amount;
use crate::error::{LedgerError, Result};
use crate::lifecycle;
use crate::models::{
    Center, DailyRecord, InventoryData, InventoryItem, MaintenanceTask, RecordOrigin, SalesData,
    StockField,
};
use crate::pricing;
use crate::revenue;
use crate::stock;
use crate::store::RecordStore;

struct ActiveRecord {
    record: DailyRecord,
    origin: RecordOrigin,
}

pub struct Tracker<S: RecordStore> {
    store: S,
    active: Option<ActiveRecord>,
}

impl<S: RecordStore> Tracker<S> {
    pub fn new(store: S) -> Self {
        Tracker { store, active: None }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn record(&self) -> Option<&DailyRecord> {
        self.active.as_ref().map(|a| &a.record)
    }

    pub fn origin(&self) -> Option<RecordOrigin> {
        self.active.as_ref().map(|a| a.origin)
    }

    /// Switch to the sheet for (date, center). A fresh sheet is only written
    /// once something on it is edited.
    pub fn open_day(&mut self, date: NaiveDate, center: Center) -> Result<&DailyRecord> {
        let history = self.store.list_all()?;
        let (record, origin) = lifecycle::load_or_create(date, center, &history);
        let active = self.active.insert(ActiveRecord { record, origin });
        Ok(&active.record)
    }

    fn edit_sales<F>(&mut self, edit: F) -> Result<&DailyRecord>
    where
        F: FnOnce(&mut SalesData) -> bool,
    {
        let active = self.active.as_mut().ok_or(LedgerError::NoActiveRecord)?;
        let mut draft = active.record.clone();

        if edit(&mut draft.sales) {
            draft.sales = revenue::recompute_totals(std::mem::take(&mut draft.sales));
            self.store.upsert(&draft)?;
            active.record = draft;
        }
        Ok(&active.record)
    }

    fn edit_inventory<F>(&mut self, edit: F) -> Result<&DailyRecord>
    where
        F: FnOnce(&mut InventoryData, &mut SalesData) -> bool,
    {
        let active = self.active.as_mut().ok_or(LedgerError::NoActiveRecord)?;
        let mut draft = active.record.clone();

        if edit(&mut draft.inventory, &mut draft.sales) {
            let sales = std::mem::take(&mut draft.sales);
            draft.sales = revenue::apply_inventory(&draft.inventory, sales);
            self.store.upsert(&draft)?;
            active.record = draft;
        }
        Ok(&active.record)
    }

    // ---- sales side ----

    pub fn set_staff(&mut self, name: &str) -> Result<&DailyRecord> {
        let name = name.trim().to_string();
        self.edit_sales(|sales| {
            sales.staff = name;
            true
        })
    }

    pub fn set_court_hours(&mut self, label: &str, hours: f64) -> Result<&DailyRecord> {
        debug!(label, hours, "court hours");
        self.edit_sales(|sales| {
            let bookings = std::mem::take(&mut sales.courts.bookings);
            sales.courts.bookings =
                pricing::resolve_booking(&sales.courts.presets, bookings, label, hours);
            true
        })
    }

    pub fn add_court_preset(&mut self, label: &str, price: f64) -> Result<&DailyRecord> {
        self.edit_sales(|sales| pricing::add_preset(&mut sales.courts.presets, label, price).is_some())
    }

    pub fn update_court_preset(
        &mut self,
        id: &str,
        label: Option<&str>,
        price: Option<f64>,
    ) -> Result<&DailyRecord> {
        self.edit_sales(|sales| pricing::update_preset(&mut sales.courts.presets, id, label, price))
    }

    pub fn remove_court_preset(&mut self, id: &str) -> Result<&DailyRecord> {
        self.edit_sales(|sales| pricing::remove_preset(&mut sales.courts.presets, id).is_some())
    }

    pub fn set_shoe_rentals(&mut self, shoes: i64) -> Result<&DailyRecord> {
        self.edit_sales(|sales| {
            sales.rentals = revenue::rentals_for(shoes);
            true
        })
    }

    pub fn adjust_shoe_rentals(&mut self, delta: i64) -> Result<&DailyRecord> {
        self.edit_sales(|sales| {
            sales.rentals = revenue::rentals_for(sales.rentals.shoes.saturating_add(delta));
            true
        })
    }

    pub fn set_discount(&mut self, amount: f64) -> Result<&DailyRecord> {
        self.edit_sales(|sales| {
            sales.deductions.discounts = clamp_amount(amount);
            true
        })
    }

    pub fn set_discount_description(&mut self, description: &str) -> Result<&DailyRecord> {
        self.edit_sales(|sales| {
            sales.deductions.description = description.to_string();
            true
        })
    }

    // ---- inventory side ----

    pub fn update_stock(&mut self, name: &str, field: StockField, value: i64) -> Result<&DailyRecord> {
        self.edit_inventory(|inventory, _| match inventory.items.get_mut(name) {
            Some(item) => {
                *item = stock::update_stock(item, field, value);
                true
            }
            None => false,
        })
    }

    pub fn set_cash_collected(&mut self, amount: f64) -> Result<&DailyRecord> {
        self.edit_inventory(|inventory, _| {
            inventory.cash_collected = clamp_amount(amount);
            true
        })
    }

    pub fn set_drink_price(&mut self, name: &str, price: f64) -> Result<&DailyRecord> {
        self.edit_inventory(|_, sales| match sales.drinks.get_mut(name) {
            Some(drink) => {
                drink.price = clamp_amount(price);
                true
            }
            None => false,
        })
    }

    pub fn add_drink(&mut self, name: &str) -> Result<&DailyRecord> {
        let name = name.trim();
        self.edit_inventory(|inventory, _| {
            if name.is_empty() || inventory.items.contains_key(name) {
                return false;
            }
            info!(drink = name, "adding drink");
            inventory.items.insert(name.to_string(), InventoryItem::default());
            true
        })
    }

    pub fn remove_drink(&mut self, name: &str) -> Result<&DailyRecord> {
        self.edit_inventory(|inventory, sales| {
            let removed = inventory.items.remove(name).is_some();
            let dropped = sales.drinks.remove(name).is_some();
            if removed || dropped {
                info!(drink = name, "removing drink");
            }
            removed || dropped
        })
    }

    pub fn toggle_maintenance(&mut self, task: MaintenanceTask) -> Result<&DailyRecord> {
        self.edit_inventory(|inventory, _| {
            let flag = match task {
                MaintenanceTask::CourtsCleaned => &mut inventory.maintenance.courts_cleaned,
                MaintenanceTask::Vacuumed => &mut inventory.maintenance.vacuumed,
            };
            *flag = !*flag;
            true
        })
    }

    pub fn set_maintenance_notes(&mut self, notes: &str) -> Result<&DailyRecord> {
        self.edit_inventory(|inventory, _| {
            inventory.maintenance.notes = notes.to_string();
            true
        })
    }
}
