//! Net revenue for a day sheet.
//!
//! `total = drinks + courts + rentals - discounts - drink shortage`, kept as
//! an exact float sum. Rounding to cents happens only when a report is drawn.

use tracing::debug;

use crate::cash;
use crate::defaults::{self, SHOE_RENTAL_PRICE};
use crate::models::{InventoryData, Rentals, SalesData};
use crate::pricing;

pub fn drinks_revenue(sales: &SalesData) -> f64 {
    sales
        .drinks
        .values()
        .map(|d| d.qty as f64 * d.price)
        .sum()
}

pub fn rentals_for(shoes: i64) -> Rentals {
    let shoes = shoes.max(0);
    Rentals {
        shoes,
        total: shoes as f64 * SHOE_RENTAL_PRICE,
    }
}

pub fn net_revenue(sales: &SalesData) -> f64 {
    drinks_revenue(sales) + pricing::courts_total(&sales.courts.bookings) + sales.rentals.total
        - sales.deductions.discounts
        - sales.deductions.drink_shortage
}

pub fn recompute_totals(mut sales: SalesData) -> SalesData {
    sales.total_revenue = net_revenue(&sales);
    sales
}

/// Push a stock take into the sales side: sold counts become drink
/// quantities, missing drinks are created at the default price, and the
/// shortage and total are derived again.
pub fn apply_inventory(inventory: &InventoryData, mut sales: SalesData) -> SalesData {
    for (name, item) in &inventory.items {
        sales
            .drinks
            .entry(name.clone())
            .or_insert_with(defaults::drink_entry)
            .qty = item.sold_calculated;
    }

    sales.deductions.drink_shortage =
        cash::reconcile(&inventory.items, &sales.drinks, inventory.cash_collected);

    let sales = recompute_totals(sales);
    debug!(
        shortage = sales.deductions.drink_shortage,
        total = sales.total_revenue,
        "derived sales from inventory"
    );
    sales
}
