//! Shareable plain-text reports, formatted for chat apps (`*bold*`).

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::{Center, DailyRecord};
use crate::pricing;
use crate::revenue;

const CURRENCY: &str = "BND";

fn money(amount: f64) -> String {
    format!("{CURRENCY} {amount:.2}")
}

pub fn daily(record: &DailyRecord, insight: Option<&str>) -> String {
    let sales = &record.sales;
    let mut text = String::new();

    text.push_str(&format!("*DAILY REPORT - {}*\n", record.center.name().to_uppercase()));
    text.push_str(&format!("📅 Date: {}\n", record.date.format("%d/%m/%Y")));
    if !sales.staff.is_empty() {
        text.push_str(&format!("👤 Staff: {}\n", sales.staff));
    }
    text.push('\n');

    text.push_str("*SALES SUMMARY*\n");
    if sales.courts.bookings.is_empty() {
        text.push_str(&format!("🏸 Courts: {}\n", money(0.0)));
    } else {
        text.push_str("🏸 *Courts:*\n");
        for b in &sales.courts.bookings {
            text.push_str(&format!("   - {}: {} hrs ({})\n", b.label, b.hours, money(b.total_price)));
        }
    }
    if sales.rentals.total > 0.0 {
        text.push_str(&format!(
            "👟 Rentals (Shoes): {} ({} pairs)\n",
            money(sales.rentals.total),
            sales.rentals.shoes
        ));
    }
    text.push_str(&format!("🥤 Drinks: {}\n", money(revenue::drinks_revenue(sales))));

    let deductions = &sales.deductions;
    if deductions.discounts > 0.0 || deductions.drink_shortage > 0.0 {
        text.push_str("\n*DEDUCTIONS*\n");
        if deductions.discounts > 0.0 {
            text.push_str(&format!("🔻 Discount: -{}", money(deductions.discounts)));
            if !deductions.description.is_empty() {
                text.push_str(&format!(" ({})", deductions.description));
            }
            text.push('\n');
        }
        if deductions.drink_shortage > 0.0 {
            text.push_str(&format!("⚠️ Drink Shortage: -{}\n", money(deductions.drink_shortage)));
        }
    }

    text.push_str(&format!("\n*💰 NET TOTAL: {}*\n", money(sales.total_revenue)));
    text.push_str("------------------\n");

    let maintenance = &record.inventory.maintenance;
    if maintenance.courts_cleaned || maintenance.vacuumed {
        text.push_str("*FACILITY*\n");
        if maintenance.courts_cleaned {
            text.push_str("✅ Courts Cleaned\n");
        }
        if maintenance.vacuumed {
            text.push_str("✅ Vacuumed\n");
        }
    }

    if let Some(insight) = insight.filter(|i| !i.is_empty()) {
        text.push_str(&format!("\n*AI INSIGHT*\n{insight}"));
    }

    text
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct MonthlySummary {
    pub center: Center,
    pub year: i32,
    pub month: u32,
    pub operating_days: usize,
    pub courts: f64,
    pub drinks: f64,
    pub rentals: f64,
    pub total_revenue: f64,
}

impl MonthlySummary {
    /// Totals for `center` over the calendar month containing `date`, or
    /// `None` when that month has no sheets.
    pub fn collect(records: &[DailyRecord], date: NaiveDate, center: Center) -> Option<Self> {
        let in_month: Vec<&DailyRecord> = records
            .iter()
            .filter(|r| {
                r.center == center && r.date.year() == date.year() && r.date.month() == date.month()
            })
            .collect();

        if in_month.is_empty() {
            return None;
        }

        let mut summary = MonthlySummary {
            center,
            year: date.year(),
            month: date.month(),
            operating_days: in_month.len(),
            courts: 0.0,
            drinks: 0.0,
            rentals: 0.0,
            total_revenue: 0.0,
        };
        for r in in_month {
            summary.courts += pricing::courts_total(&r.sales.courts.bookings);
            summary.drinks += revenue::drinks_revenue(&r.sales);
            summary.rentals += r.sales.rentals.total;
            summary.total_revenue += r.sales.total_revenue;
        }
        Some(summary)
    }
}

pub fn monthly(records: &[DailyRecord], date: NaiveDate, center: Center) -> String {
    let Some(summary) = MonthlySummary::collect(records, date, center) else {
        return "No records found for this month.".to_string();
    };

    let mut text = String::new();
    text.push_str(&format!("*MONTHLY REPORT - {}*\n", center.name().to_uppercase()));
    text.push_str(&format!("📅 {}\n", date.format("%B %Y")));
    text.push_str(&format!("📊 Total Operating Days: {}\n\n", summary.operating_days));

    text.push_str("*REVENUE BREAKDOWN*\n");
    text.push_str(&format!("🏸 Courts: {}\n", money(summary.courts)));
    text.push_str(&format!("🥤 Drinks: {}\n", money(summary.drinks)));
    text.push_str(&format!("👟 Rentals: {}\n", money(summary.rentals)));

    text.push_str(&format!("\n*💰 TOTAL REVENUE: {}*\n", money(summary.total_revenue)));
    text
}
