//! Cash reconciliation for drink sales.
//!
//! A cash count of zero means nobody has counted yet, so no shortage is
//! reported. A drawer that was counted and really held nothing looks the same.

use std::collections::BTreeMap;

use crate::defaults::DEFAULT_DRINK_PRICE;
use crate::models::{DrinkEntry, InventoryItem};

/// Revenue the stock take says the drinks should have brought in.
pub fn expected_drink_revenue(
    items: &BTreeMap<String, InventoryItem>,
    drinks: &BTreeMap<String, DrinkEntry>,
) -> f64 {
    items
        .iter()
        .map(|(name, item)| {
            let price = drinks.get(name).map(|d| d.price).unwrap_or(DEFAULT_DRINK_PRICE);
            item.sold_calculated as f64 * price
        })
        .sum()
}

pub fn shortage(expected: f64, cash_collected: f64) -> f64 {
    if cash_collected > 0.0 && cash_collected < expected {
        expected - cash_collected
    } else {
        0.0
    }
}

pub fn reconcile(
    items: &BTreeMap<String, InventoryItem>,
    drinks: &BTreeMap<String, DrinkEntry>,
    cash_collected: f64,
) -> f64 {
    shortage(expected_drink_revenue(items, drinks), cash_collected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortage_only_when_cash_counted_and_short() {
        assert_eq!(shortage(15.0, 10.0), 5.0);
        assert_eq!(shortage(15.0, 15.0), 0.0);
        assert_eq!(shortage(15.0, 20.0), 0.0);
        assert_eq!(shortage(15.0, 0.0), 0.0);
        assert_eq!(shortage(15.0, -3.0), 0.0);
        assert_eq!(shortage(15.0, f64::NAN), 0.0);
    }

    #[test]
    fn test_missing_sales_price_uses_default() {
        let mut items = BTreeMap::new();
        items.insert(
            "Cola".to_string(),
            InventoryItem {
                opening: 4,
                closing: 1,
                sold_calculated: 3,
            },
        );
        let expected = expected_drink_revenue(&items, &BTreeMap::new());
        assert!((expected - 3.0 * DEFAULT_DRINK_PRICE).abs() < 1e-9);
    }
}
