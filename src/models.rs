use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Physical badminton facility. Serialized with the display name that older
/// saved records already use.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Center {
    #[serde(rename = "MZ Badminton")]
    MzBadminton,
    #[serde(rename = "Racket Nation")]
    RacketNation,
}

impl Center {
    pub const ALL: [Center; 2] = [Center::MzBadminton, Center::RacketNation];

    pub fn name(&self) -> &'static str {
        match self {
            Center::MzBadminton => "MZ Badminton",
            Center::RacketNation => "Racket Nation",
        }
    }
}

impl fmt::Display for Center {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct DrinkEntry {
    #[serde(deserialize_with = "lenient::count")]
    pub qty: i64,
    #[serde(deserialize_with = "lenient::amount")]
    pub price: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CourtPreset {
    #[serde(deserialize_with = "lenient::or_default")]
    pub id: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub label: String,
    #[serde(deserialize_with = "lenient::amount")]
    pub default_price: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CourtBooking {
    #[serde(deserialize_with = "lenient::or_default")]
    pub id: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub label: String,
    #[serde(deserialize_with = "lenient::amount")]
    pub hours: f64,
    #[serde(deserialize_with = "lenient::amount")]
    pub unit_price: f64,
    #[serde(deserialize_with = "lenient::amount")]
    pub total_price: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Courts {
    #[serde(deserialize_with = "lenient::or_default")]
    pub presets: Vec<CourtPreset>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub bookings: Vec<CourtBooking>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Rentals {
    #[serde(deserialize_with = "lenient::count")]
    pub shoes: i64,
    #[serde(deserialize_with = "lenient::amount")]
    pub total: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Deductions {
    #[serde(deserialize_with = "lenient::amount")]
    pub discounts: f64,
    /// Derived from the cash count, never entered directly.
    #[serde(deserialize_with = "lenient::amount")]
    pub drink_shortage: f64,
    #[serde(deserialize_with = "lenient::or_default")]
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SalesData {
    #[serde(deserialize_with = "lenient::or_default")]
    pub staff: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub drinks: BTreeMap<String, DrinkEntry>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub courts: Courts,
    #[serde(deserialize_with = "lenient::or_default")]
    pub rentals: Rentals,
    #[serde(deserialize_with = "lenient::or_default")]
    pub deductions: Deductions,
    #[serde(deserialize_with = "lenient::amount")]
    pub total_revenue: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct InventoryItem {
    #[serde(deserialize_with = "lenient::count")]
    pub opening: i64,
    #[serde(deserialize_with = "lenient::count")]
    pub closing: i64,
    #[serde(deserialize_with = "lenient::count")]
    pub sold_calculated: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Maintenance {
    #[serde(deserialize_with = "lenient::or_default")]
    pub courts_cleaned: bool,
    #[serde(deserialize_with = "lenient::or_default")]
    pub vacuumed: bool,
    #[serde(deserialize_with = "lenient::or_default")]
    pub notes: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct InventoryData {
    #[serde(deserialize_with = "lenient::or_default")]
    pub items: BTreeMap<String, InventoryItem>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub maintenance: Maintenance,
    #[serde(deserialize_with = "lenient::amount")]
    pub cash_collected: f64,
}

/// One sheet per (date, center).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DailyRecord {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub id: String,
    pub date: NaiveDate,
    pub center: Center,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub sales: SalesData,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub inventory: InventoryData,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub synced: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StockField {
    Opening,
    Closing,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum MaintenanceTask {
    CourtsCleaned,
    Vacuumed,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// How the active record came into memory.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecordOrigin {
    Loaded,
    Created,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdatePreset {
    pub id: String,
    pub label: Option<String>,
    pub default_price: Option<f64>,
}

/// Decoders for sheets written by older versions, which stored `null` for
/// blank inputs and fractional stock counts.
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    fn number(value: &Value) -> Option<f64> {
        let parsed = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        parsed.filter(|v| v.is_finite())
    }

    /// Money and hours. Anything that is not a finite number reads as 0.
    pub fn amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(number(&value).unwrap_or(0.0))
    }

    /// Whole counts. Fractions round to the nearest unit.
    pub fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        let value = Value::deserialize(deserializer)?;
        if let Some(n) = value.as_i64() {
            return Ok(n);
        }
        Ok(number(&value).map(|v| v.round() as i64).unwrap_or(0))
    }

    /// `null` reads as the default.
    pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Default,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }
}
