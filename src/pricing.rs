//! Court rate presets and the bookings derived from them.
//!
//! Bookings are joined to presets by label, not id. Renaming a preset leaves
//! any booking under the old label orphaned: it still counts toward the court
//! total but no preset row shows its hours any more.

use tracing::{debug, warn};
use uuid::Uuid;

use crate::clamp_amount;
use crate::models::{CourtBooking, CourtPreset};

pub fn find_preset<'a>(presets: &'a [CourtPreset], label: &str) -> Option<&'a CourtPreset> {
    presets.iter().find(|p| p.label == label)
}

pub fn find_booking<'a>(bookings: &'a [CourtBooking], label: &str) -> Option<&'a CourtBooking> {
    bookings.iter().find(|b| b.label == label)
}

/// Hours shown next to a preset, zero when nothing is booked under its label.
pub fn booked_hours(bookings: &[CourtBooking], label: &str) -> f64 {
    find_booking(bookings, label).map(|b| b.hours).unwrap_or(0.0)
}

/// Set the hours sold under a preset.
///
/// Zero, negative or non-numeric hours drop the booking. Otherwise the
/// booking is updated in place or appended with a fresh id.
pub fn resolve_booking(
    presets: &[CourtPreset],
    mut bookings: Vec<CourtBooking>,
    label: &str,
    hours: f64,
) -> Vec<CourtBooking> {
    let existing = bookings.iter().position(|b| b.label == label);

    if !hours.is_finite() || hours <= 0.0 {
        if let Some(index) = existing {
            bookings.remove(index);
        }
        return bookings;
    }

    let Some(preset) = find_preset(presets, label) else {
        warn!(label, "no court preset with this label, booking unchanged");
        return bookings;
    };

    let unit_price = preset.default_price;
    let total_price = unit_price * hours;

    match existing {
        Some(index) => {
            let booking = &mut bookings[index];
            booking.hours = hours;
            booking.unit_price = unit_price;
            booking.total_price = total_price;
        }
        None => bookings.push(CourtBooking {
            id: Uuid::new_v4().to_string(),
            label: label.to_string(),
            hours,
            unit_price,
            total_price,
        }),
    }

    bookings
}

/// Append a preset. Empty and duplicate labels are ignored.
pub fn add_preset(presets: &mut Vec<CourtPreset>, label: &str, price: f64) -> Option<CourtPreset> {
    let label = label.trim();
    if label.is_empty() {
        debug!("ignoring court preset with empty label");
        return None;
    }
    if find_preset(presets, label).is_some() {
        warn!(label, "court preset label already in use");
        return None;
    }

    let preset = CourtPreset {
        id: Uuid::new_v4().to_string(),
        label: label.to_string(),
        default_price: clamp_amount(price),
    };
    presets.push(preset.clone());
    Some(preset)
}

/// Edit a preset's label and/or price. Existing bookings keep their price
/// until their hours are edited again. Returns false when nothing changed.
pub fn update_preset(
    presets: &mut [CourtPreset],
    id: &str,
    label: Option<&str>,
    price: Option<f64>,
) -> bool {
    let new_label = label.map(str::trim).filter(|l| !l.is_empty());
    if let Some(l) = new_label {
        if presets.iter().any(|p| p.label == l && p.id != id) {
            warn!(label = l, "court preset label already in use");
            return false;
        }
    }

    let Some(preset) = presets.iter_mut().find(|p| p.id == id) else {
        return false;
    };

    let mut changed = false;
    if let Some(l) = new_label {
        if preset.label != l {
            debug!(from = %preset.label, to = l, "renaming court preset");
            preset.label = l.to_string();
            changed = true;
        }
    }
    if let Some(p) = price {
        preset.default_price = clamp_amount(p);
        changed = true;
    }
    changed
}

/// Remove a preset by id. Bookings already recorded under its label stay.
pub fn remove_preset(presets: &mut Vec<CourtPreset>, id: &str) -> Option<CourtPreset> {
    let index = presets.iter().position(|p| p.id == id)?;
    Some(presets.remove(index))
}

pub fn courts_total(bookings: &[CourtBooking]) -> f64 {
    bookings.iter().map(|b| b.total_price).sum()
}
