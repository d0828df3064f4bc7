//! Staff roster and theme preference. Both live outside any day sheet.

use tracing::{debug, warn};

use crate::error::Result;
use crate::models::Theme;
use crate::store::{RecordStore, THEME_KEY};

pub fn staff<S: RecordStore + ?Sized>(store: &S) -> Result<Vec<String>> {
    store.list_staff()
}

/// Add a name to the roster. Blank and already listed names are ignored.
pub fn add_staff<S: RecordStore + ?Sized>(store: &S, name: &str) -> Result<Vec<String>> {
    let mut roster = store.list_staff()?;
    let name = name.trim();
    if name.is_empty() || roster.iter().any(|s| s == name) {
        debug!(name, "staff name ignored");
        return Ok(roster);
    }
    roster.push(name.to_string());
    store.save_staff(&roster)?;
    Ok(roster)
}

pub fn remove_staff<S: RecordStore + ?Sized>(store: &S, name: &str) -> Result<Vec<String>> {
    let mut roster = store.list_staff()?;
    roster.retain(|s| s != name);
    store.save_staff(&roster)?;
    Ok(roster)
}

pub fn theme<S: RecordStore + ?Sized>(store: &S) -> Result<Theme> {
    let theme = match store.get_preference(THEME_KEY)?.as_deref() {
        Some("dark") => Theme::Dark,
        Some("light") | None => Theme::Light,
        Some(other) => {
            warn!(value = other, "unknown theme preference, using light");
            Theme::Light
        }
    };
    Ok(theme)
}

pub fn set_theme<S: RecordStore + ?Sized>(store: &S, theme: Theme) -> Result<Theme> {
    store.set_preference(THEME_KEY, theme.as_str())?;
    Ok(theme)
}

pub fn toggle_theme<S: RecordStore + ?Sized>(store: &S) -> Result<Theme> {
    let next = theme(store)?.toggled();
    set_theme(store, next)
}
