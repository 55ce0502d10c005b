//! Projection of the ingredient list into table rows.
//!
//! Rendering is a pure function of the latest list and the current selection;
//! each call produces the whole table again.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike, Utc};

use crate::types::{Ingredient, Unit};

/// One rendered table row: a selection checkbox keyed by name, then the cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Checkbox value; always the ingredient name.
    pub key: String,
    pub checked: bool,
    pub name: String,
    pub quantity: u32,
    pub unit: Unit,
    pub last_edited: String,
}

impl fmt::Display for TableRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.checked { "[x]" } else { "[ ]" };
        write!(
            f,
            "{mark} {:<24} {:>8} {:<10} {}",
            self.name, self.quantity, self.unit, self.last_edited
        )
    }
}

/// Format a timestamp as `YYYY-MM-DD HH:MM` in the local time zone.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    format_timestamp_in(timestamp, &Local)
}

/// Format a timestamp as `YYYY-MM-DD HH:MM` in `tz`, zero-padding every field.
pub fn format_timestamp_in<Tz: TimeZone>(timestamp: &DateTime<Utc>, tz: &Tz) -> String {
    let local = timestamp.with_timezone(tz);
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}",
        local.year(),
        local.month(),
        local.day(),
        local.hour(),
        local.minute()
    )
}

pub fn render_rows(ingredients: &[Ingredient], selected: &BTreeSet<String>) -> Vec<TableRow> {
    render_rows_in(ingredients, selected, &Local)
}

pub fn render_rows_in<Tz: TimeZone>(
    ingredients: &[Ingredient],
    selected: &BTreeSet<String>,
    tz: &Tz,
) -> Vec<TableRow> {
    ingredients
        .iter()
        .map(|ingredient| TableRow {
            key: ingredient.name.clone(),
            checked: selected.contains(&ingredient.name),
            name: ingredient.name.clone(),
            quantity: ingredient.quantity,
            unit: ingredient.unit.clone(),
            last_edited: format_timestamp_in(&ingredient.last_edited, tz),
        })
        .collect()
}
