//! Pickup date option generation.

use chrono::{Days, Local, NaiveDate};

/// Number of pickup dates offered per order.
pub const PICKUP_OPTION_COUNT: usize = 4;

/// Display format for pickup dates: weekday, month, day of month.
const DATE_FORMAT: &str = "%a %b %-d";

/// Generates the pickup options anchored to `anchor`: the anchor date
/// itself followed by the next three days, formatted for display
/// (e.g. `Wed Aug 6`).
pub fn options_from(anchor: NaiveDate) -> Vec<String> {
    (0..PICKUP_OPTION_COUNT as u64)
        .map(|offset| (anchor + Days::new(offset)).format(DATE_FORMAT).to_string())
        .collect()
}

/// Generates the pickup options for an order started now.
pub fn options() -> Vec<String> {
    options_from(Local::now().date_naive())
}
