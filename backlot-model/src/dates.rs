//! Campaign date handling.
//!
//! The advertisement endpoints carry dates as `DD/MM/YYYY` strings, so
//! everything crossing the wire goes through these helpers.

use chrono::{Local, Months, NaiveDate};

use crate::error::ModelError;

/// Wire format for campaign start and end dates.
pub const WIRE_DATE_FORMAT: &str = "%d/%m/%Y";

/// Render a date the way the create-advertisement endpoint expects it.
pub fn format_wire_date(date: NaiveDate) -> String {
    date.format(WIRE_DATE_FORMAT).to_string()
}

/// Parse a `DD/MM/YYYY` wire date.
pub fn parse_wire_date(raw: &str) -> Result<NaiveDate, ModelError> {
    NaiveDate::parse_from_str(raw.trim(), WIRE_DATE_FORMAT).map_err(|source| {
        ModelError::InvalidDate {
            value: raw.to_owned(),
            source,
        }
    })
}

/// Default campaign window the advertisement form pre-fills: starts
/// today, ends one month later.
pub fn default_campaign_window() -> (NaiveDate, NaiveDate) {
    let start = Local::now().date_naive();
    let end = start
        .checked_add_months(Months::new(1))
        .unwrap_or(start);
    (start, end)
}
