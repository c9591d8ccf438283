// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar-date parsing and formatting.
//!
//! The remote store exchanges dates as ISO-8601-like strings that may carry a
//! time-of-day and offset (`1990-01-01T00:00:00`). Only the date portion is
//! significant for equality and age computation, so everything after the
//! date is discarded before parsing.

use crate::error::DomainError;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const CALENDAR_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parses the calendar-date portion of an ISO-8601-like string.
///
/// Accepts `YYYY-MM-DD` optionally followed by a `T` or space separated
/// time-of-day and offset, which are ignored.
///
/// # Arguments
///
/// * `input` - The text to parse
///
/// # Errors
///
/// Returns `DomainError::InvalidDate` if the input is empty or the date
/// portion is not a valid calendar date.
pub fn parse_calendar_date(input: &str) -> Result<Date, DomainError> {
    let trimmed: &str = input.trim();
    let date_portion: &str = trimmed
        .split(['T', 't', ' '])
        .next()
        .unwrap_or_default();

    if date_portion.is_empty() {
        return Err(DomainError::InvalidDate {
            input: input.to_string(),
            reason: String::from("date is empty"),
        });
    }

    Date::parse(date_portion, CALENDAR_DATE).map_err(|e| DomainError::InvalidDate {
        input: input.to_string(),
        reason: e.to_string(),
    })
}

/// Renders a date in the canonical `YYYY-MM-DD` form sent to the remote store.
#[must_use]
pub fn format_calendar_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}
