//! Presentation of booking instants as `DD/MM/YYYY às HH:MM` in a fixed zone,
//! independent of the viewer's own zone. Display only; stored and transmitted
//! values are never derived from these strings.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::booking::compose_instant;
use crate::error::BookingError;

const SEPARATOR: &str = " às ";

pub fn format_display<Tz: TimeZone>(instant: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let local = instant.with_timezone(tz);
    format!("{}{}{}", local.format("%d/%m/%Y"), SEPARATOR, local.format("%H:%M"))
}

/// Inverse of [`format_display`], to minute precision.
pub fn parse_display<Tz: TimeZone>(raw: &str, tz: &Tz) -> Result<DateTime<Utc>, BookingError> {
    let invalid = || BookingError::InvalidDisplay(raw.to_string());

    let (date, time) = raw.trim().split_once(SEPARATOR).ok_or_else(invalid)?;
    let date = NaiveDate::parse_from_str(date, "%d/%m/%Y").map_err(|_| invalid())?;
    let time = NaiveTime::parse_from_str(time, "%H:%M").map_err(|_| invalid())?;

    compose_instant(date, time, tz)
}
