//! Booking model and timestamp handling.
//!
//! Instants are held as `DateTime<Utc>`. Anything that depends on the viewer's
//! wall clock (which calendar day a booking falls on, how "10:00" on day D
//! becomes an instant) takes the time zone as a parameter, so the frontend
//! passes `chrono::Local` and tests pass a fixed zone.

use chrono::{
    DateTime, Datelike, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, NaiveTime,
    SecondsFormat, TimeZone, Utc,
};

use crate::error::BookingError;
use crate::AppointmentPayload;

/// A reservation of one vehicle for one contiguous interval `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub name: String,
    pub vehicle: String,
    pub plate: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Booking {
    /// Build a booking from an API record. Offset-less timestamps are read in `tz`.
    pub fn from_payload<Tz: TimeZone>(
        payload: &AppointmentPayload,
        tz: &Tz,
    ) -> Result<Self, BookingError> {
        Ok(Self {
            name: payload.name.clone(),
            vehicle: payload.car.clone(),
            plate: payload.placa.clone(),
            start: parse_timestamp(&payload.inital_date, tz)?,
            end: parse_timestamp(&payload.final_date, tz)?,
        })
    }

    pub fn to_payload(&self) -> AppointmentPayload {
        AppointmentPayload {
            name: self.name.clone(),
            car: self.vehicle.clone(),
            placa: self.plate.clone(),
            inital_date: to_iso_string(&self.start),
            final_date: to_iso_string(&self.end),
        }
    }

    /// Day of month of the start instant as seen in `tz`
    pub fn local_day<Tz: TimeZone>(&self, tz: &Tz) -> u32 {
        self.start.with_timezone(tz).day()
    }

    /// Half-open interval intersection: touching intervals do not overlap.
    pub fn overlaps(&self, start: &DateTime<Utc>, end: &DateTime<Utc>) -> bool {
        *start < self.end && *end > self.start
    }

    /// Same vehicle and intersecting intervals. Different vehicles never conflict.
    pub fn conflicts_with(&self, other: &Booking) -> bool {
        self.vehicle == other.vehicle && self.overlaps(&other.start, &other.end)
    }
}

/// Serialise an instant the way a browser's `Date.toISOString()` does.
pub fn to_iso_string(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

const LOCAL_TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-8601 timestamp. Strings carrying an offset (or `Z`) are exact;
/// offset-less date-times are interpreted as wall-clock time in `tz`. A bare
/// `YYYY-MM-DD` is UTC midnight, as a browser's `Date` reads it.
pub fn parse_timestamp<Tz: TimeZone>(raw: &str, tz: &Tz) -> Result<DateTime<Utc>, BookingError> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = raw.parse::<DateTime<FixedOffset>>() {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::default())));
    }

    let naive = LOCAL_TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .ok_or_else(|| BookingError::InvalidTimestamp(raw.to_string()))?;

    resolve_local(tz, &naive)
}

/// Parse a form time-of-day. Browsers send `HH:MM`, or `HH:MM:SS` when the
/// input carries a seconds step.
pub fn parse_time_of_day(raw: &str) -> Result<NaiveTime, BookingError> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map_err(|_| BookingError::InvalidTime(raw.to_string()))
}

/// Combine a calendar date and a time of day in `tz` into an absolute instant.
pub fn compose_instant<Tz: TimeZone>(
    date: NaiveDate,
    time: NaiveTime,
    tz: &Tz,
) -> Result<DateTime<Utc>, BookingError> {
    resolve_local(tz, &date.and_time(time))
}

// Ambiguous wall-clock times (DST fall-back) resolve to the earlier instant.
fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: &NaiveDateTime) -> Result<DateTime<Utc>, BookingError> {
    match tz.from_local_datetime(naive) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
        LocalResult::None => Err(BookingError::NonexistentLocalTime(naive.to_string())),
    }
}
