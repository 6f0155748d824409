use chrono::{DateTime, Local, NaiveDate, Utc};
use shared::{format_display, DisplayTz};

/// Today's date on the viewer's clock. Read once when the app mounts.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Booking instant as shown in the modal, e.g. "15/06/2025 às 10:05"
pub fn format_booking_time(instant: &DateTime<Utc>, display_tz: &DisplayTz) -> String {
    format_display(instant, display_tz)
}
