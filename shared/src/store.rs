use std::collections::HashMap;

use chrono::TimeZone;

use crate::booking::Booking;
use crate::AppointmentPayload;

/// Bookings grouped by day of month, each day's list in arrival order.
/// A day key only exists once a booking has been loaded or added for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingStore {
    days: HashMap<u32, Vec<Booking>>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group fetched records under the local day of their start instant,
    /// keeping server order. Records with unreadable timestamps are skipped.
    pub fn from_payloads<Tz: TimeZone>(payloads: &[AppointmentPayload], tz: &Tz) -> Self {
        let mut store = Self::new();

        for payload in payloads {
            match Booking::from_payload(payload, tz) {
                Ok(booking) => {
                    let day = booking.local_day(tz);
                    store.push(day, booking);
                }
                Err(e) => {
                    log::warn!("Skipping appointment for '{}': {}", payload.car, e);
                }
            }
        }

        log::debug!(
            "Grouped {} of {} appointments into {} days",
            store.len(),
            payloads.len(),
            store.days.len()
        );
        store
    }

    pub fn push(&mut self, day: u32, booking: Booking) {
        self.days.entry(day).or_default().push(booking);
    }

    /// Bookings for `day` in arrival order; empty when none were recorded.
    pub fn bookings_for(&self, day: u32) -> &[Booking] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_day(&self, day: u32) -> bool {
        self.days.contains_key(&day)
    }

    /// Days that have at least one booking, ascending
    pub fn days(&self) -> Vec<u32> {
        let mut days: Vec<u32> = self.days.keys().copied().collect();
        days.sort_unstable();
        days
    }

    /// First booking on `day` that `candidate` would double-book.
    pub fn find_conflict(&self, day: u32, candidate: &Booking) -> Option<&Booking> {
        self.bookings_for(day)
            .iter()
            .find(|existing| existing.conflicts_with(candidate))
    }

    pub fn len(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
