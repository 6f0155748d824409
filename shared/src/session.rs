//! Booking session state machine.
//!
//! Owns everything the page mutates: the booking store, which day (if any)
//! has its modal open, the form inputs and the message currently shown to the
//! user. The view layer only calls the transitions below.

use chrono::TimeZone;

use crate::booking::Booking;
use crate::calendar::CalendarMonth;
use crate::error::SubmitError;
use crate::form::{BookingForm, FormField};
use crate::store::BookingStore;
use crate::AppointmentPayload;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(u32),
}

/// A validated booking waiting for the server to accept it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingBooking {
    pub day: u32,
    pub booking: Booking,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSession {
    calendar: CalendarMonth,
    store: BookingStore,
    modal: ModalState,
    form: BookingForm,
    error: Option<String>,
}

impl BookingSession {
    pub fn new(calendar: CalendarMonth) -> Self {
        Self {
            calendar,
            store: BookingStore::new(),
            modal: ModalState::Closed,
            form: BookingForm::default(),
            error: None,
        }
    }

    pub fn calendar(&self) -> &CalendarMonth {
        &self.calendar
    }

    pub fn store(&self) -> &BookingStore {
        &self.store
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selected_day(&self) -> Option<u32> {
        match self.modal {
            ModalState::Open(day) => Some(day),
            ModalState::Closed => None,
        }
    }

    /// Existing bookings of the open day, shown read-only next to the form
    pub fn selected_bookings(&self) -> &[Booking] {
        self.selected_day()
            .map(|day| self.store.bookings_for(day))
            .unwrap_or(&[])
    }

    /// Replace the store with the fetched appointments.
    pub fn load<Tz: TimeZone>(&mut self, payloads: &[AppointmentPayload], tz: &Tz) {
        self.store = BookingStore::from_payloads(payloads, tz);
        log::info!("Loaded {} bookings", self.store.len());
    }

    /// The initial fetch failed; the calendar keeps working with no bookings.
    pub fn load_failed(&mut self, reason: &str) {
        log::error!("Erro ao carregar agendamentos: {}", reason);
        self.store = BookingStore::new();
    }

    /// Open the modal for `day`. Past and out-of-month days are ignored.
    pub fn select_day(&mut self, day: u32) -> bool {
        if !self.calendar.is_selectable(day) {
            log::debug!("Ignoring selection of day {}", day);
            return false;
        }
        self.modal = ModalState::Open(day);
        self.error = None;
        true
    }

    /// Close the modal however it was dismissed; always clears the form.
    pub fn close(&mut self) {
        self.modal = ModalState::Closed;
        self.form.reset();
        self.error = None;
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Compose the form into a booking for the open day and check it against
    /// that day's bookings for the same vehicle. Never touches the store.
    pub fn prepare_submission<Tz: TimeZone>(&self, tz: &Tz) -> Result<PendingBooking, SubmitError> {
        let day = self.selected_day().ok_or(SubmitError::NoDaySelected)?;
        let date = self.calendar.date(day)?;
        let booking = self.form.to_booking(date, tz)?;

        if let Some(existing) = self.store.find_conflict(day, &booking) {
            log::warn!(
                "Vehicle '{}' already booked by '{}' on day {}",
                booking.vehicle,
                existing.name,
                day
            );
            return Err(SubmitError::Overlap);
        }

        Ok(PendingBooking { day, booking })
    }

    /// The server accepted `pending`: record it and close the modal.
    pub fn submission_succeeded(&mut self, pending: PendingBooking) {
        log::info!(
            "Booked '{}' for day {} ({} - {})",
            pending.booking.vehicle,
            pending.day,
            pending.booking.start,
            pending.booking.end
        );
        self.store.push(pending.day, pending.booking);
        self.close();
    }

    /// Keep the modal and the user's input; show why it failed. A failure
    /// landing after the modal was closed is only logged.
    pub fn submission_failed(&mut self, error: SubmitError) {
        if self.modal == ModalState::Closed {
            log::warn!("Submission failed after the modal was closed: {}", error);
            return;
        }
        self.error = Some(error.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn session() -> BookingSession {
        let mut session = BookingSession::new(CalendarMonth::new(2025, 6, 10).unwrap());
        let existing = vec![AppointmentPayload {
            name: "Ana".to_string(),
            car: "V1".to_string(),
            placa: "ABC1D23".to_string(),
            inital_date: "2025-06-15T10:00:00.000Z".to_string(),
            final_date: "2025-06-15T11:00:00.000Z".to_string(),
        }];
        session.load(&existing, &Utc);
        session
    }

    fn fill(session: &mut BookingSession, car: &str, start: &str, end: &str) {
        session.set_field(FormField::Name, "Bia");
        session.set_field(FormField::Car, car);
        session.set_field(FormField::Plate, "XYZ9A87");
        session.set_field(FormField::StartTime, start);
        session.set_field(FormField::EndTime, end);
    }

    #[test]
    fn test_select_day_opens_modal() {
        let mut session = session();
        assert!(session.select_day(15));
        assert_eq!(session.modal(), ModalState::Open(15));
        assert_eq!(session.selected_bookings().len(), 1);
    }

    #[test]
    fn test_past_day_never_selected() {
        let mut session = session();
        for day in 1..10 {
            assert!(!session.select_day(day));
            assert_eq!(session.modal(), ModalState::Closed);
        }
        assert!(session.select_day(10));
    }

    #[test]
    fn test_overlap_same_vehicle_rejected() {
        let mut session = session();
        session.select_day(15);
        fill(&mut session, "V1", "10:30", "11:30");

        assert_eq!(session.prepare_submission(&Utc), Err(SubmitError::Overlap));
    }

    #[test]
    fn test_touching_interval_accepted() {
        let mut session = session();
        session.select_day(15);
        fill(&mut session, "V1", "11:00", "12:00");

        let pending = session.prepare_submission(&Utc).unwrap();
        assert_eq!(pending.day, 15);
    }

    #[test]
    fn test_other_vehicle_may_overlap() {
        let mut session = session();
        session.select_day(15);
        fill(&mut session, "V2", "10:00", "11:00");

        assert!(session.prepare_submission(&Utc).is_ok());
    }

    #[test]
    fn test_prepare_requires_open_day() {
        let mut session = session();
        fill(&mut session, "V1", "12:00", "13:00");
        assert_eq!(session.prepare_submission(&Utc), Err(SubmitError::NoDaySelected));
    }

    #[test]
    fn test_rejected_overlap_keeps_state() {
        let mut session = session();
        session.select_day(15);
        fill(&mut session, "V1", "10:30", "11:30");
        let before = session.store().clone();

        let err = session.prepare_submission(&Utc).unwrap_err();
        session.submission_failed(err);

        assert_eq!(session.store(), &before);
        assert_eq!(session.modal(), ModalState::Open(15));
        assert_eq!(session.form().car, "V1");
        assert_eq!(
            session.error(),
            Some("Erro: Já existe um agendamento para este horário com este carro.")
        );
    }

    #[test]
    fn test_success_appends_one_and_clears_form() {
        let mut session = session();
        session.select_day(20);
        fill(&mut session, "V1", "08:00", "09:00");

        let pending = session.prepare_submission(&Utc).unwrap();
        session.submission_succeeded(pending);

        assert_eq!(session.store().len(), 2);
        assert_eq!(session.store().bookings_for(20).len(), 1);
        assert_eq!(session.store().bookings_for(20)[0].name, "Bia");
        assert_eq!(session.modal(), ModalState::Closed);
        assert!(session.form().is_empty());
        assert_eq!(session.error(), None);
    }

    #[test]
    fn test_success_appends_after_existing() {
        let mut session = session();
        session.select_day(15);
        fill(&mut session, "V2", "10:00", "11:00");

        let pending = session.prepare_submission(&Utc).unwrap();
        session.submission_succeeded(pending);

        let names: Vec<&str> = session.store().bookings_for(15).iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "Bia"]);
    }

    #[test]
    fn test_server_failure_keeps_modal_and_input() {
        let mut session = session();
        session.select_day(20);
        fill(&mut session, "V1", "08:00", "09:00");
        let before = session.store().clone();

        session.prepare_submission(&Utc).unwrap();
        session.submission_failed(SubmitError::Server(Some("Placa inválida".to_string())));

        assert_eq!(session.store(), &before);
        assert_eq!(session.modal(), ModalState::Open(20));
        assert_eq!(session.form().start_time, "08:00");
        assert_eq!(session.form().plate, "XYZ9A87");
        assert_eq!(session.error(), Some("Erro: Placa inválida"));

        session.submission_failed(SubmitError::Connection);
        assert_eq!(session.error(), Some("Erro ao conectar ao servidor."));
    }

    #[test]
    fn test_close_resets_form() {
        let mut session = session();
        session.select_day(20);
        fill(&mut session, "V1", "08:00", "09:00");
        session.submission_failed(SubmitError::Connection);

        session.close();

        assert_eq!(session.modal(), ModalState::Closed);
        assert!(session.form().is_empty());
        assert_eq!(session.error(), None);
        assert!(session.selected_bookings().is_empty());
    }

    #[test]
    fn test_in_flight_submissions_race() {
        // Inputs stay enabled while a POST is pending, so the same slot can be
        // submitted twice before either response lands.
        let mut session = session();
        session.select_day(20);
        fill(&mut session, "V1", "08:00", "09:00");

        let first = session.prepare_submission(&Utc).unwrap();
        let second = session.prepare_submission(&Utc).unwrap();
        assert_eq!(first, second);

        session.submission_succeeded(first);
        session.submission_succeeded(second);
        assert_eq!(session.store().bookings_for(20).len(), 2);

        // Once recorded, a third attempt is caught locally.
        session.select_day(20);
        fill(&mut session, "V1", "08:30", "09:30");
        assert_eq!(session.prepare_submission(&Utc), Err(SubmitError::Overlap));
    }

    #[test]
    fn test_late_failure_does_not_leak_into_next_day() {
        let mut session = session();
        session.select_day(20);
        session.set_field(FormField::Name, "Bia");
        session.close();

        session.submission_failed(SubmitError::Connection);
        assert_eq!(session.error(), None);

        assert!(session.select_day(21));
        assert_eq!(session.modal(), ModalState::Open(21));
        assert_eq!(session.error(), None);
    }

    #[test]
    fn test_reopening_clears_previous_error() {
        let mut session = session();
        session.select_day(20);
        session.submission_failed(SubmitError::Connection);
        assert!(session.error().is_some());

        session.select_day(22);
        assert_eq!(session.error(), None);
    }

    #[test]
    fn test_load_failed_leaves_store_empty() {
        let mut session = session();
        session.load_failed("connection refused");
        assert!(session.store().is_empty());
        assert!(session.select_day(12));
    }
}
