use serde::{Deserialize, Serialize};

pub mod booking;
pub mod calendar;
pub mod config;
pub mod display;
pub mod error;
pub mod form;
pub mod session;
pub mod store;

pub use booking::Booking;
pub use calendar::{CalendarDay, CalendarMonth};
pub use chrono_tz::Tz as DisplayTz;
pub use config::AppConfig;
pub use display::{format_display, parse_display};
pub use error::{BookingError, SubmitError};
pub use form::{BookingForm, FormField};
pub use session::{BookingSession, ModalState, PendingBooking};
pub use store::BookingStore;

/// Appointment as exchanged with the booking API, both in the `GET /Appointment`
/// list and as the `POST /create-appointment` body. Field names follow the
/// server's schema verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentPayload {
    pub name: String,
    /// Vehicle identifier
    pub car: String,
    /// License plate
    pub placa: String,
    /// Start instant (ISO-8601)
    pub inital_date: String,
    /// End instant (ISO-8601)
    #[serde(rename = "final_Date")]
    pub final_date: String,
}

/// Error body returned by the API on a rejected request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_uses_server_field_names() {
        let payload = AppointmentPayload {
            name: "Ana".to_string(),
            car: "Strada".to_string(),
            placa: "ABC1D23".to_string(),
            inital_date: "2025-06-15T13:00:00.000Z".to_string(),
            final_date: "2025-06-15T14:00:00.000Z".to_string(),
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["placa"], "ABC1D23");
        assert_eq!(json["inital_date"], "2025-06-15T13:00:00.000Z");
        assert_eq!(json["final_Date"], "2025-06-15T14:00:00.000Z");
        assert!(json.get("final_date").is_none());
    }

    #[test]
    fn test_payload_ignores_extra_server_fields() {
        let json = r#"{
            "id": 7,
            "name": "Ana",
            "car": "Strada",
            "placa": "ABC1D23",
            "inital_date": "2025-06-15T13:00:00.000Z",
            "final_Date": "2025-06-15T14:00:00.000Z",
            "createdAt": "2025-06-01T00:00:00.000Z"
        }"#;

        let payload: AppointmentPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.car, "Strada");
        assert_eq!(payload.final_date, "2025-06-15T14:00:00.000Z");
    }

    #[test]
    fn test_error_body_optional_message() {
        let with: ApiErrorBody = serde_json::from_str(r#"{"error":"Horário indisponível"}"#).unwrap();
        assert_eq!(with.error.as_deref(), Some("Horário indisponível"));

        let without: ApiErrorBody = serde_json::from_str(r#"{"status":500}"#).unwrap();
        assert_eq!(without.error, None);
    }
}
