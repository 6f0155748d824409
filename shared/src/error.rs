use thiserror::Error;

/// Errors raised while turning user input or wire data into bookings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BookingError {
    #[error("invalid time of day '{0}', expected HH:MM")]
    InvalidTime(String),

    #[error("invalid timestamp '{0}'")]
    InvalidTimestamp(String),

    /// The composed local date-time falls in a DST gap of the viewer's zone.
    #[error("{0} does not exist in the local time zone")]
    NonexistentLocalTime(String),

    #[error("{year}-{month:02} is not a calendar month")]
    InvalidMonth { year: i32, month: u32 },

    #[error("day {day} is outside {year}-{month:02}")]
    DayOutOfRange { year: i32, month: u32, day: u32 },

    #[error("invalid display string '{0}', expected DD/MM/YYYY às HH:MM")]
    InvalidDisplay(String),
}

/// Reasons a submission did not produce a booking. The `Display` text is
/// exactly what the user is shown.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("Erro: Já existe um agendamento para este horário com este carro.")]
    Overlap,

    #[error("Erro: {}", .0.as_deref().unwrap_or("Falha ao salvar o agendamento."))]
    Server(Option<String>),

    #[error("Erro ao conectar ao servidor.")]
    Connection,

    #[error("Erro: nenhum dia selecionado.")]
    NoDaySelected,

    #[error("Erro: {0}")]
    Invalid(#[from] BookingError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_uses_body_message() {
        let err = SubmitError::Server(Some("Placa inválida".to_string()));
        assert_eq!(err.to_string(), "Erro: Placa inválida");
    }

    #[test]
    fn test_server_error_without_body_falls_back() {
        let err = SubmitError::Server(None);
        assert_eq!(err.to_string(), "Erro: Falha ao salvar o agendamento.");
    }

    #[test]
    fn test_connection_message() {
        assert_eq!(SubmitError::Connection.to_string(), "Erro ao conectar ao servidor.");
    }

    #[test]
    fn test_booking_error_converts() {
        let err: SubmitError = BookingError::InvalidTime("25:99".to_string()).into();
        assert!(matches!(err, SubmitError::Invalid(_)));
        assert!(err.to_string().contains("25:99"));
    }
}
