use gloo::net::http::Request;
use shared::{ApiErrorBody, AppConfig, AppointmentPayload, SubmitError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status { status: u16, message: Option<String> },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

impl From<ApiError> for SubmitError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Network(_) => SubmitError::Connection,
            ApiError::Status { message, .. } => SubmitError::Server(message),
            ApiError::Decode(_) | ApiError::Encode(_) => SubmitError::Server(None),
        }
    }
}

/// API client for the appointment backend
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    config: AppConfig,
}

impl ApiClient {
    /// Create a new API client with the default configuration
    pub fn new() -> Self {
        Self::from_config(AppConfig::default())
    }

    pub fn from_config(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Fetch every appointment; the client filters by day itself
    pub async fn list_appointments(&self) -> Result<Vec<AppointmentPayload>, ApiError> {
        let response = Request::get(&self.config.list_url())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status {
                status: response.status(),
                message: Some(response.status_text()),
            });
        }

        response
            .json::<Vec<AppointmentPayload>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Create an appointment. The success body is only logged.
    pub async fn create_appointment(&self, payload: &AppointmentPayload) -> Result<(), ApiError> {
        let response = Request::post(&self.config.create_url())
            .json(payload)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.ok() {
            match response.json::<serde_json::Value>().await {
                Ok(body) => log::info!("Agendamento criado com sucesso: {}", body),
                Err(_) => log::info!("Agendamento criado com sucesso"),
            }
            Ok(())
        } else {
            let status = response.status();
            let message = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error);
            Err(ApiError::Status { status, message })
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
