use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_DISPLAY_TIMEZONE: &str = "America/Sao_Paulo";

/// Settings for talking to the booking API and presenting its data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    /// IANA zone every booking time is displayed in
    pub display_timezone: String,
    pub list_path: String,
    pub create_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            display_timezone: DEFAULT_DISPLAY_TIMEZONE.to_string(),
            list_path: "/Appointment".to_string(),
            create_path: "/create-appointment".to_string(),
        }
    }
}

impl AppConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Display zone; an unknown name falls back to São Paulo.
    pub fn display_tz(&self) -> Tz {
        self.display_timezone.parse::<Tz>().unwrap_or_else(|_| {
            log::warn!(
                "Unknown display timezone '{}', using {}",
                self.display_timezone,
                DEFAULT_DISPLAY_TIMEZONE
            );
            chrono_tz::America::Sao_Paulo
        })
    }

    pub fn list_url(&self) -> String {
        join_url(&self.api_base_url, &self.list_path)
    }

    pub fn create_url(&self) -> String {
        join_url(&self.api_base_url, &self.create_path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
