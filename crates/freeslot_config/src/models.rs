// --- File: crates/freeslot_config/src/models.rs ---

use config::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;

// --- General Server Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Google Calendar Config ---
// Credentials come either inline (GOOGLE_SERVICE_ACCOUNT_EMAIL + GOOGLE_PRIVATE_KEY)
// or from a downloaded service account key file.
#[derive(Deserialize, Serialize, Clone)]
pub struct GcalConfig {
    pub calendar_id: String, // Mandatory
    #[serde(default)]
    pub client_email: Option<String>,
    #[serde(default)]
    pub private_key: Option<String>,
    #[serde(default)]
    pub key_path: Option<String>,
}

/// How the service account authenticates against Google.
#[derive(Clone, PartialEq, Eq)]
pub enum ServiceAccountCredentials {
    /// Client email and PEM private key, as supplied through the environment.
    Inline {
        client_email: String,
        private_key: String,
    },
    /// Path to a service account JSON key file.
    KeyFile(String),
}

impl fmt::Debug for ServiceAccountCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceAccountCredentials::Inline { client_email, .. } => f
                .debug_struct("Inline")
                .field("client_email", client_email)
                .field("private_key", &"<redacted>")
                .finish(),
            ServiceAccountCredentials::KeyFile(path) => f.debug_tuple("KeyFile").field(path).finish(),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl GcalConfig {
    /// Resolves the configured credentials. Inline credentials win over a key file.
    pub fn credentials(&self) -> Result<ServiceAccountCredentials, ConfigError> {
        if let (Some(client_email), Some(private_key)) =
            (non_empty(&self.client_email), non_empty(&self.private_key))
        {
            return Ok(ServiceAccountCredentials::Inline {
                client_email: client_email.to_string(),
                private_key: private_key.to_string(),
            });
        }

        if let Some(path) = non_empty(&self.key_path) {
            return Ok(ServiceAccountCredentials::KeyFile(path.to_string()));
        }

        Err(ConfigError::Message(
            "gcal credentials missing: set client_email and private_key, or key_path".to_string(),
        ))
    }
}

impl fmt::Debug for GcalConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GcalConfig")
            .field("calendar_id", &self.calendar_id)
            .field("client_email", &self.client_email)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .field("key_path", &self.key_path)
            .finish()
    }
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,
    pub gcal: GcalConfig,
}
