// File: crates/freeslot_gcal/src/auth.rs
use freeslot_config::{GcalConfig, ServiceAccountCredentials};
use google_calendar3::{
    hyper_rustls::{self, HttpsConnectorBuilder},
    hyper_util::client::legacy::connect::HttpConnector,
    hyper_util::client::legacy::Client,
    yup_oauth2::{read_service_account_key, ServiceAccountAuthenticator, ServiceAccountKey},
    CalendarHub,
};
use std::{error::Error, path::Path};
use tracing::info;

// Type aliases for clarity
type Connector = hyper_rustls::HttpsConnector<HttpConnector>;

pub type HubType = CalendarHub<Connector>;

pub const GOOGLE_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// Turns literal `\n` sequences (as found in single-line env values) into newlines.
pub fn normalize_private_key(raw: &str) -> String {
    raw.replace("\\n", "\n")
}

/// Builds a service account key from an inline client email and PEM private key.
pub fn inline_service_account_key(
    client_email: &str,
    private_key: &str,
) -> ServiceAccountKey {
    ServiceAccountKey {
        key_type: Some("service_account".to_string()),
        project_id: None,
        private_key_id: None,
        private_key: normalize_private_key(private_key),
        client_email: client_email.to_string(),
        client_id: None,
        auth_uri: None,
        token_uri: GOOGLE_TOKEN_URI.to_string(),
        auth_provider_x509_cert_url: None,
        client_x509_cert_url: None,
    }
}

/// Resolves the configured credentials into a service account key.
pub async fn load_service_account_key(
    config: &GcalConfig,
) -> Result<ServiceAccountKey, Box<dyn Error + Send + Sync>> {
    match config.credentials()? {
        ServiceAccountCredentials::Inline {
            client_email,
            private_key,
        } => {
            info!("Using inline service account credentials for {}", client_email);
            Ok(inline_service_account_key(&client_email, &private_key))
        }
        ServiceAccountCredentials::KeyFile(key_path) => {
            info!("Reading service account key from {}", key_path);
            Ok(read_service_account_key(Path::new(&key_path)).await?)
        }
    }
}

/// Authenticates once and returns the calendar hub shared by all requests.
pub async fn create_calendar_hub(
    config: &GcalConfig,
) -> Result<HubType, Box<dyn Error + Send + Sync>> {
    let sa_key = load_service_account_key(config).await?;

    let auth = ServiceAccountAuthenticator::builder(sa_key).build().await?;

    let https = HttpsConnectorBuilder::new()
        .with_native_roots()?
        .https_or_http()
        .enable_http1()
        .build();

    let client = Client::builder(hyper_util::rt::TokioExecutor::new()).build(https);

    let hub = CalendarHub::new(client, auth);

    Ok(hub)
}
