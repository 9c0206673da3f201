//! Environment variable handling for the freeslot service.
//!
//! Two naming schemes are understood: the prefixed, path-shaped scheme
//! (`FREESLOT__SERVER__PORT`) consumed by the `config` crate, and a short table
//! of conventional names (`PORT`, `CALENDAR_ID`, `GOOGLE_PRIVATE_KEY`, ...)
//! that deployment platforms usually hand out.

use std::env;

/// The default prefix for configuration environment variables
pub const DEFAULT_PREFIX: &str = "FREESLOT";

/// The separator for configuration environment variables
pub const CONFIG_SEPARATOR: &str = "__";

/// Conventional variable names and the configuration path each one feeds.
pub const CONVENTIONAL_ENV_VARS: &[(&str, &str)] = &[
    ("HOST", "server.host"),
    ("PORT", "server.port"),
    ("CALENDAR_ID", "gcal.calendar_id"),
    ("GOOGLE_SERVICE_ACCOUNT_EMAIL", "gcal.client_email"),
    ("GOOGLE_PRIVATE_KEY", "gcal.private_key"),
    ("GOOGLE_SERVICE_ACCOUNT_KEY_PATH", "gcal.key_path"),
];

/// Get the prefix for configuration environment variables
pub fn get_config_prefix() -> String {
    env::var("PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string())
}

/// Check if a path is a secret path
///
/// Paths containing "secret", "key", "password" or "token" are considered secret.
pub fn is_secret_path(path: &str) -> bool {
    let path_lower = path.to_lowercase();
    path_lower.contains("secret")
        || path_lower.contains("key")
        || path_lower.contains("password")
        || path_lower.contains("token")
}
