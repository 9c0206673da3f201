// --- File: crates/freeslot_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// Generic message returned for every server-side failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// The base error type for all freeslot errors.
///
/// `Validation` carries a message that is safe to show to callers. Every other
/// variant is reported to callers as [`INTERNAL_ERROR_MESSAGE`]; its detail only
/// ends up in the server log.
#[derive(Error, Debug)]
pub enum FreeslotError {
    /// Missing or malformed caller input
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Failure reported by the calendar provider (transport, auth, rejected payload)
    #[error("Provider error: {0}")]
    ProviderError(String),

    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Anything else
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for FreeslotError {
    fn status_code(&self) -> u16 {
        match self {
            FreeslotError::ValidationError(_) => 400,
            FreeslotError::ProviderError(_) => 500,
            FreeslotError::ConfigError(_) => 500,
            FreeslotError::InternalError(_) => 500,
        }
    }
}

impl FreeslotError {
    /// The message callers get to see.
    pub fn public_message(&self) -> &str {
        match self {
            FreeslotError::ValidationError(message) => message,
            _ => INTERNAL_ERROR_MESSAGE,
        }
    }
}

/// A trait for adding context to errors.
pub trait Context<T, E> {
    /// Wraps the error as a provider error, prefixed with `context`.
    fn provider_context<C>(self, context: C) -> Result<T, FreeslotError>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Wraps the error as an internal error, prefixed with `context`.
    fn context<C>(self, context: C) -> Result<T, FreeslotError>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn provider_context<C>(self, context: C) -> Result<T, FreeslotError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| provider_error(format!("{}: {}", context, error)))
    }

    fn context<C>(self, context: C) -> Result<T, FreeslotError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| FreeslotError::InternalError(format!("{}: {}", context, error)))
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> FreeslotError {
    FreeslotError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> FreeslotError {
    FreeslotError::ValidationError(message.to_string())
}

pub fn provider_error<T: fmt::Display>(message: T) -> FreeslotError {
    FreeslotError::ProviderError(message.to_string())
}
