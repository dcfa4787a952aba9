//! Error types for the portal client.
//!
//! Each domain (storage, configuration, backend calls, form validation) has its own
//! `thiserror` enum, aggregated into [`Error`] so the `?` operator works across layers.
//! Nothing here is fatal: every error ends up either ignored (cancellation), logged, or
//! shown to the user as a transient notification through [`Error::user_message`].

pub mod api;
pub mod config;
pub mod storage;

pub use api::ApiError;
pub use config::ConfigError;
pub use storage::StorageError;
pub use crate::model::validation::ValidationError;

use thiserror::Error;

/// Main error type of the portal client
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Persistent key-value storage could not be read or written.
    #[error(transparent)]
    StorageError(#[from] StorageError),
    /// Invalid client configuration.
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// A backend call failed (network, status, or body decoding).
    #[error(transparent)]
    ApiError(#[from] ApiError),
    /// A form failed client-side validation, no request was sent.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// The request's scope was torn down before it completed.
    #[error("Request cancelled because its view was closed")]
    Cancelled,
    /// A value could not be parsed.
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
}

impl Error {
    /// Generic text shown when no more specific message is available
    pub const GENERIC_MESSAGE: &'static str = "Une erreur est survenue, veuillez réessayer.";

    /// The text a notification shows for this error, None when nothing should be shown
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::Cancelled => None,
            Self::ApiError(err) => Some(err.user_message()),
            Self::ValidationError(err) => Some(err.to_string()),
            _ => Some(Self::GENERIC_MESSAGE.to_string()),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
