//! Error types for the planbook crates.

use std::path::PathBuf;

use thiserror::Error;

use crate::event::Event;

/// Errors that can occur in planbook operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid {field}: {message}")]
    Validation { field: &'static str, message: String },

    #[error("'{}' overlaps {} existing event(s) owned by {}", .event.title, .conflicting.len(), .event.owner)]
    Conflict {
        event: Box<Event>,
        conflicting: Vec<Event>,
    },

    #[error("Could not decode calendar document: {0}")]
    Decode(String),

    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Error::Validation {
            field,
            message: message.into(),
        }
    }
}

/// Result type alias for planbook operations.
pub type Result<T> = std::result::Result<T, Error>;
