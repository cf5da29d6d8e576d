//! Outcome status classification
//!
//! The closed set of status codes shared by both result containers.
//! Codes are represented as u16 values for efficient serialization and
//! cross-language compatibility (Rust, TypeScript, etc.)

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Closed enumeration of outcome classifications
///
/// Exactly one variant ([`StatusCode::Ok`]) denotes success; every other
/// variant denotes a failure category. Discriminants are stable: new
/// variants may be appended, existing ones are never renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum StatusCode {
    /// Operation completed successfully
    Ok = 1,
    /// Unclassified failure
    GenericFailure = 2,
    /// Request was malformed or invalid
    BadRequest = 3,
    /// Invalid credentials (username/password/token)
    InvalidCredentials = 4,
    /// Resource not found
    ResourceNotFound = 5,
    /// Resource already exists
    ResourceAlreadyExists = 6,
    /// Resource has expired
    ResourceExpired = 7,
    /// Access to resource denied
    ResourceDenied = 8,
    /// Functionality is disabled
    FunctionalityDisabled = 9,
}

impl StatusCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is the success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, StatusCode::Ok)
    }

    /// Get the developer-facing English message for this status code
    pub const fn default_message(&self) -> &'static str {
        match self {
            StatusCode::Ok => "Operation completed successfully",
            StatusCode::GenericFailure => "Operation failed",
            StatusCode::BadRequest => "Invalid request",
            StatusCode::InvalidCredentials => "Invalid credentials",
            StatusCode::ResourceNotFound => "Resource not found",
            StatusCode::ResourceAlreadyExists => "Resource already exists",
            StatusCode::ResourceExpired => "Resource has expired",
            StatusCode::ResourceDenied => "Access to resource denied",
            StatusCode::FunctionalityDisabled => "Functionality is disabled",
        }
    }
}

impl From<StatusCode> for u16 {
    #[inline]
    fn from(status: StatusCode) -> Self {
        status.code()
    }
}

/// Error when converting from an invalid u16 to [`StatusCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid status code: {0}")]
pub struct InvalidStatusCode(pub u16);

impl TryFrom<u16> for StatusCode {
    type Error = InvalidStatusCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(StatusCode::Ok),
            2 => Ok(StatusCode::GenericFailure),
            3 => Ok(StatusCode::BadRequest),
            4 => Ok(StatusCode::InvalidCredentials),
            5 => Ok(StatusCode::ResourceNotFound),
            6 => Ok(StatusCode::ResourceAlreadyExists),
            7 => Ok(StatusCode::ResourceExpired),
            8 => Ok(StatusCode::ResourceDenied),
            9 => Ok(StatusCode::FunctionalityDisabled),
            _ => Err(InvalidStatusCode(value)),
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
