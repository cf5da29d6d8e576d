//! HTTP status mapping for outcome classifications

use super::status::StatusCode;
use http::StatusCode as HttpStatus;

impl StatusCode {
    /// Get the HTTP status this classification maps to at the boundary
    pub fn http_status(&self) -> HttpStatus {
        match self {
            // Success
            Self::Ok => HttpStatus::OK,

            // 400 Bad Request
            Self::BadRequest => HttpStatus::BAD_REQUEST,

            // 401 Unauthorized
            Self::InvalidCredentials => HttpStatus::UNAUTHORIZED,

            // 403 Forbidden
            Self::ResourceDenied | Self::FunctionalityDisabled => HttpStatus::FORBIDDEN,

            // 404 Not Found
            Self::ResourceNotFound => HttpStatus::NOT_FOUND,

            // 409 Conflict
            Self::ResourceAlreadyExists => HttpStatus::CONFLICT,

            // 410 Gone
            Self::ResourceExpired => HttpStatus::GONE,

            // 500 Internal Server Error
            Self::GenericFailure => HttpStatus::INTERNAL_SERVER_ERROR,
        }
    }
}
