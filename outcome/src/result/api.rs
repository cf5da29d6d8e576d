//! Boundary-layer outcome type
//!
//! [`ApiResult`] is the sanitized, externally-transmissible outcome
//! representation. It has no cause field: converting a
//! [`ServiceResult`] into an `ApiResult` is a one-way, lossy downgrade of
//! diagnostic detail, so internal failure causes never leak to callers.

use super::service::ServiceResult;
use super::status::StatusCode;
use serde::{Deserialize, Serialize};

/// Boundary-layer outcome: status + optional payload + optional message
///
/// Immutable value object with the same status algebra as
/// [`ServiceResult`] but only a user-facing message as failure detail.
/// Serializes as `{"status": …, "value": …, "message": …}` with absent
/// fields omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResult<T> {
    /// Outcome classification; the sole success discriminant
    pub status: StatusCode,
    /// Optional payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<T>,
    /// User-facing message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResult<T> {
    /// Create a successful result with an optional payload
    pub fn success(value: impl Into<Option<T>>) -> Self {
        Self {
            status: StatusCode::Ok,
            value: value.into(),
            message: None,
        }
    }

    /// Create a failure result with the given classification
    pub fn failure(status: StatusCode) -> Self {
        Self {
            status,
            value: None,
            message: None,
        }
    }

    /// Attach a user-facing message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Replace the payload
    pub fn with_value(mut self, value: impl Into<Option<T>>) -> Self {
        self.value = value.into();
        self
    }

    /// Convert a [`ServiceResult`], dropping its cause
    ///
    /// Status, payload and message are copied verbatim; the source's cause
    /// is never copied. To override the outward message (e.g. to sanitize
    /// it), chain [`ApiResult::with_message`] on the returned result.
    pub fn from_service(source: ServiceResult<T>) -> Self {
        Self {
            status: source.status,
            value: source.value,
            message: source.message,
        }
    }

    /// Convert a [`ServiceResult`], computing the message from the full source
    ///
    /// The message function sees the complete service result, including its
    /// cause, before the source is discarded; use it to redact or template
    /// the outward message.
    pub fn from_service_with(
        source: ServiceResult<T>,
        message_fn: impl FnOnce(&ServiceResult<T>) -> String,
    ) -> Self {
        let message = message_fn(&source);
        Self::from_service(source).with_message(message)
    }

    /// Check if this result is successful
    #[inline]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Check if this result is a failure
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Get the payload, asserting its presence
    ///
    /// Same contract as [`ServiceResult::get`]: an unconditional non-null
    /// assertion, independent of status.
    ///
    /// # Panics
    ///
    /// Panics if the payload is absent, regardless of status.
    pub fn get(&self) -> &T {
        match &self.value {
            Some(value) => value,
            None => panic!("ApiResult payload is absent"),
        }
    }

    /// Get the payload if present; never panics
    pub fn try_get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Consume the result, returning the payload
    pub fn into_value(self) -> Option<T> {
        self.value
    }

    // ==================== Value transformation ====================

    /// Map the payload, whether present or absent
    ///
    /// The general transformation form: `map` sees the payload as an
    /// `Option` and produces the new payload. Status and message are
    /// carried through unchanged; only the payload's type and content may
    /// change. Every other mapping variant is defined in terms of this one.
    pub fn map_value<U>(self, map: impl FnOnce(Option<T>) -> Option<U>) -> ApiResult<U> {
        ApiResult {
            status: self.status,
            value: map(self.value),
            message: self.message,
        }
    }

    /// Map the payload, dispatching on its presence
    ///
    /// `when_present` receives the payload when there is one; `when_absent`
    /// produces the replacement otherwise.
    pub fn map_value_split<U>(
        self,
        when_present: impl FnOnce(T) -> Option<U>,
        when_absent: impl FnOnce() -> Option<U>,
    ) -> ApiResult<U> {
        self.map_value(|value| match value {
            Some(value) => when_present(value),
            None => when_absent(),
        })
    }

    /// Map the payload only when present
    ///
    /// An absent payload stays absent, without invoking `map`.
    pub fn map_present<U>(self, map: impl FnOnce(T) -> Option<U>) -> ApiResult<U> {
        self.map_value(|value| value.and_then(map))
    }
}

/// Implicit success coercion: a bare value is a successful result
impl<T> From<T> for ApiResult<T> {
    fn from(value: T) -> Self {
        Self::success(value)
    }
}

/// The no-override boundary conversion; equivalent to [`ApiResult::from_service`]
impl<T> From<ServiceResult<T>> for ApiResult<T> {
    fn from(source: ServiceResult<T>) -> Self {
        Self::from_service(source)
    }
}

// ===== Axum Integration =====

impl<T: Serialize> axum::response::IntoResponse for ApiResult<T> {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.status.http_status();

        // Unclassified failures reaching the boundary are worth a log line
        if self.status == StatusCode::GenericFailure {
            tracing::error!(
                status = %self.status,
                message = self.message.as_deref().unwrap_or(""),
                "generic failure returned to caller"
            );
        }

        (status, Json(self)).into_response()
    }
}
