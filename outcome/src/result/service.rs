//! Internal-layer outcome type
//!
//! [`ServiceResult`] is the outcome representation for business-logic
//! layers. Unlike its boundary-facing counterpart it may carry an
//! underlying failure cause for diagnostics and logging; the cause never
//! crosses the system boundary (see [`ApiResult`](crate::ApiResult)).

use super::status::StatusCode;
use std::sync::Arc;

/// Opaque underlying failure attached to a [`ServiceResult`]
///
/// Stored behind `Arc` so results stay cheaply cloneable and safe to move
/// across threads. For diagnostics only; never rendered to external callers.
pub type Cause = Arc<dyn std::error::Error + Send + Sync>;

/// Internal-layer outcome: status + optional payload + optional failure cause
///
/// Immutable value object. `status` is the sole success discriminant: a
/// result may be successful with an empty payload (a void-like operation),
/// and may be a failure while still carrying a payload (partial or default
/// data alongside an error). `cause` and `message` are only meaningful on
/// failure but are not forcibly cleared on success; callers must not rely
/// on their absence.
///
/// # Example
///
/// ```
/// use outcome::{ServiceResult, StatusCode};
///
/// fn find_age(name: &str) -> ServiceResult<u32> {
///     if name == "Bob" {
///         return 24.into();
///     }
///     ServiceResult::failure(StatusCode::ResourceNotFound)
///         .with_message(format!("{} not found", name))
/// }
///
/// assert!(find_age("Bob").is_success());
/// assert!(find_age("Eve").is_failure());
/// ```
#[derive(Debug, Clone)]
pub struct ServiceResult<T> {
    /// Outcome classification; the sole success discriminant
    pub status: StatusCode,
    /// Optional payload
    pub value: Option<T>,
    /// Underlying failure, for diagnostics/logging only
    pub cause: Option<Cause>,
    /// Human-readable failure description
    pub message: Option<String>,
}

impl<T> ServiceResult<T> {
    /// Create a successful result with an optional payload
    ///
    /// Accepts both a bare value and an explicit `Option`; the payload is
    /// never validated.
    pub fn success(value: impl Into<Option<T>>) -> Self {
        Self {
            status: StatusCode::Ok,
            value: value.into(),
            cause: None,
            message: None,
        }
    }

    /// Create a failure result with the given classification
    pub fn failure(status: StatusCode) -> Self {
        Self {
            status,
            value: None,
            cause: None,
            message: None,
        }
    }

    /// Create a failure result from a message alone
    ///
    /// The classification defaults to [`StatusCode::GenericFailure`].
    pub fn failure_message(message: impl Into<String>) -> Self {
        Self::failure(StatusCode::GenericFailure).with_message(message)
    }

    /// Replace the classification
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Attach a failure message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attach an underlying failure cause
    pub fn with_cause(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.cause = Some(Arc::new(cause));
        self
    }

    /// Replace the payload
    ///
    /// A failure may carry a payload, e.g. to surface a last-known or
    /// default value alongside the error.
    pub fn with_value(mut self, value: impl Into<Option<T>>) -> Self {
        self.value = value.into();
        self
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
    /// This is an unconditional non-null assertion, not a success check:
    /// a failure carrying a payload returns it, a success with an empty
    /// payload panics. Check [`Self::is_success`] and/or [`Self::try_get`]
    /// first when either is possible.
    ///
    /// # Panics
    ///
    /// Panics if the payload is absent, regardless of status.
    pub fn get(&self) -> &T {
        match &self.value {
            Some(value) => value,
            None => panic!("ServiceResult payload is absent"),
        }
    }

    /// Get the payload if present
    ///
    /// The safe dual of [`Self::get`]: `None` iff the payload is absent,
    /// never panics.
    pub fn try_get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Consume the result, returning the payload
    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// Re-type a failure, carrying status, message and cause
    ///
    /// Produces a result of a different payload type with this result's
    /// classification and diagnostics and the supplied replacement value.
    /// Intended for wrapping an inner failure of type `U` into an outer
    /// operation's return type. Override the carried message or status by
    /// chaining [`ServiceResult::with_message`] / [`ServiceResult::with_status`]
    /// on the returned result.
    ///
    /// Fields are copied unconditionally: calling this on a success result
    /// propagates the success status into the new result, which is almost
    /// certainly not what the caller wants and is reported at warn level.
    pub fn pass_through_fail<U>(&self, value: impl Into<Option<U>>) -> ServiceResult<U> {
        if self.is_success() {
            tracing::warn!(
                status = %self.status,
                "pass_through_fail called on a success result"
            );
        }
        ServiceResult {
            status: self.status,
            value: value.into(),
            cause: self.cause.clone(),
            message: self.message.clone(),
        }
    }
}

/// Implicit success coercion: a bare value is a successful result
impl<T> From<T> for ServiceResult<T> {
    fn from(value: T) -> Self {
        Self::success(value)
    }
}

/// Structural equality over status, payload and message
///
/// The cause participates by presence only: trait-object causes have no
/// content equality.
impl<T: PartialEq> PartialEq for ServiceResult<T> {
    fn eq(&self, other: &Self) -> bool {
        self.status == other.status
            && self.value == other.value
            && self.message == other.message
            && self.cause.is_some() == other.cause.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn io_cause() -> io::Error {
        io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused")
    }

    #[test]
    fn test_success_is_success() {
        let result = ServiceResult::success(42);
        assert!(result.is_success());
        assert!(!result.is_failure());

        let empty = ServiceResult::<i32>::success(None);
        assert!(empty.is_success());
        assert!(!empty.is_failure());
    }

    #[test]
    fn test_failure_is_failure() {
        let statuses = [
            StatusCode::GenericFailure,
            StatusCode::BadRequest,
            StatusCode::InvalidCredentials,
            StatusCode::ResourceNotFound,
            StatusCode::ResourceAlreadyExists,
            StatusCode::ResourceExpired,
            StatusCode::ResourceDenied,
            StatusCode::FunctionalityDisabled,
        ];
        for status in statuses {
            let result = ServiceResult::<i32>::failure(status);
            assert!(!result.is_success());
            assert!(result.is_failure());
        }
    }

    #[test]
    fn test_implicit_success_coercion() {
        let result: ServiceResult<i32> = 42.into();
        assert_eq!(result.status, StatusCode::Ok);
        assert_eq!(result.value, Some(42));
        assert!(result.cause.is_none());
        assert!(result.message.is_none());
    }

    #[test]
    fn test_failure_message_defaults_to_generic() {
        let result = ServiceResult::<i32>::failure_message("boom");
        assert_eq!(result.status, StatusCode::GenericFailure);
        assert_eq!(result.message.as_deref(), Some("boom"));
        assert!(result.value.is_none());
        assert!(result.cause.is_none());
    }

    #[test]
    fn test_failure_can_carry_value() {
        let result = ServiceResult::failure(StatusCode::ResourceExpired).with_value(7);
        assert!(result.is_failure());
        assert_eq!(result.value, Some(7));
    }

    #[test]
    fn test_get_returns_payload() {
        let result = ServiceResult::success("hello");
        assert_eq!(*result.get(), "hello");

        // get() is a presence assertion, not a success check
        let failed = ServiceResult::failure(StatusCode::BadRequest).with_value(7);
        assert_eq!(*failed.get(), 7);
    }

    #[test]
    #[should_panic(expected = "payload is absent")]
    fn test_get_panics_on_empty_success() {
        let result = ServiceResult::<i32>::success(None);
        result.get();
    }

    #[test]
    #[should_panic(expected = "payload is absent")]
    fn test_get_panics_on_empty_failure() {
        let result = ServiceResult::<i32>::failure(StatusCode::GenericFailure);
        result.get();
    }

    #[test]
    fn test_try_get() {
        let result = ServiceResult::success(42);
        assert_eq!(result.try_get(), Some(&42));

        let empty = ServiceResult::<i32>::success(None);
        assert_eq!(empty.try_get(), None);

        let failed = ServiceResult::<i32>::failure(StatusCode::BadRequest);
        assert_eq!(failed.try_get(), None);
    }

    #[test]
    fn test_pass_through_fail_carries_diagnostics() {
        let inner = ServiceResult::<i32>::failure(StatusCode::BadRequest)
            .with_message("m")
            .with_cause(io_cause())
            .with_value(1);

        let outer = inner.pass_through_fail::<String>("x".to_string());
        assert_eq!(outer.status, StatusCode::BadRequest);
        assert_eq!(outer.message.as_deref(), Some("m"));
        assert_eq!(outer.value.as_deref(), Some("x"));
        assert!(outer.cause.is_some());
    }

    #[test]
    fn test_pass_through_fail_overrides() {
        let inner = ServiceResult::<i32>::failure(StatusCode::BadRequest).with_message("inner");

        let outer = inner
            .pass_through_fail::<String>(None)
            .with_message("outer")
            .with_status(StatusCode::ResourceDenied);
        assert_eq!(outer.status, StatusCode::ResourceDenied);
        assert_eq!(outer.message.as_deref(), Some("outer"));
        // overrides never touch the carried cause
        assert!(outer.cause.is_none());
    }

    #[test]
    fn test_pass_through_fail_on_success_is_unchecked() {
        let result = ServiceResult::success(1);
        let retyped = result.pass_through_fail::<String>(None);
        // documented unchecked behavior: the success status is copied
        assert_eq!(retyped.status, StatusCode::Ok);
        assert!(retyped.is_success());
    }

    #[test]
    fn test_cause_excluded_from_equality_content() {
        let a = ServiceResult::<i32>::failure_message("m").with_cause(io_cause());
        let b = ServiceResult::<i32>::failure_message("m").with_cause(io_cause());
        assert_eq!(a, b);

        let c = ServiceResult::<i32>::failure_message("m");
        assert_ne!(a, c);
    }

    #[test]
    fn test_clone_shares_cause() {
        let result = ServiceResult::<i32>::failure_message("m").with_cause(io_cause());
        let cloned = result.clone();
        assert!(Arc::ptr_eq(
            result.cause.as_ref().unwrap(),
            cloned.cause.as_ref().unwrap()
        ));
    }
}
