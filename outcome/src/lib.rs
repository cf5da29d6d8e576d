//! Outcome representation layer
//!
//! A pair of generic result containers that separate "did the operation
//! succeed" from "what is the payload" without raising errors for expected
//! failure paths. [`ServiceResult`] is for internal/business-logic layers
//! and can carry an underlying failure cause; [`ApiResult`] is for
//! boundary-facing layers and intentionally drops internal cause details
//! while keeping the status classification and a user-facing message.
//!
//! Both types are immutable value objects: no I/O, no shared mutable
//! state, trivially safe to pass across threads and tasks.

pub mod config;
pub mod result;

// Re-exports
pub use config::{ConfigError, ConfigSection, bind_section};
pub use result::{ApiResult, Cause, InvalidStatusCode, ServiceResult, StatusCode};
