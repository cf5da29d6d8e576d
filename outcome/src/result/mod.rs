//! Result containers for service and boundary layers
//!
//! This module provides the outcome-representation layer:
//! - [`StatusCode`]: closed set of outcome classifications
//! - [`ServiceResult`]: internal-layer outcome carrying an optional
//!   failure cause for diagnostics
//! - [`ApiResult`]: boundary-layer outcome with the cause stripped
//!
//! Business logic produces [`ServiceResult`] values; an adapter layer
//! converts them to [`ApiResult`] for transmission outward, optionally
//! overriding the message so internal cause details never leak.
//!
//! # Example
//!
//! ```
//! use outcome::{ApiResult, ServiceResult, StatusCode};
//!
//! // Business layer: failure as data, with internal diagnostics
//! let lookup: ServiceResult<u32> = ServiceResult::failure(StatusCode::ResourceNotFound)
//!     .with_message("member 42 not in roster table");
//!
//! // Boundary layer: sanitize the message, drop the cause
//! let response = ApiResult::from_service(lookup).with_message("member not found");
//!
//! assert!(response.is_failure());
//! assert_eq!(response.message.as_deref(), Some("member not found"));
//! ```

mod api;
mod http;
mod service;
mod status;

pub use api::ApiResult;
pub use service::{Cause, ServiceResult};
pub use status::{InvalidStatusCode, StatusCode};
