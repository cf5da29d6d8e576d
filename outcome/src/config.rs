//! Typed configuration-section binding
//!
//! Options objects declare the configuration section they bind to as a
//! compile-time constant; [`bind_section`] deserializes that section of a
//! loaded configuration document into the declaring type. The binder does
//! no I/O: callers load the document (from a file, environment, or an
//! embedded default) and bind typed sections out of it.
//!
//! # Example
//!
//! ```
//! use outcome::config::{bind_section, ConfigSection};
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize)]
//! struct ServerOptions {
//!     port: u16,
//! }
//!
//! impl ConfigSection for ServerOptions {
//!     const SECTION: &'static str = "server";
//! }
//!
//! let root = serde_json::json!({ "server": { "port": 8080 } });
//! let options: ServerOptions = bind_section(&root).unwrap();
//! assert_eq!(options.port, 8080);
//! ```

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Contract for a typed options object bound to a named configuration section
pub trait ConfigSection: DeserializeOwned {
    /// Name of the configuration section this type binds to
    const SECTION: &'static str;
}

/// Error binding a configuration section
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The declared section name is empty or whitespace
    #[error("configuration section name is empty")]
    EmptySectionName,
    /// The configuration document has no such section
    #[error("configuration section not found: {section}")]
    SectionMissing {
        /// The declared section name
        section: &'static str,
    },
    /// The section exists but does not match the declaring type
    #[error("failed to bind configuration section {section}")]
    Bind {
        /// The declared section name
        section: &'static str,
        /// Underlying deserialization failure
        #[source]
        source: serde_json::Error,
    },
}

/// Bind the section declared by `T` out of a configuration document
pub fn bind_section<T: ConfigSection>(root: &Value) -> Result<T, ConfigError> {
    if T::SECTION.trim().is_empty() {
        return Err(ConfigError::EmptySectionName);
    }

    let section = root
        .get(T::SECTION)
        .ok_or(ConfigError::SectionMissing { section: T::SECTION })?;

    serde_json::from_value(section.clone()).map_err(|source| ConfigError::Bind {
        section: T::SECTION,
        source,
    })
}
