// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for texture configuration handling.

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or writing texture configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configuration document is not valid JSON or does not match the schema.
    #[error("invalid texture configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading or writing the configuration document failed.
    #[error("configuration I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A setting was given a value outside its allowed set.
    #[error("invalid value {value:?} for setting {name}")]
    InvalidValue { name: &'static str, value: String },
}
