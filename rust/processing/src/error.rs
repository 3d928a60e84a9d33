// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for texture passes
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while texturing scene objects
#[derive(Error, Debug)]
pub enum Error {
    #[error("Object '{object}': {source}")]
    Geometry {
        object: String,
        #[source]
        source: archtex_geometry::Error,
    },

    #[error(transparent)]
    Core(#[from] archtex_core::Error),
}

impl Error {
    /// Name of the object the error belongs to, if any
    pub fn object(&self) -> Option<&str> {
        match self {
            Error::Geometry { object, .. } => Some(object),
            Error::Core(_) => None,
        }
    }
}
