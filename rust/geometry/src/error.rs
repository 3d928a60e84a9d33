// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while assembling or unwrapping faces
#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed brep: {0}")]
    MalformedBrep(String),

    #[error("Degenerate face: {0}")]
    DegenerateFace(String),

    #[error("Vertex index {index} out of range ({len} vertices)")]
    VertexOutOfRange { index: u32, len: usize },
}

impl Error {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Error::MalformedBrep(msg.into())
    }

    pub fn degenerate(msg: impl Into<String>) -> Self {
        Error::DegenerateFace(msg.into())
    }
}
