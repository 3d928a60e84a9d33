// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ArchTexture UV Engine
//!
//! Per-face texture coordinates for planar faces of tessellated solids.
//! Faces are rebuilt from brep index streams, rotated into their own XZ
//! frame and unwrapped so an image repeats at its configured real-world size.
//!
//! ```rust,ignore
//! use archtex_geometry::{BrepFaceSet, FaceSet, TextureCoordinateSet, UnwrapOptions};
//!
//! let faces = FaceSet::from_brep(&brep, &positions, None)?;
//! let uv = TextureCoordinateSet::build(&faces, material.real_size.as_ref(), &UnwrapOptions::default());
//! ```

pub mod brep;
pub mod error;
pub mod face;
pub mod faceset;
pub mod matching;
pub mod math;
pub mod texcoord;
pub mod unwrap;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector3};

pub use brep::{build_face_coordinates, points_from_flat, split_triangles, BrepFaceSet, FaceTriangles, Triangle};
pub use error::{Error, Result};
pub use face::{Face, FaceBuilder, FaceShape, FaceVertex};
pub use faceset::FaceSet;
pub use matching::{match_face, OverrideMatcher};
pub use math::{derive_local_frame, rotate_about_y, Bounds, LocalFrame, Placement};
pub use texcoord::TextureCoordinateSet;
pub use unwrap::{unwrap_face, FaceUv, ScaleFactor, UnwrapOptions};
