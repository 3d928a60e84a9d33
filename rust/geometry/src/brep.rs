// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Brep face set streams
//!
//! The renderer hands out a tessellated solid as two streams: `coord_index`,
//! where every triangle is written as three vertex indices followed by `-1`,
//! and `part_index`, the number of triangles belonging to each face in
//! document order. This module splits those streams back into faces.

use crate::error::{Error, Result};
use nalgebra::Point3;
use smallvec::SmallVec;

/// Triangle as three global vertex indices
pub type Triangle = [u32; 3];

/// Triangles of one face, in stream order. Rectangular faces hold two.
pub type FaceTriangles = SmallVec<[Triangle; 4]>;

/// Index streams of a tessellated solid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrepFaceSet {
    /// Triangle vertex indices, each triangle terminated by `-1`
    pub coord_index: Vec<i32>,
    /// Triangle count per face
    pub part_index: Vec<i32>,
}

impl BrepFaceSet {
    pub fn new(coord_index: Vec<i32>, part_index: Vec<i32>) -> Self {
        Self {
            coord_index,
            part_index,
        }
    }

    /// Split the streams into per-face triangle lists
    pub fn faces(&self) -> Result<Vec<FaceTriangles>> {
        build_face_coordinates(&self.coord_index, &self.part_index)
    }

    /// Number of `-1` terminated runs in the coordinate stream
    pub fn triangle_count(&self) -> usize {
        self.coord_index
            .split(|&i| i == -1)
            .filter(|run| !run.is_empty())
            .count()
    }
}

/// Split the coordinate stream into triangles.
///
/// Runs are delimited by `-1`. A final run without terminator is accepted and
/// empty runs are ignored. Every run must hold exactly three non-negative
/// indices.
pub fn split_triangles(coord_index: &[i32]) -> Result<Vec<Triangle>> {
    coord_index
        .split(|&i| i == -1)
        .filter(|run| !run.is_empty())
        .enumerate()
        .map(|(n, run)| match *run {
            [a, b, c] if a >= 0 && b >= 0 && c >= 0 => Ok([a as u32, b as u32, c as u32]),
            [_, _, _] => Err(Error::malformed(format!(
                "triangle {} has a negative vertex index: {:?}",
                n, run
            ))),
            _ => Err(Error::malformed(format!(
                "run {} has {} indices, expected 3",
                n,
                run.len()
            ))),
        })
        .collect()
}

/// Group the triangles of a coordinate stream into faces.
///
/// The sum of `part_index` must match the number of triangles exactly.
pub fn build_face_coordinates(coord_index: &[i32], part_index: &[i32]) -> Result<Vec<FaceTriangles>> {
    let triangles = split_triangles(coord_index)?;

    let mut faces = Vec::with_capacity(part_index.len());
    let mut next = 0usize;

    for (face, &count) in part_index.iter().enumerate() {
        if count < 0 {
            return Err(Error::malformed(format!(
                "face {} has negative triangle count {}",
                face, count
            )));
        }

        let end = next + count as usize;
        let slice = triangles.get(next..end).ok_or_else(|| {
            Error::malformed(format!(
                "part index needs at least {} triangles, stream has {}",
                end,
                triangles.len()
            ))
        })?;

        faces.push(slice.iter().copied().collect());
        next = end;
    }

    if next != triangles.len() {
        return Err(Error::malformed(format!(
            "part index covers {} triangles, stream has {}",
            next,
            triangles.len()
        )));
    }

    Ok(faces)
}

/// Convert a flattened `[x0, y0, z0, x1, ...]` buffer into points
pub fn points_from_flat(positions: &[f32]) -> Vec<Point3<f64>> {
    positions
        .chunks_exact(3)
        .map(|c| Point3::new(c[0] as f64, c[1] as f64, c[2] as f64))
        .collect()
}
