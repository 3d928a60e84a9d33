// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Planar faces in their local frame
//!
//! A [`FaceBuilder`] collects the distinct vertices referenced by a face's
//! triangles. [`FaceBuilder::finish`] consumes it, moves the face into its
//! local frame and yields an immutable [`Face`] with its extents.

use crate::brep::Triangle;
use crate::error::{Error, Result};
use crate::math::{derive_local_frame, Bounds, Placement};
use nalgebra::{Point3, Vector3};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

/// Vertex of a face, tagged with its global index
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceVertex {
    pub index: u32,
    pub position: Point3<f64>,
}

/// Shape class of a face, derived from its vertex count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceShape {
    Triangular,
    Rectangular,
    General(usize),
}

impl FaceShape {
    pub fn from_vertex_count(count: usize) -> Self {
        match count {
            3 => FaceShape::Triangular,
            4 => FaceShape::Rectangular,
            n => FaceShape::General(n),
        }
    }
}

/// Collects the vertices of one face
#[derive(Debug, Clone, Default)]
pub struct FaceBuilder {
    triangles: SmallVec<[Triangle; 4]>,
    vertices: Vec<FaceVertex>,
    seen: FxHashSet<u32>,
}

impl FaceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a triangle, looking its corners up in the object's vertex array
    pub fn add_triangle(&mut self, triangle: Triangle, positions: &[Point3<f64>]) -> Result<()> {
        for &index in &triangle {
            let position = positions
                .get(index as usize)
                .ok_or(Error::VertexOutOfRange {
                    index,
                    len: positions.len(),
                })?;
            self.add_vertex(index, *position);
        }
        self.triangles.push(triangle);
        Ok(())
    }

    /// Add a vertex unless its index is already part of the face
    pub fn add_vertex(&mut self, index: u32, position: Point3<f64>) {
        if self.seen.insert(index) {
            self.vertices.push(FaceVertex { index, position });
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Move the face into its local frame and compute its extents.
    ///
    /// The placement translation only affects the original vertices kept for
    /// override matching; the local frame is translation invariant. A face
    /// without a local frame (collinear or fewer than three vertices) is
    /// finished flat: every local vertex sits at the origin and both extents
    /// are zero.
    pub fn finish(self, placement: Option<&Placement>) -> Result<Face> {
        let offset = placement.map_or_else(Vector3::zeros, Placement::translation);
        let original_vertices: Vec<FaceVertex> = self
            .vertices
            .iter()
            .map(|v| FaceVertex {
                index: v.index,
                position: v.position + offset,
            })
            .collect();

        let positions: Vec<Point3<f64>> = self.vertices.iter().map(|v| v.position).collect();
        let (mut local, degenerate): (Vec<Point3<f64>>, bool) = match derive_local_frame(&positions) {
            Ok(frame) => (positions.iter().map(|p| frame.to_local(p)).collect(), false),
            Err(Error::DegenerateFace(reason)) => {
                tracing::debug!(vertices = positions.len(), %reason, "No local frame, finishing flat");
                (vec![Point3::origin(); positions.len()], true)
            }
            Err(e) => return Err(e),
        };
        let bounds = move_to_positive(&mut local);

        let vertices = self
            .vertices
            .iter()
            .zip(local)
            .map(|(v, position)| FaceVertex {
                index: v.index,
                position,
            })
            .collect::<Vec<_>>();

        let size = bounds.size();

        Ok(Face {
            shape: FaceShape::from_vertex_count(vertices.len()),
            triangles: self.triangles,
            vertices,
            original_vertices,
            length: size.x,
            height: size.z,
            bounds,
            degenerate,
            rotation: None,
        })
    }
}

/// Shift points so their X and Z minimums are not negative, returning the
/// resulting bounds.
pub(crate) fn move_to_positive(points: &mut [Point3<f64>]) -> Bounds {
    let bounds = match Bounds::from_points(points.iter()) {
        Some(b) => b,
        None => {
            return Bounds {
                min: Point3::origin(),
                max: Point3::origin(),
            }
        }
    };

    let shift = bounds.positive_xz_shift();
    if shift == Vector3::zeros() {
        return bounds;
    }

    for p in points.iter_mut() {
        *p += shift;
    }

    Bounds {
        min: bounds.min + shift,
        max: bounds.max + shift,
    }
}

/// A planar face unwrapped into its local frame
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    triangles: SmallVec<[Triangle; 4]>,
    vertices: Vec<FaceVertex>,
    original_vertices: Vec<FaceVertex>,
    length: f64,
    height: f64,
    bounds: Bounds,
    shape: FaceShape,
    degenerate: bool,
    rotation: Option<f64>,
}

impl Face {
    /// Build a face from its triangles
    pub fn from_triangles(
        triangles: &[Triangle],
        positions: &[Point3<f64>],
        placement: Option<&Placement>,
    ) -> Result<Self> {
        let mut builder = FaceBuilder::new();
        for &triangle in triangles {
            builder.add_triangle(triangle, positions)?;
        }
        builder.finish(placement)
    }

    /// Triangles as global vertex indices
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Vertices in the local frame, in order of first occurrence
    pub fn vertices(&self) -> &[FaceVertex] {
        &self.vertices
    }

    /// Vertices in object coordinates plus placement translation
    pub fn original_vertices(&self) -> &[FaceVertex] {
        &self.original_vertices
    }

    pub fn original_positions(&self) -> Vec<Point3<f64>> {
        self.original_vertices.iter().map(|v| v.position).collect()
    }

    /// Extent along the local X axis
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Extent along the local Z axis
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn shape(&self) -> FaceShape {
        self.shape
    }

    /// No local frame could be derived; the face has zero extents
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    /// Image rotation override in degrees
    pub fn rotation(&self) -> Option<f64> {
        self.rotation
    }

    pub fn set_rotation(&mut self, degrees: Option<f64>) {
        self.rotation = degrees;
    }
}
