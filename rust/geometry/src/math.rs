// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Vector math for face unwrapping
//!
//! Bounding boxes, the face-local coordinate frame and the rotations used to
//! bring a planar face into the global XZ plane.

use crate::error::{Error, Result};
use nalgebra::{Matrix3, Matrix4, Point3, Rotation3, Vector3};

/// Lengths below this are treated as zero
pub const EPSILON: f64 = 1e-9;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl Bounds {
    /// Bounds of a point cloud, `None` when empty
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point3<f64>>,
    {
        let mut iter = points.into_iter();
        let first = *iter.next()?;

        let (min, max) = iter.fold((first, first), |(mut min, mut max), p| {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            min.z = min.z.min(p.z);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            max.z = max.z.max(p.z);
            (min, max)
        });

        Some(Self { min, max })
    }

    /// Extent along each axis
    #[inline]
    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Translation that moves negative X and Z minimums to zero.
    ///
    /// Axes that are already non-negative are left alone.
    #[inline]
    pub fn positive_xz_shift(&self) -> Vector3<f64> {
        Vector3::new(
            if self.min.x < 0.0 { -self.min.x } else { 0.0 },
            0.0,
            if self.min.z < 0.0 { -self.min.z } else { 0.0 },
        )
    }
}

/// Object placement applied before override matching
#[derive(Debug, Clone, PartialEq)]
pub enum Placement {
    /// Pure translation
    Translation(Vector3<f64>),
    /// Full 4x4 placement matrix, only its translation column is used
    Matrix(Matrix4<f64>),
}

impl Placement {
    /// Translation component
    pub fn translation(&self) -> Vector3<f64> {
        match self {
            Placement::Translation(t) => *t,
            Placement::Matrix(m) => Vector3::new(m[(0, 3)], m[(1, 3)], m[(2, 3)]),
        }
    }
}

/// Face-aligned coordinate frame
///
/// `y_axis` is the face normal. `x_axis` and `z_axis` span the face plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalFrame {
    pub origin: Point3<f64>,
    pub x_axis: Vector3<f64>,
    pub y_axis: Vector3<f64>,
    pub z_axis: Vector3<f64>,
}

impl LocalFrame {
    /// Matrix expressing global coordinates in the local frame.
    ///
    /// Rows are the dot products of each local axis with the global X, Y and Z.
    pub fn rotation(&self) -> Matrix3<f64> {
        Matrix3::from_rows(&[
            self.x_axis.transpose(),
            self.y_axis.transpose(),
            self.z_axis.transpose(),
        ])
    }

    /// Move `point` relative to the origin and rotate it into the frame
    #[inline]
    pub fn to_local(&self, point: &Point3<f64>) -> Point3<f64> {
        Point3::from(self.rotation() * (point - self.origin))
    }
}

/// Derive the local frame of a planar face from its vertices.
///
/// The first vertex is the origin. The normal comes from the triangle
/// `(v0, v1, v2)`; when those three are collinear the first later vertex that
/// spans a proper triangle with `v0` and `v1` is used instead. The X axis
/// points from the origin to whichever of `v1` and `v2` is strictly closer,
/// `v1` on a tie.
pub fn derive_local_frame(vertices: &[Point3<f64>]) -> Result<LocalFrame> {
    if vertices.len() < 3 {
        return Err(Error::degenerate(format!(
            "face needs at least 3 vertices, got {}",
            vertices.len()
        )));
    }

    let origin = vertices[0];
    let edge1 = vertices[1] - origin;
    let edge1_len = edge1.norm();
    if edge1_len < EPSILON {
        return Err(Error::degenerate("first two vertices coincide"));
    }

    let normal = vertices[2..]
        .iter()
        .map(|p| {
            let edge = p - origin;
            (edge1.cross(&edge), edge.norm())
        })
        .find(|(n, len)| n.norm() > EPSILON * edge1_len * len.max(1.0))
        .map(|(n, _)| n)
        .ok_or_else(|| Error::degenerate("all vertices are collinear"))?;

    let edge2 = vertices[2] - origin;
    let edge2_len = edge2.norm();
    let towards = if edge2_len < edge1_len && edge2_len > EPSILON {
        edge2
    } else {
        edge1
    };

    let y_axis = normal.normalize();
    let x_axis = towards.normalize();
    let z_axis = y_axis.cross(&x_axis).normalize();

    Ok(LocalFrame {
        origin,
        x_axis,
        y_axis,
        z_axis,
    })
}

/// Rotate a point around the global Y axis (right-handed), angle in degrees
#[inline]
pub fn rotate_about_y(point: &Point3<f64>, degrees: f64) -> Point3<f64> {
    Rotation3::from_axis_angle(&Vector3::y_axis(), degrees.to_radians()) * *point
}
