// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Face unwrapping
//!
//! Turns a [`Face`] in its local frame into texture coordinates. The local X
//! axis maps to S and the local Z axis to T, unless the image and the face
//! are oriented differently, in which case the axes are swapped so the image
//! keeps its predominant direction along the face's.
//!
//! Coordinates are normalized by the face extent and then multiplied by the
//! scale factor `extent / real_size`, so an image configured to represent
//! 1680mm repeats every 1680mm of wall regardless of the face size.

use crate::face::{move_to_positive, Face};
use crate::math::{rotate_about_y, Bounds, EPSILON};
use archtex_core::RealSize;
use nalgebra::{Point2, Point3};
use rustc_hash::FxHashMap;

/// Unwrapping policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnwrapOptions {
    /// Recompute the face bounds after a rotation override.
    ///
    /// When unset, normalization and scale use the extents of the unrotated
    /// face.
    pub recompute_bounds_after_rotation: bool,
}

/// Texture scale for one face
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactor {
    pub s: f64,
    pub t: f64,
    /// Local Z drives S and local X drives T
    pub swapped: bool,
}

impl ScaleFactor {
    /// Scale factors for a face of the given extents.
    ///
    /// Axes without a real-size constraint get factor 1, which stretches the
    /// image once over the face.
    pub fn compute(length: f64, height: f64, real_size: Option<&RealSize>) -> Self {
        let real_s = real_size.and_then(RealSize::s_extent);
        let real_t = real_size.and_then(RealSize::t_extent);

        let swapped = match (real_s, real_t) {
            (Some(s), Some(t)) => s != t && length != height && (t > s) != (height > length),
            _ => false,
        };

        let (s_extent, t_extent) = if swapped {
            (height, length)
        } else {
            (length, height)
        };

        Self {
            s: real_s.map_or(1.0, |s| s_extent / s),
            t: real_t.map_or(1.0, |t| t_extent / t),
            swapped,
        }
    }
}

/// Texture coordinates of one face
#[derive(Debug, Clone, PartialEq)]
pub struct FaceUv {
    /// One coordinate per face vertex, in the face's vertex order
    pub coordinates: Vec<Point2<f64>>,
    /// Triangles as positions into the object-wide coordinate list
    pub triangles: Vec<[u32; 3]>,
    pub scale: ScaleFactor,
}

/// Compute texture coordinates for a face.
///
/// `vertex_offset` is the number of coordinates earlier faces of the same
/// object already contributed; triangle indices are shifted by it.
pub fn unwrap_face(
    face: &Face,
    real_size: Option<&RealSize>,
    options: &UnwrapOptions,
    vertex_offset: u32,
) -> FaceUv {
    if face.is_degenerate() {
        return FaceUv {
            coordinates: vec![Point2::origin(); face.vertices().len()],
            triangles: reindex_triangles(face, vertex_offset),
            scale: ScaleFactor::compute(0.0, 0.0, real_size),
        };
    }

    let mut points: Vec<Point3<f64>> = face.vertices().iter().map(|v| v.position).collect();
    let mut bounds = *face.bounds();

    if let Some(degrees) = face.rotation().filter(|d| *d != 0.0) {
        // Positive face rotation turns the image, so the geometry turns the other way
        for p in points.iter_mut() {
            *p = rotate_about_y(p, -degrees);
        }

        if options.recompute_bounds_after_rotation {
            bounds = move_to_positive(&mut points);
        }
    }

    let size = bounds.size();
    let scale = ScaleFactor::compute(size.x, size.z, real_size);
    let coordinates = normalize(&points, &bounds, &scale);

    if coordinates.degenerate {
        tracing::warn!(
            vertices = points.len(),
            length = size.x,
            height = size.z,
            "Face has zero extent on a texture axis, using coordinate 0"
        );
    }

    FaceUv {
        coordinates: coordinates.points,
        triangles: reindex_triangles(face, vertex_offset),
        scale,
    }
}

struct Normalized {
    points: Vec<Point2<f64>>,
    degenerate: bool,
}

fn normalize(points: &[Point3<f64>], bounds: &Bounds, scale: &ScaleFactor) -> Normalized {
    let (u_max, w_max) = if scale.swapped {
        (bounds.max.z, bounds.max.x)
    } else {
        (bounds.max.x, bounds.max.z)
    };
    let degenerate = u_max.abs() < EPSILON || w_max.abs() < EPSILON;

    let points = points
        .iter()
        .map(|p| {
            let (u, w) = if scale.swapped { (p.z, p.x) } else { (p.x, p.z) };
            Point2::new(ratio(u, u_max) * scale.s, ratio(w, w_max) * scale.t)
        })
        .collect();

    Normalized { points, degenerate }
}

#[inline]
fn ratio(value: f64, max: f64) -> f64 {
    if max.abs() < EPSILON {
        0.0
    } else {
        value / max
    }
}

/// Map each triangle corner from its global vertex index to its position in
/// the face's coordinate list, offset by `vertex_offset`.
fn reindex_triangles(face: &Face, vertex_offset: u32) -> Vec<[u32; 3]> {
    let positions: FxHashMap<u32, u32> = face
        .vertices()
        .iter()
        .enumerate()
        .map(|(i, v)| (v.index, vertex_offset + i as u32))
        .collect();

    face.triangles()
        .iter()
        .map(|tri| {
            tri.map(|index| {
                let position = positions.get(&index).copied();
                debug_assert!(position.is_some(), "triangle corner {} is not a face vertex", index);
                position.unwrap_or(vertex_offset)
            })
        })
        .collect()
}
