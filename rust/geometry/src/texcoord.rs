// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Object-wide texture coordinates
//!
//! Faces are unwrapped in order and their coordinates appended to one list.
//! A vertex shared by two faces gets one coordinate per face, so the
//! coordinate list is indexed per face corner, not per object vertex.

use crate::faceset::FaceSet;
use crate::unwrap::{unwrap_face, UnwrapOptions};
use archtex_core::RealSize;
use nalgebra::Point2;

/// Texture coordinates and the triangles that use them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextureCoordinateSet {
    /// One coordinate per face vertex, faces in document order
    pub coordinates: Vec<Point2<f64>>,
    /// Object vertex index each coordinate belongs to
    pub coordinate_indices: Vec<u32>,
    /// Triangles of each face as positions into `coordinates`
    pub face_triangle_indices: Vec<Vec<[u32; 3]>>,
}

impl TextureCoordinateSet {
    /// Unwrap every face of `faces` with one material's real size
    pub fn build(faces: &FaceSet, real_size: Option<&RealSize>, options: &UnwrapOptions) -> Self {
        let mut set = Self {
            coordinates: Vec::with_capacity(faces.vertex_count()),
            coordinate_indices: Vec::with_capacity(faces.vertex_count()),
            face_triangle_indices: Vec::with_capacity(faces.len()),
        };

        for face in faces.iter() {
            let offset = set.coordinates.len() as u32;
            let uv = unwrap_face(face, real_size, options, offset);

            set.coordinates.extend(uv.coordinates);
            set.coordinate_indices
                .extend(face.vertices().iter().map(|v| v.index));
            set.face_triangle_indices.push(uv.triangles);
        }

        set
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    pub fn face_count(&self) -> usize {
        self.face_triangle_indices.len()
    }

    /// Triangle stream for a renderer, each triangle terminated by `-1`
    pub fn texture_coord_index(&self) -> Vec<i32> {
        let triangles: usize = self.face_triangle_indices.iter().map(Vec::len).sum();
        let mut out = Vec::with_capacity(triangles * 4);
        for tri in self.face_triangle_indices.iter().flatten() {
            out.extend(tri.iter().map(|&i| i as i32));
            out.push(-1);
        }
        out
    }

    /// Flattened `[s0, t0, s1, t1, ...]` buffer for GPU upload
    pub fn coordinates_f32(&self) -> Vec<f32> {
        self.coordinates
            .iter()
            .flat_map(|c| [c.x as f32, c.y as f32])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brep::BrepFaceSet;
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    fn corner() -> FaceSet {
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1000.0, 0.0, 0.0),
            Point3::new(1000.0, 0.0, 500.0),
            Point3::new(0.0, 0.0, 500.0),
            Point3::new(1000.0, 200.0, 0.0),
            Point3::new(1000.0, 200.0, 500.0),
        ];
        let brep = BrepFaceSet::new(
            vec![0, 1, 2, -1, 0, 2, 3, -1, 1, 4, 5, -1, 1, 5, 2, -1],
            vec![2, 2],
        );
        FaceSet::from_brep(&brep, &positions, None).unwrap()
    }

    #[test]
    fn shared_vertices_get_one_coordinate_per_face() {
        let set = TextureCoordinateSet::build(&corner(), None, &UnwrapOptions::default());

        assert_eq!(set.len(), 8);
        assert_eq!(set.face_count(), 2);
        assert_eq!(set.coordinate_indices, vec![0, 1, 2, 3, 1, 4, 5, 2]);
        assert_eq!(set.face_triangle_indices[0], vec![[0, 1, 2], [0, 2, 3]]);
        assert_eq!(set.face_triangle_indices[1], vec![[4, 5, 6], [4, 6, 7]]);
    }

    #[test]
    fn coord_index_stream() {
        let set = TextureCoordinateSet::build(&corner(), None, &UnwrapOptions::default());
        assert_eq!(
            set.texture_coord_index(),
            vec![0, 1, 2, -1, 0, 2, 3, -1, 4, 5, 6, -1, 4, 6, 7, -1]
        );
    }

    #[test]
    fn real_size_repeats_per_face() {
        let size = RealSize::new(100.0, 100.0);
        let set = TextureCoordinateSet::build(&corner(), Some(&size), &UnwrapOptions::default());

        // Front wall 1000 x 500, side wall 200 x 500
        let front_max = set.coordinates[..4].iter().fold(0.0f64, |m, c| m.max(c.x));
        let side_max = set.coordinates[4..].iter().fold(0.0f64, |m, c| m.max(c.x));
        assert_relative_eq!(front_max, 10.0, epsilon = 1e-9);
        assert_relative_eq!(side_max, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn flat_buffer() {
        let set = TextureCoordinateSet::build(&corner(), None, &UnwrapOptions::default());
        let flat = set.coordinates_f32();
        assert_eq!(flat.len(), 16);
        assert_eq!(flat[2], set.coordinates[1].x as f32);
        assert_eq!(flat[3], set.coordinates[1].y as f32);
    }

    #[test]
    fn empty_face_set() {
        let set = TextureCoordinateSet::build(&FaceSet::new(), None, &UnwrapOptions::default());
        assert!(set.is_empty());
        assert!(set.texture_coord_index().is_empty());
    }
}
