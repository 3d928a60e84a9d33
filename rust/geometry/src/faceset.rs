// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! All faces of one solid

use crate::brep::BrepFaceSet;
use crate::error::Result;
use crate::face::Face;
use crate::matching::OverrideMatcher;
use crate::math::Placement;
use nalgebra::Point3;

/// Faces of one object in document order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FaceSet {
    faces: Vec<Face>,
}

impl FaceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the face set of a tessellated solid.
    ///
    /// `positions` is the object's global vertex array that `coord_index`
    /// refers to. A degenerate face is kept with zero extents and does not
    /// affect the other faces.
    pub fn from_brep(
        brep: &BrepFaceSet,
        positions: &[Point3<f64>],
        placement: Option<&Placement>,
    ) -> Result<Self> {
        let face_triangles = brep.faces()?;
        let mut faces = Vec::with_capacity(face_triangles.len());

        for (n, triangles) in face_triangles.iter().enumerate() {
            let face = Face::from_triangles(triangles, positions, placement)?;
            if face.is_degenerate() {
                tracing::warn!(
                    face = n,
                    vertices = face.vertices().len(),
                    "Face has no local frame, its texture coordinates default to 0"
                );
            }
            faces.push(face);
        }

        tracing::debug!(
            faces = faces.len(),
            triangles = faces.iter().map(|f: &Face| f.triangles().len()).sum::<usize>(),
            "Built face set"
        );

        Ok(Self { faces })
    }

    pub fn push(&mut self, face: Face) {
        self.faces.push(face);
    }

    /// Store the rotation of each face's matching override.
    ///
    /// Faces without a match are reset to no rotation. Returns the number of
    /// matched faces.
    pub fn apply_overrides(&mut self, matcher: &OverrideMatcher<'_>) -> usize {
        let mut matched = 0;
        for face in &mut self.faces {
            let found = matcher.find(face);
            if found.is_some() {
                matched += 1;
            }
            face.set_rotation(found.and_then(|o| o.rotation));
        }
        matched
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn iter(&self) -> impl Iterator<Item = &Face> {
        self.faces.iter()
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Total number of face vertices, counting shared corners once per face
    pub fn vertex_count(&self) -> usize {
        self.faces.iter().map(|f| f.vertices().len()).sum()
    }
}
