// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Face override lookup.
//!
//! Overrides identify a face by its vertex positions in object coordinates.
//! A face matches when its original vertices and the override's vertices are
//! the same set within a per-axis tolerance. The first match in list order
//! wins.

use archtex_core::{FaceOverride, Tolerance};

use crate::face::Face;

/// Find the first override whose vertex set equals the face's.
pub fn match_face<'a, I>(face: &Face, overrides: I, tolerance: Tolerance) -> Option<&'a FaceOverride>
where
    I: IntoIterator<Item = &'a FaceOverride>,
{
    let positions = face.original_positions();
    overrides
        .into_iter()
        .find(|o| tolerance.point_sets_equal(&o.vertices, &positions))
}

/// Overrides applicable to one object
#[derive(Debug, Clone)]
pub struct OverrideMatcher<'a> {
    overrides: Vec<&'a FaceOverride>,
    tolerance: Tolerance,
}

impl<'a> OverrideMatcher<'a> {
    /// Match against every override regardless of object
    pub fn new(overrides: &'a [FaceOverride], tolerance: Tolerance) -> Self {
        Self {
            overrides: overrides.iter().collect(),
            tolerance,
        }
    }

    /// Match only against overrides recorded for `object_name`
    pub fn for_object(overrides: &'a [FaceOverride], object_name: &str, tolerance: Tolerance) -> Self {
        Self {
            overrides: overrides
                .iter()
                .filter(|o| o.object_name == object_name)
                .collect(),
            tolerance,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn find(&self, face: &Face) -> Option<&'a FaceOverride> {
        match_face(face, self.overrides.iter().copied(), self.tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Placement;
    use nalgebra::{Point3, Vector3};

    fn positions() -> Vec<Point3<f64>> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1000.0, 0.0, 0.0),
            Point3::new(1000.0, 0.0, 500.0),
            Point3::new(0.0, 0.0, 500.0),
        ]
    }

    fn face() -> Face {
        Face::from_triangles(&[[0, 1, 2], [0, 2, 3]], &positions(), None).unwrap()
    }

    #[test]
    fn matches_regardless_of_order() {
        let mut verts = positions();
        verts.rotate_left(2);
        let overrides = vec![FaceOverride::new("Wall", verts).with_rotation(30.0)];

        let found = match_face(&face(), &overrides, Tolerance::DEFAULT).unwrap();
        assert_eq!(found.rotation, Some(30.0));
    }

    #[test]
    fn first_match_wins() {
        let overrides = vec![
            FaceOverride::new("Wall", positions()).with_rotation(10.0),
            FaceOverride::new("Wall", positions()).with_rotation(20.0),
        ];
        let found = match_face(&face(), &overrides, Tolerance::DEFAULT).unwrap();
        assert_eq!(found.rotation, Some(10.0));
    }

    #[test]
    fn no_match_is_none() {
        let mut verts = positions();
        verts[2].x += 0.5;
        let overrides = vec![
            FaceOverride::new("Wall", verts),
            FaceOverride::new("Wall", positions()[..3].to_vec()),
        ];
        assert!(match_face(&face(), &overrides, Tolerance::DEFAULT).is_none());
        assert!(match_face(&face(), &Vec::<FaceOverride>::new(), Tolerance::DEFAULT).is_none());
    }

    #[test]
    fn placement_aligns_with_recorded_vertices() {
        let placement = Placement::Translation(Vector3::new(0.0, 250.0, 0.0));
        let placed = Face::from_triangles(&[[0, 1, 2], [0, 2, 3]], &positions(), Some(&placement)).unwrap();

        let recorded: Vec<Point3<f64>> = positions()
            .into_iter()
            .map(|p| p + Vector3::new(0.0, 250.0, 0.0))
            .collect();
        let overrides = vec![FaceOverride::new("Wall", recorded)];

        assert!(match_face(&placed, &overrides, Tolerance::DEFAULT).is_some());
        assert!(match_face(&face(), &overrides, Tolerance::DEFAULT).is_none());
    }

    #[test]
    fn matcher_scopes_by_object() {
        let overrides = vec![
            FaceOverride::new("Slab", positions()).with_rotation(45.0),
            FaceOverride::new("Wall", positions()).with_rotation(90.0),
        ];

        let wall = OverrideMatcher::for_object(&overrides, "Wall", Tolerance::DEFAULT);
        assert_eq!(wall.len(), 1);
        assert_eq!(wall.find(&face()).and_then(|o| o.rotation), Some(90.0));

        let any = OverrideMatcher::new(&overrides, Tolerance::DEFAULT);
        assert_eq!(any.find(&face()).and_then(|o| o.rotation), Some(45.0));

        let door = OverrideMatcher::for_object(&overrides, "Door", Tolerance::DEFAULT);
        assert!(door.is_empty());
        assert!(door.find(&face()).is_none());
    }
}
