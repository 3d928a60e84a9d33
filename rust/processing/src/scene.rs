// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene objects handed over by the host document

use archtex_geometry::{points_from_flat, BrepFaceSet, Placement};
use nalgebra::Point3;

/// Tessellated shape of an object
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectGeometry {
    /// Vertex positions in object coordinates
    pub positions: Vec<Point3<f64>>,
    pub brep: BrepFaceSet,
    /// Object placement, used to align face overrides
    pub placement: Option<Placement>,
}

impl ObjectGeometry {
    pub fn new(positions: Vec<Point3<f64>>, brep: BrepFaceSet) -> Self {
        Self {
            positions,
            brep,
            placement: None,
        }
    }

    /// Geometry from a flat `[x0, y0, z0, ...]` buffer as renderers store it
    pub fn from_flat(positions: &[f32], coord_index: Vec<i32>, part_index: Vec<i32>) -> Self {
        Self::new(points_from_flat(positions), BrepFaceSet::new(coord_index, part_index))
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = Some(placement);
        self
    }
}

/// Object of the host document
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub name: String,
    /// Material name, looked up in the texture configuration
    pub material: Option<String>,
    pub visible: bool,
    pub geometry: Option<ObjectGeometry>,
}

impl SceneObject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            material: None,
            visible: true,
            geometry: None,
        }
    }

    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }

    pub fn with_geometry(mut self, geometry: ObjectGeometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Visible objects with both geometry and a material take part in a pass
    pub fn is_texturable(&self) -> bool {
        self.visible && self.material.is_some() && self.geometry.is_some()
    }
}
