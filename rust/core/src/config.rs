// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Texture configuration documents.
//!
//! A configuration binds material names to texture images and records
//! per-face overrides. It round-trips through JSON. Fields are written in
//! declaration order; material names are sorted.
//!
//! ```json
//! {
//!     "materials": {
//!         "Brick": { "file": "bricks.jpg", "bumpMap": null, "realSize": { "s": 1680.0, "t": 1440.0 } }
//!     },
//!     "faceOverrides": [
//!         { "objectName": "Wall", "vertices": [[0.0, 0.0, 0.0], ...], "rotation": 90.0 }
//!     ]
//! }
//! ```

use std::collections::BTreeMap;
use std::io::{Read, Write};

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::tolerance::Tolerance;

/// Physical size an image represents, in millimeters.
///
/// A zero (or negative) component means the image is stretched over the
/// whole face on that axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RealSize {
    /// Width of the image.
    #[serde(default)]
    pub s: f64,
    /// Height of the image.
    #[serde(default)]
    pub t: f64,
}

impl RealSize {
    #[inline]
    pub fn new(s: f64, t: f64) -> Self {
        Self { s, t }
    }

    /// Width constraint, if one is set.
    #[inline]
    pub fn s_extent(&self) -> Option<f64> {
        positive(self.s)
    }

    /// Height constraint, if one is set.
    #[inline]
    pub fn t_extent(&self) -> Option<f64> {
        positive(self.t)
    }
}

#[inline]
fn positive(value: f64) -> Option<f64> {
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Texture binding for one material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialTexture {
    /// Path of the image file.
    pub file: String,
    /// Optional bump map image.
    #[serde(default)]
    pub bump_map: Option<String>,
    /// Physical size of the image; `None` stretches it over each face.
    #[serde(default)]
    pub real_size: Option<RealSize>,
}

impl MaterialTexture {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            bump_map: None,
            real_size: None,
        }
    }

    pub fn with_real_size(mut self, s: f64, t: f64) -> Self {
        self.real_size = Some(RealSize::new(s, t));
        self
    }

    pub fn with_bump_map(mut self, file: impl Into<String>) -> Self {
        self.bump_map = Some(file.into());
        self
    }
}

/// Per-face adjustment of the default mapping.
///
/// The face is identified by its vertex positions in untransformed object
/// coordinates, as recorded when the user selected it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceOverride {
    /// Name of the document object owning the face.
    pub object_name: String,
    /// Face vertices, serialized as `[x, y, z]` arrays.
    #[serde(with = "point_list")]
    pub vertices: Vec<Point3<f64>>,
    /// Image rotation in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

impl FaceOverride {
    pub fn new(object_name: impl Into<String>, vertices: Vec<Point3<f64>>) -> Self {
        Self {
            object_name: object_name.into(),
            vertices,
            rotation: None,
        }
    }

    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = Some(degrees);
        self
    }

    /// Check whether this override describes the given face of the given object.
    pub fn describes(&self, object_name: &str, vertices: &[Point3<f64>], tolerance: Tolerance) -> bool {
        self.object_name == object_name && tolerance.point_sets_equal(&self.vertices, vertices)
    }
}

/// Complete texture configuration of a document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextureConfig {
    /// Texture bindings keyed by material name.
    #[serde(default)]
    pub materials: BTreeMap<String, MaterialTexture>,
    /// Face overrides in the order they were created.
    #[serde(default)]
    pub face_overrides: Vec<FaceOverride>,
}

impl TextureConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a configuration document.
    pub fn import<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the configuration document, pretty-printed.
    pub fn export<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    /// Texture binding of a material, if configured.
    pub fn material(&self, name: &str) -> Option<&MaterialTexture> {
        self.materials.get(name)
    }

    /// Bind a texture to a material, replacing any existing binding.
    pub fn set_material(&mut self, name: impl Into<String>, texture: MaterialTexture) {
        self.materials.insert(name.into(), texture);
    }

    /// Overrides recorded for one object.
    pub fn overrides_for<'a>(&'a self, object_name: &'a str) -> impl Iterator<Item = &'a FaceOverride> + 'a {
        self.face_overrides
            .iter()
            .filter(move |o| o.object_name == object_name)
    }

    /// Return the override for a face, creating an empty one if none exists.
    pub fn ensure_face_override(
        &mut self,
        object_name: &str,
        vertices: &[Point3<f64>],
        tolerance: Tolerance,
    ) -> &mut FaceOverride {
        let existing = self
            .face_overrides
            .iter()
            .position(|o| o.describes(object_name, vertices, tolerance));

        let index = match existing {
            Some(index) => index,
            None => {
                self.face_overrides
                    .push(FaceOverride::new(object_name, vertices.to_vec()));
                self.face_overrides.len() - 1
            }
        };

        &mut self.face_overrides[index]
    }
}

/// Serde adapter storing points as `[x, y, z]` arrays.
mod point_list {
    use nalgebra::Point3;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(points: &[Point3<f64>], serializer: S) -> Result<S::Ok, S::Error> {
        let raw: Vec<[f64; 3]> = points.iter().map(|p| [p.x, p.y, p.z]).collect();
        raw.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Point3<f64>>, D::Error> {
        let raw = Vec::<[f64; 3]>::deserialize(deserializer)?;
        Ok(raw.into_iter().map(|[x, y, z]| Point3::new(x, y, z)).collect())
    }
}
