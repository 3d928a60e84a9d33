// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Texture pass over scene objects with parallel unwrapping.

use crate::cache::{Texture, TextureCache};
use crate::error::{Error, Result};
use crate::scene::{ObjectGeometry, SceneObject};
use crate::settings::{ErrorPolicy, ProcessingSettings};
use archtex_core::{MaterialTexture, TextureConfig};
use archtex_geometry::{FaceSet, OverrideMatcher, TextureCoordinateSet};
use rayon::prelude::*;
use std::sync::Arc;

/// Object with texture coordinates and bound images
#[derive(Debug, Clone)]
pub struct TexturedObject {
    pub name: String,
    pub material: String,
    pub texture: Arc<Texture>,
    pub bump_map: Option<Arc<Texture>>,
    pub coordinates: TextureCoordinateSet,
    /// Faces that picked up a rotation override
    pub overridden_faces: usize,
}

impl TexturedObject {
    /// Bump maps are laid out exactly like the base image
    pub fn bump_coordinates(&self) -> Option<&TextureCoordinateSet> {
        self.bump_map.as_ref().map(|_| &self.coordinates)
    }
}

/// Unwrapped object waiting for its textures to be bound.
struct UnwrapJob {
    name: String,
    material: String,
    binding: MaterialTexture,
    coordinates: TextureCoordinateSet,
    overridden_faces: usize,
}

/// Applies material textures to scene objects.
///
/// Each pass replaces the results of the previous one.
#[derive(Debug, Default)]
pub struct TextureApplicator {
    settings: ProcessingSettings,
    cache: TextureCache,
    textured: Vec<TexturedObject>,
}

impl TextureApplicator {
    pub fn new(settings: ProcessingSettings) -> Self {
        Self {
            settings,
            cache: TextureCache::new(),
            textured: Vec::new(),
        }
    }

    pub fn settings(&self) -> &ProcessingSettings {
        &self.settings
    }

    pub fn cache(&self) -> &TextureCache {
        &self.cache
    }

    /// Results of the last pass
    pub fn textured(&self) -> &[TexturedObject] {
        &self.textured
    }

    /// Drop the results of the last pass and all cached textures
    pub fn clear(&mut self) {
        self.textured.clear();
        self.cache.clear();
    }

    /// Texture every visible object that has geometry and a material.
    ///
    /// Objects whose material has no texture binding stay untextured and are
    /// not errors. Objects are unwrapped in parallel; textures are bound in scene order.
    /// Failing objects are skipped or abort the pass depending on the error
    /// policy. An aborted pass leaves no results behind.
    pub fn apply(&mut self, objects: &[SceneObject], config: &TextureConfig) -> Result<&[TexturedObject]> {
        let start = std::time::Instant::now();
        self.clear();

        let mut candidates: Vec<Candidate<'_>> = Vec::new();
        for object in objects.iter().filter(|o| o.is_texturable()) {
            let (Some(material), Some(geometry)) = (object.material.as_deref(), object.geometry.as_ref()) else {
                continue;
            };
            match config.material(material) {
                Some(binding) => candidates.push(Candidate {
                    object,
                    material,
                    binding,
                    geometry,
                }),
                None => tracing::debug!(object = %object.name, material, "Material has no texture binding"),
            }
        }
        tracing::info!(
            objects = objects.len(),
            texturable = candidates.len(),
            "Starting texture pass"
        );

        let settings = &self.settings;
        let jobs: Vec<Result<UnwrapJob>> = candidates
            .into_par_iter()
            .map(|candidate| unwrap_object(candidate, config, settings))
            .collect();

        let mut skipped = 0usize;
        for job in jobs {
            match job {
                Ok(job) => {
                    let textured = bind_textures(job, &mut self.cache);
                    self.textured.push(textured);
                }
                Err(e) => match self.settings.error_policy {
                    ErrorPolicy::Skip => {
                        tracing::warn!(object = e.object().unwrap_or(""), error = %e, "Skipping object");
                        skipped += 1;
                    }
                    ErrorPolicy::Abort => {
                        self.clear();
                        return Err(e);
                    }
                },
            }
        }

        tracing::info!(
            textured = self.textured.len(),
            skipped,
            textures = self.cache.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Texture pass complete"
        );

        Ok(&self.textured)
    }
}

/// Visible object whose material has a texture binding
struct Candidate<'a> {
    object: &'a SceneObject,
    material: &'a str,
    binding: &'a MaterialTexture,
    geometry: &'a ObjectGeometry,
}

/// Build faces, look up overrides and unwrap one object
fn unwrap_object(candidate: Candidate<'_>, config: &TextureConfig, settings: &ProcessingSettings) -> Result<UnwrapJob> {
    let Candidate {
        object,
        material,
        binding,
        geometry,
    } = candidate;

    let mut faces = FaceSet::from_brep(&geometry.brep, &geometry.positions, geometry.placement.as_ref())
        .map_err(|source| Error::Geometry {
            object: object.name.clone(),
            source,
        })?;

    let matcher = OverrideMatcher::for_object(&config.face_overrides, &object.name, settings.tolerance);
    let overridden_faces = if matcher.is_empty() {
        0
    } else {
        faces.apply_overrides(&matcher)
    };

    let coordinates = TextureCoordinateSet::build(&faces, binding.real_size.as_ref(), &settings.unwrap_options());

    tracing::debug!(
        object = %object.name,
        faces = faces.len(),
        coordinates = coordinates.len(),
        overridden_faces,
        "Unwrapped object"
    );

    Ok(UnwrapJob {
        name: object.name.clone(),
        material: material.to_string(),
        binding: binding.clone(),
        coordinates,
        overridden_faces,
    })
}

fn bind_textures(job: UnwrapJob, cache: &mut TextureCache) -> TexturedObject {
    let texture = cache.get_or_load(&job.binding.file);
    let bump_map = job.binding.bump_map.as_deref().map(|file| cache.get_or_load(file));

    TexturedObject {
        name: job.name,
        material: job.material,
        texture,
        bump_map,
        coordinates: job.coordinates,
        overridden_faces: job.overridden_faces,
    }
}
