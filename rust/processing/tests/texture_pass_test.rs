// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Full texture pass driven by a JSON configuration document.

use approx::assert_relative_eq;
use archtex_core::TextureConfig;
use archtex_geometry::Placement;
use archtex_processing::{ErrorPolicy, ObjectGeometry, ProcessingSettings, SceneObject, TextureApplicator};
use nalgebra::Vector3;

const CONFIG: &str = r#"{
  "materials": {
    "Brick": { "file": "bricks.jpg", "bumpMap": "bricks_bump.jpg", "realSize": { "s": 1680, "t": 1440 } },
    "Plaster": { "file": "plaster.png" }
  },
  "faceOverrides": [
    { "objectName": "Wall001", "vertices": [[5000, 0, 500], [6000, 0, 500], [6000, 0, 0], [5000, 0, 0]], "rotation": 90 }
  ]
}"#;

fn wall_panel() -> ObjectGeometry {
    ObjectGeometry::from_flat(
        &[0.0, 0.0, 0.0, 1000.0, 0.0, 0.0, 1000.0, 0.0, 500.0, 0.0, 0.0, 500.0],
        vec![0, 1, 2, -1, 0, 2, 3, -1],
        vec![2],
    )
}

fn scene() -> Vec<SceneObject> {
    vec![
        SceneObject::new("Wall001")
            .with_material("Brick")
            .with_geometry(wall_panel().with_placement(Placement::Translation(Vector3::new(5000.0, 0.0, 0.0)))),
        SceneObject::new("Wall002").with_material("Brick").with_geometry(wall_panel()),
        SceneObject::new("Ceiling").with_material("Plaster").with_geometry(wall_panel()),
        SceneObject::new("Sliver")
            .with_material("Plaster")
            .with_geometry(ObjectGeometry::from_flat(&[0.0; 9], vec![0, 1, 2, -1], vec![1])),
        SceneObject::new("Window").with_material("Glass").with_geometry(wall_panel()),
        SceneObject::new("Hidden").with_material("Brick").with_geometry(wall_panel()).hidden(),
    ]
}

/// Part index claims three triangles for a two-triangle stream
fn malformed() -> SceneObject {
    SceneObject::new("Malformed").with_material("Brick").with_geometry(ObjectGeometry::from_flat(
        &[0.0, 0.0, 0.0, 1000.0, 0.0, 0.0, 1000.0, 0.0, 500.0, 0.0, 0.0, 500.0],
        vec![0, 1, 2, -1, 0, 2, 3, -1],
        vec![3],
    ))
}

#[test]
fn pass_over_mixed_scene() {
    let config = TextureConfig::from_json(CONFIG).unwrap();
    let mut applicator = TextureApplicator::new(ProcessingSettings::default());
    let textured = applicator.apply(&scene(), &config).unwrap();

    let names: Vec<&str> = textured.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Wall001", "Wall002", "Ceiling", "Sliver"]);

    // Placement aligns the recorded override with the first wall only
    assert_eq!(textured[0].overridden_faces, 1);
    assert_eq!(textured[1].overridden_faces, 0);

    let plain = &textured[1].coordinates;
    assert_relative_eq!(plain.coordinates[2].x, 1000.0 / 1680.0, epsilon = 1e-9);
    assert_relative_eq!(plain.coordinates[2].y, 500.0 / 1440.0, epsilon = 1e-9);

    // Plaster has no real size and stretches once over the face
    let ceiling = &textured[2].coordinates;
    assert_relative_eq!(ceiling.coordinates[2].x, 1.0, epsilon = 1e-9);
    assert_relative_eq!(ceiling.coordinates[2].y, 1.0, epsilon = 1e-9);

    // Collinear face is kept with zero coordinates
    let sliver = &textured[3].coordinates;
    assert_eq!(sliver.len(), 3);
    assert!(sliver.coordinates.iter().all(|c| c.x == 0.0 && c.y == 0.0));

    assert_eq!(applicator.cache().len(), 3);
    assert!(textured[2].bump_coordinates().is_none());
}

#[test]
fn abort_policy_tolerates_degenerate_faces_and_unbound_materials() {
    let config = TextureConfig::from_json(CONFIG).unwrap();
    let mut applicator = TextureApplicator::new(ProcessingSettings {
        error_policy: ErrorPolicy::Abort,
        ..ProcessingSettings::default()
    });

    let textured = applicator.apply(&scene(), &config).unwrap();
    assert_eq!(textured.len(), 4);
    assert!(textured.iter().all(|t| t.name != "Window"));
}

#[test]
fn abort_policy_stops_on_malformed_brep() {
    let config = TextureConfig::from_json(CONFIG).unwrap();
    let mut applicator = TextureApplicator::new(ProcessingSettings {
        error_policy: ErrorPolicy::Abort,
        ..ProcessingSettings::default()
    });

    let mut objects = scene();
    objects.insert(1, malformed());

    let err = applicator.apply(&objects, &config).unwrap_err();
    assert_eq!(err.object(), Some("Malformed"));
    assert!(applicator.textured().is_empty());
}

#[test]
fn skip_policy_drops_only_the_malformed_object() {
    let config = TextureConfig::from_json(CONFIG).unwrap();
    let mut applicator = TextureApplicator::new(ProcessingSettings::default());

    let mut objects = scene();
    objects.push(malformed());

    let textured = applicator.apply(&objects, &config).unwrap();
    let names: Vec<&str> = textured.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Wall001", "Wall002", "Ceiling", "Sliver"]);
}
