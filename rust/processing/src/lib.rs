// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ArchTexture texture pass
//!
//! Walks the objects of a scene, resolves each object's material binding,
//! applies face overrides and unwraps the faces in parallel. Texture handles
//! are shared through an explicit [`TextureCache`].
//!
//! ```rust,ignore
//! use archtex_processing::{ProcessingSettings, TextureApplicator};
//!
//! let mut applicator = TextureApplicator::new(ProcessingSettings::from_env());
//! for object in applicator.apply(&scene, &config)? {
//!     renderer.bind(&object.texture, &object.coordinates);
//! }
//! ```

pub mod applicator;
pub mod cache;
pub mod error;
pub mod scene;
pub mod settings;

pub use applicator::{TextureApplicator, TexturedObject};
pub use cache::{Texture, TextureCache};
pub use error::{Error, Result};
pub use scene::{ObjectGeometry, SceneObject};
pub use settings::{ErrorPolicy, ProcessingSettings};
