// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # ArchTexture Core
//!
//! Configuration model shared by the UV engine and the texture driver.
//!
//! - **Material bindings**: which image (and bump map) a material uses and the
//!   physical size that image represents
//! - **Face overrides**: per-face adjustments identified by vertex positions
//! - **Tolerant comparisons**: per-axis vertex equality used to re-identify
//!   faces after a round trip through JSON
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use archtex_core::{MaterialTexture, TextureConfig};
//!
//! let mut config = TextureConfig::new();
//! config.set_material("Brick", MaterialTexture::new("bricks.jpg").with_real_size(1680.0, 1440.0));
//! let json = config.to_json()?;
//! ```

pub mod config;
pub mod error;
pub mod tolerance;

pub use config::{FaceOverride, MaterialTexture, RealSize, TextureConfig};
pub use error::{Error, Result};
pub use tolerance::Tolerance;
