// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Texture handle cache
//!
//! Objects sharing an image file share one handle, so the renderer loads
//! each image once per pass. Bump maps live in the same cache.

use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Handle to an image file
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Texture {
    file: String,
}

impl Texture {
    pub fn file(&self) -> &str {
        &self.file
    }
}

/// Cache of texture handles keyed by file name
#[derive(Debug, Default)]
pub struct TextureCache {
    textures: FxHashMap<String, Arc<Texture>>,
    hits: usize,
}

impl TextureCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the handle for `file`, creating it on first use
    pub fn get_or_load(&mut self, file: &str) -> Arc<Texture> {
        if let Some(texture) = self.textures.get(file) {
            self.hits += 1;
            return Arc::clone(texture);
        }

        tracing::debug!(file, "Caching texture");
        let texture = Arc::new(Texture {
            file: file.to_string(),
        });
        self.textures.insert(file.to_string(), Arc::clone(&texture));
        texture
    }

    pub fn get(&self, file: &str) -> Option<&Arc<Texture>> {
        self.textures.get(file)
    }

    pub fn contains(&self, file: &str) -> bool {
        self.textures.contains_key(file)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// Number of lookups served from the cache
    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn clear(&mut self) {
        self.textures.clear();
        self.hits = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_file_shares_handle() {
        let mut cache = TextureCache::new();
        let a = cache.get_or_load("bricks.jpg");
        let b = cache.get_or_load("bricks.jpg");
        let c = cache.get_or_load("tiles.png");

        assert!(Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &c));
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.hits(), 1);
        assert_eq!(a.file(), "bricks.jpg");
    }

    #[test]
    fn clear_drops_handles() {
        let mut cache = TextureCache::new();
        let old = cache.get_or_load("bricks.jpg");
        cache.clear();

        assert!(cache.is_empty());
        assert!(!cache.contains("bricks.jpg"));
        let new = cache.get_or_load("bricks.jpg");
        assert!(!Arc::ptr_eq(&old, &new));
    }
}
