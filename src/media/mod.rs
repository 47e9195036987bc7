// SPDX-License-Identifier: MPL-2.0
//! Image assets: decoding and the cache the views draw from.
//!
//! Image names are relative to the assets directory. Decoding happens off
//! the update loop through [`load`]; results are stored in an
//! [`ImageStore`] keyed by name.

pub mod image;

pub use image::{load_image, ImageData};

use crate::error::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Decodes `name` under `assets_dir` on the blocking thread pool.
///
/// # Errors
///
/// See [`load_image`]. A decode task that panicked is reported as
/// [`Error::Image`](crate::error::Error::Image).
pub async fn load(assets_dir: PathBuf, name: String) -> Result<ImageData> {
    let path = assets_dir.join(&name);
    let decode_path = path.clone();
    let result = tokio::task::spawn_blocking(move || load_image(&decode_path))
        .await
        .unwrap_or_else(|join_err| Err(crate::error::Error::Image(join_err.to_string())));
    match &result {
        Ok(data) => tracing::debug!(image = %name, width = data.width, height = data.height, "decoded"),
        Err(err) => tracing::warn!(path = %path.display(), %err, "image failed to load"),
    }
    result
}

/// Decoded images by name.
#[derive(Debug, Default)]
pub struct ImageStore {
    assets_dir: PathBuf,
    images: HashMap<String, ImageData>,
}

impl ImageStore {
    #[must_use]
    pub fn new(assets_dir: PathBuf) -> Self {
        Self {
            assets_dir,
            images: HashMap::new(),
        }
    }

    #[must_use]
    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ImageData> {
        self.images.get(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, data: ImageData) {
        self.images.insert(name.into(), data);
    }

    /// Drops a cached decode so the next request reads the file again.
    pub fn evict(&mut self, name: &str) -> Option<ImageData> {
        self.images.remove(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
