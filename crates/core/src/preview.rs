//! # Preview URLs
//!
//! Locally picked files need a temporary URL before they can be previewed.
//! `PreviewUrls` creates one lazily per file through an `ObjectUrlFactory`,
//! caches it under the file's id (or name), and releases every URL it created
//! when it is torn down. Files whose `file_url` already points at the server
//! are served as-is and never touch the factory.

use std::collections::HashMap;

use tracing::trace;

use crate::models::upload::UploadFile;

/// Creates and releases local object URLs.
pub trait ObjectUrlFactory {
    /// Returns `None` when the file has no local content to point at.
    fn create(&mut self, file: &UploadFile) -> Option<String>;
    fn revoke(&mut self, url: &str);
}

pub struct PreviewUrls<F: ObjectUrlFactory> {
    factory: F,
    urls: HashMap<String, String>,
}

impl<F: ObjectUrlFactory> PreviewUrls<F> {
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            urls: HashMap::new(),
        }
    }

    /// URL to display for `file`, creating a local one on first use.
    pub fn url_for(&mut self, file: &UploadFile) -> Option<String> {
        if file.has_remote_url() {
            return file.file_url.clone();
        }

        let key = file.cache_key();
        if let Some(url) = self.urls.get(key) {
            return Some(url.clone());
        }

        let url = self.factory.create(file)?;
        trace!(key, url = %url, "Created preview URL");
        self.urls.insert(key.to_string(), url.clone());
        Some(url)
    }

    /// Number of locally created URLs currently held.
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn release_all(&mut self) {
        for (_, url) in self.urls.drain() {
            self.factory.revoke(&url);
        }
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }
}

impl<F: ObjectUrlFactory> Drop for PreviewUrls<F> {
    fn drop(&mut self) {
        self.release_all();
    }
}
