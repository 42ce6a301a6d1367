// SPDX-License-Identifier: MPL-2.0
//! Remote image fetching and caching for the gallery.
//!
//! Decoded handles are kept in a small LRU cache keyed by URL so switching
//! between thumbnails never refetches. A failed fetch is cached too: the
//! gallery renders the placeholder for it instead of retrying on every
//! redraw.

use crate::error::BackendError;
use iced::widget::image;
use lru::LruCache;
use std::num::NonZeroUsize;

use crate::config::DEFAULT_IMAGE_CACHE_CAPACITY;

/// Cache entry for one image URL.
#[derive(Debug, Clone)]
pub enum CachedImage {
    /// Decoded and ready to draw.
    Ready(image::Handle),
    /// Fetch or decode failed; render the placeholder.
    Failed,
}

/// LRU cache of fetched gallery images.
pub struct ImageCache {
    cache: LruCache<String, CachedImage>,
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_IMAGE_CACHE_CAPACITY)
    }
}

impl ImageCache {
    /// Creates a cache bounded to `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity)
            .unwrap_or(NonZeroUsize::new(DEFAULT_IMAGE_CACHE_CAPACITY).expect("nonzero default"));
        Self {
            cache: LruCache::new(capacity),
        }
    }

    /// Looks up an entry, refreshing its recency.
    pub fn get(&mut self, url: &str) -> Option<CachedImage> {
        self.cache.get(url).cloned()
    }

    /// Whether the URL has an entry (ready or failed) without touching
    /// recency.
    #[must_use]
    pub fn contains(&self, url: &str) -> bool {
        self.cache.contains(url)
    }

    /// Borrow an entry without touching recency. Used by the view, which
    /// only has shared access.
    #[must_use]
    pub fn peek(&self, url: &str) -> Option<&CachedImage> {
        self.cache.peek(url)
    }

    /// Stores a fetch outcome.
    pub fn insert(&mut self, url: String, entry: CachedImage) {
        self.cache.put(url, entry);
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

/// Magic-number sniff over the fetched bytes.
///
/// Broken references commonly resolve to HTML error pages with a 200 status;
/// rejecting non-image payloads here lets the gallery degrade to the
/// placeholder instead of handing garbage to the renderer.
#[must_use]
pub fn looks_like_image(bytes: &[u8]) -> bool {
    const PNG: &[u8] = &[0x89, b'P', b'N', b'G'];
    const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF];
    const GIF: &[u8] = b"GIF8";
    const RIFF: &[u8] = b"RIFF"; // WebP container
    const BMP: &[u8] = b"BM";

    bytes.starts_with(PNG)
        || bytes.starts_with(JPEG)
        || bytes.starts_with(GIF)
        || bytes.starts_with(RIFF)
        || bytes.starts_with(BMP)
}

/// Fetches one image and wraps it into a renderer handle.
pub async fn fetch_image(
    client: &reqwest::Client,
    url: &str,
) -> Result<image::Handle, BackendError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| BackendError::Network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(BackendError::Status(response.status().as_u16()));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| BackendError::Network(e.to_string()))?;

    if !looks_like_image(&bytes) {
        return Err(BackendError::Decode(format!(
            "payload at {url} is not a supported image"
        )));
    }

    Ok(image::Handle::from_bytes(bytes.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sniffs_common_image_signatures() {
        assert!(looks_like_image(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A]));
        assert!(looks_like_image(&[0xFF, 0xD8, 0xFF, 0xE0]));
        assert!(looks_like_image(b"GIF89a"));
        assert!(looks_like_image(b"RIFF....WEBP"));
    }

    #[test]
    fn rejects_html_error_pages() {
        assert!(!looks_like_image(b"<!DOCTYPE html><html>"));
        assert!(!looks_like_image(b""));
    }

    #[test]
    fn cache_evicts_least_recently_used() {
        let mut cache = ImageCache::with_capacity(2);
        cache.insert("a".to_string(), CachedImage::Failed);
        cache.insert("b".to_string(), CachedImage::Failed);

        // Touch "a" so "b" becomes the eviction candidate.
        assert!(cache.get("a").is_some());
        cache.insert("c".to_string(), CachedImage::Failed);

        assert!(cache.contains("a"));
        assert!(!cache.contains("b"));
        assert!(cache.contains("c"));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn failed_fetches_are_cached() {
        let mut cache = ImageCache::default();
        cache.insert("broken".to_string(), CachedImage::Failed);
        assert!(matches!(cache.get("broken"), Some(CachedImage::Failed)));
    }
}
