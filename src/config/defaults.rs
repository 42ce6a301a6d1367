// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Magnification**: Gallery zoom factor bounds
//! - **Thumbnails**: Thumbnail strip display cap
//! - **Focal point**: Percentage bounds for the magnification anchor
//! - **Store**: Inquiry contact fallback
//! - **Images**: Remote image cache sizing

// ==========================================================================
// Magnification Defaults
// ==========================================================================

/// Magnification factor applied to the primary image while zoomed.
pub const DEFAULT_ZOOM_FACTOR: f32 = 2.0;

/// Minimum allowed magnification factor (1.0 = no magnification).
pub const MIN_ZOOM_FACTOR: f32 = 1.0;

/// Maximum allowed magnification factor.
pub const MAX_ZOOM_FACTOR: f32 = 8.0;

// ==========================================================================
// Thumbnail Defaults
// ==========================================================================

/// Maximum number of thumbnails rendered below the primary image.
pub const THUMBNAIL_DISPLAY_LIMIT: usize = 10;

/// Upper bound accepted from configuration for the thumbnail cap.
pub const MAX_THUMBNAIL_DISPLAY_LIMIT: usize = 24;

// ==========================================================================
// Focal Point Defaults
// ==========================================================================

/// Minimum focal point coordinate, in percent of the container.
pub const MIN_FOCAL_PERCENT: f32 = 0.0;

/// Maximum focal point coordinate, in percent of the container.
pub const MAX_FOCAL_PERCENT: f32 = 100.0;

/// Default focal point coordinate (centered).
pub const DEFAULT_FOCAL_PERCENT: f32 = 50.0;

// ==========================================================================
// Store Defaults
// ==========================================================================

/// Fallback WhatsApp number used when none is configured.
///
/// The inquiry link never validates the number beyond substituting this
/// default, mirroring the storefront contract.
pub const DEFAULT_WHATSAPP_NUMBER: &str = "1234567890";

// ==========================================================================
// Image Cache Defaults
// ==========================================================================

/// Number of decoded remote images kept in the LRU cache.
pub const DEFAULT_IMAGE_CACHE_CAPACITY: usize = 32;
