// SPDX-License-Identifier: MPL-2.0
//! Viewer state for the gallery: image selection, magnification toggle, and
//! the pointer-driven focal point.
//!
//! All transitions run synchronously inside the update loop; the state is
//! owned by exactly one mounted gallery and is rebuilt whenever the product
//! (and therefore the image set) changes.

use crate::config::{
    GalleryConfig, DEFAULT_FOCAL_PERCENT, MAX_FOCAL_PERCENT, MIN_FOCAL_PERCENT,
};
use iced::{Point, Rectangle};

/// Reference substituted when a product has no images. Resolves to the
/// embedded placeholder visual rather than a remote fetch.
pub const PLACEHOLDER_IMAGE_REF: &str = "placeholder.svg";

/// Focal point of the magnified view, in percent of the image container.
///
/// Both components are guaranteed to be within `0..=100` by construction,
/// so the transform anchor can never leave the container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocalPoint {
    x: f32,
    y: f32,
}

impl FocalPoint {
    /// Creates a focal point, clamping both components to the valid range.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: x.clamp(MIN_FOCAL_PERCENT, MAX_FOCAL_PERCENT),
            y: y.clamp(MIN_FOCAL_PERCENT, MAX_FOCAL_PERCENT),
        }
    }

    /// Computes the percentage position of `cursor` within `bounds`.
    ///
    /// Returns `None` for degenerate bounds, which can briefly occur before
    /// the first layout pass.
    #[must_use]
    pub fn from_cursor(cursor: Point, bounds: Rectangle) -> Option<Self> {
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return None;
        }

        Some(Self::new(
            (cursor.x - bounds.x) / bounds.width * 100.0,
            (cursor.y - bounds.y) / bounds.height * 100.0,
        ))
    }

    #[must_use]
    pub fn x(self) -> f32 {
        self.x
    }

    #[must_use]
    pub fn y(self) -> f32 {
        self.y
    }

    /// The focal point as fractions in `0..=1`, the form the scroll anchor
    /// consumes.
    #[must_use]
    pub fn as_fractions(self) -> (f32, f32) {
        (self.x / 100.0, self.y / 100.0)
    }
}

impl Default for FocalPoint {
    fn default() -> Self {
        Self {
            x: DEFAULT_FOCAL_PERCENT,
            y: DEFAULT_FOCAL_PERCENT,
        }
    }
}

/// The gallery's viewer state.
#[derive(Debug, Clone)]
pub struct ViewerState {
    /// Ordered image references; display order follows insertion order.
    images: Vec<String>,
    /// Currently displayed reference. Always a member of `images`, or the
    /// placeholder when `images` is empty.
    selected_image: String,
    /// Whether the magnified view is active. Toggles only via explicit
    /// click, never via hover.
    is_zoomed: bool,
    /// Anchor of the magnification transform.
    focal_point: FocalPoint,
    /// Magnification factor applied while zoomed.
    zoom_factor: f32,
    /// Cap on the rendered thumbnail strip.
    thumbnail_limit: usize,
}

impl ViewerState {
    /// Creates viewer state for a product's image set.
    ///
    /// The first image is selected; an empty set selects the placeholder.
    #[must_use]
    pub fn new(images: Vec<String>, gallery: &GalleryConfig) -> Self {
        let selected_image = images
            .first()
            .cloned()
            .unwrap_or_else(|| PLACEHOLDER_IMAGE_REF.to_string());

        Self {
            images,
            selected_image,
            is_zoomed: false,
            focal_point: FocalPoint::default(),
            zoom_factor: gallery.zoom_factor(),
            thumbnail_limit: gallery.thumbnail_limit(),
        }
    }

    /// Selects `reference` if it is a member of the image set; no-op
    /// otherwise. Neither the magnification toggle nor the focal point is
    /// touched.
    pub fn select_thumbnail(&mut self, reference: &str) -> bool {
        if !self.images.iter().any(|image| image == reference) {
            return false;
        }
        if self.selected_image == reference {
            return false;
        }

        self.selected_image = reference.to_string();
        true
    }

    /// Flips the magnified view. The focal point is left as-is; it only
    /// moves on a subsequent pointer move.
    pub fn toggle_zoom(&mut self) {
        self.is_zoomed = !self.is_zoomed;
    }

    /// Moves the focal point to the pointer position.
    ///
    /// No-op while not magnified, so pointer traffic over the resting image
    /// costs nothing. Returns whether the focal point changed.
    pub fn update_focal_point(&mut self, cursor: Point, bounds: Rectangle) -> bool {
        if !self.is_zoomed {
            return false;
        }

        let Some(focal_point) = FocalPoint::from_cursor(cursor, bounds) else {
            return false;
        };

        if focal_point == self.focal_point {
            return false;
        }

        self.focal_point = focal_point;
        true
    }

    /// Exits the magnified view unconditionally. Called when the pointer
    /// leaves the image area so the view can never stay stuck magnified.
    pub fn pointer_left(&mut self) {
        self.is_zoomed = false;
    }

    #[must_use]
    pub fn selected_image(&self) -> &str {
        &self.selected_image
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.is_zoomed
    }

    #[must_use]
    pub fn focal_point(&self) -> FocalPoint {
        self.focal_point
    }

    #[must_use]
    pub fn zoom_factor(&self) -> f32 {
        self.zoom_factor
    }

    /// Whether the placeholder stands in for an empty image set.
    #[must_use]
    pub fn shows_placeholder(&self) -> bool {
        self.images.is_empty()
    }

    /// The thumbnail strip: up to the configured cap, in insertion order.
    #[must_use]
    pub fn thumbnails(&self) -> &[String] {
        let end = self.images.len().min(self.thumbnail_limit);
        &self.images[..end]
    }

    /// Edge length of the rendered image for a square container of `side`.
    #[must_use]
    pub fn scaled_side(&self, side: f32) -> f32 {
        if self.is_zoomed {
            side * self.zoom_factor
        } else {
            side
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use iced::Size;

    fn images(refs: &[&str]) -> Vec<String> {
        refs.iter().map(|r| (*r).to_string()).collect()
    }

    fn state_with(refs: &[&str]) -> ViewerState {
        ViewerState::new(images(refs), &GalleryConfig::default())
    }

    fn bounds(width: f32, height: f32) -> Rectangle {
        Rectangle::new(Point::ORIGIN, Size::new(width, height))
    }

    #[test]
    fn first_image_is_selected_initially() {
        let state = state_with(&["a.jpg", "b.jpg", "c.jpg"]);
        assert_eq!(state.selected_image(), "a.jpg");
        assert!(!state.shows_placeholder());
    }

    #[test]
    fn empty_image_set_selects_placeholder() {
        let state = state_with(&[]);
        assert_eq!(state.selected_image(), PLACEHOLDER_IMAGE_REF);
        assert!(state.shows_placeholder());
        assert!(state.thumbnails().is_empty());
    }

    #[test]
    fn select_thumbnail_ignores_unknown_reference() {
        let mut state = state_with(&["a.jpg", "b.jpg"]);
        assert!(!state.select_thumbnail("z.jpg"));
        assert_eq!(state.selected_image(), "a.jpg");
    }

    #[test]
    fn select_thumbnail_keeps_zoom_and_focal_point() {
        let mut state = state_with(&["a.jpg", "b.jpg", "c.jpg"]);
        state.toggle_zoom();
        state.update_focal_point(Point::new(100.0, 50.0), bounds(400.0, 400.0));
        let focal_before = state.focal_point();

        assert!(state.select_thumbnail("b.jpg"));

        assert_eq!(state.selected_image(), "b.jpg");
        assert!(state.is_zoomed());
        assert_eq!(state.focal_point(), focal_before);
    }

    #[test]
    fn toggle_zoom_is_an_involution() {
        let mut state = state_with(&["a.jpg"]);
        assert!(!state.is_zoomed());

        state.toggle_zoom();
        assert!(state.is_zoomed());

        state.toggle_zoom();
        assert!(!state.is_zoomed());
    }

    #[test]
    fn toggle_zoom_leaves_focal_point_untouched() {
        let mut state = state_with(&["a.jpg"]);
        state.toggle_zoom();
        assert_eq!(state.focal_point(), FocalPoint::default());
    }

    #[test]
    fn update_focal_point_is_noop_while_not_zoomed() {
        let mut state = state_with(&["a.jpg"]);
        let changed = state.update_focal_point(Point::new(50.0, 50.0), bounds(400.0, 400.0));

        assert!(!changed);
        assert_eq!(state.focal_point(), FocalPoint::default());
    }

    #[test]
    fn update_focal_point_tracks_cursor_percentages() {
        let mut state = state_with(&["a.jpg"]);
        state.toggle_zoom();

        let changed = state.update_focal_point(Point::new(100.0, 300.0), bounds(400.0, 400.0));

        assert!(changed);
        assert_abs_diff_eq!(state.focal_point().x(), 25.0);
        assert_abs_diff_eq!(state.focal_point().y(), 75.0);
    }

    #[test]
    fn update_focal_point_accounts_for_container_origin() {
        let mut state = state_with(&["a.jpg"]);
        state.toggle_zoom();

        let container = Rectangle::new(Point::new(40.0, 20.0), Size::new(200.0, 100.0));
        state.update_focal_point(Point::new(140.0, 70.0), container);

        assert_abs_diff_eq!(state.focal_point().x(), 50.0);
        assert_abs_diff_eq!(state.focal_point().y(), 50.0);
    }

    #[test]
    fn focal_point_components_are_clamped() {
        let focal = FocalPoint::new(-12.0, 180.0);
        assert_abs_diff_eq!(focal.x(), 0.0);
        assert_abs_diff_eq!(focal.y(), 100.0);
    }

    #[test]
    fn from_cursor_rejects_degenerate_bounds() {
        assert!(FocalPoint::from_cursor(Point::ORIGIN, bounds(0.0, 100.0)).is_none());
        assert!(FocalPoint::from_cursor(Point::ORIGIN, bounds(100.0, 0.0)).is_none());
    }

    #[test]
    fn pointer_left_always_exits_zoom() {
        let mut state = state_with(&["a.jpg"]);
        state.pointer_left();
        assert!(!state.is_zoomed());

        state.toggle_zoom();
        state.pointer_left();
        assert!(!state.is_zoomed());
    }

    #[test]
    fn thumbnails_are_capped_at_the_configured_limit() {
        let refs: Vec<String> = (0..14).map(|i| format!("img-{i}.jpg")).collect();
        let state = ViewerState::new(refs, &GalleryConfig::default());

        assert_eq!(state.thumbnails().len(), 10);
        assert_eq!(state.thumbnails()[0], "img-0.jpg");
        assert_eq!(state.thumbnails()[9], "img-9.jpg");
    }

    #[test]
    fn scaled_side_applies_factor_only_while_zoomed() {
        let mut state = state_with(&["a.jpg"]);
        assert_abs_diff_eq!(state.scaled_side(420.0), 420.0);

        state.toggle_zoom();
        assert_abs_diff_eq!(state.scaled_side(420.0), 840.0);
    }

    #[test]
    fn focal_fractions_match_percentages() {
        let focal = FocalPoint::new(25.0, 75.0);
        let (fx, fy) = focal.as_fractions();
        assert_abs_diff_eq!(fx, 0.25);
        assert_abs_diff_eq!(fy, 0.75);
    }
}
