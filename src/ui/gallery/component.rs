// SPDX-License-Identifier: MPL-2.0
//! Gallery component encapsulating state and update logic.

use super::state::ViewerState;
use crate::config::GalleryConfig;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::{Point, Rectangle, Size, Task};

/// Identifier used for the magnification scrollable widget.
pub const GALLERY_SCROLLABLE_ID: &str = "gallery-zoom-scrollable";

/// Messages emitted by the gallery widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// A thumbnail was clicked.
    ThumbnailPressed(String),
    /// The primary image was clicked (toggles magnification).
    ImagePressed,
    /// The pointer moved within the primary image container. The position is
    /// relative to the container.
    CursorMoved(Point),
    /// The pointer left the primary image container.
    CursorLeft,
}

/// Gallery component state.
#[derive(Debug, Clone)]
pub struct State {
    viewer: ViewerState,
    /// Square container edge length, fixed by the layout.
    container_side: f32,
}

impl State {
    /// Creates gallery state for a product's image set.
    #[must_use]
    pub fn new(images: Vec<String>, gallery: &GalleryConfig, container_side: f32) -> Self {
        Self {
            viewer: ViewerState::new(images, gallery),
            container_side,
        }
    }

    #[must_use]
    pub fn viewer(&self) -> &ViewerState {
        &self.viewer
    }

    #[must_use]
    pub fn container_side(&self) -> f32 {
        self.container_side
    }

    /// Handles a gallery message, returning the scroll task that keeps the
    /// magnified view anchored at the focal point.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ThumbnailPressed(reference) => {
                self.viewer.select_thumbnail(&reference);
                Task::none()
            }
            Message::ImagePressed => {
                self.viewer.toggle_zoom();
                if self.viewer.is_zoomed() {
                    // Anchor at the stored focal point; it only starts
                    // tracking the pointer on the next move.
                    self.snap_to_focal_point()
                } else {
                    self.snap_to_origin()
                }
            }
            Message::CursorMoved(position) => {
                let bounds = Rectangle::new(
                    Point::ORIGIN,
                    Size::new(self.container_side, self.container_side),
                );
                if self.viewer.update_focal_point(position, bounds) {
                    self.snap_to_focal_point()
                } else {
                    Task::none()
                }
            }
            Message::CursorLeft => {
                self.viewer.pointer_left();
                self.snap_to_origin()
            }
        }
    }

    fn snap_to_focal_point(&self) -> Task<Message> {
        let (x, y) = self.viewer.focal_point().as_fractions();
        operation::snap_to(Id::new(GALLERY_SCROLLABLE_ID), RelativeOffset { x, y })
    }

    fn snap_to_origin(&self) -> Task<Message> {
        operation::snap_to(
            Id::new(GALLERY_SCROLLABLE_ID),
            RelativeOffset { x: 0.0, y: 0.0 },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::gallery::FocalPoint;

    fn component(refs: &[&str]) -> State {
        let images = refs.iter().map(|r| (*r).to_string()).collect();
        State::new(images, &GalleryConfig::default(), 400.0)
    }

    #[test]
    fn thumbnail_press_selects_member() {
        let mut state = component(&["a.jpg", "b.jpg", "c.jpg"]);
        let _ = state.update(Message::ThumbnailPressed("b.jpg".to_string()));
        assert_eq!(state.viewer().selected_image(), "b.jpg");
        assert!(!state.viewer().is_zoomed());
    }

    #[test]
    fn image_press_toggles_magnification() {
        let mut state = component(&["a.jpg"]);
        let _ = state.update(Message::ImagePressed);
        assert!(state.viewer().is_zoomed());
        let _ = state.update(Message::ImagePressed);
        assert!(!state.viewer().is_zoomed());
    }

    #[test]
    fn cursor_move_only_tracks_while_magnified() {
        let mut state = component(&["a.jpg"]);
        let _ = state.update(Message::CursorMoved(Point::new(100.0, 100.0)));
        assert_eq!(state.viewer().focal_point(), FocalPoint::default());

        let _ = state.update(Message::ImagePressed);
        let _ = state.update(Message::CursorMoved(Point::new(100.0, 100.0)));
        assert_eq!(state.viewer().focal_point(), FocalPoint::new(25.0, 25.0));
    }

    #[test]
    fn cursor_leaving_exits_magnification() {
        let mut state = component(&["a.jpg"]);
        let _ = state.update(Message::ImagePressed);
        let _ = state.update(Message::CursorLeft);
        assert!(!state.viewer().is_zoomed());
    }
}
