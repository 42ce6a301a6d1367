// SPDX-License-Identifier: MPL-2.0
//! Gallery rendering: the magnification viewport and the thumbnail strip.
//!
//! The magnified view is a hidden-scrollbar scrollable whose content is the
//! image at the configured factor; the relative scroll offset mirrors the
//! focal percentages, which keeps the transform anchored under the pointer.

use super::component::{Message, State, GALLERY_SCROLLABLE_ID};
use super::state::PLACEHOLDER_IMAGE_REF;
use crate::backend::{CachedImage, ImageCache};
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::image::Image;
use iced::widget::{button, mouse_area, svg, Column, Container, Id, Row, Scrollable, Text};
use iced::{mouse, ContentFit, Element, Length};
use std::sync::OnceLock;

/// Thumbnails per row; the strip wraps beneath the primary image.
const THUMBNAILS_PER_ROW: usize = 5;

/// Contextual data needed to render the gallery.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub images: &'a ImageCache,
}

/// Embedded placeholder shown for missing or broken references.
fn placeholder_handle() -> svg::Handle {
    static HANDLE: OnceLock<svg::Handle> = OnceLock::new();
    HANDLE
        .get_or_init(|| {
            svg::Handle::from_memory(
                include_bytes!("../../../assets/placeholder.svg").as_slice(),
            )
        })
        .clone()
}

/// Renders one reference at the given square size, degrading to the
/// placeholder for anything that is not a ready raster image.
fn render_reference<'a>(
    images: &ImageCache,
    reference: &str,
    side: f32,
) -> Element<'a, Message> {
    if reference != PLACEHOLDER_IMAGE_REF {
        if let Some(CachedImage::Ready(handle)) = images.peek(reference) {
            return Image::new(handle.clone())
                .width(Length::Fixed(side))
                .height(Length::Fixed(side))
                .content_fit(ContentFit::Contain)
                .into();
        }
    }

    svg::Svg::new(placeholder_handle())
        .width(Length::Fixed(side))
        .height(Length::Fixed(side))
        .content_fit(ContentFit::Contain)
        .into()
}

/// Renders the gallery: magnification viewport, hint line, thumbnail strip.
pub fn view<'a>(state: &'a State, env: ViewEnv<'a>) -> Element<'a, Message> {
    let side = state.container_side();
    let viewer = state.viewer();

    let media = render_reference(env.images, viewer.selected_image(), viewer.scaled_side(side));

    let viewport = Scrollable::new(media)
        .id(Id::new(GALLERY_SCROLLABLE_ID))
        .width(Length::Fixed(side))
        .height(Length::Fixed(side))
        .direction(Direction::Both {
            vertical: Scrollbar::hidden(),
            horizontal: Scrollbar::hidden(),
        });

    let framed = Container::new(viewport)
        .width(Length::Fixed(side))
        .height(Length::Fixed(side))
        .style(styles::container::image_frame);

    let cursor_interaction = if viewer.is_zoomed() {
        mouse::Interaction::Pointer
    } else {
        mouse::Interaction::ZoomIn
    };

    let interactive = mouse_area(framed)
        .on_press(Message::ImagePressed)
        .on_move(Message::CursorMoved)
        .on_exit(Message::CursorLeft)
        .interaction(cursor_interaction);

    let hint_key = if viewer.is_zoomed() {
        "gallery-hint-zoomed"
    } else {
        "gallery-hint"
    };
    let hint = Text::new(env.i18n.tr(hint_key))
        .size(typography::CAPTION)
        .color(theme::muted_text_color());

    let mut content = Column::new()
        .spacing(spacing::MD)
        .push(interactive)
        .push(hint);

    let thumbnails = viewer.thumbnails();
    if !thumbnails.is_empty() {
        content = content.push(thumbnail_strip(viewer, env.images, thumbnails));
    }

    content.into()
}

fn thumbnail_strip<'a>(
    viewer: &super::state::ViewerState,
    images: &ImageCache,
    thumbnails: &'a [String],
) -> Element<'a, Message> {
    let mut strip = Column::new().spacing(spacing::SM);

    for chunk in thumbnails.chunks(THUMBNAILS_PER_ROW) {
        let mut row = Row::new().spacing(spacing::SM);

        for reference in chunk {
            let selected = viewer.selected_image() == reference.as_str();
            let style: fn(&iced::Theme) -> iced::widget::container::Style = if selected {
                styles::container::thumbnail_selected
            } else {
                styles::container::thumbnail
            };

            let thumb = Container::new(render_reference(
                images,
                reference,
                sizing::THUMBNAIL_SIZE,
            ))
            .width(Length::Fixed(sizing::THUMBNAIL_SIZE))
            .height(Length::Fixed(sizing::THUMBNAIL_SIZE))
            .style(style);

            row = row.push(
                button(thumb)
                    .padding(0)
                    .style(styles::button::link)
                    .on_press(Message::ThumbnailPressed(reference.clone())),
            );
        }

        strip = strip.push(row);
    }

    strip.into()
}
