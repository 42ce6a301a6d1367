// SPDX-License-Identifier: MPL-2.0
//! Rounded pill badges for product flags.

use crate::ui::design_tokens::{palette, radius, spacing, typography};
use iced::widget::{container, Container, Text};
use iced::{Background, Border, Color};

/// A rounded pill with the given colors, e.g. the "highlighted" star badge
/// or a category label.
pub fn pill<'a, Message: 'a>(
    label: String,
    background: Color,
    text_color: Color,
) -> Container<'a, Message> {
    container(
        Text::new(label)
            .size(typography::BODY_SM)
            .color(text_color),
    )
    .padding([spacing::XS, spacing::MD])
    .style(move |_theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    })
}

/// Yellow "featured" badge.
pub fn highlighted<'a, Message: 'a>(label: String) -> Container<'a, Message> {
    pill(format!("⭐ {label}"), palette::YELLOW_100, palette::YELLOW_800)
}

/// Blue category badge.
pub fn category<'a, Message: 'a>(label: String) -> Container<'a, Message> {
    pill(label, palette::BLUE_100, palette::BLUE_800)
}
