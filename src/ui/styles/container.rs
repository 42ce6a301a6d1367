// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Theme};

/// White content card with the soft brand border (description, form, specs).
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        border: Border {
            color: palette::ORANGE_100,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Red-tinted card used by the product-load error view.
pub fn error_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::RED_50)),
        border: Border {
            color: palette::RED_200,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        ..Default::default()
    }
}

/// Square frame around the primary gallery image.
pub fn image_frame(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        border: Border {
            color: palette::ORANGE_100,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Frame around the currently selected thumbnail.
pub fn thumbnail_selected(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        border: Border {
            color: palette::ORANGE_500,
            width: 2.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Frame around an unselected thumbnail.
pub fn thumbnail(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        border: Border {
            color: palette::ORANGE_100,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        ..Default::default()
    }
}

/// White navigation bar with the hairline bottom border.
pub fn navbar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        border: Border {
            color: palette::ORANGE_100,
            width: 1.0,
            radius: 0.0.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}
