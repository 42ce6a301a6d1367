// SPDX-License-Identifier: MPL-2.0
//! Shared UI color helpers for the storefront surfaces.

use crate::ui::design_tokens::palette;
use iced::Color;

/// Warm page background behind every screen.
pub fn page_background() -> Color {
    palette::AMBER_50
}

/// Background for content cards (description, specifications, forms).
pub fn card_background() -> Color {
    palette::WHITE
}

/// Brand color for headings and the navbar wordmark.
pub fn brand_text_color() -> Color {
    palette::ORANGE_800
}

/// Primary body text color.
pub fn body_text_color() -> Color {
    palette::ORANGE_700
}

/// Strong text color for the product name.
pub fn heading_text_color() -> Color {
    palette::ORANGE_900
}

/// Standard color for error text.
pub fn error_text_color() -> Color {
    palette::RED_700
}

/// Standard color for muted/secondary text.
pub fn muted_text_color() -> Color {
    palette::GRAY_400
}
