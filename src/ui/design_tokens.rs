// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors (the storefront's warm amber/orange brand)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Modification

⚠️ Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand colors (warm amber/orange scale)
    pub const AMBER_50: Color = Color::from_rgb(1.0, 0.984, 0.922);
    pub const ORANGE_50: Color = Color::from_rgb(1.0, 0.969, 0.929);
    pub const ORANGE_100: Color = Color::from_rgb(1.0, 0.929, 0.835);
    pub const ORANGE_300: Color = Color::from_rgb(0.992, 0.729, 0.455);
    pub const ORANGE_500: Color = Color::from_rgb(0.976, 0.451, 0.086);
    pub const ORANGE_600: Color = Color::from_rgb(0.918, 0.345, 0.047);
    pub const ORANGE_700: Color = Color::from_rgb(0.761, 0.255, 0.047);
    pub const ORANGE_800: Color = Color::from_rgb(0.604, 0.204, 0.071);
    pub const ORANGE_900: Color = Color::from_rgb(0.486, 0.176, 0.071);

    // Inquiry action (WhatsApp green)
    pub const GREEN_600: Color = Color::from_rgb(0.086, 0.639, 0.29);
    pub const GREEN_700: Color = Color::from_rgb(0.082, 0.502, 0.239);

    // Highlighted badge
    pub const YELLOW_100: Color = Color::from_rgb(0.996, 0.976, 0.765);
    pub const YELLOW_500: Color = Color::from_rgb(0.918, 0.702, 0.031);
    pub const YELLOW_800: Color = Color::from_rgb(0.522, 0.302, 0.055);

    // Category badge
    pub const BLUE_100: Color = Color::from_rgb(0.859, 0.918, 0.996);
    pub const BLUE_800: Color = Color::from_rgb(0.118, 0.251, 0.686);

    // Error surfaces
    pub const RED_50: Color = Color::from_rgb(0.996, 0.949, 0.949);
    pub const RED_200: Color = Color::from_rgb(0.996, 0.792, 0.792);
    pub const RED_600: Color = Color::from_rgb(0.863, 0.149, 0.149);
    pub const RED_700: Color = Color::from_rgb(0.725, 0.11, 0.11);
    pub const RED_800: Color = Color::from_rgb(0.6, 0.106, 0.106);
}

// ============================================================================
// Opacity Levels
// ============================================================================

pub mod opacity {
    /// Fully opaque.
    pub const FULL: f32 = 1.0;
    /// De-emphasized helper text.
    pub const MUTED: f32 = 0.7;
    /// Hint text and separators.
    pub const FAINT: f32 = 0.5;
    /// Disabled surfaces.
    pub const DISABLED: f32 = 0.4;
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    /// 4px - tight inline gaps
    pub const XS: f32 = 4.0;
    /// 8px - default gap inside rows
    pub const SM: f32 = 8.0;
    /// 16px - default gap between blocks
    pub const MD: f32 = 16.0;
    /// 24px - section padding
    pub const LG: f32 = 24.0;
    /// 32px - page margins
    pub const XL: f32 = 32.0;
    /// 48px - grid gutter between the gallery and the info column
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Component Sizing
// ============================================================================

pub mod sizing {
    /// Height of the navigation bar.
    pub const NAVBAR_HEIGHT: f32 = 64.0;
    /// Edge length of the square primary image container.
    pub const MAIN_IMAGE_SIZE: f32 = 420.0;
    /// Edge length of one square thumbnail.
    pub const THUMBNAIL_SIZE: f32 = 80.0;
    /// Width of the sign-in form column.
    pub const FORM_WIDTH: f32 = 360.0;
    /// Width of the error card.
    pub const ERROR_CARD_WIDTH: f32 = 420.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// 12px - hints and captions
    pub const CAPTION: f32 = 12.0;
    /// 14px - secondary body text
    pub const BODY_SM: f32 = 14.0;
    /// 16px - body text
    pub const BODY: f32 = 16.0;
    /// 20px - section headings
    pub const TITLE_SM: f32 = 20.0;
    /// 24px - card titles and the price line
    pub const TITLE_MD: f32 = 24.0;
    /// 30px - the product name
    pub const TITLE_LG: f32 = 30.0;
}

// ============================================================================
// Border Radii
// ============================================================================

pub mod radius {
    /// 4px - buttons and inputs
    pub const SM: f32 = 4.0;
    /// 8px - cards and the image container
    pub const MD: f32 = 8.0;
    /// Fully rounded pills (badges)
    pub const FULL: f32 = 999.0;
}

// ============================================================================
// Shadows
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::new(0.0, 0.0),
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            a: 0.12,
            ..Color::BLACK
        },
        offset: Vector::new(0.0, 1.0),
        blur_radius: 3.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.18,
            ..Color::BLACK
        },
        offset: Vector::new(0.0, 2.0),
        blur_radius: 6.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_keeps_ratios() {
        assert_eq!(spacing::SM, spacing::XS * 2.0);
        assert_eq!(spacing::MD, spacing::SM * 2.0);
        assert_eq!(spacing::XL, spacing::MD * 2.0);
    }

    #[test]
    fn palette_components_are_normalized() {
        for color in [
            palette::AMBER_50,
            palette::ORANGE_600,
            palette::GREEN_600,
            palette::YELLOW_500,
            palette::BLUE_800,
            palette::RED_600,
        ] {
            for channel in [color.r, color.g, color.b] {
                assert!((0.0..=1.0).contains(&channel));
            }
        }
    }
}
