// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes and layout breakpoints
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use folio::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Tinted pill background
let pill_bg = Color {
    a: opacity::OVERLAY_SUBTLE,
    ..palette::PRIMARY_600
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_950: Color = Color::from_rgb(0.043, 0.059, 0.090);
    pub const GRAY_900: Color = Color::from_rgb(0.067, 0.094, 0.153);
    pub const GRAY_800: Color = Color::from_rgb(0.122, 0.161, 0.216);
    pub const GRAY_700: Color = Color::from_rgb(0.216, 0.255, 0.318);
    pub const GRAY_600: Color = Color::from_rgb(0.294, 0.333, 0.388);
    pub const GRAY_400: Color = Color::from_rgb(0.612, 0.639, 0.686);
    pub const GRAY_300: Color = Color::from_rgb(0.820, 0.835, 0.859);
    pub const GRAY_200: Color = Color::from_rgb(0.898, 0.906, 0.922);
    pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965);
    pub const GRAY_50: Color = Color::from_rgb(0.976, 0.980, 0.984);

    // Brand colors (blue scale)
    pub const PRIMARY_100: Color = Color::from_rgb(0.859, 0.918, 0.996); // Very light blue
    pub const PRIMARY_400: Color = Color::from_rgb(0.376, 0.647, 0.980); // Medium light blue
    pub const PRIMARY_500: Color = Color::from_rgb(0.231, 0.510, 0.965); // Primary blue
    pub const PRIMARY_600: Color = Color::from_rgb(0.145, 0.388, 0.922); // Medium dark blue
    pub const PRIMARY_700: Color = Color::from_rgb(0.114, 0.306, 0.847); // Dark blue
    pub const PRIMARY_800: Color = Color::from_rgb(0.118, 0.251, 0.686); // Very dark blue

    // Accent for the avatar halo
    pub const ACCENT_600: Color = Color::from_rgb(0.576, 0.200, 0.918);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;

    /// Surface background - Semi-transparent navbar once the page scrolled
    pub const SURFACE: f32 = 0.9;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
    pub const XXXL: f32 = 64.0; // 8 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 20.0;
    pub const ICON_LG: f32 = 24.0;

    // Layout
    pub const NAVBAR_HEIGHT: f32 = 64.0;
    pub const CONTENT_MAX_WIDTH: f32 = 1024.0;
    /// Below this window width the navbar collapses into the compact menu.
    pub const BREAKPOINT_MD: f32 = 768.0;

    // Hero
    pub const AVATAR: f32 = 280.0;
    pub const AVATAR_BADGE: f32 = 56.0;

    // Cards
    pub const PROJECT_IMAGE_HEIGHT: f32 = 192.0;

    // Skill level indicator segments
    pub const LEVEL_SEGMENT_WIDTH: f32 = 20.0;
    pub const LEVEL_SEGMENT_HEIGHT: f32 = 8.0;

    // Contact form
    pub const MESSAGE_INPUT_HEIGHT: f32 = 128.0;

    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Display: the hero name
    //! - Titles: section headings and card titles
    //! - Body: primary content text
    //! - Caption: tags and secondary info

    /// Display - Hero name
    pub const DISPLAY: f32 = 48.0;

    /// Large title - Section headings
    pub const TITLE_LG: f32 = 32.0;

    /// Medium title - Hero tagline, sub-headings
    pub const TITLE_MD: f32 = 22.0;

    /// Small title - Card titles
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Paragraphs, subtitles
    pub const BODY_LG: f32 = 17.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 15.0;

    /// Small body - Links, secondary labels
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Tags, small info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Inputs, outline buttons
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Toast accents, active nav underline
    pub const WIDTH_MD: f32 = 2.0;

    /// Thick border - Avatar ring, education accent
    pub const WIDTH_LG: f32 = 4.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    const SHADOW_COLOR: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.15);

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 3.0,
    };

    pub const MD: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 10.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::BREAKPOINT_MD < sizing::CONTENT_MAX_WIDTH);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(border::WIDTH_LG > border::WIDTH_MD);
};
