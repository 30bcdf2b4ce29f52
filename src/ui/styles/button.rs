// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.
//!
//! Colors come from the [`ColorScheme`] matching the active theme so every
//! button follows the light/dark toggle.

use crate::ui::design_tokens::{border, opacity, palette::WHITE, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn faded(color: Color) -> Color {
    Color {
        a: opacity::OVERLAY_MEDIUM,
        ..color
    }
}

/// Filled brand button (main call to action).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let (background, shadow) = match status {
        button::Status::Active => (colors.brand_primary, shadow::SM),
        button::Status::Hovered => (colors.brand_secondary, shadow::MD),
        button::Status::Pressed => (colors.brand_secondary, shadow::NONE),
        button::Status::Disabled => (faded(colors.brand_primary), shadow::NONE),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: background,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow,
        snap: true,
    }
}

/// Neutral filled button.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let background = match status {
        button::Status::Active => colors.surface_tertiary,
        button::Status::Hovered | button::Status::Pressed => colors.border,
        button::Status::Disabled => faded(colors.surface_tertiary),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: if status == button::Status::Disabled {
            colors.text_tertiary
        } else {
            colors.text_primary
        },
        border: Border {
            color: colors.border,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Transparent button with a brand border that fills on hover.
pub fn outline(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let (background, text_color) = match status {
        button::Status::Active => (None, colors.brand_primary),
        button::Status::Hovered | button::Status::Pressed => {
            (Some(Background::Color(colors.brand_primary)), WHITE)
        }
        button::Status::Disabled => (None, faded(colors.brand_primary)),
    };

    button::Style {
        background,
        text_color,
        border: Border {
            color: colors.brand_primary,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless icon button (toast dismiss, menu toggle, theme toggle).
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let background = match status {
        button::Status::Hovered => Some(Background::Color(colors.surface_tertiary)),
        button::Status::Pressed => Some(Background::Color(colors.border)),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: colors.text_primary,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Navbar entry; the active section is drawn in the brand color with an
/// underline-like bottom border.
pub fn nav_link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::for_theme(theme);
        let text_color = match (active, status) {
            (true, _) => colors.brand_primary,
            (false, button::Status::Hovered | button::Status::Pressed) => colors.brand_primary,
            (false, _) => colors.text_secondary,
        };
        let background = active.then_some(Background::Color(colors.brand_subtle));

        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Round social icon button under the contact list.
pub fn social(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let (background, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => (colors.brand_primary, WHITE),
        _ => (colors.surface_tertiary, colors.text_primary),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Inline text link (project demo/source links, certificates).
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => colors.brand_secondary,
        _ => colors.brand_primary,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_uses_brand_color() {
        let style = primary(&Theme::Light, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(ColorScheme::light().brand_primary))
        );
        assert_eq!(style.text_color, WHITE);
    }

    #[test]
    fn outline_fills_on_hover() {
        let idle = outline(&Theme::Dark, button::Status::Active);
        let hovered = outline(&Theme::Dark, button::Status::Hovered);
        assert!(idle.background.is_none());
        assert!(hovered.background.is_some());
    }

    #[test]
    fn active_nav_link_is_highlighted() {
        let active = nav_link(true)(&Theme::Dark, button::Status::Active);
        let inactive = nav_link(false)(&Theme::Dark, button::Status::Active);
        assert_eq!(active.text_color, ColorScheme::dark().brand_primary);
        assert_ne!(active.text_color, inactive.text_color);
        assert!(inactive.background.is_none());
    }

    #[test]
    fn disabled_primary_is_faded() {
        let style = primary(&Theme::Light, button::Status::Disabled);
        match style.background {
            Some(Background::Color(color)) => assert!(color.a < 1.0),
            other => panic!("unexpected background {other:?}"),
        }
    }
}
