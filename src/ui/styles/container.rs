// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Page background behind every section.
pub fn page(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Alternate band used by every other section.
pub fn band(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Top bar. Transparent at rest, raised surface with a shadow once scrolled.
pub fn navbar(raised: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        if raised {
            container::Style {
                background: Some(Background::Color(colors.navbar_raised)),
                text_color: Some(colors.text_primary),
                shadow: shadow::MD,
                ..Default::default()
            }
        } else {
            container::Style {
                background: Some(Background::Color(colors.surface_primary)),
                text_color: Some(colors.text_primary),
                ..Default::default()
            }
        }
    }
}

/// Dropdown panel of the compact navbar menu.
pub fn menu_panel(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        border: Border {
            color: colors.border,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Raised card (projects, skills, facts, contact form).
pub fn card(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        border: Border {
            color: colors.border,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Placeholder behind images that failed to load or are still missing.
pub fn image_frame(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_tertiary)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Pill tag for technologies and highlights.
pub fn tag(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.brand_subtle)),
        text_color: Some(colors.brand_primary),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// One segment of a skill level indicator.
pub fn level_segment(filled: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        let color = if filled {
            colors.brand_primary
        } else {
            colors.surface_tertiary
        };
        container::Style {
            background: Some(Background::Color(color)),
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Ring around the hero avatar.
pub fn avatar(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_tertiary)),
        text_color: Some(colors.brand_primary),
        border: Border {
            color: colors.brand_primary,
            width: border::WIDTH_LG,
            radius: radius::FULL.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Small round badge overlapping the avatar.
pub fn avatar_badge(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.accent)),
        text_color: Some(Color::WHITE),
        border: Border {
            color: colors.surface_primary,
            width: border::WIDTH_LG,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Round icon holder in fact cards and contact rows.
pub fn icon_bubble(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.brand_subtle)),
        text_color: Some(colors.brand_primary),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Brand strip across the top of a degree card.
pub fn accent_bar(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.brand_primary)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Banner shown under the contact form after a submission.
pub fn result_banner(success: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        let accent = if success { colors.success } else { colors.error };
        container::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..accent
            })),
            text_color: Some(colors.text_primary),
            border: Border {
                color: accent,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            ..Default::default()
        }
    }
}

/// Thin separator line above the footer.
pub fn divider(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.border)),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_gains_shadow_when_raised() {
        let resting = navbar(false)(&Theme::Light);
        let raised = navbar(true)(&Theme::Light);
        assert_eq!(resting.shadow, shadow::NONE);
        assert_eq!(raised.shadow, shadow::MD);
    }

    #[test]
    fn level_segments_differ_when_filled() {
        let filled = level_segment(true)(&Theme::Dark);
        let empty = level_segment(false)(&Theme::Dark);
        assert_ne!(filled.background, empty.background);
    }

    #[test]
    fn result_banner_uses_semantic_color() {
        let ok = result_banner(true)(&Theme::Light);
        let failed = result_banner(false)(&Theme::Light);
        assert_eq!(ok.border.color, ColorScheme::light().success);
        assert_eq!(failed.border.color, ColorScheme::light().error);
    }
}
