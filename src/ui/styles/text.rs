// SPDX-License-Identifier: MPL-2.0
//! Text color styles.

use crate::ui::theming::ColorScheme;
use iced::widget::text;
use iced::{Color, Theme};

pub fn primary(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_primary),
    }
}

/// Subtitles, descriptions and other secondary copy.
pub fn muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_secondary),
    }
}

pub fn brand(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).brand_primary),
    }
}

/// Inline validation hints.
pub fn error(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).error),
    }
}

/// Wraps a text style so its color fades in with `alpha`.
pub fn faded(
    style: fn(&Theme) -> text::Style,
    alpha: f32,
) -> impl Fn(&Theme) -> text::Style {
    move |theme: &Theme| {
        let base = style(theme);
        text::Style {
            color: base.color.map(|color| Color {
                a: color.a * alpha.clamp(0.0, 1.0),
                ..color
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faded_scales_alpha() {
        let style = faded(muted, 0.5)(&Theme::Dark);
        let color = style.color.expect("muted sets a color");
        assert!((color.a - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn faded_clamps_alpha() {
        let style = faded(primary, 3.0)(&Theme::Light);
        assert_eq!(style.color.map(|c| c.a), Some(1.0));
    }
}
