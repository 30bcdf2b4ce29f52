// SPDX-License-Identifier: MPL-2.0
//! Contact form field styles.
//!
//! Built on top of Iced's default styles so only the surface and the
//! focus border are customized.

use crate::ui::design_tokens::{border, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::{text_editor, text_input};
use iced::{Background, Border, Theme};

fn field_border(colors: &ColorScheme, focused: bool) -> Border {
    Border {
        color: if focused {
            colors.brand_primary
        } else {
            colors.border
        },
        width: if focused {
            border::WIDTH_MD
        } else {
            border::WIDTH_SM
        },
        radius: radius::MD.into(),
    }
}

pub fn field(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let colors = ColorScheme::for_theme(theme);
    let focused = matches!(status, text_input::Status::Focused { .. });

    let mut style = text_input::default(theme, status);
    style.background = Background::Color(colors.surface_secondary);
    style.border = field_border(&colors, focused);
    style.value = colors.text_primary;
    style.placeholder = colors.text_tertiary;
    style
}

pub fn message(theme: &Theme, status: text_editor::Status) -> text_editor::Style {
    let colors = ColorScheme::for_theme(theme);
    let focused = matches!(status, text_editor::Status::Focused { .. });

    let mut style = text_editor::default(theme, status);
    style.background = Background::Color(colors.surface_secondary);
    style.border = field_border(&colors, focused);
    style.value = colors.text_primary;
    style.placeholder = colors.text_tertiary;
    style
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_field_uses_neutral_border() {
        let style = field(&Theme::Light, text_input::Status::Active);
        assert_eq!(style.border.color, ColorScheme::light().border);
        assert_eq!(style.border.width, border::WIDTH_SM);
    }

    #[test]
    fn focus_border_is_brand_colored() {
        let colors = ColorScheme::dark();
        let focused = field_border(&colors, true);
        assert_eq!(focused.color, colors.brand_primary);
        assert!(focused.width > field_border(&colors, false).width);
    }
}
