// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are small cards with a severity-colored border and a dismiss
//! button, stacked in the bottom-right corner above the page.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::ui::design_tokens::{border, radius, shadow, sizing, spacing, typography};
use crate::ui::icons::{self, Glyph};
use crate::ui::styles;
use iced::widget::{button, container, text, Column, Container, Row, Space};
use iced::{alignment, Color, Element, Length, Theme};

pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view(notification: &Notification) -> Element<'_, Message> {
        let severity = notification.severity();
        let accent_color = severity.color();

        let icon = icons::sized(severity.glyph(), sizing::ICON_MD)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent_color),
            });

        let message = text(notification.message()).size(typography::BODY_SM);

        let dismiss = button(icons::sized(Glyph::Close, sizing::ICON_SM))
            .on_press(Message::Dismiss(notification.id()))
            .padding(spacing::XXS)
            .style(styles::button::ghost);

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(icon)
            .push(Container::new(message).width(Length::Fill))
            .push(dismiss);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders every visible toast in the bottom-right corner.
    pub fn view_overlay(manager: &Manager) -> Element<'_, Message> {
        if !manager.has_notifications() {
            return Space::new().into();
        }

        let toasts = Column::with_children(manager.visible().map(Self::view))
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(toasts)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.base.color.into()),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let style = toast_container_style(&Theme::Dark, palette::WARNING_500);
        assert_eq!(style.border.color, palette::WARNING_500);
        assert!(style.background.is_some());
    }

    #[test]
    fn overlay_builds_with_and_without_toasts() {
        let mut manager = Manager::new();
        let _ = Toast::view_overlay(&manager);

        manager.push(Notification::warning("Theme preference was not saved"));
        let _ = Toast::view_overlay(&manager);
    }
}
