// SPDX-License-Identifier: MPL-2.0
//! Button builder with variants and sizes.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::components::{Button, ButtonSize, ButtonVariant};
//!
//! Button::new("Download CV")
//!     .variant(ButtonVariant::Outline)
//!     .size(ButtonSize::Lg)
//!     .icon(Glyph::Download)
//!     .on_press(Message::OpenLink(link))
//!     .view()
//! ```

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::icons::{self, Glyph};
use crate::ui::styles;
use iced::widget::{button, text, Row};
use iced::{alignment, Element, Length, Padding};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    #[must_use]
    pub fn padding(self) -> Padding {
        match self {
            ButtonSize::Sm => Padding::from([spacing::XXS + 2.0, spacing::SM]),
            ButtonSize::Md => Padding::from([spacing::XS + 2.0, spacing::LG]),
            ButtonSize::Lg => Padding::from([spacing::SM + 2.0, spacing::XL]),
        }
    }

    #[must_use]
    pub fn text_size(self) -> f32 {
        match self {
            ButtonSize::Sm => typography::BODY_SM,
            ButtonSize::Md => typography::BODY,
            ButtonSize::Lg => typography::BODY_LG,
        }
    }
}

/// A labelled button. Without `on_press` it renders disabled.
pub struct Button<'a, Message> {
    label: &'a str,
    variant: ButtonVariant,
    size: ButtonSize,
    icon: Option<Glyph>,
    full_width: bool,
    on_press: Option<Message>,
}

impl<'a, Message: Clone + 'a> Button<'a, Message> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            icon: None,
            full_width: false,
            on_press: None,
        }
    }

    #[must_use]
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Glyph drawn before the label.
    #[must_use]
    pub fn icon(mut self, glyph: Glyph) -> Self {
        self.icon = Some(glyph);
        self
    }

    #[must_use]
    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    #[must_use]
    pub fn on_press(mut self, message: Message) -> Self {
        self.on_press = Some(message);
        self
    }

    #[must_use]
    pub fn on_press_maybe(mut self, message: Option<Message>) -> Self {
        self.on_press = message;
        self
    }

    pub fn view(self) -> Element<'a, Message> {
        let text_size = self.size.text_size();

        let mut content = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center);
        if let Some(glyph) = self.icon {
            content = content.push(icons::sized(glyph, text_size));
        }
        content = content.push(text(self.label).size(text_size));

        let style = match self.variant {
            ButtonVariant::Primary => styles::button::primary,
            ButtonVariant::Secondary => styles::button::secondary,
            ButtonVariant::Outline => styles::button::outline,
        };

        let container = iced::widget::container(content).center_x(if self.full_width {
            Length::Fill
        } else {
            Length::Shrink
        });

        button(container)
            .padding(self.size.padding())
            .width(if self.full_width {
                Length::Fill
            } else {
                Length::Shrink
            })
            .style(style)
            .on_press_maybe(self.on_press)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    enum Msg {
        Pressed,
    }

    #[test]
    fn larger_sizes_have_larger_text() {
        assert!(ButtonSize::Sm.text_size() < ButtonSize::Md.text_size());
        assert!(ButtonSize::Md.text_size() < ButtonSize::Lg.text_size());
    }

    #[test]
    fn defaults_are_primary_and_medium() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
        assert_eq!(ButtonSize::default(), ButtonSize::Md);
    }

    #[test]
    fn every_variant_builds() {
        for variant in [
            ButtonVariant::Primary,
            ButtonVariant::Secondary,
            ButtonVariant::Outline,
        ] {
            let _: Element<'_, Msg> = Button::new("Contact me")
                .variant(variant)
                .size(ButtonSize::Lg)
                .icon(Glyph::Mail)
                .full_width()
                .on_press(Msg::Pressed)
                .view();
        }
    }

    #[test]
    fn button_without_handler_builds_disabled() {
        let _: Element<'_, Msg> = Button::new("Sending...").view();
    }
}
