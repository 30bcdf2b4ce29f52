// SPDX-License-Identifier: MPL-2.0
//! Page footer: brand mark, copyright line and a scroll-to-top button.

use crate::content::{Profile, SectionId};
use crate::links::Link;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons::{self, Glyph};
use crate::ui::sections::Message;
use crate::ui::styles;
use chrono::Datelike;
use iced::widget::{button, container, text, Column, Container, Row, Space};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub profile: &'a Profile,
    /// Year printed in the copyright line.
    pub year: i32,
    pub compact: bool,
}

impl<'a> ViewContext<'a> {
    /// Context stamped with the current local year.
    pub fn now(profile: &'a Profile, compact: bool) -> Self {
        Self {
            profile,
            year: chrono::Local::now().year(),
            compact,
        }
    }
}

#[must_use]
pub fn copyright_line(name: &str, year: i32) -> String {
    format!("© {year} {name}. All rights reserved.")
}

/// `< BK />` in the brand color.
#[must_use]
pub fn brand_mark(initials: &str) -> String {
    format!("< {initials} />")
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let home = Message::OpenLink(Link::Section(SectionId::Hero));

    let brand = button(
        text(brand_mark(ctx.profile.initials))
            .size(typography::TITLE_MD)
            .style(styles::text::brand),
    )
    .padding(0)
    .style(styles::button::link)
    .on_press(home.clone());

    let copyright = text(copyright_line(ctx.profile.name, ctx.year))
        .size(typography::BODY_SM)
        .style(styles::text::muted);

    let made_with = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(
            text("Made with")
                .size(typography::BODY_SM)
                .style(styles::text::muted),
        )
        .push(icons::sized(Glyph::Heart, sizing::ICON_SM).style(styles::text::error))
        .push(
            button(icons::sized(Glyph::ArrowUp, sizing::ICON_SM))
                .padding(spacing::XS)
                .style(styles::button::primary)
                .on_press(home),
        );

    let content: Element<'a, Message> = if ctx.compact {
        Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(brand)
            .push(copyright)
            .push(made_with)
            .into()
    } else {
        Row::new()
            .align_y(alignment::Vertical::Center)
            .push(brand)
            .push(Space::new().width(Length::Fill))
            .push(copyright)
            .push(Space::new().width(Length::Fill))
            .push(made_with)
            .into()
    };

    let divider = Container::new(Space::new().width(Length::Fill).height(Length::Fixed(1.0)))
        .style(styles::container::divider);

    Column::new()
        .push(divider)
        .push(
            container(
                Container::new(content)
                    .width(Length::Fill)
                    .max_width(sizing::CONTENT_MAX_WIDTH),
            )
            .width(Length::Fill)
            .center_x(Length::Fill)
            .padding([spacing::XL, spacing::LG])
            .style(styles::container::band),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::data::PROFILE;

    #[test]
    fn copyright_mentions_year_and_owner() {
        assert_eq!(
            copyright_line("Bekzat Kuanyshov", 2026),
            "© 2026 Bekzat Kuanyshov. All rights reserved."
        );
    }

    #[test]
    fn brand_mark_wraps_initials() {
        assert_eq!(brand_mark("BK"), "< BK />");
    }

    #[test]
    fn footer_renders_wide_and_compact() {
        for compact in [false, true] {
            let _ = view(ViewContext::now(&PROFILE, compact));
        }
    }
}
