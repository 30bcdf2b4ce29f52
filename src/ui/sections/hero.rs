// SPDX-License-Identifier: MPL-2.0
//! Hero banner: role, name, tagline, highlight tags, calls to action and
//! the avatar.
//!
//! The banner fills the first screen. Its children are staggered from
//! page load; the "scroll down" hint appears last.

use super::{link_message, Message};
use crate::app::paths;
use crate::content::{Profile, SectionId};
use crate::links::Link;
use crate::ui::components::{tag_row, Button, ButtonSize, ButtonVariant};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons::{self, Glyph};
use crate::ui::section::Stagger;
use crate::ui::styles;
use iced::widget::{container, image, text, Column, Container, Row, Space, Stack};
use iced::{alignment, ContentFit, Element, Length};

/// Child index of the delayed "scroll down" hint.
const SCROLL_HINT_INDEX: usize = 7;

/// Smallest height of the banner, whatever the window size.
const MIN_HEIGHT: f32 = 560.0;

pub struct ViewContext<'a> {
    pub profile: &'a Profile,
    pub stagger: Stagger<'a>,
    /// Height of the scroll viewport; the banner fills it.
    pub viewport_height: f32,
    pub compact: bool,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let intro = build_intro(&ctx);
    let avatar = ctx.stagger.slide(0, build_avatar(ctx.profile));

    let layout: Element<'a, Message> = if ctx.compact {
        Column::new()
            .spacing(spacing::XL)
            .align_x(alignment::Horizontal::Center)
            .push(avatar)
            .push(intro)
            .into()
    } else {
        Row::new()
            .spacing(spacing::XXL)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(intro).width(Length::FillPortion(3)))
            .push(
                Container::new(avatar)
                    .width(Length::FillPortion(2))
                    .center_x(Length::FillPortion(2)),
            )
            .into()
    };

    let hint_progress = ctx.stagger.progress(SCROLL_HINT_INDEX);
    let scroll_hint = Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(
            text("Scroll down")
                .size(typography::BODY_SM)
                .style(ctx.stagger.text_style(SCROLL_HINT_INDEX, styles::text::muted)),
        )
        .push(
            icons::sized(Glyph::ArrowDown, sizing::ICON_MD)
                .style(styles::text::faded(styles::text::brand, hint_progress)),
        );

    let content = Column::new()
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .height(Length::Fill)
        .push(Space::new().height(Length::Fill))
        .push(layout)
        .push(Space::new().height(Length::Fill))
        .push(Container::new(scroll_hint).center_x(Length::Fill));

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(ctx.viewport_height.max(MIN_HEIGHT)))
        .center_x(Length::Fill)
        .padding([spacing::XL, spacing::LG])
        .style(styles::container::page)
        .into()
}

fn build_intro<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let stagger = ctx.stagger;
    let profile = ctx.profile;

    let role = text(profile.role)
        .size(typography::BODY_LG)
        .style(stagger.text_style(0, styles::text::brand));

    let name = text(profile.name)
        .size(typography::DISPLAY)
        .style(stagger.text_style(1, styles::text::primary));

    let tagline = text(profile.tagline)
        .size(typography::TITLE_MD)
        .style(stagger.text_style(2, styles::text::muted));

    let actions = Row::new()
        .spacing(spacing::MD)
        .push(
            Button::new("Download CV")
                .variant(ButtonVariant::Primary)
                .size(ButtonSize::Lg)
                .icon(Glyph::Download)
                .on_press_maybe(link_message(profile.resume))
                .view(),
        )
        .push(
            Button::new("Contact me")
                .variant(ButtonVariant::Outline)
                .size(ButtonSize::Lg)
                .icon(Glyph::Mail)
                .on_press(Message::OpenLink(Link::Section(SectionId::Contact)))
                .view(),
        )
        .wrap()
        .vertical_spacing(spacing::SM);

    Column::new()
        .spacing(spacing::MD)
        .push(stagger.slide(0, role))
        .push(stagger.slide(1, name))
        .push(stagger.slide(2, tagline))
        .push(stagger.slide(3, tag_row(profile.highlights)))
        .push(stagger.slide(4, actions))
        .into()
}

/// Round avatar with the code badge in its corner.
fn build_avatar<'a>(profile: &'a Profile) -> Element<'a, Message> {
    let photo = image(image::Handle::from_path(paths::asset_path(profile.avatar)))
        .width(Length::Fill)
        .height(Length::Fill)
        .content_fit(ContentFit::Cover);

    let ring = Container::new(
        Stack::new()
            .push(
                Container::new(text(profile.initials).size(typography::DISPLAY))
                    .center(Length::Fill),
            )
            .push(photo),
    )
    .width(Length::Fixed(sizing::AVATAR))
    .height(Length::Fixed(sizing::AVATAR))
    .padding(spacing::XS)
    .clip(true)
    .style(styles::container::avatar);

    let badge = Container::new(text("</>").size(typography::BODY))
        .width(Length::Fixed(sizing::AVATAR_BADGE))
        .height(Length::Fixed(sizing::AVATAR_BADGE))
        .center(Length::Fixed(sizing::AVATAR_BADGE))
        .style(styles::container::avatar_badge);

    let badge_layer = Container::new(badge)
        .width(Length::Fixed(sizing::AVATAR))
        .height(Length::Fixed(sizing::AVATAR))
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom);

    Stack::new().push(ring).push(badge_layer).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::data::PROFILE;
    use crate::ui::state::{Reveal, RevealTiming};
    use std::time::Instant;

    #[test]
    fn hero_renders_wide_and_compact() {
        let reveal = Reveal::hidden(RevealTiming::HERO);
        for compact in [false, true] {
            let _ = view(ViewContext {
                profile: &PROFILE,
                stagger: Stagger::new(&reveal, Instant::now()),
                viewport_height: 720.0,
                compact,
            });
        }
    }
}
