// SPDX-License-Identifier: MPL-2.0
//! Biography paragraphs with a column of fact cards.

use super::Message;
use crate::content::data::{ABOUT_FACTS, ABOUT_PARAGRAPHS, ABOUT_SUBTITLE, ABOUT_TITLE};
use crate::content::AboutFact;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::section::{self, Header, Stagger, Surface};
use crate::ui::styles;
use iced::widget::{text, Column, Container, Row};
use iced::{alignment, Element, Length};

/// Stagger index of the first fact card; earlier slots belong to the header
/// and the biography.
const FIRST_FACT_INDEX: usize = 3;

pub struct ViewContext<'a> {
    pub stagger: Stagger<'a>,
    pub compact: bool,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let stagger = ctx.stagger;

    let biography = Column::with_children(ABOUT_PARAGRAPHS.iter().map(|paragraph| {
        text(*paragraph)
            .size(typography::BODY_LG)
            .line_height(1.6)
            .style(stagger.text_style(2, styles::text::muted))
            .into()
    }))
    .spacing(spacing::LG);

    let facts = Column::with_children(ABOUT_FACTS.iter().enumerate().map(|(index, fact)| {
        stagger.slide(FIRST_FACT_INDEX + index, build_fact(fact, stagger, index))
    }))
    .spacing(spacing::MD);

    let body: Element<'a, Message> = if ctx.compact {
        Column::new()
            .spacing(spacing::XL)
            .push(biography)
            .push(facts)
            .into()
    } else {
        Row::new()
            .spacing(spacing::XL)
            .push(Container::new(biography).width(Length::FillPortion(2)))
            .push(Container::new(facts).width(Length::FillPortion(1)))
            .into()
    };

    section::section(
        Header {
            title: ABOUT_TITLE,
            subtitle: Some(ABOUT_SUBTITLE),
        },
        body,
        stagger,
        Surface::Page,
    )
}

fn build_fact<'a>(fact: &'a AboutFact, stagger: Stagger<'_>, index: usize) -> Element<'a, Message> {
    let item = FIRST_FACT_INDEX + index;

    let bubble = Container::new(icons::sized(fact.icon, sizing::ICON_MD))
        .padding(spacing::SM)
        .style(styles::container::icon_bubble);

    let labels = Column::new()
        .spacing(spacing::XXS)
        .push(
            text(fact.label)
                .size(typography::BODY)
                .style(stagger.text_style(item, styles::text::primary)),
        )
        .push(
            text(fact.value)
                .size(typography::BODY_SM)
                .style(stagger.text_style(item, styles::text::muted)),
        );

    Container::new(
        Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Top)
            .push(bubble)
            .push(labels),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::card)
    .into()
}
