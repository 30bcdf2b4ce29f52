// SPDX-License-Identifier: MPL-2.0
//! Skill categories, each a card listing skills with a level indicator.

use super::Message;
use crate::content::data::{SKILLS_SUBTITLE, SKILLS_TITLE, SKILL_CATEGORIES};
use crate::content::{Skill, SkillCategory};
use crate::ui::components::level_indicator;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::section::{self, Header, Stagger, Surface};
use crate::ui::styles;
use iced::widget::{text, Column, Container, Row, Space};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub stagger: Stagger<'a>,
    pub compact: bool,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let stagger = ctx.stagger;
    let columns = if ctx.compact { 1 } else { 2 };

    let cards = SKILL_CATEGORIES
        .iter()
        .enumerate()
        .map(|(index, category)| {
            // Categories follow the header slots.
            let item = index + 2;
            stagger.slide(item, build_category(category, stagger, item))
        })
        .collect();

    section::section(
        Header {
            title: SKILLS_TITLE,
            subtitle: Some(SKILLS_SUBTITLE),
        },
        section::grid(cards, columns, spacing::XL),
        stagger,
        Surface::Band,
    )
}

/// One row per skill: name on the left, indicator on the right.
fn skill_rows<'a>(
    category: &'a SkillCategory,
    stagger: Stagger<'_>,
    item: usize,
) -> impl Iterator<Item = Element<'a, Message>> + 'a {
    let progress = stagger.progress(item);
    category.skills.iter().map(move |skill: &'a Skill| {
        Row::new()
            .align_y(alignment::Vertical::Center)
            .push(
                text(skill.name)
                    .size(typography::BODY)
                    .style(styles::text::faded(styles::text::primary, progress)),
            )
            .push(Space::new().width(Length::Fill))
            .push(level_indicator(skill.level))
            .into()
    })
}

fn build_category<'a>(
    category: &'a SkillCategory,
    stagger: Stagger<'_>,
    item: usize,
) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .push(
            text(category.title)
                .size(typography::TITLE_MD)
                .style(stagger.text_style(item, styles::text::primary)),
        )
        .push(Column::with_children(skill_rows(category, stagger, item)).spacing(spacing::SM));

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::state::{Reveal, RevealTiming};
    use std::time::Instant;

    #[test]
    fn skills_render_wide_and_compact() {
        let reveal = Reveal::hidden(RevealTiming::SECTION);
        for compact in [false, true] {
            let _ = view(ViewContext {
                stagger: Stagger::new(&reveal, Instant::now()),
                compact,
            });
        }
    }

    #[test]
    fn every_skill_gets_one_row() {
        let reveal = Reveal::hidden(RevealTiming::SECTION);
        let stagger = Stagger::new(&reveal, Instant::now());
        for category in SKILL_CATEGORIES {
            assert_eq!(
                skill_rows(category, stagger, 2).count(),
                category.skills.len()
            );
        }
    }
}
