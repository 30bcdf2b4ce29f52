// SPDX-License-Identifier: MPL-2.0
//! Project cards: cover image, description, technologies and links.

use super::{link_message, Message};
use crate::app::paths;
use crate::content::data::{PROJECTS, PROJECTS_SUBTITLE, PROJECTS_TITLE};
use crate::content::Project;
use crate::ui::components::tag_row;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons::{self, Glyph};
use crate::ui::section::{self, Header, Stagger, Surface};
use crate::ui::styles;
use iced::widget::{button, image, text, Column, Container, Row};
use iced::{alignment, ContentFit, Element, Length};

pub struct ViewContext<'a> {
    pub stagger: Stagger<'a>,
    pub compact: bool,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let stagger = ctx.stagger;
    let columns = if ctx.compact { 1 } else { 2 };

    let cards = PROJECTS
        .iter()
        .enumerate()
        .map(|(index, project)| {
            let item = index + 2;
            stagger.slide(item, build_card(project, stagger.progress(item)))
        })
        .collect();

    section::section(
        Header {
            title: PROJECTS_TITLE,
            subtitle: Some(PROJECTS_SUBTITLE),
        },
        section::grid(cards, columns, spacing::XL),
        stagger,
        Surface::Page,
    )
}

fn build_card(project: &'static Project, progress: f32) -> Element<'static, Message> {
    let cover = Container::new(
        image(image::Handle::from_path(paths::asset_path(project.image)))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::PROJECT_IMAGE_HEIGHT))
            .content_fit(ContentFit::Cover),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::PROJECT_IMAGE_HEIGHT))
    .clip(true)
    .style(styles::container::image_frame);

    let mut links = Row::new().spacing(spacing::MD);
    if let Some(demo) = project.demo_url {
        links = links.push(link_button(Glyph::External, "Demo", demo));
    }
    if let Some(source) = project.source_url {
        links = links.push(link_button(Glyph::Code, "GitHub", source));
    }

    let details = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::LG)
        .push(
            text(project.title)
                .size(typography::TITLE_MD)
                .style(styles::text::faded(styles::text::primary, progress)),
        )
        .push(
            text(project.description)
                .size(typography::BODY)
                .style(styles::text::faded(styles::text::muted, progress)),
        )
        .push(tag_row(project.technologies))
        .push(links);

    Container::new(Column::new().push(cover).push(details))
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

fn link_button(glyph: Glyph, label: &'static str, target: &'static str) -> Element<'static, Message> {
    button(
        Row::new()
            .spacing(spacing::XXS)
            .align_y(alignment::Vertical::Center)
            .push(icons::sized(glyph, sizing::ICON_SM))
            .push(text(label).size(typography::BODY_SM)),
    )
    .padding(0)
    .style(styles::button::link)
    .on_press_maybe(link_message(target))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::state::{Reveal, RevealTiming};
    use std::time::Instant;

    #[test]
    fn projects_render_wide_and_compact() {
        let reveal = Reveal::hidden(RevealTiming::SECTION);
        for compact in [false, true] {
            let _ = view(ViewContext {
                stagger: Stagger::new(&reveal, Instant::now()),
                compact,
            });
        }
    }

    #[test]
    fn project_without_links_still_renders() {
        static BARE: Project = Project {
            title: "Bare",
            description: "No links",
            image: "img/missing.jpg",
            technologies: &[],
            demo_url: None,
            source_url: None,
        };
        let _ = build_card(&BARE, 1.0);
    }
}
