// SPDX-License-Identifier: MPL-2.0
//! Degrees with a brand accent bar, followed by a grid of course cards.

use super::{link_message, Message};
use crate::content::data::{COURSES, EDUCATION, EDUCATION_SUBTITLE, EDUCATION_TITLE};
use crate::content::{Course, EducationEntry};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons::{self, Glyph};
use crate::ui::section::{self, Header, Stagger, Surface};
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Row, Space};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub stagger: Stagger<'a>,
    pub compact: bool,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let stagger = ctx.stagger;
    let columns = if ctx.compact { 1 } else { 2 };

    // Degrees take the slots right after the header, courses follow.
    let degrees = Column::with_children(EDUCATION.iter().enumerate().map(|(index, entry)| {
        let item = index + 2;
        stagger.slide(item, build_degree(entry, stagger.progress(item), ctx.compact))
    }))
    .spacing(spacing::LG);

    let first_course = EDUCATION.len() + 2;
    let courses = COURSES
        .iter()
        .enumerate()
        .map(|(index, course)| {
            let item = first_course + index;
            stagger.slide(item, build_course(course, stagger.progress(item)))
        })
        .collect();

    let body = Column::new()
        .spacing(spacing::XXL)
        .push(
            Column::new()
                .spacing(spacing::LG)
                .push(subheading(Glyph::Award, "Education"))
                .push(degrees),
        )
        .push(
            Column::new()
                .spacing(spacing::LG)
                .push(subheading(Glyph::Calendar, "Courses and certificates"))
                .push(section::grid(courses, columns, spacing::LG)),
        );

    section::section(
        Header {
            title: EDUCATION_TITLE,
            subtitle: Some(EDUCATION_SUBTITLE),
        },
        body,
        stagger,
        Surface::Band,
    )
}

fn subheading(glyph: Glyph, label: &'static str) -> Element<'static, Message> {
    Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(icons::sized(glyph, sizing::ICON_LG).style(styles::text::brand))
        .push(text(label).size(typography::TITLE_MD))
        .into()
}

fn build_degree(
    entry: &'static EducationEntry,
    progress: f32,
    compact: bool,
) -> Element<'static, Message> {
    let institution = text(entry.institution)
        .size(typography::TITLE_MD)
        .style(styles::text::faded(styles::text::primary, progress));

    let years = Row::new()
        .spacing(spacing::XXS)
        .align_y(alignment::Vertical::Center)
        .push(icons::sized(Glyph::Calendar, sizing::ICON_SM))
        .push(
            text(entry.years)
                .size(typography::BODY_SM)
                .style(styles::text::faded(styles::text::muted, progress)),
        );

    let heading: Element<'static, Message> = if compact {
        Column::new()
            .spacing(spacing::XXS)
            .push(institution)
            .push(years)
            .into()
    } else {
        Row::new()
            .align_y(alignment::Vertical::Top)
            .push(institution)
            .push(Space::new().width(Length::Fill))
            .push(years)
            .into()
    };

    let details = Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .push(heading)
        .push(
            text(entry.degree)
                .size(typography::BODY_LG)
                .style(styles::text::faded(styles::text::brand, progress)),
        )
        .push(
            text(entry.description)
                .size(typography::BODY)
                .style(styles::text::faded(styles::text::muted, progress)),
        );

    let bar = Container::new(
        Space::new()
            .width(Length::Fill)
            .height(Length::Fixed(spacing::XXS)),
    )
    .style(styles::container::accent_bar);

    Container::new(
        Column::new()
            .push(bar)
            .push(Container::new(details).padding(spacing::LG)),
    )
    .width(Length::Fill)
    .clip(true)
    .style(styles::container::card)
    .into()
}

fn build_course(course: &'static Course, progress: f32) -> Element<'static, Message> {
    let mut content = Column::new()
        .spacing(spacing::XS)
        .push(
            text(course.name)
                .size(typography::TITLE_SM)
                .style(styles::text::faded(styles::text::primary, progress)),
        )
        .push(
            Row::new()
                .align_y(alignment::Vertical::Center)
                .push(
                    text(course.provider)
                        .size(typography::BODY)
                        .style(styles::text::faded(styles::text::primary, progress)),
                )
                .push(Space::new().width(Length::Fill))
                .push(
                    text(format!("{}, {}", course.year, course.duration))
                        .size(typography::BODY_SM)
                        .style(styles::text::faded(styles::text::muted, progress)),
                ),
        );

    if let Some(certificate) = course.certificate_url {
        content = content.push(
            button(
                Row::new()
                    .spacing(spacing::XXS)
                    .align_y(alignment::Vertical::Center)
                    .push(icons::sized(Glyph::Award, sizing::ICON_SM))
                    .push(text("View certificate").size(typography::BODY_SM)),
            )
            .padding(0)
            .style(styles::button::link)
            .on_press_maybe(link_message(certificate)),
        );
    }

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}
