// SPDX-License-Identifier: MPL-2.0
//! Generic section wrapper with its entrance animation.
//!
//! Iced widgets have no generic opacity, so a reveal is drawn as a slide
//! (padding moved from the bottom to the top of the content, keeping the
//! section height stable for the scroll tracker) combined with a fade of
//! the text colors.

use crate::app::config::{REVEAL_ITEM_SLIDE_PX, REVEAL_SLIDE_PX};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::Reveal;
use crate::ui::styles;
use iced::widget::{container, text, Column, Container, Row, Space};
use iced::{alignment, Element, Length, Padding, Theme};
use std::time::Instant;

/// Animation frame of one section, shared by everything it renders.
#[derive(Debug, Clone, Copy)]
pub struct Stagger<'a> {
    reveal: &'a Reveal,
    now: Instant,
}

impl<'a> Stagger<'a> {
    #[must_use]
    pub fn new(reveal: &'a Reveal, now: Instant) -> Self {
        Self { reveal, now }
    }

    #[must_use]
    pub fn section_progress(&self) -> f32 {
        self.reveal.progress(self.now)
    }

    #[must_use]
    pub fn progress(&self, index: usize) -> f32 {
        self.reveal.item_progress(index, self.now)
    }

    /// Slides the `index`-th child into place.
    pub fn slide<'b, Message: 'b>(
        &self,
        index: usize,
        content: impl Into<Element<'b, Message>>,
    ) -> Element<'b, Message> {
        slide_in(content, self.progress(index), REVEAL_ITEM_SLIDE_PX)
    }

    /// Text style of the `index`-th child, faded with its progress.
    pub fn text_style(
        &self,
        index: usize,
        base: fn(&Theme) -> text::Style,
    ) -> impl Fn(&Theme) -> text::Style {
        styles::text::faded(base, self.progress(index))
    }
}

/// Moves `content` down by `(1 - progress) * distance` without changing
/// the total height.
pub fn slide_in<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    progress: f32,
    distance: f32,
) -> Element<'a, Message> {
    let progress = progress.clamp(0.0, 1.0);
    let top = (1.0 - progress) * distance;
    Container::new(content)
        .padding(Padding {
            top,
            bottom: distance - top,
            ..Padding::ZERO
        })
        .into()
}

/// Lays `items` out in rows of `columns` equally wide cells.
///
/// The last row is padded with empty cells so its items keep the same
/// width as the rows above.
pub fn grid<'a, Message: 'a>(
    items: Vec<Element<'a, Message>>,
    columns: usize,
    gap: f32,
) -> Element<'a, Message> {
    let columns = columns.max(1);
    let mut rows = Column::new().spacing(gap).width(Length::Fill);
    let mut items = items.into_iter().peekable();

    while items.peek().is_some() {
        let mut row = Row::new().spacing(gap).width(Length::Fill);
        for _ in 0..columns {
            let cell: Element<'a, Message> = match items.next() {
                Some(item) => item,
                None => Space::new().into(),
            };
            row = row.push(Container::new(cell).width(Length::FillPortion(1)));
        }
        rows = rows.push(row);
    }

    rows.into()
}

/// Heading and optional subtitle of a section.
#[derive(Debug, Clone, Copy)]
pub struct Header<'a> {
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
}

/// Section background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Surface {
    #[default]
    Page,
    Band,
}

/// Renders `header` and `body` centered in a full-width band.
///
/// Children are staggered: heading first, subtitle second, body third.
pub fn section<'a, Message: 'a>(
    header: Header<'a>,
    body: impl Into<Element<'a, Message>>,
    stagger: Stagger<'_>,
    surface: Surface,
) -> Element<'a, Message> {
    let mut column = Column::new()
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .align_x(alignment::Horizontal::Center)
        .spacing(spacing::XS)
        .push(
            text(header.title)
                .size(typography::TITLE_LG)
                .style(stagger.text_style(0, styles::text::primary)),
        );

    if let Some(subtitle) = header.subtitle {
        column = column.push(
            text(subtitle)
                .size(typography::BODY_LG)
                .style(stagger.text_style(1, styles::text::muted)),
        );
    }

    column = column
        .push(Space::new().height(Length::Fixed(spacing::XL)))
        .push(stagger.slide(2, body));

    let style = match surface {
        Surface::Page => styles::container::page,
        Surface::Band => styles::container::band,
    };

    container(slide_in(column, stagger.section_progress(), REVEAL_SLIDE_PX))
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([spacing::XXXL, spacing::LG])
        .style(style)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::state::RevealTiming;

    #[test]
    fn hidden_section_builds() {
        let reveal = Reveal::hidden(RevealTiming::SECTION);
        let stagger = Stagger::new(&reveal, Instant::now());
        let header = Header {
            title: "Skills",
            subtitle: Some("What I work with"),
        };
        let _: Element<'_, ()> = section(header, text("body"), stagger, Surface::Band);
    }

    #[test]
    fn grid_builds_partial_rows() {
        let items: Vec<Element<'_, ()>> = (0..3).map(|i| text(i.to_string()).into()).collect();
        let _ = grid(items, 2, spacing::MD);
        let _: Element<'_, ()> = grid(Vec::new(), 2, spacing::MD);
    }

    #[test]
    fn hidden_children_have_no_progress() {
        let reveal = Reveal::hidden(RevealTiming::SECTION);
        let stagger = Stagger::new(&reveal, Instant::now());
        assert_eq!(stagger.section_progress(), 0.0);
        assert_eq!(stagger.progress(2), 0.0);
    }

    #[test]
    fn faded_text_is_transparent_before_reveal() {
        let reveal = Reveal::hidden(RevealTiming::SECTION);
        let stagger = Stagger::new(&reveal, Instant::now());
        let style = stagger.text_style(0, styles::text::primary)(&Theme::Light);
        assert_eq!(style.color.map(|color| color.a), Some(0.0));
    }

    #[test]
    fn revealed_children_settle() {
        let start = Instant::now();
        let mut reveal = Reveal::hidden(RevealTiming::SECTION);
        reveal.trigger(start);
        let stagger = Stagger::new(&reveal, start + std::time::Duration::from_secs(5));
        assert_eq!(stagger.progress(0), 1.0);
        assert_eq!(stagger.progress(2), 1.0);
    }
}
