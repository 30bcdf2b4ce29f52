// SPDX-License-Identifier: MPL-2.0
//! Pill tags.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{container, text, Row};
use iced::Element;

pub fn tag<'a, Message: 'a>(label: &'a str) -> Element<'a, Message> {
    container(text(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::tag)
        .into()
}

/// Tags laid out left to right, wrapping onto new lines when needed.
pub fn tag_row<'a, Message: 'a>(labels: &'a [&'a str]) -> Element<'a, Message> {
    Row::with_children(labels.iter().map(|label| tag(label)))
        .spacing(spacing::XS)
        .wrap()
        .vertical_spacing(spacing::XS)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_row_builds_for_empty_and_filled_lists() {
        let _: Element<'_, ()> = tag_row(&[]);
        let _: Element<'_, ()> = tag_row(&["React", "Vite"]);
    }
}
