// SPDX-License-Identifier: MPL-2.0
//! Five-segment skill level indicator.

use crate::content::SkillLevel;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use iced::widget::{container, Row, Space};
use iced::{Element, Length};

/// Number of segments in every indicator.
pub const SEGMENTS: usize = SkillLevel::MAX as usize;

/// Which segments are filled for `level`, left to right.
#[must_use]
pub fn level_segments(level: SkillLevel) -> [bool; SEGMENTS] {
    let filled = usize::from(level.get());
    std::array::from_fn(|index| index < filled)
}

pub fn level_indicator<'a, Message: 'a>(level: SkillLevel) -> Element<'a, Message> {
    let segments = level_segments(level).map(|filled| {
        container(
            Space::new()
                .width(Length::Fixed(sizing::LEVEL_SEGMENT_WIDTH))
                .height(Length::Fixed(sizing::LEVEL_SEGMENT_HEIGHT)),
        )
        .style(styles::container::level_segment(filled))
        .into()
    });

    Row::with_children(segments).spacing(spacing::XXS).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_four_fills_four_of_five() {
        assert_eq!(
            level_segments(SkillLevel::new(4)),
            [true, true, true, true, false]
        );
    }

    #[test]
    fn filled_count_matches_level() {
        for level in SkillLevel::MIN..=SkillLevel::MAX {
            let segments = level_segments(SkillLevel::new(level));
            let filled = segments.iter().filter(|filled| **filled).count();
            assert_eq!(filled, usize::from(level));
            assert!(segments[..filled].iter().all(|filled| *filled));
        }
    }

    #[test]
    fn indicator_builds() {
        let _: Element<'_, ()> = level_indicator(SkillLevel::new(2));
    }
}
