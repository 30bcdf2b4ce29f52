// SPDX-License-Identifier: MPL-2.0
//! Scroll position tracking for the single-page document.
//!
//! The page is one vertical scrollable holding every section in document
//! order. Iced does not report where a child ends up, so each section
//! reports its measured height and the tracker derives the tops as a
//! running sum. A section whose predecessors are not all measured yet has
//! no known top and takes part in neither the active-section computation
//! nor the reveal checks.

use crate::app::config::{
    ACTIVE_SECTION_OFFSET_PX, REVEAL_VISIBILITY_THRESHOLD, SCROLLED_NAVBAR_THRESHOLD_PX,
};
use crate::content::SectionId;
use crate::ui::state::reveal::ease_out_cubic;
use std::time::{Duration, Instant};

const SECTION_COUNT: usize = SectionId::ALL.len();

/// What changed after feeding the tracker a new measurement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollUpdate {
    /// New active section, if it changed.
    pub active: Option<SectionId>,
    /// Sections that became visible for the first time.
    pub revealed: Vec<SectionId>,
}

impl ScrollUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_none() && self.revealed.is_empty()
    }
}

/// Tracks the scroll offset, section geometry and one-shot visibility.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    heights: [Option<f32>; SECTION_COUNT],
    footer_height: f32,
    revealed: [bool; SECTION_COUNT],
    offset_y: f32,
    viewport_height: Option<f32>,
    active: SectionId,
    active_offset: f32,
    reveal_threshold: f32,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::with_thresholds(ACTIVE_SECTION_OFFSET_PX, REVEAL_VISIBILITY_THRESHOLD)
    }

    /// Tracker with custom activation offset (px) and reveal fraction.
    #[must_use]
    pub fn with_thresholds(active_offset: f32, reveal_threshold: f32) -> Self {
        Self {
            heights: [None; SECTION_COUNT],
            footer_height: 0.0,
            revealed: [false; SECTION_COUNT],
            offset_y: 0.0,
            viewport_height: None,
            active: SectionId::Hero,
            active_offset,
            reveal_threshold: reveal_threshold.clamp(f32::EPSILON, 1.0),
        }
    }

    #[must_use]
    pub fn active(&self) -> SectionId {
        self.active
    }

    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset_y
    }

    #[must_use]
    pub fn viewport_height(&self) -> Option<f32> {
        self.viewport_height
    }

    /// True once the page has left its resting position.
    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.offset_y > SCROLLED_NAVBAR_THRESHOLD_PX
    }

    #[must_use]
    pub fn is_revealed(&self, id: SectionId) -> bool {
        self.revealed[id.index()]
    }

    #[must_use]
    pub fn height(&self, id: SectionId) -> Option<f32> {
        self.heights[id.index()]
    }

    /// Absolute top of a section inside the document.
    #[must_use]
    pub fn top(&self, id: SectionId) -> Option<f32> {
        self.heights[..id.index()]
            .iter()
            .try_fold(0.0, |top, height| height.map(|h| top + h))
    }

    /// Scroll offset that brings `id` to the top of the viewport.
    #[must_use]
    pub fn scroll_target(&self, id: SectionId) -> Option<f32> {
        self.top(id)
    }

    /// Height of everything inside the scrollable, once every section is
    /// measured. An unmeasured footer counts as zero.
    #[must_use]
    pub fn document_height(&self) -> Option<f32> {
        let sections = self
            .heights
            .iter()
            .try_fold(0.0, |total, height| height.map(|h| total + h))?;
        Some(sections + self.footer_height)
    }

    /// [`Self::scroll_target`] as a fraction of the scrollable range, the
    /// form expected by `snap_to`.
    #[must_use]
    pub fn relative_target(&self, id: SectionId) -> Option<f32> {
        let target = self.scroll_target(id)?;
        Some(to_relative(target, self.scroll_range()?))
    }

    /// Current offset as a fraction of the scrollable range.
    #[must_use]
    pub fn relative_offset(&self) -> Option<f32> {
        Some(to_relative(self.offset_y, self.scroll_range()?))
    }

    /// Largest offset the page can scroll to.
    #[must_use]
    pub fn scroll_range(&self) -> Option<f32> {
        Some((self.document_height()? - self.viewport_height?).max(0.0))
    }


    /// Share of the section currently inside the viewport, in `0.0..=1.0`.
    #[must_use]
    pub fn visible_fraction(&self, id: SectionId) -> Option<f32> {
        let top = self.top(id)?;
        let height = self.height(id)?;
        let viewport = self.viewport_height?;
        if height <= 0.0 {
            return Some(0.0);
        }
        let bottom = top + height;
        let view_top = self.offset_y;
        let view_bottom = view_top + viewport;
        let overlap = (bottom.min(view_bottom) - top.max(view_top)).max(0.0);
        Some((overlap / height).min(1.0))
    }

    /// Records the measured height of a section.
    pub fn set_section_height(&mut self, id: SectionId, height: f32) -> ScrollUpdate {
        let height = sanitize(height);
        if self.heights[id.index()] == Some(height) {
            return ScrollUpdate::default();
        }
        self.heights[id.index()] = Some(height);
        self.refresh()
    }

    /// Records the height of the footer below the last section.
    pub fn set_footer_height(&mut self, height: f32) {
        self.footer_height = sanitize(height);
    }

    /// Records the height of the scroll viewport.
    pub fn set_viewport_height(&mut self, height: f32) -> ScrollUpdate {
        let height = sanitize(height);
        if self.viewport_height == Some(height) {
            return ScrollUpdate::default();
        }
        self.viewport_height = Some(height);
        self.refresh()
    }

    /// Records a new scroll position reported by the scrollable.
    pub fn on_scroll(&mut self, offset_y: f32, viewport_height: f32) -> ScrollUpdate {
        self.offset_y = sanitize(offset_y);
        self.viewport_height = Some(sanitize(viewport_height));
        self.refresh()
    }

    /// Sections that crossed the reveal threshold and were never reported.
    ///
    /// Each section is returned at most once per tracker.
    pub fn newly_visible(&mut self) -> Vec<SectionId> {
        let mut revealed = Vec::new();
        for id in SectionId::ALL {
            if self.revealed[id.index()] {
                continue;
            }
            let visible = self
                .visible_fraction(id)
                .is_some_and(|fraction| fraction >= self.reveal_threshold);
            if visible {
                self.revealed[id.index()] = true;
                revealed.push(id);
            }
        }
        revealed
    }

    fn refresh(&mut self) -> ScrollUpdate {
        let active = self.compute_active();
        let changed = (active != self.active).then_some(active);
        if let Some(section) = changed {
            tracing::trace!(%section, offset = self.offset_y, "active section changed");
        }
        self.active = active;

        ScrollUpdate {
            active: changed,
            revealed: self.newly_visible(),
        }
    }

    /// Last section, in document order, whose top is within the activation
    /// offset of the viewport top.
    fn compute_active(&self) -> SectionId {
        SectionId::ALL
            .into_iter()
            .filter(|id| {
                self.top(*id)
                    .is_some_and(|top| top - self.offset_y < self.active_offset)
            })
            .last()
            .unwrap_or(SectionId::Hero)
    }
}

/// Eased scroll between two relative offsets of the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
    /// Last position handed to the scrollable.
    snapped: f32,
}

impl SmoothScroll {
    #[must_use]
    pub fn new(from: f32, to: f32, started_at: Instant, duration: Duration) -> Self {
        let from = from.clamp(0.0, 1.0);
        Self {
            from,
            to: to.clamp(0.0, 1.0),
            started_at,
            duration,
            snapped: from,
        }
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Relative offset at `now`.
    #[must_use]
    pub fn position(&self, now: Instant) -> f32 {
        if self.is_finished(now) {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * ease_out_cubic(t)
    }

    /// Moves to the position at `now` and returns it.
    pub fn advance(&mut self, now: Instant) -> f32 {
        self.snapped = self.position(now);
        self.snapped
    }

    #[must_use]
    pub fn snapped(&self) -> f32 {
        self.snapped
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.duration.is_zero() || now.saturating_duration_since(self.started_at) >= self.duration
    }
}

fn to_relative(offset: f32, range: f32) -> f32 {
    if range <= 0.0 {
        return 0.0;
    }
    (offset / range).clamp(0.0, 1.0)
}

fn sanitize(value: f32) -> f32 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}
