// SPDX-License-Identifier: MPL-2.0
//! One-shot entrance animations.
//!
//! A [`Reveal`] starts hidden and is triggered at most once. Progress is a
//! pure function of the trigger instant and `now`, so views can render any
//! frame without the animation holding mutable state.

use crate::app::config::{
    HERO_STAGGER, MAX_STAGGERED_ITEMS, REVEAL_DURATION, REVEAL_ITEM_DURATION, REVEAL_STAGGER,
};
use crate::content::SectionId;
use std::time::{Duration, Instant};

/// Durations of a reveal and of its staggered children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTiming {
    pub duration: Duration,
    pub item_duration: Duration,
    pub stagger: Duration,
}

impl RevealTiming {
    pub const SECTION: Self = Self {
        duration: REVEAL_DURATION,
        item_duration: REVEAL_ITEM_DURATION,
        stagger: REVEAL_STAGGER,
    };

    pub const HERO: Self = Self {
        duration: REVEAL_DURATION,
        item_duration: REVEAL_ITEM_DURATION,
        stagger: HERO_STAGGER,
    };

    #[must_use]
    pub fn for_section(id: SectionId) -> Self {
        match id {
            SectionId::Hero => Self::HERO,
            _ => Self::SECTION,
        }
    }

    fn item_delay(self, index: usize) -> Duration {
        let steps = u32::try_from(index)
            .unwrap_or(MAX_STAGGERED_ITEMS)
            .min(MAX_STAGGERED_ITEMS);
        self.stagger * steps
    }

    /// Time after which every child has settled.
    fn settle_time(self) -> Duration {
        self.duration
            .max(self.stagger * MAX_STAGGERED_ITEMS + self.item_duration)
    }
}

/// Hidden-to-visible transition of one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    started_at: Option<Instant>,
    timing: RevealTiming,
}

impl Default for Reveal {
    fn default() -> Self {
        Self::hidden(RevealTiming::SECTION)
    }
}

impl Reveal {
    #[must_use]
    pub fn hidden(timing: RevealTiming) -> Self {
        Self {
            started_at: None,
            timing,
        }
    }

    /// Starts the animation. Returns `false` if it had already started.
    pub fn trigger(&mut self, now: Instant) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(now);
        true
    }

    #[must_use]
    pub fn is_triggered(&self) -> bool {
        self.started_at.is_some()
    }

    /// Eased progress of the whole section, `0.0` while hidden.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        self.eased(Duration::ZERO, self.timing.duration, now)
    }

    /// Eased progress of the `index`-th child, delayed by the stagger step.
    #[must_use]
    pub fn item_progress(&self, index: usize, now: Instant) -> f32 {
        self.eased(self.timing.item_delay(index), self.timing.item_duration, now)
    }

    /// True between the trigger and the moment every child has settled.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.started_at
            .is_some_and(|start| now.saturating_duration_since(start) < self.timing.settle_time())
    }

    fn eased(&self, delay: Duration, duration: Duration, now: Instant) -> f32 {
        let Some(start) = self.started_at else {
            return 0.0;
        };
        let elapsed = now.saturating_duration_since(start);
        let Some(running) = elapsed.checked_sub(delay) else {
            return 0.0;
        };
        if duration.is_zero() {
            return 1.0;
        }
        let t = (running.as_secs_f32() / duration.as_secs_f32()).min(1.0);
        ease_out_cubic(t)
    }
}

pub(crate) fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// One [`Reveal`] per section.
#[derive(Debug, Clone)]
pub struct SectionReveals {
    reveals: [Reveal; SectionId::ALL.len()],
}

impl Default for SectionReveals {
    fn default() -> Self {
        Self {
            reveals: SectionId::ALL.map(|id| Reveal::hidden(RevealTiming::for_section(id))),
        }
    }
}

impl SectionReveals {
    #[must_use]
    pub fn get(&self, id: SectionId) -> &Reveal {
        &self.reveals[id.index()]
    }

    /// Triggers the reveal of `id`. Returns `false` if it already ran.
    pub fn trigger(&mut self, id: SectionId, now: Instant) -> bool {
        let started = self.reveals[id.index()].trigger(now);
        if started {
            tracing::debug!(section = %id, "section revealed");
        }
        started
    }

    #[must_use]
    pub fn any_animating(&self, now: Instant) -> bool {
        self.reveals.iter().any(|reveal| reveal.is_animating(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_reveal_has_no_progress() {
        let reveal = Reveal::default();
        let now = Instant::now();
        assert!(!reveal.is_triggered());
        assert_eq!(reveal.progress(now), 0.0);
        assert!(!reveal.is_animating(now));
    }

    #[test]
    fn progress_eases_to_one() {
        let start = Instant::now();
        let mut reveal = Reveal::default();
        reveal.trigger(start);

        let halfway = reveal.progress(start + REVEAL_DURATION / 2);
        assert!(halfway > 0.5 && halfway < 1.0, "ease-out is ahead of linear");
        assert_eq!(reveal.progress(start + REVEAL_DURATION), 1.0);
        assert_eq!(reveal.progress(start + REVEAL_DURATION * 4), 1.0);
    }

    #[test]
    fn trigger_is_idempotent() {
        let start = Instant::now();
        let mut reveal = Reveal::default();

        assert!(reveal.trigger(start));
        assert!(!reveal.trigger(start + Duration::from_secs(3)));

        assert_eq!(reveal.progress(start + REVEAL_DURATION), 1.0);
    }

    #[test]
    fn children_are_staggered() {
        let start = Instant::now();
        let mut reveal = Reveal::default();
        reveal.trigger(start);

        let now = start + REVEAL_STAGGER;
        assert!(reveal.item_progress(0, now) > 0.0);
        assert_eq!(reveal.item_progress(1, now), 0.0);
        assert_eq!(reveal.item_progress(2, now), 0.0);
    }

    #[test]
    fn hero_uses_longer_stagger() {
        let start = Instant::now();
        let mut reveals = SectionReveals::default();
        reveals.trigger(SectionId::Hero, start);
        reveals.trigger(SectionId::About, start);

        let now = start + REVEAL_STAGGER + Duration::from_millis(10);
        assert!(reveals.get(SectionId::About).item_progress(1, now) > 0.0);
        assert_eq!(reveals.get(SectionId::Hero).item_progress(1, now), 0.0);
    }

    #[test]
    fn animation_settles() {
        let start = Instant::now();
        let mut reveals = SectionReveals::default();
        assert!(!reveals.any_animating(start));

        reveals.trigger(SectionId::Skills, start);
        assert!(reveals.any_animating(start));
        assert!(!reveals.any_animating(start + Duration::from_secs(10)));
    }

    #[test]
    fn section_reveal_only_starts_once() {
        let start = Instant::now();
        let mut reveals = SectionReveals::default();
        assert!(reveals.trigger(SectionId::Contact, start));
        assert!(!reveals.trigger(SectionId::Contact, start));
        assert!(!reveals.get(SectionId::Projects).is_triggered());
    }
}
