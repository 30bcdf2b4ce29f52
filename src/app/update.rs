// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Each handler receives an [`UpdateContext`] borrowing the parts of the
//! application state it may change, and returns the follow-up [`Task`].

use super::Message;
use crate::app::config::{SMOOTH_SCROLL_CANCEL_PX, SMOOTH_SCROLL_DURATION};
use crate::content::SectionId;
use crate::error::LinkError;
use crate::links::{self, Link};
use crate::ui::design_tokens::sizing;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::sections::{self, contact};
use crate::ui::state::{ScrollTracker, ScrollUpdate, SectionReveals, SmoothScroll};
use crate::ui::theming::ThemeStore;
use iced::widget::scrollable::{RelativeOffset, Viewport};
use iced::widget::{operation, Id};
use iced::{Size, Task};
use std::time::Instant;

/// Identifier of the page scrollable.
pub const PAGE_SCROLLABLE_ID: &str = "folio-page";

/// Mutable view of the application state shared by every handler.
pub struct UpdateContext<'a> {
    pub theme_store: &'a mut ThemeStore,
    pub scroll: &'a mut ScrollTracker,
    pub smooth_scroll: &'a mut Option<SmoothScroll>,
    pub reveals: &'a mut SectionReveals,
    pub menu_open: &'a mut bool,
    pub window_size: &'a mut Size,
    pub contact: &'a mut contact::Form,
    pub notifications: &'a mut notifications::Manager,
    pub now: Instant,
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, ctx.menu_open) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::Navigate(id) => scroll_to_section(ctx, id),
        NavbarEvent::ToggleTheme => {
            let toggled = ctx.theme_store.toggle_theme();
            if toggled.persist_error.is_some() {
                ctx.notifications.push(Notification::warning(
                    "Theme changed, but the preference could not be saved.",
                ));
            }
            Task::none()
        }
    }
}

pub fn handle_section_message(
    ctx: &mut UpdateContext<'_>,
    message: sections::Message,
) -> Task<Message> {
    match message {
        sections::Message::OpenLink(link) => open_link(ctx, link),
    }
}

pub fn handle_contact_message(
    ctx: &mut UpdateContext<'_>,
    message: contact::Message,
) -> Task<Message> {
    match contact::update(ctx.contact, message, ctx.now) {
        contact::Event::None => Task::none(),
        contact::Event::Deliver(ticket) => Task::perform(contact::form::deliver(ticket), |generation| {
            Message::Contact(contact::Message::Delivered(generation))
        }),
        contact::Event::OpenLink(link) => open_link(ctx, link),
    }
}

/// Follows `link`: anchors scroll the page, the rest is handed to the OS.
pub fn open_link(ctx: &mut UpdateContext<'_>, link: Link) -> Task<Message> {
    match link {
        Link::Section(id) => scroll_to_section(ctx, id),
        other => {
            tracing::debug!(link = %other, "opening link");
            Task::perform(links::open(other.clone()), move |result| {
                Message::LinkOpened {
                    link: other.clone(),
                    result,
                }
            })
        }
    }
}

pub fn handle_link_opened(
    ctx: &mut UpdateContext<'_>,
    link: &Link,
    result: Result<(), LinkError>,
) -> Task<Message> {
    if let Err(err) = result {
        tracing::warn!(%link, error = %err, "failed to open link");
        ctx.notifications.push(Notification::error(err.user_message()));
    }
    Task::none()
}

/// Starts a smooth scroll bringing `id` to the top of the viewport.
///
/// Does nothing until the sections above the target have been measured.
pub fn scroll_to_section(ctx: &mut UpdateContext<'_>, id: SectionId) -> Task<Message> {
    let Some(target) = ctx.scroll.relative_target(id) else {
        tracing::debug!(section = %id, "section not measured yet, ignoring navigation");
        return Task::none();
    };
    let from = ctx.scroll.relative_offset().unwrap_or(0.0);
    let mut animation = SmoothScroll::new(from, target, ctx.now, SMOOTH_SCROLL_DURATION);
    let position = animation.advance(ctx.now);
    *ctx.smooth_scroll = Some(animation);
    snap_page(position)
}

fn snap_page(y: f32) -> Task<Message> {
    operation::snap_to(Id::new(PAGE_SCROLLABLE_ID), RelativeOffset { x: 0.0, y })
}

pub fn handle_scrolled(ctx: &mut UpdateContext<'_>, viewport: Viewport) -> Task<Message> {
    let offset = viewport.absolute_offset().y;
    let height = viewport.bounds().height;
    let update = ctx.scroll.on_scroll(offset, height);
    apply_scroll_update(ctx, update);
    cancel_smooth_scroll_if_moved(ctx, offset);
    Task::none()
}

/// Drops the in-flight smooth scroll once the page sits somewhere other
/// than where it was last snapped, meaning the user took over.
fn cancel_smooth_scroll_if_moved(ctx: &mut UpdateContext<'_>, offset: f32) {
    let (Some(animation), Some(range)) = (*ctx.smooth_scroll, ctx.scroll.scroll_range()) else {
        return;
    };
    let expected = animation.snapped() * range;
    if (offset - expected).abs() > SMOOTH_SCROLL_CANCEL_PX {
        tracing::debug!(offset, expected, "user scroll cancelled navigation");
        *ctx.smooth_scroll = None;
    }
}

pub fn handle_section_measured(
    ctx: &mut UpdateContext<'_>,
    id: SectionId,
    size: Size,
) -> Task<Message> {
    let update = ctx.scroll.set_section_height(id, size.height);
    apply_scroll_update(ctx, update);
    Task::none()
}

pub fn handle_footer_measured(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    ctx.scroll.set_footer_height(size.height);
    Task::none()
}

/// Height left to the page scrollable in a window of `size`.
#[must_use]
pub fn page_viewport_height(size: Size) -> f32 {
    (size.height - sizing::NAVBAR_HEIGHT).max(0.0)
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    *ctx.window_size = size;
    if !navbar::is_compact(size.width) {
        *ctx.menu_open = false;
    }
    let update = ctx.scroll.set_viewport_height(page_viewport_height(size));
    apply_scroll_update(ctx, update);
    Task::none()
}

/// Advances time-based state: toasts, the form result and smooth scrolling.
pub fn handle_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.notifications.tick(ctx.now);
    ctx.contact.tick(ctx.now);

    match ctx.smooth_scroll.as_mut() {
        Some(animation) => {
            let position = animation.advance(ctx.now);
            if animation.is_finished(ctx.now) {
                *ctx.smooth_scroll = None;
            }
            snap_page(position)
        }
        None => Task::none(),
    }
}

fn apply_scroll_update(ctx: &mut UpdateContext<'_>, update: ScrollUpdate) {
    if let Some(active) = update.active {
        tracing::debug!(section = %active, "active section");
    }
    for id in update.revealed {
        ctx.reveals.trigger(id, ctx.now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theming::{MemoryThemeStorage, ThemeMode, ThemeStorage};
    use std::time::Duration;

    struct Harness {
        theme_store: ThemeStore,
        scroll: ScrollTracker,
        smooth_scroll: Option<SmoothScroll>,
        reveals: SectionReveals,
        menu_open: bool,
        window_size: Size,
        contact: contact::Form,
        notifications: notifications::Manager,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                theme_store: ThemeStore::new(Box::new(MemoryThemeStorage::default()), ThemeMode::Dark),
                scroll: ScrollTracker::new(),
                smooth_scroll: None,
                reveals: SectionReveals::default(),
                menu_open: false,
                window_size: Size::new(1280.0, 860.0),
                contact: contact::Form::default(),
                notifications: notifications::Manager::new(),
            }
        }

        fn ctx(&mut self, now: Instant) -> UpdateContext<'_> {
            UpdateContext {
                theme_store: &mut self.theme_store,
                scroll: &mut self.scroll,
                smooth_scroll: &mut self.smooth_scroll,
                reveals: &mut self.reveals,
                menu_open: &mut self.menu_open,
                window_size: &mut self.window_size,
                contact: &mut self.contact,
                notifications: &mut self.notifications,
                now,
            }
        }

        fn measure_all(&mut self, now: Instant) {
            for id in SectionId::ALL {
                let _ = handle_section_measured(&mut self.ctx(now), id, Size::new(1000.0, 800.0));
            }
        }
    }

    struct BrokenStorage;

    impl ThemeStorage for BrokenStorage {
        fn load(&self) -> Option<ThemeMode> {
            None
        }

        fn save(&mut self, _mode: ThemeMode) -> crate::error::Result<()> {
            Err(crate::error::Error::Io("read-only".into()))
        }
    }

    #[test]
    fn theme_toggle_from_navbar_flips_theme() {
        let mut harness = Harness::new();
        let now = Instant::now();
        let _ = handle_navbar_message(&mut harness.ctx(now), navbar::Message::ToggleTheme);
        assert_eq!(harness.theme_store.theme(), ThemeMode::Light);
        assert!(!harness.notifications.has_notifications());
    }

    #[test]
    fn failed_theme_save_shows_warning() {
        let mut harness = Harness::new();
        harness.theme_store = ThemeStore::new(Box::new(BrokenStorage), ThemeMode::Dark);
        let _ = handle_navbar_message(&mut harness.ctx(Instant::now()), navbar::Message::ToggleTheme);

        assert_eq!(harness.theme_store.theme(), ThemeMode::Light);
        assert_eq!(harness.notifications.visible_count(), 1);
    }

    #[test]
    fn measurements_trigger_reveals() {
        let mut harness = Harness::new();
        let now = Instant::now();
        harness.scroll.set_viewport_height(700.0);
        harness.measure_all(now);

        assert!(harness.reveals.get(SectionId::Hero).is_triggered());
        assert!(!harness.reveals.get(SectionId::Contact).is_triggered());
    }

    #[test]
    fn navigation_before_measuring_is_ignored() {
        let mut harness = Harness::new();
        let _ = scroll_to_section(&mut harness.ctx(Instant::now()), SectionId::Projects);
        assert!(harness.smooth_scroll.is_none());
    }

    #[test]
    fn navigation_starts_smooth_scroll() {
        let mut harness = Harness::new();
        let now = Instant::now();
        harness.measure_all(now);
        harness.scroll.set_viewport_height(800.0);

        let _ = handle_navbar_message(
            &mut harness.ctx(now),
            navbar::Message::Navigate(SectionId::About),
        );
        let animation = harness.smooth_scroll.expect("scroll started");
        // Document 4800, viewport 800: About at 800 of a 4000 range.
        assert_eq!(animation.target(), 0.2);

        let _ = handle_tick(&mut harness.ctx(now + Duration::from_secs(1)));
        assert!(harness.smooth_scroll.is_none());
    }

    #[test]
    fn user_scroll_cancels_navigation() {
        let mut harness = Harness::new();
        let now = Instant::now();
        harness.measure_all(now);
        harness.scroll.set_viewport_height(800.0);

        let _ = scroll_to_section(&mut harness.ctx(now), SectionId::Contact);
        let _ = handle_tick(&mut harness.ctx(now + Duration::from_millis(50)));
        let snapped = harness.smooth_scroll.expect("scroll running").snapped();
        assert!(snapped > 0.0);

        // The scrollable reports the snapped offset: keep going.
        let range = harness.scroll.scroll_range().expect("measured");
        harness.scroll.on_scroll(snapped * range, 800.0);
        cancel_smooth_scroll_if_moved(&mut harness.ctx(now), snapped * range);
        assert!(harness.smooth_scroll.is_some());

        // The user dragged back to the top.
        harness.scroll.on_scroll(0.0, 800.0);
        cancel_smooth_scroll_if_moved(&mut harness.ctx(now), 0.0);
        assert!(harness.smooth_scroll.is_none());

        let _ = handle_tick(&mut harness.ctx(now + Duration::from_millis(100)));
        assert!(harness.smooth_scroll.is_none());
    }

    #[test]
    fn in_page_link_scrolls_instead_of_opening() {
        let mut harness = Harness::new();
        let now = Instant::now();
        harness.measure_all(now);
        harness.scroll.set_viewport_height(800.0);

        let _ = handle_section_message(
            &mut harness.ctx(now),
            sections::Message::OpenLink(Link::Section(SectionId::Contact)),
        );
        assert!(harness.smooth_scroll.is_some());
    }

    #[test]
    fn failed_link_shows_error_toast() {
        let mut harness = Harness::new();
        let link = Link::Asset("docs/missing.docx".into());
        let _ = handle_link_opened(
            &mut harness.ctx(Instant::now()),
            &link,
            Err(LinkError::OpenFailed {
                target: "docs/missing.docx".into(),
                reason: "missing".into(),
            }),
        );
        assert_eq!(harness.notifications.visible_count(), 1);
    }

    #[test]
    fn widening_the_window_closes_the_menu() {
        let mut harness = Harness::new();
        harness.menu_open = true;
        let _ = handle_window_resized(&mut harness.ctx(Instant::now()), Size::new(500.0, 800.0));
        assert!(harness.menu_open);
        let _ = handle_window_resized(&mut harness.ctx(Instant::now()), Size::new(1200.0, 800.0));
        assert!(!harness.menu_open);
        assert_eq!(harness.window_size.width, 1200.0);
    }

    #[test]
    fn tick_expires_contact_result() {
        let mut harness = Harness::new();
        let now = Instant::now();
        harness.contact.set_name("Ada".into());
        harness.contact.set_email("ada@example.com".into());
        harness.contact.message = iced::widget::text_editor::Content::with_text("Hi");
        let ticket = harness.contact.submit().expect("valid form");
        harness.contact.complete(ticket.generation, now);

        let _ = handle_tick(&mut harness.ctx(now + Duration::from_secs(6)));
        assert!(harness.contact.result().is_none());
    }
}
