// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The navbar sits above a single scrollable holding every section and the
//! footer. The compact menu and the toasts are stacked over the page so
//! opening them never shifts the document.

use super::update::PAGE_SCROLLABLE_ID;
use super::Message;
use crate::content::data::{NAV_LINKS, PROFILE};
use crate::content::SectionId;
use crate::ui::design_tokens::sizing;
use crate::ui::footer;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::section::Stagger;
use crate::ui::sections::{about, contact, education, hero, projects, skills};
use crate::ui::state::{ScrollTracker, SectionReveals};
use crate::ui::theming::ThemeMode;
use iced::widget::{mouse_area, sensor, Column, Container, Id, Scrollable, Space, Stack};
use iced::{Element, Length, Size};
use std::time::Instant;

/// How far outside the viewport sections are still measured. Large enough
/// to cover the whole page so every section reports its height at startup.
const MEASURE_AHEAD_PX: f32 = 100_000.0;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub theme: ThemeMode,
    pub scroll: &'a ScrollTracker,
    pub reveals: &'a SectionReveals,
    pub menu_open: bool,
    pub window_size: Size,
    pub contact: &'a contact::Form,
    pub notifications: &'a notifications::Manager,
    pub now: Instant,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let compact = navbar::is_compact(ctx.window_size.width);
    let navbar_ctx = NavbarViewContext {
        profile: &PROFILE,
        links: NAV_LINKS,
        active: ctx.scroll.active(),
        theme: ctx.theme,
        menu_open: ctx.menu_open,
        compact,
        raised: ctx.scroll.is_scrolled(),
    };

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(view_page(&ctx, compact));

    if let Some(menu) = navbar::view_menu(&navbar_ctx) {
        layers = layers.push(view_menu_overlay(menu.map(Message::Navbar)));
    }

    layers = layers.push(Toast::view_overlay(ctx.notifications).map(Message::Notification));

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(navbar::view(&navbar_ctx).map(Message::Navbar))
        .push(layers)
        .into()
}

fn view_page<'a>(ctx: &ViewContext<'a>, compact: bool) -> Element<'a, Message> {
    let stagger = |id: SectionId| Stagger::new(ctx.reveals.get(id), ctx.now);
    let viewport_height = ctx
        .scroll
        .viewport_height()
        .unwrap_or(ctx.window_size.height - sizing::NAVBAR_HEIGHT);

    let sections: [(SectionId, Element<'a, Message>); 6] = [
        (
            SectionId::Hero,
            hero::view(hero::ViewContext {
                profile: &PROFILE,
                stagger: stagger(SectionId::Hero),
                viewport_height,
                compact,
            })
            .map(Message::Section),
        ),
        (
            SectionId::About,
            about::view(about::ViewContext {
                stagger: stagger(SectionId::About),
                compact,
            })
            .map(Message::Section),
        ),
        (
            SectionId::Skills,
            skills::view(skills::ViewContext {
                stagger: stagger(SectionId::Skills),
                compact,
            })
            .map(Message::Section),
        ),
        (
            SectionId::Projects,
            projects::view(projects::ViewContext {
                stagger: stagger(SectionId::Projects),
                compact,
            })
            .map(Message::Section),
        ),
        (
            SectionId::Education,
            education::view(education::ViewContext {
                stagger: stagger(SectionId::Education),
                compact,
            })
            .map(Message::Section),
        ),
        (
            SectionId::Contact,
            contact::view(contact::ViewContext {
                form: ctx.contact,
                stagger: stagger(SectionId::Contact),
                compact,
            })
            .map(Message::Contact),
        ),
    ];

    let mut page = Column::new().width(Length::Fill);
    for (id, element) in sections {
        page = page.push(measured(element, move |size| Message::SectionMeasured(id, size)));
    }

    let footer = footer::view(footer::ViewContext::now(&PROFILE, compact)).map(Message::Section);
    page = page.push(measured(footer, Message::FooterMeasured));

    Scrollable::new(page)
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(Message::Scrolled)
        .into()
}

/// Reports the laid-out size of `content` when it appears and whenever it
/// changes.
fn measured<'a>(
    content: Element<'a, Message>,
    on_size: impl Fn(Size) -> Message + Clone + 'a,
) -> Element<'a, Message> {
    sensor(content)
        .on_show(on_size.clone())
        .on_resize(on_size)
        .anticipate(MEASURE_AHEAD_PX)
        .into()
}

/// Dropdown pinned under the navbar; clicking the rest of the page closes it.
fn view_menu_overlay(menu: Element<'_, Message>) -> Element<'_, Message> {
    let backdrop = mouse_area(Space::new().width(Length::Fill).height(Length::Fill))
        .on_press(Message::Navbar(navbar::Message::CloseMenu));

    Container::new(Column::new().push(menu).push(backdrop))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
