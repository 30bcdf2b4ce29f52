// SPDX-License-Identifier: MPL-2.0
//! Navigation bar pinned above the page.
//!
//! Wide windows show one link per section inline. Below the
//! [`sizing::BREAKPOINT_MD`] breakpoint the links move into a dropdown
//! opened by a menu button; picking a link closes it again.

use crate::content::{NavLink, Profile, SectionId};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons::{self, Glyph};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Vertical,
    widget::{button, text, Column, Container, Row, Space},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub profile: &'a Profile,
    pub links: &'a [NavLink],
    pub active: SectionId,
    pub theme: ThemeMode,
    pub menu_open: bool,
    /// Narrow window: links live in the dropdown.
    pub compact: bool,
    /// Page scrolled past the threshold: draw the raised surface.
    pub raised: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    Navigate(SectionId),
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(SectionId),
    ToggleTheme,
}

/// Whether a window this wide uses the compact menu.
#[must_use]
pub fn is_compact(window_width: f32) -> bool {
    window_width < sizing::BREAKPOINT_MD
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::Navigate(id) => {
            *menu_open = false;
            Event::Navigate(id)
        }
        Message::ToggleTheme => Event::ToggleTheme,
    }
}

/// Render the top bar.
pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(
                text(crate::ui::footer::brand_mark(ctx.profile.initials))
                    .size(typography::TITLE_MD)
                    .style(styles::text::brand),
            )
            .push(text(ctx.profile.name).size(typography::BODY)),
    )
    .padding(spacing::XXS)
    .style(styles::button::link)
    .on_press(Message::Navigate(SectionId::Hero));

    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding([0.0, spacing::LG])
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill));

    if !ctx.compact {
        row = row.push(
            Row::with_children(
                ctx.links
                    .iter()
                    .map(|link| nav_button(link, link.id == ctx.active)),
            )
            .spacing(spacing::XXS),
        );
    }

    row = row.push(theme_toggle(ctx.theme));

    if ctx.compact {
        let glyph = if ctx.menu_open {
            Glyph::Close
        } else {
            Glyph::Menu
        };
        row = row.push(
            button(icons::sized(glyph, sizing::ICON_LG))
                .on_press(Message::ToggleMenu)
                .padding(spacing::XS)
                .style(styles::button::ghost),
        );
    }

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::navbar(ctx.raised))
        .into()
}

/// Render the dropdown of the compact menu, if it is open.
pub fn view_menu<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    if !(ctx.compact && ctx.menu_open) {
        return None;
    }

    let items = Column::with_children(ctx.links.iter().map(|link| {
        button(text(link.label).size(typography::BODY_LG))
            .on_press(Message::Navigate(link.id))
            .padding([spacing::SM, spacing::LG])
            .width(Length::Fill)
            .style(styles::button::nav_link(link.id == ctx.active))
            .into()
    }))
    .spacing(spacing::XXS);

    Some(
        Container::new(items)
            .width(Length::Fill)
            .padding(spacing::XS)
            .style(styles::container::menu_panel)
            .into(),
    )
}

fn nav_button(link: &NavLink, active: bool) -> Element<'_, Message> {
    button(text(link.label).size(typography::BODY_SM))
        .on_press(Message::Navigate(link.id))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::nav_link(active))
        .into()
}

/// Sun in dark mode (switch to light), moon in light mode.
fn theme_toggle<'a>(theme: ThemeMode) -> Element<'a, Message> {
    let glyph = if theme.is_dark() {
        Glyph::Sun
    } else {
        Glyph::Moon
    };
    button(icons::sized(glyph, sizing::ICON_MD))
        .on_press(Message::ToggleTheme)
        .padding(spacing::XS)
        .style(styles::button::ghost)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::data::{NAV_LINKS, PROFILE};

    fn ctx(compact: bool, menu_open: bool) -> ViewContext<'static> {
        ViewContext {
            profile: &PROFILE,
            links: NAV_LINKS,
            active: SectionId::Skills,
            theme: ThemeMode::Dark,
            menu_open,
            compact,
            raised: false,
        }
    }

    #[test]
    fn navbar_view_renders_wide_and_compact() {
        let _ = view(&ctx(false, false));
        let _ = view(&ctx(true, false));
    }

    #[test]
    fn menu_only_renders_when_compact_and_open() {
        assert!(view_menu(&ctx(false, true)).is_none());
        assert!(view_menu(&ctx(true, false)).is_none());
        assert!(view_menu(&ctx(true, true)).is_some());
    }

    #[test]
    fn toggle_menu_changes_state() {
        let mut menu_open = false;
        assert_eq!(update(Message::ToggleMenu, &mut menu_open), Event::None);
        assert!(menu_open);

        assert_eq!(update(Message::ToggleMenu, &mut menu_open), Event::None);
        assert!(!menu_open);
    }

    #[test]
    fn navigating_closes_menu() {
        let mut menu_open = true;
        let event = update(Message::Navigate(SectionId::Contact), &mut menu_open);
        assert!(!menu_open);
        assert_eq!(event, Event::Navigate(SectionId::Contact));
    }

    #[test]
    fn theme_toggle_keeps_menu_open() {
        let mut menu_open = true;
        assert_eq!(
            update(Message::ToggleTheme, &mut menu_open),
            Event::ToggleTheme
        );
        assert!(menu_open);
    }

    #[test]
    fn breakpoint_selects_compact_menu() {
        assert!(is_compact(sizing::BREAKPOINT_MD - 1.0));
        assert!(!is_compact(sizing::BREAKPOINT_MD));
    }
}
