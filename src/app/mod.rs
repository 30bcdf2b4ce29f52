// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the portfolio page.
//!
//! The `App` struct wires together the theme store, the scroll tracker, the
//! per-section reveal animations, the contact form and the toast manager,
//! and translates messages into state changes and tasks.

pub mod config;
mod message;
pub mod paths;
pub mod persistence;
mod subscription;
pub mod update;
mod view;

pub use message::{Flags, Message};

use crate::content::data::PROFILE;
use crate::ui::notifications::{self, Notification};
use crate::ui::sections::contact;
use crate::ui::state::{ScrollTracker, SectionReveals, SmoothScroll};
use crate::ui::theming::ThemeStore;
use config::Config;
use iced::{window, Element, Size, Subscription, Task, Theme};
use persistence::ConfigThemeStorage;
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    theme_store: ThemeStore,
    scroll: ScrollTracker,
    /// In-flight scroll towards a section picked in the navbar.
    smooth_scroll: Option<SmoothScroll>,
    reveals: SectionReveals,
    /// Whether the compact navbar menu is open.
    menu_open: bool,
    window_size: Size,
    contact: contact::Form,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    /// Time of the last processed message; drives animations in `view`.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme", &self.theme_store.theme())
            .field("active", &self.scroll.active())
            .field("menu_open", &self.menu_open)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings from the `[window]` section of the config.
pub fn window_settings(config: &Config) -> window::Settings {
    let (width, height) = config.window.size();
    window::Settings {
        size: Size::new(width, height),
        min_size: Some(Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    let (config, config_warning) = config::load();
    let settings = window_settings(&config);

    // iced 0.14 requires a Fn boot closure; the state is consumed once.
    let boot_state = RefCell::new(Some((flags, config, config_warning)));
    let boot = move || {
        let (flags, config, warning) = boot_state
            .borrow_mut()
            .take()
            .unwrap_or_else(|| (Flags::default(), Config::default(), None));
        App::new(flags, &config, warning)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(settings)
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from the loaded config and CLI flags.
    fn new(flags: Flags, config: &Config, config_warning: Option<String>) -> (Self, Task<Message>) {
        let storage = Box::new(ConfigThemeStorage::new());
        let theme_store = match flags.theme {
            Some(mode) => ThemeStore::with_initial(storage, mode),
            None => ThemeStore::load(storage),
        };

        let (width, height) = config.window.size();
        let mut app = Self::with_theme_store(theme_store, Size::new(width, height));

        if let Some(warning) = config_warning {
            app.notifications.push(Notification::warning(warning));
        }

        tracing::info!(theme = %app.theme_store.theme(), "portfolio started");
        (app, Task::none())
    }

    /// Fresh page state around an existing theme store.
    pub fn with_theme_store(theme_store: ThemeStore, window_size: Size) -> Self {
        let mut scroll = ScrollTracker::new();
        scroll.set_viewport_height(update::page_viewport_height(window_size));

        Self {
            theme_store,
            scroll,
            smooth_scroll: None,
            reveals: SectionReveals::default(),
            menu_open: false,
            window_size,
            contact: contact::Form::default(),
            notifications: notifications::Manager::new(),
            now: Instant::now(),
        }
    }

    fn title(&self) -> String {
        format!("{} | {}", PROFILE.name, PROFILE.role)
    }

    fn theme(&self) -> Theme {
        self.theme_store.theme().iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let is_animating =
            self.smooth_scroll.is_some() || self.reveals.any_animating(Instant::now());
        let tick_sub = subscription::create_tick_subscription(
            is_animating,
            self.notifications.has_notifications(),
            self.contact.needs_tick(),
        );

        Subscription::batch([subscription::create_event_subscription(), tick_sub])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.now = match &message {
            Message::Tick(instant) => *instant,
            _ => Instant::now(),
        };

        let mut ctx = update::UpdateContext {
            theme_store: &mut self.theme_store,
            scroll: &mut self.scroll,
            smooth_scroll: &mut self.smooth_scroll,
            reveals: &mut self.reveals,
            menu_open: &mut self.menu_open,
            window_size: &mut self.window_size,
            contact: &mut self.contact,
            notifications: &mut self.notifications,
            now: self.now,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Section(section_message) => {
                update::handle_section_message(&mut ctx, section_message)
            }
            Message::Contact(contact_message) => {
                update::handle_contact_message(&mut ctx, contact_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Scrolled(viewport) => update::handle_scrolled(&mut ctx, viewport),
            Message::SectionMeasured(id, size) => {
                update::handle_section_measured(&mut ctx, id, size)
            }
            Message::FooterMeasured(size) => update::handle_footer_measured(&mut ctx, size),
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
            Message::LinkOpened { link, result } => {
                update::handle_link_opened(&mut ctx, &link, result)
            }
            Message::Tick(_instant) => update::handle_tick(&mut ctx),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            theme: self.theme_store.theme(),
            scroll: &self.scroll,
            reveals: &self.reveals,
            menu_open: self.menu_open,
            window_size: self.window_size,
            contact: &self.contact,
            notifications: &self.notifications,
            now: self.now,
        })
    }

    #[must_use]
    pub fn theme_store(&self) -> &ThemeStore {
        &self.theme_store
    }

    #[must_use]
    pub fn scroll(&self) -> &ScrollTracker {
        &self.scroll
    }

    #[must_use]
    pub fn reveals(&self) -> &SectionReveals {
        &self.reveals
    }

    #[must_use]
    pub fn contact(&self) -> &contact::Form {
        &self.contact
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }
}
