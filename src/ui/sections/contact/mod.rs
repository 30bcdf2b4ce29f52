// SPDX-License-Identifier: MPL-2.0
//! Contact section: ways to reach the author and the message form.

pub mod form;

pub use form::{Form, Rejection, Status, SubmitResult, Ticket};

use crate::content::data::{CONTACT_INFO, CONTACT_SUBTITLE, CONTACT_TITLE};
use crate::content::ContactInfo;
use crate::links::Link;
use crate::ui::components::{Button, ButtonVariant};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons::{self, Glyph};
use crate::ui::section::{self, Header, Stagger, Surface};
use crate::ui::styles;
use iced::widget::{button, container, text, text_editor, text_input, Column, Container, Row};
use iced::{alignment, Element, Length};
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    MessageEdited(text_editor::Action),
    Submit,
    /// Simulated delivery of the given generation finished.
    Delivered(u64),
    OpenLink(Link),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Schedule [`form::deliver`] for this ticket.
    Deliver(Ticket),
    OpenLink(Link),
}

/// Process a contact message and return the corresponding event.
pub fn update(form: &mut Form, message: Message, now: Instant) -> Event {
    match message {
        Message::NameChanged(name) => {
            form.set_name(name);
            Event::None
        }
        Message::EmailChanged(email) => {
            form.set_email(email);
            Event::None
        }
        Message::MessageEdited(action) => {
            form.edit_message(action);
            Event::None
        }
        Message::Submit => match form.submit() {
            Ok(ticket) => Event::Deliver(ticket),
            Err(rejection) => {
                tracing::debug!(%rejection, "contact form rejected");
                Event::None
            }
        },
        Message::Delivered(generation) => {
            form.complete(generation, now);
            Event::None
        }
        Message::OpenLink(link) => Event::OpenLink(link),
    }
}

pub struct ViewContext<'a> {
    pub form: &'a Form,
    pub stagger: Stagger<'a>,
    pub compact: bool,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let stagger = ctx.stagger;
    let info = stagger.slide(2, build_info(stagger.progress(2)));
    let form = stagger.slide(3, build_form(ctx.form, stagger.progress(3)));

    let body: Element<'a, Message> = if ctx.compact {
        Column::new().spacing(spacing::XXL).push(info).push(form).into()
    } else {
        Row::new()
            .spacing(spacing::XXL)
            .push(Container::new(info).width(Length::FillPortion(1)))
            .push(Container::new(form).width(Length::FillPortion(1)))
            .into()
    };

    section::section(
        Header {
            title: CONTACT_TITLE,
            subtitle: Some(CONTACT_SUBTITLE),
        },
        body,
        stagger,
        Surface::Page,
    )
}

fn build_info(progress: f32) -> Element<'static, Message> {
    let entries = Column::with_children(
        CONTACT_INFO
            .iter()
            .map(|info| build_info_entry(info, progress)),
    )
    .spacing(spacing::LG);

    let socials = Row::with_children(CONTACT_INFO.iter().filter(|info| info.is_social()).map(
        |info| {
            button(icons::sized(info.icon, sizing::ICON_MD))
                .padding(spacing::SM)
                .style(styles::button::social)
                .on_press_maybe(info.link.and_then(open_message))
                .into()
        },
    ))
    .spacing(spacing::MD);

    Column::new()
        .spacing(spacing::LG)
        .push(
            text("Contact information")
                .size(typography::TITLE_MD)
                .style(styles::text::faded(styles::text::primary, progress)),
        )
        .push(entries)
        .push(
            text("Find me online")
                .size(typography::TITLE_SM)
                .style(styles::text::faded(styles::text::primary, progress)),
        )
        .push(socials)
        .into()
}

fn build_info_entry(info: &'static ContactInfo, progress: f32) -> Element<'static, Message> {
    let bubble = Container::new(icons::sized(info.icon, sizing::ICON_MD))
        .padding(spacing::SM)
        .style(styles::container::icon_bubble);

    let value: Element<'static, Message> = match info.link.and_then(open_message) {
        Some(on_press) => button(text(info.value).size(typography::BODY))
            .padding(0)
            .style(styles::button::link)
            .on_press(on_press)
            .into(),
        None => text(info.value)
            .size(typography::BODY)
            .style(styles::text::faded(styles::text::muted, progress))
            .into(),
    };

    Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(bubble)
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(
                    text(info.label)
                        .size(typography::BODY)
                        .style(styles::text::faded(styles::text::primary, progress)),
                )
                .push(value),
        )
        .into()
}

fn open_message(target: &str) -> Option<Message> {
    super::link_message(target).map(|super::Message::OpenLink(link)| Message::OpenLink(link))
}

fn build_form(form: &Form, progress: f32) -> Element<'_, Message> {
    let submitting = form.is_submitting();

    let name = labeled(
        "Name",
        progress,
        text_input("Your name", &form.name)
            .on_input_maybe((!submitting).then_some(Message::NameChanged))
            .padding([spacing::XS, spacing::MD])
            .style(styles::input::field),
    );

    let email = labeled(
        "Email",
        progress,
        text_input("your@email.com", &form.email)
            .on_input_maybe((!submitting).then_some(Message::EmailChanged))
            .on_submit(Message::Submit)
            .padding([spacing::XS, spacing::MD])
            .style(styles::input::field),
    );

    // Without an action handler the editor is read-only.
    let mut editor = text_editor(&form.message)
        .placeholder("Your message...")
        .height(Length::Fixed(sizing::MESSAGE_INPUT_HEIGHT))
        .padding(spacing::MD)
        .style(styles::input::message);
    if !submitting {
        editor = editor.on_action(Message::MessageEdited);
    }
    let message = labeled("Message", progress, editor);

    let (label, on_submit) = if submitting {
        ("Sending...", None)
    } else {
        ("Send message", Some(Message::Submit))
    };

    let mut column = Column::new()
        .spacing(spacing::LG)
        .push(
            text("Send me a message")
                .size(typography::TITLE_MD)
                .style(styles::text::faded(styles::text::primary, progress)),
        )
        .push(name)
        .push(email)
        .push(message);

    if let Some(rejection) = form.rejection() {
        column = column.push(
            text(rejection.to_string())
                .size(typography::BODY_SM)
                .style(styles::text::error),
        );
    }

    column = column.push(
        Button::new(label)
            .variant(ButtonVariant::Primary)
            .icon(Glyph::Send)
            .full_width()
            .on_press_maybe(on_submit)
            .view(),
    );

    if let Some(result) = form.result() {
        column = column.push(result_banner(result));
    }

    column.into()
}

fn labeled<'a>(
    label: &'static str,
    progress: f32,
    input: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(
            text(label)
                .size(typography::BODY_SM)
                .style(styles::text::faded(styles::text::muted, progress)),
        )
        .push(input)
        .into()
}

fn result_banner(result: &SubmitResult) -> Element<'_, Message> {
    let glyph = if result.success {
        Glyph::Check
    } else {
        Glyph::Warning
    };

    container(
        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(icons::sized(glyph, sizing::ICON_MD))
            .push(text(result.message.as_str()).size(typography::BODY)),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::container::result_banner(result.success))
    .into()
}
