// SPDX-License-Identifier: MPL-2.0
//! Contact form state machine.
//!
//! ```text
//! Idle ──submit──▶ Submitting ──delay──▶ Idle (result shown)
//!   ▲                                          │
//!   └────────────── result timeout ────────────┘
//! ```
//!
//! Delivery is simulated: every accepted submission succeeds after the
//! configured delay. Each submission gets a generation number and a
//! completion carrying an older generation is ignored.

use crate::app::config::{SUBMIT_DELAY, SUBMIT_RESULT_TIMEOUT};
use crate::content::data::SUBMIT_SUCCESS_MESSAGE;
use iced::widget::text_editor;
use std::fmt;
use std::time::{Duration, Instant};

/// Field of the form, used to point at the one that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    fn label(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

/// Why a submission was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// A submission is already in flight.
    Busy,
    Missing(Field),
    InvalidEmail,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Busy => write!(f, "Your message is already being sent."),
            Rejection::Missing(field) => write!(f, "Please fill in your {}.", field.label()),
            Rejection::InvalidEmail => write!(f, "Please enter a valid email address."),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    Submitting { generation: u64 },
}

/// Outcome banner displayed under the form until it expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitResult {
    pub success: bool,
    pub message: String,
    shown_at: Instant,
}

/// Submission accepted by [`Form::submit`]; the caller schedules delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub generation: u64,
    pub delay: Duration,
}

pub struct Form {
    pub name: String,
    pub email: String,
    pub message: text_editor::Content,
    status: Status,
    result: Option<SubmitResult>,
    rejection: Option<Rejection>,
    generation: u64,
    submit_delay: Duration,
    result_timeout: Duration,
}

impl Default for Form {
    fn default() -> Self {
        Self::with_timings(SUBMIT_DELAY, SUBMIT_RESULT_TIMEOUT)
    }
}

impl fmt::Debug for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Form")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("message", &self.message.text())
            .field("status", &self.status)
            .field("result", &self.result)
            .field("generation", &self.generation)
            .finish()
    }
}

impl Form {
    #[must_use]
    pub fn with_timings(submit_delay: Duration, result_timeout: Duration) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: text_editor::Content::new(),
            status: Status::Idle,
            result: None,
            rejection: None,
            generation: 0,
            submit_delay,
            result_timeout,
        }
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self.status, Status::Submitting { .. })
    }

    #[must_use]
    pub fn result(&self) -> Option<&SubmitResult> {
        self.result.as_ref()
    }

    /// Validation message of the last refused submission, if any.
    #[must_use]
    pub fn rejection(&self) -> Option<Rejection> {
        self.rejection
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
        self.rejection = None;
    }

    pub fn set_email(&mut self, email: String) {
        self.email = email;
        self.rejection = None;
    }

    pub fn edit_message(&mut self, action: text_editor::Action) {
        if action.is_edit() {
            self.rejection = None;
        }
        self.message.perform(action);
    }

    /// Checks the current fields without changing any state.
    pub fn validate(&self) -> Result<(), Rejection> {
        if self.is_submitting() {
            return Err(Rejection::Busy);
        }
        if self.name.trim().is_empty() {
            return Err(Rejection::Missing(Field::Name));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(Rejection::Missing(Field::Email));
        }
        if !is_plausible_email(email) {
            return Err(Rejection::InvalidEmail);
        }
        if self.message.text().trim().is_empty() {
            return Err(Rejection::Missing(Field::Message));
        }
        Ok(())
    }

    /// Moves to `Submitting` when the fields are valid.
    ///
    /// A previous result is cleared as soon as a new submission starts.
    pub fn submit(&mut self) -> Result<Ticket, Rejection> {
        if let Err(rejection) = self.validate() {
            // Busy is not the user's fault; keep the field hint untouched.
            if rejection != Rejection::Busy {
                self.rejection = Some(rejection);
            }
            return Err(rejection);
        }

        self.generation += 1;
        self.status = Status::Submitting {
            generation: self.generation,
        };
        self.result = None;
        self.rejection = None;
        tracing::debug!(generation = self.generation, "contact form submitted");

        Ok(Ticket {
            generation: self.generation,
            delay: self.submit_delay,
        })
    }

    /// Finishes the submission numbered `generation`.
    ///
    /// Returns `false` and changes nothing for a stale or unexpected
    /// completion.
    pub fn complete(&mut self, generation: u64, now: Instant) -> bool {
        match self.status {
            Status::Submitting { generation: current } if current == generation => {
                self.status = Status::Idle;
                self.name.clear();
                self.email.clear();
                self.message = text_editor::Content::new();
                self.result = Some(SubmitResult {
                    success: true,
                    message: SUBMIT_SUCCESS_MESSAGE.to_string(),
                    shown_at: now,
                });
                tracing::info!(generation, "contact message delivered");
                true
            }
            _ => {
                tracing::debug!(generation, "ignoring stale contact completion");
                false
            }
        }
    }

    /// Clears an expired result. Returns `true` when something changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let expired = self.result.as_ref().is_some_and(|result| {
            now.saturating_duration_since(result.shown_at) >= self.result_timeout
        });
        if expired {
            self.result = None;
        }
        expired
    }

    /// Whether the periodic tick is still needed.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.result.is_some()
    }
}

/// Simulated delivery: waits `ticket.delay`, then reports the generation.
pub async fn deliver(ticket: Ticket) -> u64 {
    tokio::time::sleep(ticket.delay).await;
    ticket.generation
}

/// Text on both sides of a single `@`, no whitespace.
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> Form {
        let mut form = Form::default();
        form.set_name("Ada".into());
        form.set_email("ada@example.com".into());
        form.message = text_editor::Content::with_text("Hello there");
        form
    }

    #[test]
    fn empty_form_is_rejected() {
        let mut form = Form::default();
        assert_eq!(form.submit(), Err(Rejection::Missing(Field::Name)));
        assert_eq!(form.status(), Status::Idle);
        assert_eq!(form.rejection(), Some(Rejection::Missing(Field::Name)));
    }

    #[test]
    fn whitespace_only_fields_count_as_empty() {
        let mut form = filled();
        form.message = text_editor::Content::with_text("  \n ");
        assert_eq!(form.submit(), Err(Rejection::Missing(Field::Message)));
    }

    #[test]
    fn email_needs_text_around_the_at_sign() {
        for email in ["ada", "@example.com", "ada@", "a b@example.com", "a@b@c"] {
            let mut form = filled();
            form.set_email(email.into());
            assert_eq!(form.submit(), Err(Rejection::InvalidEmail), "{email}");
        }
    }

    #[test]
    fn editing_clears_the_validation_hint() {
        let mut form = Form::default();
        let _ = form.submit();
        assert!(form.rejection().is_some());
        form.set_name("Ada".into());
        assert!(form.rejection().is_none());
    }

    #[test]
    fn submission_blocks_resubmission() {
        let mut form = filled();
        let ticket = form.submit().expect("valid form");
        assert_eq!(ticket.generation, 1);
        assert_eq!(ticket.delay, SUBMIT_DELAY);
        assert!(form.is_submitting());
        assert_eq!(form.submit(), Err(Rejection::Busy));
        assert!(form.rejection().is_none());
    }

    #[test]
    fn completion_clears_fields_and_shows_result() {
        let now = Instant::now();
        let mut form = filled();
        let ticket = form.submit().expect("valid form");

        assert!(form.complete(ticket.generation, now));
        assert_eq!(form.status(), Status::Idle);
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.message.text().trim().is_empty());

        let result = form.result().expect("result shown");
        assert!(result.success);
        assert_eq!(result.message, SUBMIT_SUCCESS_MESSAGE);
    }

    #[test]
    fn stale_completion_is_ignored() {
        let now = Instant::now();
        let mut form = filled();
        let ticket = form.submit().expect("valid form");

        assert!(!form.complete(ticket.generation + 1, now));
        assert!(form.is_submitting());
        assert!(form.complete(ticket.generation, now));
        assert!(!form.complete(ticket.generation, now));
    }

    #[test]
    fn result_expires_after_timeout() {
        let now = Instant::now();
        let mut form = filled();
        let ticket = form.submit().expect("valid form");
        form.complete(ticket.generation, now);

        assert!(!form.tick(now + SUBMIT_RESULT_TIMEOUT - Duration::from_millis(1)));
        assert!(form.needs_tick());
        assert!(form.tick(now + SUBMIT_RESULT_TIMEOUT));
        assert!(form.result().is_none());
        assert!(!form.needs_tick());
    }

    #[test]
    fn new_submission_hides_previous_result() {
        let now = Instant::now();
        let mut form = filled();
        let first = form.submit().expect("valid form");
        form.complete(first.generation, now);

        form.set_name("Grace".into());
        form.set_email("grace@example.com".into());
        form.message = text_editor::Content::with_text("Again");
        let second = form.submit().expect("valid form");

        assert_eq!(second.generation, 2);
        assert!(form.result().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn delivery_waits_for_the_delay() {
        let ticket = Ticket {
            generation: 7,
            delay: SUBMIT_DELAY,
        };
        let started = tokio::time::Instant::now();
        assert_eq!(deliver(ticket).await, 7);
        assert!(started.elapsed() >= SUBMIT_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn submit_round_trip_finishes_within_bounds() {
        let mut form = filled();
        let ticket = form.submit().expect("valid form");
        let generation = deliver(ticket).await;

        assert!(form.complete(generation, Instant::now()));
        assert_eq!(form.status(), Status::Idle);
        assert!(form.result().is_some_and(|result| result.success));
    }
}
