// SPDX-License-Identifier: MPL-2.0
//! Content sections of the page, in document order.
//!
//! Every section except the contact form is static: the only thing it can
//! emit is a request to follow a link.

pub mod about;
pub mod contact;
pub mod education;
pub mod hero;
pub mod projects;
pub mod skills;

use crate::links::Link;

/// Messages emitted by the static sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    OpenLink(Link),
}

/// Message opening `target`, or `None` when the target cannot be parsed.
///
/// Buttons built with `on_press_maybe(link_message(..))` render disabled
/// for broken targets instead of failing at click time.
#[must_use]
pub fn link_message(target: &str) -> Option<Message> {
    match Link::parse(target) {
        Ok(link) => Some(Message::OpenLink(link)),
        Err(err) => {
            tracing::warn!(target_link = target, error = %err, "ignoring invalid link");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::data::{CONTACT_INFO, COURSES, PROFILE, PROJECTS};
    use crate::content::SectionId;

    #[test]
    fn anchor_targets_become_scroll_messages() {
        assert_eq!(
            link_message("#contact"),
            Some(Message::OpenLink(Link::Section(SectionId::Contact)))
        );
        assert_eq!(link_message(""), None);
    }

    #[test]
    fn every_content_link_parses() {
        let targets = PROJECTS
            .iter()
            .flat_map(|project| [project.demo_url, project.source_url])
            .chain(COURSES.iter().map(|course| course.certificate_url))
            .chain(CONTACT_INFO.iter().map(|info| info.link))
            .flatten()
            .chain([PROFILE.resume]);

        for target in targets {
            assert!(link_message(target).is_some(), "{target} should parse");
        }
    }
}
