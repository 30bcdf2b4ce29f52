// SPDX-License-Identifier: MPL-2.0
//! Static portfolio content and the record types it is made of.
//!
//! Every table lives in [`data`] and is compiled into the binary. Nothing
//! here is mutable: views borrow these records for the whole session.

pub mod data;

use crate::ui::icons::Glyph;
use std::fmt;

/// Labeled region of the page, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Hero,
    About,
    Skills,
    Projects,
    Education,
    Contact,
}

impl SectionId {
    /// All sections in the order they appear on the page.
    pub const ALL: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Education,
        SectionId::Contact,
    ];

    /// Stable identifier used for anchors (`#about`) and logging.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Education => "education",
            SectionId::Contact => "contact",
        }
    }

    /// Parses `"about"` or `"#about"`.
    #[must_use]
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let id = anchor.strip_prefix('#').unwrap_or(anchor);
        Self::ALL.into_iter().find(|section| section.as_str() == id)
    }

    /// Position in document order.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entry of the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub id: SectionId,
    pub label: &'static str,
}

/// Identity shown in the hero banner, navbar brand and footer.
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub highlights: &'static [&'static str],
    pub avatar: &'static str,
    pub resume: &'static str,
}

/// Small card next to the biography.
#[derive(Debug, Clone, Copy)]
pub struct AboutFact {
    pub icon: Glyph,
    pub label: &'static str,
    pub value: &'static str,
}

/// Proficiency on a 1..=5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SkillLevel(u8);

impl SkillLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Clamps out-of-range values into `MIN..=MAX`.
    #[must_use]
    pub const fn new(level: u8) -> Self {
        if level < Self::MIN {
            Self(Self::MIN)
        } else if level > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(level)
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: SkillLevel,
}

impl Skill {
    #[must_use]
    pub const fn new(name: &'static str, level: u8) -> Self {
        Self {
            name,
            level: SkillLevel::new(level),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub demo_url: Option<&'static str>,
    pub source_url: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub struct EducationEntry {
    pub institution: &'static str,
    pub degree: &'static str,
    pub years: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Course {
    pub name: &'static str,
    pub provider: &'static str,
    pub year: &'static str,
    pub duration: &'static str,
    pub certificate_url: Option<&'static str>,
}

/// One way of reaching the author. `link` is `None` for plain text entries.
#[derive(Debug, Clone, Copy)]
pub struct ContactInfo {
    pub icon: Glyph,
    pub label: &'static str,
    pub value: &'static str,
    pub link: Option<&'static str>,
}

impl ContactInfo {
    /// Web profiles are repeated as round social buttons under the list.
    #[must_use]
    pub fn is_social(&self) -> bool {
        self.link.is_some_and(|link| link.starts_with("http"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_ids_round_trip_through_anchors() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_anchor(section.as_str()), Some(section));
            let anchor = format!("#{section}");
            assert_eq!(SectionId::from_anchor(&anchor), Some(section));
        }
        assert_eq!(SectionId::from_anchor("#footer"), None);
    }

    #[test]
    fn section_index_follows_document_order() {
        for (expected, section) in SectionId::ALL.iter().enumerate() {
            assert_eq!(section.index(), expected);
        }
    }

    #[test]
    fn skill_level_is_clamped() {
        assert_eq!(SkillLevel::new(0).get(), 1);
        assert_eq!(SkillLevel::new(3).get(), 3);
        assert_eq!(SkillLevel::new(9).get(), 5);
    }

    #[test]
    fn only_web_contacts_are_social() {
        let phone = ContactInfo {
            icon: Glyph::Phone,
            label: "Phone",
            value: "+7",
            link: Some("tel:+7"),
        };
        let github = ContactInfo {
            icon: Glyph::Code,
            label: "GitHub",
            value: "github.com/someone",
            link: Some("https://github.com/someone"),
        };
        assert!(!phone.is_social());
        assert!(github.is_social());
    }
}
