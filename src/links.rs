// SPDX-License-Identifier: MPL-2.0
//! Link targets and how they are opened.
//!
//! In-page anchors (`#about`) scroll the document. Everything else leaves
//! the application: URLs go to the default browser or mail/phone handler
//! and asset paths (the résumé) go to the default document viewer.

use crate::app::paths;
use crate::content::SectionId;
use crate::error::LinkError;
use std::fmt;

/// Schemes handed to the OS as-is.
const EXTERNAL_SCHEMES: [&str; 4] = ["http://", "https://", "mailto:", "tel:"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Link {
    /// Scroll to a section of the page.
    Section(SectionId),
    /// URL opened by the OS.
    External(String),
    /// File under the assets directory.
    Asset(String),
}

impl Link {
    /// Classifies a raw `href`-like target.
    pub fn parse(target: &str) -> Result<Self, LinkError> {
        let target = target.trim();
        if target.is_empty() {
            return Err(LinkError::EmptyTarget);
        }

        if let Some(anchor) = target.strip_prefix('#') {
            return SectionId::from_anchor(anchor)
                .map(Link::Section)
                .ok_or_else(|| LinkError::UnknownSection(target.to_string()));
        }

        let lowered = target.to_ascii_lowercase();
        if EXTERNAL_SCHEMES
            .iter()
            .any(|scheme| lowered.starts_with(scheme))
        {
            return Ok(Link::External(target.to_string()));
        }

        Ok(Link::Asset(target.to_string()))
    }

    #[must_use]
    pub fn is_in_page(&self) -> bool {
        matches!(self, Link::Section(_))
    }
}

impl From<SectionId> for Link {
    fn from(id: SectionId) -> Self {
        Link::Section(id)
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Link::Section(id) => write!(f, "#{id}"),
            Link::External(url) => f.write_str(url),
            Link::Asset(path) => f.write_str(path),
        }
    }
}

/// Hands an external or asset link to the OS.
///
/// In-page links have nothing to open and succeed immediately.
pub async fn open(link: Link) -> Result<(), LinkError> {
    match link {
        Link::Section(_) => Ok(()),
        Link::External(url) => open_with_os(&url),
        Link::Asset(relative) => {
            let path = paths::asset_path(&relative);
            if !path.exists() {
                return Err(LinkError::OpenFailed {
                    target: relative,
                    reason: format!("{} does not exist", path.display()),
                });
            }
            open_with_os(&path.to_string_lossy())
        }
    }
}

fn open_with_os(target: &str) -> Result<(), LinkError> {
    launch(target, |target| open::that_detached(target))
}

/// Starts `opener` on `target` without waiting for the handler to exit.
fn launch(
    target: &str,
    opener: impl FnOnce(&str) -> std::io::Result<()>,
) -> Result<(), LinkError> {
    match opener(target) {
        Ok(()) => {
            tracing::info!(link = target, "opened link");
            Ok(())
        }
        Err(err) => Err(LinkError::OpenFailed {
            target: target.to_string(),
            reason: err.to_string(),
        }),
    }
}
