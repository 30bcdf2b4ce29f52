// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Link(LinkError),
}

/// Failures when handing a link over to the operating system.
#[derive(Debug, Clone, PartialEq)]
pub enum LinkError {
    /// The target string is empty or only whitespace.
    EmptyTarget,

    /// `#anchor` that names no section of the page.
    UnknownSection(String),

    /// The OS refused to open the target (no handler, missing file, ...).
    OpenFailed { target: String, reason: String },
}

impl LinkError {
    /// Short user-facing text for a toast.
    pub fn user_message(&self) -> String {
        match self {
            LinkError::EmptyTarget => "This link has no destination.".to_string(),
            LinkError::UnknownSection(anchor) => format!("There is no {anchor} section."),
            LinkError::OpenFailed { target, .. } => format!("Could not open {target}"),
        }
    }
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkError::EmptyTarget => write!(f, "empty link target"),
            LinkError::UnknownSection(anchor) => write!(f, "unknown section anchor {}", anchor),
            LinkError::OpenFailed { target, reason } => {
                write!(f, "failed to open {}: {}", target, reason)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Link(e) => write!(f, "Link Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<LinkError> for Error {
    fn from(err: LinkError) -> Self {
        Error::Link(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn link_error_wraps_into_error() {
        let err: Error = LinkError::EmptyTarget.into();
        assert_eq!(format!("{}", err), "Link Error: empty link target");
    }

    #[test]
    fn open_failed_user_message_names_target() {
        let err = LinkError::OpenFailed {
            target: "https://example.com".to_string(),
            reason: "no handler".to_string(),
        };
        assert_eq!(err.user_message(), "Could not open https://example.com");
        assert!(err.to_string().contains("no handler"));
    }
}
