// SPDX-License-Identifier: MPL-2.0
//! `folio` is a single-page personal portfolio built with the Iced GUI
//! framework.
//!
//! The page shows a hero banner, a biography, skills, projects, education
//! and a contact form, with a persisted light/dark theme and entrance
//! animations triggered as sections scroll into view.

pub mod app;
pub mod content;
pub mod error;
pub mod links;
pub mod logging;
pub mod ui;
