// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module follows the Elm-style "state down, messages up" pattern:
//! views borrow state through small `ViewContext` structs and emit
//! messages that the application turns into state changes.
//!
//! # Page
//!
//! - [`navbar`] - Top bar with section links, theme toggle and compact menu
//! - [`sections`] - Hero, about, skills, projects, education and contact
//! - [`footer`] - Brand mark, copyright and scroll-to-top
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Scroll tracking and reveal animations
//! - [`section`] - Generic section wrapper with staggered reveal
//! - [`components`] - Reusable UI components (button, tag, level indicator)
//! - [`styles`] - Centralized styling (buttons, containers, inputs, text)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark theme store and color schemes
//! - [`icons`] - Glyph icons
//! - [`notifications`] - Toast notification system for user feedback

pub mod components;
pub mod design_tokens;
pub mod footer;
pub mod icons;
pub mod navbar;
pub mod notifications;
pub mod section;
pub mod sections;
pub mod state;
pub mod styles;
pub mod theming;
