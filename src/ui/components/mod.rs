// SPDX-License-Identifier: MPL-2.0
//! Reusable presentational components shared across sections.
//!
//! # Components
//!
//! - [`button`] - Variant/size button builder with optional icon
//! - [`level_indicator`] - Five-segment skill level bar
//! - [`tag`] - Pill label for technologies and highlights

pub mod button;
pub mod level_indicator;
pub mod tag;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use level_indicator::level_indicator;
pub use tag::{tag, tag_row};
