// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Pure state kept apart from the main App struct so it can be tested
//! without building widgets.

pub mod reveal;
pub mod scroll;

pub use reveal::{Reveal, RevealTiming, SectionReveals};
pub use scroll::{ScrollTracker, ScrollUpdate, SmoothScroll};
