// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Window**: Initial and minimum window size
//! - **Scroll**: Active-section and reveal thresholds
//! - **Animation**: Reveal durations and stagger steps
//! - **Contact**: Simulated submit delay and result timeout

use std::time::Duration;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;

/// Default window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 860.0;

/// Smallest window width accepted from the config file.
pub const MIN_WINDOW_WIDTH: f32 = 360.0;

/// Smallest window height accepted from the config file.
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Largest window dimension accepted from the config file.
pub const MAX_WINDOW_DIMENSION: f32 = 7680.0;

// ==========================================================================
// Scroll Defaults
// ==========================================================================

/// A section becomes active once its top edge is closer than this to the
/// top of the viewport.
pub const ACTIVE_SECTION_OFFSET_PX: f32 = 100.0;

/// Fraction of a section that must be on screen before it reveals.
pub const REVEAL_VISIBILITY_THRESHOLD: f32 = 0.1;

/// Scroll distance after which the navbar switches to its raised surface.
pub const SCROLLED_NAVBAR_THRESHOLD_PX: f32 = 10.0;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Duration of a section's fade and slide.
pub const REVEAL_DURATION: Duration = Duration::from_millis(600);

/// Duration of a single staggered child.
pub const REVEAL_ITEM_DURATION: Duration = Duration::from_millis(500);

/// Delay between two staggered children of a section.
pub const REVEAL_STAGGER: Duration = Duration::from_millis(100);

/// Delay between the hero banner's children.
pub const HERO_STAGGER: Duration = Duration::from_millis(200);

/// Distance a section slides up while revealing.
pub const REVEAL_SLIDE_PX: f32 = 50.0;

/// Distance a staggered child slides up while revealing.
pub const REVEAL_ITEM_SLIDE_PX: f32 = 20.0;

/// Staggered children beyond this index share the last delay.
pub const MAX_STAGGERED_ITEMS: u32 = 8;

/// Length of the smooth scroll to a section.
pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(450);

/// Distance (px) between the page offset and the last snapped position
/// that counts as the user scrolling during a smooth scroll.
pub const SMOOTH_SCROLL_CANCEL_PX: f32 = 1.0;

/// Redraw interval while something animates.
pub const ANIMATION_TICK: Duration = Duration::from_millis(16);

// ==========================================================================
// Contact Form Defaults
// ==========================================================================

/// Simulated network delay of a contact form submission.
pub const SUBMIT_DELAY: Duration = Duration::from_secs(1);

/// How long the submission result stays on screen.
pub const SUBMIT_RESULT_TIMEOUT: Duration = Duration::from_secs(5);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_fits_bounds() {
        assert!(DEFAULT_WINDOW_WIDTH >= MIN_WINDOW_WIDTH);
        assert!(DEFAULT_WINDOW_HEIGHT >= MIN_WINDOW_HEIGHT);
        assert!(DEFAULT_WINDOW_WIDTH <= MAX_WINDOW_DIMENSION);
    }

    #[test]
    fn reveal_threshold_is_a_fraction() {
        assert!(REVEAL_VISIBILITY_THRESHOLD > 0.0);
        assert!(REVEAL_VISIBILITY_THRESHOLD <= 1.0);
    }

    #[test]
    fn result_outlives_submit_delay() {
        assert!(SUBMIT_RESULT_TIMEOUT > SUBMIT_DELAY);
    }
}
