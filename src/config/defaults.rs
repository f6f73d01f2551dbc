// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Notifications**: Auto-dismiss duration, container id, message fallback
//! - **History**: Retired-notification ring buffer bounds
//! - **Logging**: Default tracing filter

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default time-to-live of a notification, in milliseconds.
pub const DEFAULT_DURATION_MS: u64 = 5000;

/// Longest accepted time-to-live (one hour). Larger values are clamped.
pub const MAX_DURATION_MS: u64 = 3_600_000;

/// Id of the element that holds every toast on a page.
pub const DEFAULT_CONTAINER_ID: &str = "notification-container";

/// Text shown when a caller passes an empty message.
pub const EMPTY_MESSAGE_PLACEHOLDER: &str = "Notification";

// ==========================================================================
// History Defaults
// ==========================================================================

/// Default number of retired notifications kept for display.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Minimum history capacity.
pub const MIN_HISTORY_CAPACITY: usize = 1;

/// Maximum history capacity.
pub const MAX_HISTORY_CAPACITY: usize = 500;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Filter used when neither `RUST_LOG` nor the config file sets one.
pub const DEFAULT_LOG_FILTER: &str = "info";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_duration_is_within_bounds() {
        assert!(DEFAULT_DURATION_MS > 0);
        assert!(DEFAULT_DURATION_MS <= MAX_DURATION_MS);
    }

    #[test]
    fn history_bounds_are_ordered() {
        assert!(MIN_HISTORY_CAPACITY <= DEFAULT_HISTORY_CAPACITY);
        assert!(DEFAULT_HISTORY_CAPACITY <= MAX_HISTORY_CAPACITY);
    }
}
