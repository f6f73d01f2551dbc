// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (booking saved, payment failed, ...) without blocking
//! interaction.
//!
//! # Components
//!
//! - [`notification`] - `Notification` record, `NotifyRequest` builder, `Severity`
//! - [`center`] - `NotificationCenter` for lifecycle management
//! - [`timers`] - Cancellable auto-dismiss timers
//! - [`render`] - `RenderTarget` seam and `ToastElement` rendering
//! - [`history`] - Bounded history of retired notifications
//!
//! # Usage
//!
//! ```
//! use notification_center::notifications::{MemoryTarget, NotificationCenter, Severity};
//!
//! let mut center = NotificationCenter::new(MemoryTarget::new());
//! center.initialize("notification-container");
//!
//! let id = center.notify("Error", Severity::Error, Some(0));
//! assert!(center.dismiss(id));
//! assert!(!center.dismiss(id));
//! ```
//!
//! # Design Considerations
//!
//! - Default duration: 5s, configurable; `0` keeps a toast until dismissed
//! - Unknown severities render as info rather than being dropped
//! - The container is re-created if the page removed it

pub mod center;
pub mod history;
pub mod notification;
pub mod render;
pub mod timers;

pub use center::{Message as NotificationMessage, NotificationCenter};
pub use history::{CircularBuffer, HistoryCapacity};
pub use notification::{
    DismissReason, Lifetime, Notification, NotificationId, NotifyRequest, Severity,
    UnknownSeverity,
};
pub use render::{MemoryTarget, RenderTarget, ToastElement};
pub use timers::{ExpiryTimers, TimerKey};
