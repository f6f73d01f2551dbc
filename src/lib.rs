// SPDX-License-Identifier: MPL-2.0
//! `notification_center` dispatches transient user-facing messages (toasts)
//! and manages their lifecycle.
//!
//! Callers anywhere on a page push notifications through one
//! [`NotificationCenter`](notifications::NotificationCenter); the center
//! renders them into a single container and retires them after a timeout or
//! an explicit dismissal.

pub mod config;
pub mod design_tokens;
pub mod error;
pub mod logging;
pub mod notifications;
pub mod paths;
pub mod playground;
