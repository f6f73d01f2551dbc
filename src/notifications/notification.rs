// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` record held by the center, the
//! `NotifyRequest` builder callers use to describe a toast, and the
//! `Severity` enum that drives styling.

use crate::config::MAX_DURATION_MS;
use crate::design_tokens::palette;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use std::time::Duration;
use tokio::time::Instant;

/// Unique identifier for a notification.
///
/// Allocated by the owning center from a strictly increasing counter that
/// starts at 1, so an id is never handed out twice by the same center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Wraps a raw counter value.
    #[must_use]
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw counter value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NotificationId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Returned by [`Severity::from_str`] for names outside the four levels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity: {0}")]
pub struct UnknownSeverity(pub String);

/// Severity level determines visual styling and accessibility role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// Operation completed successfully (green).
    Success,
    /// Informational message (blue). Fallback for unrecognized input.
    #[default]
    Info,
    /// Warning that doesn't block operation (orange).
    Warning,
    /// Error requiring attention (red).
    Error,
}

impl Severity {
    /// All severities, in display order.
    pub const ALL: [Severity; 4] = [
        Severity::Success,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
    ];

    /// Parses a caller-supplied severity, falling back to [`Severity::Info`].
    ///
    /// Absent, empty and unknown names never fail: a toast with an odd
    /// severity is still shown, just with the neutral presentation.
    #[must_use]
    pub fn parse_lenient(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.parse().ok()).unwrap_or_default()
    }

    /// Lowercase name, as used in CSS classes and config files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Severity-specific CSS class (`toast-success`, ...).
    #[must_use]
    pub fn css_class(self) -> String {
        format!("toast-{}", self.as_str())
    }

    /// ARIA role announced by screen readers.
    ///
    /// Warnings and errors interrupt (`alert`), the rest are polite (`status`).
    #[must_use]
    pub fn aria_role(self) -> &'static str {
        match self {
            Severity::Warning | Severity::Error => "alert",
            Severity::Success | Severity::Info => "status",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "success" => Ok(Severity::Success),
            "info" => Ok(Severity::Info),
            "warning" | "warn" => Ok(Severity::Warning),
            // Bootstrap-style alert names are common at call sites.
            "error" | "danger" => Ok(Severity::Error),
            _ => Err(UnknownSeverity(s.to_string())),
        }
    }
}

/// How long a notification stays active before it retires on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifetime {
    /// Use the center's configured default duration.
    #[default]
    Default,
    /// Auto-dismiss after the given duration.
    Timed(Duration),
    /// Stay until dismissed explicitly or cleared.
    Persistent,
}

impl Lifetime {
    /// Maps an optional millisecond count: absent is the default, `0` persists.
    #[must_use]
    pub fn from_millis(ms: Option<u64>) -> Self {
        match ms {
            None => Lifetime::Default,
            Some(0) => Lifetime::Persistent,
            Some(ms) => Lifetime::Timed(Duration::from_millis(ms)),
        }
    }

    /// Resolves against the center's default. `None` means no timer.
    ///
    /// Timed lifetimes are capped at [`MAX_DURATION_MS`].
    #[must_use]
    pub fn resolve(self, default: Option<Duration>) -> Option<Duration> {
        match self {
            Lifetime::Default => default,
            Lifetime::Timed(d) if d.is_zero() => None,
            Lifetime::Timed(d) => Some(d.min(Duration::from_millis(MAX_DURATION_MS))),
            Lifetime::Persistent => None,
        }
    }
}

/// A request to show a notification.
///
/// Built with the severity shorthands and handed to the center, which
/// assigns the id and creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyRequest {
    severity: Severity,
    message: String,
    args: Vec<(String, String)>,
    lifetime: Lifetime,
}

impl NotifyRequest {
    /// Creates a new request with the given severity and message.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            args: Vec::new(),
            lifetime: Lifetime::Default,
        }
    }

    /// Creates a success request.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    /// Creates an info request.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Creates a warning request.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Creates an error request.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Adds an argument substituted for `{key}` in the message.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.push((key.into(), value.into()));
        self
    }

    /// Sets a custom auto-dismiss duration, overriding the center default.
    ///
    /// A zero duration is treated like [`NotifyRequest::persistent`].
    #[must_use]
    pub fn auto_dismiss(mut self, duration: Duration) -> Self {
        self.lifetime = if duration.is_zero() {
            Lifetime::Persistent
        } else {
            Lifetime::Timed(duration)
        };
        self
    }

    /// Keeps the notification until it is dismissed.
    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.lifetime = Lifetime::Persistent;
        self
    }

    /// Sets the lifetime directly.
    #[must_use]
    pub fn lifetime(mut self, lifetime: Lifetime) -> Self {
        self.lifetime = lifetime;
        self
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn lifetime_setting(&self) -> Lifetime {
        self.lifetime
    }

    pub(crate) fn into_parts(self) -> (Severity, String, Vec<(String, String)>, Lifetime) {
        (self.severity, self.message, self.args, self.lifetime)
    }
}

/// Why a notification left the active set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// Its auto-dismiss timer fired.
    Expired,
    /// A caller (or the close button) dismissed it.
    Dismissed,
    /// It was removed by `clear_all` or a bulk dismissal.
    Cleared,
}

/// A notification owned by the center.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message: String,
    args: Vec<(String, String)>,
    created_at: Instant,
    duration: Option<Duration>,
    dismissal: Option<DismissReason>,
}

impl Notification {
    pub(crate) fn new(
        id: NotificationId,
        severity: Severity,
        message: String,
        args: Vec<(String, String)>,
        duration: Option<Duration>,
    ) -> Self {
        Self {
            id,
            severity,
            message,
            args,
            created_at: Instant::now(),
            duration,
            dismissal: None,
        }
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the raw message, before argument substitution.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the message arguments for interpolation.
    #[must_use]
    pub fn args(&self) -> &[(String, String)] {
        &self.args
    }

    /// Returns when this notification was created.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns the auto-dismiss duration, `None` if it persists.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Returns the age of this notification.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    /// Returns the earliest instant at which the notification may expire.
    #[must_use]
    pub fn expires_at(&self) -> Option<Instant> {
        self.duration.map(|d| self.created_at + d)
    }

    /// Returns whether the notification has been retired.
    #[must_use]
    pub fn is_dismissed(&self) -> bool {
        self.dismissal.is_some()
    }

    /// Returns how the notification was retired, if it was.
    #[must_use]
    pub fn dismissal(&self) -> Option<DismissReason> {
        self.dismissal
    }

    pub(crate) fn mark_dismissed(&mut self, reason: DismissReason) {
        // First retirement wins
        if self.dismissal.is_none() {
            self.dismissal = Some(reason);
        }
    }

    /// Returns the message with every `{key}` replaced by its argument.
    #[must_use]
    pub fn text(&self) -> String {
        self.args
            .iter()
            .fold(self.message.clone(), |text, (key, value)| {
                text.replace(&format!("{{{key}}}"), value)
            })
    }
}
