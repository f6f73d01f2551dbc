// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `NotificationCenter` accepts notification requests, renders each one
//! into a single container on its [`RenderTarget`], and retires it after its
//! timeout or an explicit dismissal. It is a plain owned value: every
//! operation takes `&mut self` and runs to completion, and auto-dismiss
//! timers are only delivered when the owner polls them.

use super::history::{CircularBuffer, HistoryCapacity};
use super::notification::{
    DismissReason, Lifetime, Notification, NotificationId, NotifyRequest, Severity,
};
use super::render::{RenderTarget, ToastElement};
use super::timers::{ExpiryTimers, TimerKey};
use crate::config::{NotificationsConfig, EMPTY_MESSAGE_PLACEHOLDER};
use std::collections::BTreeMap;
use std::time::Duration;
use tokio::time::Instant;

/// Messages for notification state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Dismiss a specific notification by ID (close button).
    Dismiss(NotificationId),
    /// An auto-dismiss timer fired for this notification.
    Expired(NotificationId),
    /// Retire every notification whose deadline has passed.
    Tick,
}

/// An active notification and its pending expiry, if any.
#[derive(Debug)]
struct Entry {
    notification: Notification,
    timer: Option<TimerKey>,
}

/// Owns the active notifications of one page or view.
#[derive(Debug)]
pub struct NotificationCenter<T> {
    target: T,
    container_id: String,
    default_duration: Option<Duration>,
    /// Last id handed out; ids start at 1.
    last_id: u64,
    /// Keyed by id, which is also insertion order.
    active: BTreeMap<NotificationId, Entry>,
    timers: ExpiryTimers,
    history: CircularBuffer<Notification>,
}

impl<T: RenderTarget> NotificationCenter<T> {
    /// Creates a center with default settings rendering into `target`.
    pub fn new(target: T) -> Self {
        Self::with_config(target, &NotificationsConfig::default())
    }

    /// Creates a center from the `[notifications]` settings section.
    pub fn with_config(target: T, config: &NotificationsConfig) -> Self {
        Self {
            target,
            container_id: config.container_id().to_string(),
            default_duration: config.default_duration(),
            last_id: 0,
            active: BTreeMap::new(),
            timers: ExpiryTimers::new(),
            history: CircularBuffer::new(HistoryCapacity::new(config.history_capacity())),
        }
    }

    /// Binds the center to `container` and makes sure it exists.
    ///
    /// Idempotent. When the container id changes, active toasts move to the
    /// new container. Returns `true` if a container had to be created.
    pub fn initialize(&mut self, container: &str) -> bool {
        if container != self.container_id {
            for id in self.active.keys() {
                self.target.remove(&self.container_id, *id);
            }
            tracing::debug!(from = %self.container_id, to = container, "retargeting notifications");
            self.container_id = container.to_string();

            if self.target.has_container(container) {
                for entry in self.active.values() {
                    self.target
                        .append(container, ToastElement::from_notification(&entry.notification));
                }
                return false;
            }
        }
        self.ensure_container()
    }

    /// Shows a notification and returns its id.
    ///
    /// `duration_ms` of `None` uses the configured default, `Some(0)` keeps
    /// the notification until it is dismissed. Never fails: an empty message
    /// is replaced by a placeholder.
    pub fn notify(
        &mut self,
        message: &str,
        severity: Severity,
        duration_ms: Option<u64>,
    ) -> NotificationId {
        self.notify_with(
            NotifyRequest::new(severity, message).lifetime(Lifetime::from_millis(duration_ms)),
        )
    }

    /// Like [`NotificationCenter::notify`], for callers holding a raw
    /// severity name. Unknown or missing names are shown as `info`.
    pub fn notify_raw(
        &mut self,
        message: &str,
        severity: Option<&str>,
        duration_ms: Option<u64>,
    ) -> NotificationId {
        self.notify(message, Severity::parse_lenient(severity), duration_ms)
    }

    /// Shows a success notification with the default duration.
    pub fn success(&mut self, message: &str) -> NotificationId {
        self.notify_with(NotifyRequest::success(message))
    }

    /// Shows an info notification with the default duration.
    pub fn info(&mut self, message: &str) -> NotificationId {
        self.notify_with(NotifyRequest::info(message))
    }

    /// Shows a warning notification with the default duration.
    pub fn warning(&mut self, message: &str) -> NotificationId {
        self.notify_with(NotifyRequest::warning(message))
    }

    /// Shows an error notification with the default duration.
    pub fn error(&mut self, message: &str) -> NotificationId {
        self.notify_with(NotifyRequest::error(message))
    }

    /// Shows a notification described by a request builder.
    pub fn notify_with(&mut self, request: NotifyRequest) -> NotificationId {
        let (severity, message, args, lifetime) = request.into_parts();
        let message = if message.trim().is_empty() {
            EMPTY_MESSAGE_PLACEHOLDER.to_string()
        } else {
            message
        };

        self.last_id += 1;
        let id = NotificationId::from_raw(self.last_id);
        let duration = lifetime.resolve(self.default_duration);
        let notification = Notification::new(id, severity, message, args, duration);

        match severity {
            Severity::Warning => tracing::warn!(%id, message = %notification.text(), "notification"),
            Severity::Error => tracing::error!(%id, message = %notification.text(), "notification"),
            Severity::Success | Severity::Info => {
                tracing::debug!(%id, %severity, ?duration, "notification");
            }
        }

        self.ensure_container();
        self.target
            .append(&self.container_id, ToastElement::from_notification(&notification));

        let timer = duration.and_then(|d| self.schedule(id, d));
        self.active.insert(
            id,
            Entry {
                notification,
                timer,
            },
        );
        id
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if it was active. Unknown and already dismissed ids are
    /// a no-op returning `false`.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.retire(id, DismissReason::Dismissed)
    }

    /// Dismisses every active notification matching `predicate`.
    ///
    /// Returns how many were dismissed.
    pub fn dismiss_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&Notification) -> bool,
    {
        let matching: Vec<NotificationId> = self
            .active
            .values()
            .filter(|entry| predicate(&entry.notification))
            .map(|entry| entry.notification.id())
            .collect();

        let mut count = 0;
        for id in matching {
            if self.retire(id, DismissReason::Cleared) {
                count += 1;
            }
        }
        count
    }

    /// Dismisses every active notification and empties the container.
    ///
    /// Returns how many were active.
    pub fn clear_all(&mut self) -> usize {
        let count = self.dismiss_where(|_| true);

        // Nothing may outlive the active set, including stray elements.
        self.timers.clear();
        if self.target.has_container(&self.container_id) {
            self.target.clear(&self.container_id);
        }
        if count > 0 {
            tracing::debug!(count, "cleared notifications");
        }
        count
    }

    /// Waits for the next auto-dismiss timer and retires that notification.
    ///
    /// Resolves to `None` immediately when no timer is pending; event loops
    /// should guard on [`NotificationCenter::pending_timers`].
    pub async fn next_expired(&mut self) -> Option<NotificationId> {
        loop {
            let id = self.timers.next_expired().await?;
            if let Some(entry) = self.active.get_mut(&id) {
                // The queue already dropped this key
                entry.timer = None;
                self.retire(id, DismissReason::Expired);
                return Some(id);
            }
        }
    }

    /// Retires every notification whose deadline has passed, without waiting.
    ///
    /// Covers timers that came due during a stall, and timed notifications
    /// created outside a tokio runtime (which have no queued timer).
    pub fn tick(&mut self) -> Vec<NotificationId> {
        let now = Instant::now();
        let due: Vec<NotificationId> = self
            .active
            .values()
            .filter(|entry| {
                entry
                    .notification
                    .expires_at()
                    .is_some_and(|deadline| deadline <= now)
            })
            .map(|entry| entry.notification.id())
            .collect();

        for id in &due {
            self.retire(*id, DismissReason::Expired);
        }
        due
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(id);
            }
            Message::Expired(id) => {
                self.retire(id, DismissReason::Expired);
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Returns the active notification with this id.
    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.active.get(&id).map(|entry| &entry.notification)
    }

    #[must_use]
    pub fn is_active(&self, id: NotificationId) -> bool {
        self.active.contains_key(&id)
    }

    /// Returns the active notifications in insertion order.
    pub fn active(&self) -> impl Iterator<Item = &Notification> {
        self.active.values().map(|entry| &entry.notification)
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.active.is_empty()
    }

    /// Number of auto-dismiss timers still pending.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Retired notifications, oldest first.
    pub fn history(&self) -> impl DoubleEndedIterator<Item = &Notification> {
        self.history.iter()
    }

    #[must_use]
    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    #[must_use]
    pub fn default_duration(&self) -> Option<Duration> {
        self.default_duration
    }

    #[must_use]
    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    /// Consumes the center, returning its render target.
    ///
    /// Pending timers are dropped; the rendered elements stay on the target.
    pub fn into_target(self) -> T {
        self.target
    }

    /// Creates the container if it is missing, re-rendering active toasts
    /// into it. Returns `true` if it was created.
    fn ensure_container(&mut self) -> bool {
        if self.target.has_container(&self.container_id) {
            return false;
        }
        self.target.create_container(&self.container_id);
        if !self.active.is_empty() {
            tracing::warn!(
                container = %self.container_id,
                count = self.active.len(),
                "notification container was missing; re-rendering active toasts"
            );
        }
        for entry in self.active.values() {
            self.target.append(
                &self.container_id,
                ToastElement::from_notification(&entry.notification),
            );
        }
        true
    }

    fn schedule(&mut self, id: NotificationId, after: Duration) -> Option<TimerKey> {
        let key = self.timers.try_schedule(id, after);
        if key.is_none() {
            tracing::debug!(%id, "no tokio time driver; expiry left to tick()");
        }
        key
    }

    /// Moves an active notification to history. Returns `false` if it was
    /// not active.
    fn retire(&mut self, id: NotificationId, reason: DismissReason) -> bool {
        let Some(mut entry) = self.active.remove(&id) else {
            return false;
        };
        if let Some(key) = entry.timer.take() {
            self.timers.cancel(&key);
        }
        // The container may have been rebuilt without this element.
        self.target.remove(&self.container_id, id);

        entry.notification.mark_dismissed(reason);
        tracing::debug!(%id, ?reason, "notification retired");
        self.history.push(entry.notification);
        true
    }
}
