// SPDX-License-Identifier: MPL-2.0
//! Cancellable auto-dismiss timers.
//!
//! Every timed notification gets one entry in a single [`DelayQueue`]. The
//! returned [`TimerKey`] is stored next to the notification so cancelling it
//! on an early dismissal is O(1). Nothing is spawned: the owner polls
//! [`ExpiryTimers::next_expired`] from its own event loop.
//!
//! Queued timers need a tokio runtime with its time driver enabled.
//! [`ExpiryTimers::try_schedule`] checks for one and declines otherwise, so
//! the caller can fall back to deadline polling.

use super::notification::NotificationId;
use futures_util::StreamExt;
use std::panic;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio_util::time::{delay_queue, DelayQueue};

/// Handle to a scheduled expiry, used to cancel it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimerKey(delay_queue::Key);

/// Deferred expiry tasks keyed by notification id.
#[derive(Debug, Default)]
pub struct ExpiryTimers {
    queue: DelayQueue<NotificationId>,
    /// Whether the current runtime has a time driver, once probed.
    time_driver: Option<bool>,
}

impl ExpiryTimers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `id` to expire after `after`.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime with the time driver
    /// enabled.
    pub fn schedule(&mut self, id: NotificationId, after: Duration) -> TimerKey {
        TimerKey(self.queue.insert(id, after))
    }

    /// Schedules `id` if a runtime with a time driver is available.
    ///
    /// Returns `None` outside a tokio runtime, or inside one built without
    /// `enable_time()`; nothing is queued in that case.
    pub fn try_schedule(&mut self, id: NotificationId, after: Duration) -> Option<TimerKey> {
        if !self.time_driver_available() {
            return None;
        }
        Some(self.schedule(id, after))
    }

    fn time_driver_available(&mut self) -> bool {
        if Handle::try_current().is_err() {
            return false;
        }
        *self.time_driver.get_or_insert_with(|| {
            // Sleep construction panics when the runtime has no time driver,
            // before anything touches the queue.
            panic::catch_unwind(|| drop(tokio::time::sleep(Duration::ZERO))).is_ok()
        })
    }

    /// Cancels a pending expiry. Returns `false` if it already fired.
    pub fn cancel(&mut self, key: &TimerKey) -> bool {
        self.queue.try_remove(&key.0).is_some()
    }

    /// Waits for the next expiry and returns its id.
    ///
    /// Resolves to `None` immediately when nothing is scheduled, so callers
    /// selecting on it should guard with [`ExpiryTimers::is_empty`].
    pub async fn next_expired(&mut self) -> Option<NotificationId> {
        self.queue.next().await.map(|expired| expired.into_inner())
    }

    /// Number of pending expiries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Drops every pending expiry.
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u64) -> NotificationId {
        NotificationId::from_raw(raw)
    }

    #[tokio::test(start_paused = true)]
    async fn expiries_fire_in_deadline_order() {
        let mut timers = ExpiryTimers::new();
        timers.schedule(id(1), Duration::from_millis(300));
        timers.schedule(id(2), Duration::from_millis(100));
        timers.schedule(id(3), Duration::from_millis(200));

        assert_eq!(timers.next_expired().await, Some(id(2)));
        assert_eq!(timers.next_expired().await, Some(id(3)));
        assert_eq!(timers.next_expired().await, Some(id(1)));
        assert!(timers.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_expiry_never_fires() {
        let mut timers = ExpiryTimers::new();
        let key = timers.schedule(id(1), Duration::from_millis(100));
        timers.schedule(id(2), Duration::from_millis(200));

        assert!(timers.cancel(&key));
        assert!(!timers.cancel(&key));
        assert_eq!(timers.len(), 1);

        assert_eq!(timers.next_expired().await, Some(id(2)));
    }

    #[test]
    fn try_schedule_declines_outside_runtime() {
        let mut timers = ExpiryTimers::new();

        assert!(timers.try_schedule(id(1), Duration::from_secs(1)).is_none());
        assert!(timers.is_empty());
    }

    #[test]
    fn try_schedule_declines_without_time_driver() {
        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("runtime without time driver");
        let _guard = rt.enter();
        let mut timers = ExpiryTimers::new();

        assert!(timers.try_schedule(id(1), Duration::from_secs(1)).is_none());
        assert!(timers.try_schedule(id(2), Duration::from_secs(2)).is_none());
        assert!(timers.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn try_schedule_queues_with_time_driver() {
        let mut timers = ExpiryTimers::new();

        assert!(timers.try_schedule(id(1), Duration::from_millis(10)).is_some());
        assert_eq!(timers.next_expired().await, Some(id(1)));
    }

    #[tokio::test(start_paused = true)]
    async fn empty_queue_resolves_to_none() {
        let mut timers = ExpiryTimers::new();
        assert_eq!(timers.next_expired().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn clear_drops_everything() {
        let mut timers = ExpiryTimers::new();
        timers.schedule(id(1), Duration::from_secs(1));
        timers.schedule(id(2), Duration::from_secs(2));

        timers.clear();

        assert!(timers.is_empty());
        assert_eq!(timers.next_expired().await, None);
    }
}
