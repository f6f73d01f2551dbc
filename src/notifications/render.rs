// SPDX-License-Identifier: MPL-2.0
//! Rendering of notifications into a host container.
//!
//! The host page owns the element tree; the center only ever talks to it
//! through [`RenderTarget`]. Each active notification maps to exactly one
//! [`ToastElement`] inside the container named by the center.

use super::notification::{Notification, NotificationId, Severity};
use crate::design_tokens::{self, class};
use std::collections::HashMap;
use std::fmt::Write as _;

/// Rendered representation of one notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastElement {
    pub notification_id: NotificationId,
    pub severity: Severity,
    /// CSS classes, base class first.
    pub classes: Vec<String>,
    /// ARIA role (`alert` or `status`).
    pub role: &'static str,
    /// Accent color from the severity palette.
    pub accent: &'static str,
    /// Inline style string.
    pub style: String,
    /// Message after argument substitution. Markup is passed through.
    pub text: String,
    /// Whether a close button is rendered.
    pub dismissible: bool,
}

impl ToastElement {
    /// Builds the element for a notification.
    #[must_use]
    pub fn from_notification(notification: &Notification) -> Self {
        let severity = notification.severity();
        Self {
            notification_id: notification.id(),
            severity,
            classes: vec![class::TOAST.to_string(), severity.css_class()],
            role: severity.aria_role(),
            accent: severity.color(),
            style: design_tokens::toast_style(severity.color()),
            text: notification.text(),
            dismissible: true,
        }
    }

    #[must_use]
    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }

    /// Serializes the element as an HTML fragment.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = format!(
            r#"<div class="{}" role="{}" data-notification-id="{}" style="{}">"#,
            self.classes.join(" "),
            self.role,
            self.notification_id,
            self.style,
        );
        let _ = write!(html, r#"<span class="toast-message">{}</span>"#, self.text);
        if self.dismissible {
            let _ = write!(
                html,
                r#"<button type="button" class="{}" aria-label="Dismiss" style="{}">&times;</button>"#,
                class::DISMISS,
                design_tokens::dismiss_style(),
            );
        }
        html.push_str("</div>");
        html
    }
}

/// A DOM-like host that owns the notification container.
///
/// The container may disappear between calls (another script may rebuild
/// the page region), so implementations must accept `append`/`remove` on a
/// missing container without panicking.
pub trait RenderTarget {
    /// Returns whether a container with this id currently exists.
    fn has_container(&self, container: &str) -> bool;

    /// Creates an empty container. No-op if it already exists.
    fn create_container(&mut self, container: &str);

    /// Appends an element at the end of the container.
    fn append(&mut self, container: &str, element: ToastElement);

    /// Removes the element rendered for `id`. Returns whether one was found.
    fn remove(&mut self, container: &str, id: NotificationId) -> bool;

    /// Removes every element from the container.
    fn clear(&mut self, container: &str);
}

impl<T: RenderTarget + ?Sized> RenderTarget for &mut T {
    fn has_container(&self, container: &str) -> bool {
        (**self).has_container(container)
    }

    fn create_container(&mut self, container: &str) {
        (**self).create_container(container);
    }

    fn append(&mut self, container: &str, element: ToastElement) {
        (**self).append(container, element);
    }

    fn remove(&mut self, container: &str, id: NotificationId) -> bool {
        (**self).remove(container, id)
    }

    fn clear(&mut self, container: &str) {
        (**self).clear(container);
    }
}

/// In-memory page used by the console playground and tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryTarget {
    containers: HashMap<String, Vec<ToastElement>>,
}

impl MemoryTarget {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes a container and everything in it, as a page rebuild would.
    pub fn detach(&mut self, container: &str) -> bool {
        self.containers.remove(container).is_some()
    }

    /// Elements of a container in display order; empty if it is missing.
    #[must_use]
    pub fn elements(&self, container: &str) -> &[ToastElement] {
        self.containers
            .get(container)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn container_count(&self) -> usize {
        self.containers.len()
    }

    /// Serializes a container as HTML, `None` if it does not exist.
    #[must_use]
    pub fn render_html(&self, container: &str) -> Option<String> {
        let elements = self.containers.get(container)?;
        let mut html = format!(
            r#"<div id="{}" class="{}" aria-live="polite" style="{}">"#,
            container,
            class::CONTAINER,
            design_tokens::container_style(),
        );
        for element in elements {
            html.push_str(&element.to_html());
        }
        html.push_str("</div>");
        Some(html)
    }
}

impl RenderTarget for MemoryTarget {
    fn has_container(&self, container: &str) -> bool {
        self.containers.contains_key(container)
    }

    fn create_container(&mut self, container: &str) {
        self.containers.entry(container.to_string()).or_default();
    }

    fn append(&mut self, container: &str, element: ToastElement) {
        if let Some(elements) = self.containers.get_mut(container) {
            elements.push(element);
        }
    }

    fn remove(&mut self, container: &str, id: NotificationId) -> bool {
        let Some(elements) = self.containers.get_mut(container) else {
            return false;
        };
        match elements.iter().position(|e| e.notification_id == id) {
            Some(pos) => {
                elements.remove(pos);
                true
            }
            None => false,
        }
    }

    fn clear(&mut self, container: &str) {
        if let Some(elements) = self.containers.get_mut(container) {
            elements.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(raw: u64, severity: Severity, message: &str) -> Notification {
        Notification::new(
            NotificationId::from_raw(raw),
            severity,
            message.to_string(),
            Vec::new(),
            None,
        )
    }

    #[test]
    fn element_carries_severity_styling() {
        let element = ToastElement::from_notification(&notification(1, Severity::Error, "Boom"));

        assert!(element.has_class("toast"));
        assert!(element.has_class("toast-error"));
        assert_eq!(element.role, "alert");
        assert_eq!(element.accent, Severity::Error.color());
        assert!(element.style.contains(Severity::Error.color()));
    }

    #[test]
    fn html_passes_markup_through() {
        let element =
            ToastElement::from_notification(&notification(3, Severity::Success, "<b>Saved</b>"));
        let html = element.to_html();

        assert!(html.contains(r#"data-notification-id="3""#));
        assert!(html.contains("<b>Saved</b>"));
        assert!(html.contains("toast-dismiss"));
        assert!(html.contains(&design_tokens::dismiss_style()));
    }

    #[test]
    fn append_to_missing_container_is_ignored() {
        let mut target = MemoryTarget::new();
        let element = ToastElement::from_notification(&notification(1, Severity::Info, "x"));

        target.append("toasts", element);

        assert!(!target.has_container("toasts"));
        assert!(target.elements("toasts").is_empty());
    }

    #[test]
    fn remove_only_touches_matching_element() {
        let mut target = MemoryTarget::new();
        target.create_container("toasts");
        for raw in 1..=3 {
            let n = notification(raw, Severity::Info, "x");
            target.append("toasts", ToastElement::from_notification(&n));
        }

        assert!(target.remove("toasts", NotificationId::from_raw(2)));
        assert!(!target.remove("toasts", NotificationId::from_raw(2)));
        assert!(!target.remove("missing", NotificationId::from_raw(1)));

        let ids: Vec<u64> = target
            .elements("toasts")
            .iter()
            .map(|e| e.notification_id.value())
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn create_container_is_idempotent() {
        let mut target = MemoryTarget::new();
        target.create_container("toasts");
        let n = notification(1, Severity::Info, "x");
        target.append("toasts", ToastElement::from_notification(&n));

        target.create_container("toasts");

        assert_eq!(target.container_count(), 1);
        assert_eq!(target.elements("toasts").len(), 1);
    }

    #[test]
    fn render_html_wraps_elements() {
        let mut target = MemoryTarget::new();
        assert!(target.render_html("toasts").is_none());

        target.create_container("toasts");
        let html = target.render_html("toasts").expect("container exists");
        assert!(html.starts_with(r#"<div id="toasts" class="toast-container""#));
        assert!(html.contains(&design_tokens::container_style()));
        assert!(html.ends_with("</div>"));
    }

    #[test]
    fn detach_drops_container() {
        let mut target = MemoryTarget::new();
        target.create_container("toasts");

        assert!(target.detach("toasts"));
        assert!(!target.detach("toasts"));
        assert!(!target.has_container("toasts"));
    }
}
