// SPDX-License-Identifier: MPL-2.0
//! Line-oriented console playground for a notification center.
//!
//! Each input line is parsed into a [`Command`] and applied to a center
//! rendering into a [`MemoryTarget`], so the lifecycle can be exercised
//! without a browser.

use crate::notifications::{
    MemoryTarget, Notification, NotificationCenter, NotificationId, Severity,
};
use std::str::FromStr;
use tokio::time::Instant;

/// Help text listing every command.
pub const USAGE: &str = "\
Commands:
  notify <severity> [--ms N] <message>   show a toast (severity: success|info|warning|error)
  success|info|warning|error <message>   shorthand with the default duration
  dismiss <id>                           dismiss a toast
  clear                                  dismiss every toast
  list                                   show active toasts
  history                                show retired toasts
  html                                   print the rendered container
  detach                                 remove the container, as a page rebuild would
  help                                   show this help
  quit                                   exit";

/// A parsed playground command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Notify {
        severity: Severity,
        duration_ms: Option<u64>,
        message: String,
    },
    Dismiss(NotificationId),
    Clear,
    List,
    History,
    Html,
    Detach,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("missing argument: {0}")]
    Missing(&'static str),
    #[error("invalid {what}: {value}")]
    Invalid { what: &'static str, value: String },
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let name = tokens.next().ok_or(CommandError::Empty)?;

        match name.to_ascii_lowercase().as_str() {
            "notify" => {
                // Unknown severities still produce a toast, shown as info.
                let severity = Severity::parse_lenient(tokens.next());
                let rest: Vec<&str> = tokens.collect();
                let (duration_ms, words) = match rest.split_first() {
                    Some((&"--ms", tail)) => {
                        let raw = tail.first().ok_or(CommandError::Missing("duration"))?;
                        let ms = raw.parse().map_err(|_| CommandError::Invalid {
                            what: "duration",
                            value: (*raw).to_string(),
                        })?;
                        (Some(ms), &tail[1..])
                    }
                    _ => (None, &rest[..]),
                };
                Ok(Command::Notify {
                    severity,
                    duration_ms,
                    message: words.join(" "),
                })
            }
            "success" | "info" | "warning" | "error" => Ok(Command::Notify {
                severity: Severity::parse_lenient(Some(name)),
                duration_ms: None,
                message: tokens.collect::<Vec<_>>().join(" "),
            }),
            "dismiss" => {
                let raw = tokens.next().ok_or(CommandError::Missing("id"))?;
                let id = raw
                    .trim_start_matches('#')
                    .parse()
                    .map_err(|_| CommandError::Invalid {
                        what: "id",
                        value: raw.to_string(),
                    })?;
                Ok(Command::Dismiss(id))
            }
            "clear" => Ok(Command::Clear),
            "list" | "ls" => Ok(Command::List),
            "history" => Ok(Command::History),
            "html" => Ok(Command::Html),
            "detach" => Ok(Command::Detach),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// One-line summary of a notification.
#[must_use]
pub fn describe(notification: &Notification) -> String {
    let lifetime = match notification.expires_at() {
        None => "persistent".to_string(),
        Some(deadline) => {
            let left = deadline.saturating_duration_since(Instant::now());
            format!("{:.1}s left", left.as_secs_f32())
        }
    };
    format!(
        "#{} [{}] {} ({})",
        notification.id(),
        notification.severity(),
        notification.text(),
        lifetime
    )
}

/// Applies a command and returns the lines to print.
pub fn execute(center: &mut NotificationCenter<MemoryTarget>, command: Command) -> Vec<String> {
    match command {
        Command::Notify {
            severity,
            duration_ms,
            message,
        } => {
            let id = center.notify(&message, severity, duration_ms);
            vec![format!("created #{id}")]
        }
        Command::Dismiss(id) => {
            if center.dismiss(id) {
                vec![format!("dismissed #{id}")]
            } else {
                vec![format!("#{id} is not active")]
            }
        }
        Command::Clear => vec![format!("cleared {} notification(s)", center.clear_all())],
        Command::List => {
            let lines: Vec<String> = center.active().map(describe).collect();
            if lines.is_empty() {
                vec!["no active notifications".to_string()]
            } else {
                lines
            }
        }
        Command::History => center
            .history()
            .map(|n| {
                let reason = n
                    .dismissal()
                    .map_or_else(String::new, |r| format!(" {r:?}"));
                format!("#{} [{}] {}{}", n.id(), n.severity(), n.text(), reason)
            })
            .collect(),
        Command::Html => {
            let container = center.container_id().to_string();
            vec![center
                .target()
                .render_html(&container)
                .unwrap_or_else(|| format!("<!-- #{container} missing -->"))]
        }
        Command::Detach => {
            let container = center.container_id().to_string();
            if center.target_mut().detach(&container) {
                vec![format!("detached #{container}")]
            } else {
                vec![format!("#{container} was not attached")]
            }
        }
        Command::Help => vec![USAGE.to_string()],
        Command::Quit => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_notify_with_duration() {
        let command: Command = "notify success --ms 1500 Booking saved".parse().unwrap();
        assert_eq!(
            command,
            Command::Notify {
                severity: Severity::Success,
                duration_ms: Some(1500),
                message: "Booking saved".to_string(),
            }
        );
    }

    #[test]
    fn bogus_severity_parses_as_info() {
        let command: Command = "notify bogus-severity x".parse().unwrap();
        assert_eq!(
            command,
            Command::Notify {
                severity: Severity::Info,
                duration_ms: None,
                message: "x".to_string(),
            }
        );
    }

    #[test]
    fn shorthand_uses_default_duration() {
        let command: Command = "error Payment declined".parse().unwrap();
        assert!(matches!(
            command,
            Command::Notify { severity: Severity::Error, duration_ms: None, .. }
        ));
    }

    #[test]
    fn parse_errors_are_reported() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "launch".parse::<Command>(),
            Err(CommandError::Unknown("launch".to_string()))
        );
        assert_eq!("dismiss".parse::<Command>(), Err(CommandError::Missing("id")));
        assert!(matches!(
            "notify info --ms soon hi".parse::<Command>(),
            Err(CommandError::Invalid { what: "duration", .. })
        ));
    }

    #[test]
    fn dismiss_accepts_hash_prefix() {
        assert_eq!(
            "dismiss #4".parse::<Command>(),
            Ok(Command::Dismiss(NotificationId::from_raw(4)))
        );
    }

    #[test]
    fn execute_runs_full_lifecycle() {
        let mut center = NotificationCenter::new(MemoryTarget::new());

        let created = execute(&mut center, "notify error --ms 0 Error".parse().unwrap());
        assert_eq!(created, vec!["created #1".to_string()]);

        let listed = execute(&mut center, Command::List);
        assert_eq!(listed, vec!["#1 [error] Error (persistent)".to_string()]);

        let html = execute(&mut center, Command::Html);
        assert!(html[0].contains("toast-error"));

        assert_eq!(
            execute(&mut center, Command::Dismiss(NotificationId::from_raw(1))),
            vec!["dismissed #1".to_string()]
        );
        assert_eq!(
            execute(&mut center, Command::Dismiss(NotificationId::from_raw(1))),
            vec!["#1 is not active".to_string()]
        );

        let history = execute(&mut center, Command::History);
        assert_eq!(history, vec!["#1 [error] Error Dismissed".to_string()]);
    }

    #[test]
    fn detach_then_html_reports_missing_container() {
        let mut center = NotificationCenter::new(MemoryTarget::new());
        let container = center.container_id().to_string();
        center.initialize(&container);

        execute(&mut center, Command::Detach);
        let html = execute(&mut center, Command::Html);

        assert!(html[0].contains("missing"));
    }
}
