//! Notification records shown in the notification panel.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{NotificationCategory, NotificationId};

/// A notification delivered by the backend's event source.
///
/// Records are created externally. The client only flips `read`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRecord {
    pub id: NotificationId,
    #[serde(rename = "type")]
    pub category: NotificationCategory,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
}

impl NotificationRecord {
    /// Create an unread record with a fresh random ID, timestamped now.
    #[must_use]
    pub fn new(
        category: NotificationCategory,
        title: impl Into<String>,
        subtitle: impl Into<String>,
    ) -> Self {
        Self {
            id: NotificationId::new(uuid::Uuid::new_v4().to_string()),
            category,
            title: title.into(),
            subtitle: subtitle.into(),
            created_at: Utc::now(),
            read: false,
        }
    }

    /// Icon name for this record's category.
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        self.category.icon()
    }

    /// Age of the record relative to `now`, formatted for display.
    #[must_use]
    pub fn relative_time(&self, now: DateTime<Utc>) -> String {
        format_relative_time(self.created_at, now)
    }
}

/// Format how long ago `created_at` was, as seen from `now`.
///
/// Produces `Just now` under a minute, then `{n}m ago`, `{n}h ago`, and
/// `{n}d ago` up to a week. Older timestamps render as an absolute date
/// such as `Sep 3, 2026`. Timestamps after `now` count as `Just now`.
#[must_use]
pub fn format_relative_time(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(created_at);
    let seconds = elapsed.num_seconds();

    if seconds < 60 {
        return "Just now".to_string();
    }

    let minutes = elapsed.num_minutes();
    if minutes < 60 {
        return format!("{minutes}m ago");
    }

    let hours = elapsed.num_hours();
    if hours < 24 {
        return format!("{hours}h ago");
    }

    let days = elapsed.num_days();
    if days < 7 {
        return format!("{days}d ago");
    }

    created_at.format("%b %-d, %Y").to_string()
}
