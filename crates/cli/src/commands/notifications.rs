//! Notification subcommands.

use chrono::{DateTime, Utc};
use herd_market_core::{NotificationCategory, NotificationId, NotificationRecord};
use herd_market_storefront::NotificationStore;
use tracing::{info, warn};

/// Print notifications newest first, with times relative to `now`.
pub fn list(store: &NotificationStore, unread_only: bool, now: DateTime<Utc>) {
    for record in store.records().iter().filter(|r| !unread_only || !r.read) {
        info!(
            id = %record.id,
            icon = record.icon(),
            read = record.read,
            when = %record.relative_time(now),
            "{} - {}",
            record.title,
            record.subtitle
        );
    }
    info!(
        total = store.records().len(),
        unread = store.unread_count(),
        "Notifications"
    );
}

pub fn push(
    store: &mut NotificationStore,
    category: NotificationCategory,
    title: String,
    subtitle: String,
) {
    let record = NotificationRecord::new(category, title, subtitle);
    let id = record.id.clone();
    if store.push(record) {
        info!(%id, unread = store.unread_count(), "Notification recorded");
    } else {
        warn!(%id, "Notification already recorded");
    }
}

pub fn mark_read(store: &mut NotificationStore, id: &NotificationId) {
    if !store.records().iter().any(|record| &record.id == id) {
        warn!(%id, "No such notification");
        return;
    }
    store.mark_as_read(id);
    info!(%id, unread = store.unread_count(), "Notification read");
}
