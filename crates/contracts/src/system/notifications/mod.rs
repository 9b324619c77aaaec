use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    /// Approval or contract the notification points to
    #[serde(default)]
    pub link: Option<String>,
}

/// Dashboard notification summary: unread counter plus the latest items.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NotificationSummary {
    pub total_unread: u32,
    #[serde(default)]
    pub items: Vec<NotificationItem>,
}
