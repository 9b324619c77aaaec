//! Dashboard notifications: optimistic mark-as-read over a periodically
//! refreshed summary.

pub mod api;
pub mod hook;
pub mod store;
pub mod ui;

pub use hook::{use_notification_summary, NotificationHandle};
pub use store::NotificationStore;
pub use ui::NotificationPanel;
