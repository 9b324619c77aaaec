pub mod api;
pub mod ui;

pub use ui::details::ApprovalDetailPage;
pub use ui::list::ApprovalList;
