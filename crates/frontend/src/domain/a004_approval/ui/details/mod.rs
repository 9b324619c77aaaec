//! Approval detail page
//!
//! - view_model.rs: detail resource, decision commands
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::ApprovalDetailPage;
pub use view_model::{use_approval_detail, ApprovalDetailViewModel};
