pub mod badge;

pub use badge::{ApprovalBadge, Badge, BadgeVariant, EmployeeBadge};
