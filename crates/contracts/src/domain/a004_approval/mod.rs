pub mod aggregate;

pub use aggregate::{
    ApprovalAction, ApprovalDecisionRequest, ApprovalDetail, ApprovalEvent, ApprovalItem,
    ApprovalStatus,
};
