use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::a003_contract::{ContractType, EmploymentContract};

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub const ALL: [ApprovalStatus; 3] = [
        ApprovalStatus::Pending,
        ApprovalStatus::Approved,
        ApprovalStatus::Rejected,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "PENDING",
            ApprovalStatus::Approved => "APPROVED",
            ApprovalStatus::Rejected => "REJECTED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "Menunggu",
            ApprovalStatus::Approved => "Disetujui",
            ApprovalStatus::Rejected => "Ditolak",
        }
    }

    /// Only pending submissions can be decided.
    pub fn is_decidable(&self) -> bool {
        matches!(self, ApprovalStatus::Pending)
    }
}

// ============================================================================
// List row / detail
// ============================================================================

/// Contract submission awaiting (or past) review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApprovalItem {
    pub id: String,
    pub company_id: String,
    pub company_name: String,
    pub employee_name: String,
    pub contract_type: ContractType,
    pub status: ApprovalStatus,
    pub submitted_at: DateTime<Utc>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApprovalEvent {
    pub status: ApprovalStatus,
    pub actor: String,
    pub at: DateTime<Utc>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApprovalDetail {
    #[serde(flatten)]
    pub item: ApprovalItem,
    pub contract: EmploymentContract,
    #[serde(default)]
    pub history: Vec<ApprovalEvent>,
}

// ============================================================================
// Decision
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalAction {
    Approve,
    Reject,
}

impl ApprovalAction {
    /// Path segment of the decision endpoint.
    pub fn path_segment(&self) -> &'static str {
        match self {
            ApprovalAction::Approve => "approve",
            ApprovalAction::Reject => "reject",
        }
    }
}

/// Body of `PUT /approvals/{id}/{approve|reject}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApprovalDecisionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ApprovalDecisionRequest {
    pub fn new(note: &str) -> Self {
        let note = note.trim();
        Self {
            note: (!note.is_empty()).then(|| note.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_flattens_item() {
        let json = r#"{
            "id": "ap-1",
            "company_id": "c-1",
            "company_name": "PT Maju Jaya",
            "employee_name": "Siti",
            "contract_type": "PKWT",
            "status": "PENDING",
            "submitted_at": "2024-05-01T08:00:00Z",
            "contract": {
                "id": "k-1",
                "employee_id": "e-1",
                "company_id": "c-1",
                "contract_type": "PKWT",
                "position": "Staff",
                "start_date": "2024-05-01",
                "end_date": "2025-04-30"
            }
        }"#;
        let detail: ApprovalDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.item.status, ApprovalStatus::Pending);
        assert!(detail.item.status.is_decidable());
        assert!(detail.history.is_empty());
    }

    #[test]
    fn test_decision_request_drops_blank_note() {
        assert_eq!(
            serde_json::to_string(&ApprovalDecisionRequest::new("  ")).unwrap(),
            "{}"
        );
        assert_eq!(
            ApprovalDecisionRequest::new(" dokumen lengkap ").note.as_deref(),
            Some("dokumen lengkap")
        );
    }
}
