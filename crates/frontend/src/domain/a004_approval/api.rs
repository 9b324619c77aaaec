use contracts::domain::a004_approval::{
    ApprovalAction, ApprovalDecisionRequest, ApprovalDetail, ApprovalItem,
};
use contracts::shared::ApiError;

use crate::shared::api_client::{HttpClient, HttpMethod};
use crate::shared::list_resource::RemoteListSource;

pub const APPROVALS_PATH: &str = "/api/approvals";

pub const FILTER_COMPANY: &str = "company_id";

pub fn list_source(client: HttpClient) -> RemoteListSource<ApprovalItem> {
    RemoteListSource::new(client, APPROVALS_PATH)
}

pub fn detail_path(id: &str) -> String {
    format!("{}/{}", APPROVALS_PATH, urlencoding::encode(id))
}

/// `/api/approvals/{id}/approve` or `/api/approvals/{id}/reject`
pub fn decision_path(id: &str, action: ApprovalAction) -> String {
    format!("{}/{}", detail_path(id), action.path_segment())
}

pub async fn fetch_detail(client: &HttpClient, id: &str) -> Result<ApprovalDetail, ApiError> {
    client.get_json(&detail_path(id)).await
}

/// Sends the decision; `ok: false` from the server comes back as `ApiError::Rejected`.
pub async fn decide(
    client: &HttpClient,
    id: &str,
    action: ApprovalAction,
    note: &str,
) -> Result<(), ApiError> {
    client
        .send_mutation::<_, serde_json::Value>(
            HttpMethod::Put,
            &decision_path(id, action),
            &ApprovalDecisionRequest::new(note),
        )
        .await
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_path() {
        assert_eq!(
            decision_path("ap-12", ApprovalAction::Approve),
            "/api/approvals/ap-12/approve"
        );
        assert_eq!(
            decision_path("ap/12", ApprovalAction::Reject),
            "/api/approvals/ap%2F12/reject"
        );
    }
}
