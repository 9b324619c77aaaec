use contracts::domain::a004_approval::{ApprovalItem, ApprovalStatus};
use contracts::shared::{ApiError, PageResult, QueryParams, StatusFilter};

use crate::domain::a004_approval::api::{APPROVALS_PATH, FILTER_COMPANY};
use crate::shared::api_client::HttpClient;

/// Query for the pending counter: one row is enough, only `total` is read.
pub fn pending_query(company_scope: Option<&str>) -> QueryParams {
    let params = QueryParams::new(1)
        .with_status(StatusFilter::Only(ApprovalStatus::Pending.code().to_string()));
    match company_scope {
        Some(company_id) => params.with_filter(FILTER_COMPANY, company_id),
        None => params,
    }
}

/// Number of approvals waiting for a decision
pub async fn pending_approvals(
    client: &HttpClient,
    company_scope: Option<&str>,
) -> Result<u64, ApiError> {
    let path = format!(
        "{}?{}",
        APPROVALS_PATH,
        pending_query(company_scope).to_query_string()
    );
    let page: PageResult<ApprovalItem> = client.get_json(&path).await?;
    Ok(page.pagination.total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_query() {
        let qs = pending_query(Some("c-4")).to_query_string();
        assert!(qs.contains("limit=1"));
        assert!(qs.contains("status=PENDING"));
        assert!(qs.contains("company_id=c-4"));
        assert!(!pending_query(None).to_query_string().contains("company_id"));
    }
}
