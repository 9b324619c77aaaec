use contracts::shared::ApiError;
use contracts::system::notifications::NotificationSummary;
use serde_json::json;

use crate::shared::api_client::{HttpClient, HttpMethod};

/// Fetch unread counter and latest notifications
pub async fn fetch_summary(client: &HttpClient) -> Result<NotificationSummary, ApiError> {
    client.get_json("/api/notifications/summary").await
}

/// Mark one notification as read
pub async fn mark_as_read(client: &HttpClient, id: &str) -> Result<(), ApiError> {
    client
        .send_mutation::<_, serde_json::Value>(
            HttpMethod::Put,
            &format!("/api/notifications/{}/read", urlencoding::encode(id)),
            &json!({}),
        )
        .await
        .map(|_| ())
}

/// Mark every notification as read
pub async fn mark_all_as_read(client: &HttpClient) -> Result<(), ApiError> {
    client
        .send_mutation::<_, serde_json::Value>(
            HttpMethod::Put,
            "/api/notifications/read-all",
            &json!({}),
        )
        .await
        .map(|_| ())
}
