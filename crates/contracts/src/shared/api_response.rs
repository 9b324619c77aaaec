use serde::{Deserialize, Serialize};

use super::api_error::ApiError;
use super::pagination::PaginationMeta;

/// One page of a list endpoint: `{data: [...], pagination: {limit, offset, total}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

/// Envelope of mutation endpoints (approve, reject, mark-as-read).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationResponse<T> {
    pub ok: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> MutationResponse<T> {
    pub fn into_result(self) -> Result<Option<T>, ApiError> {
        if self.ok {
            Ok(self.data)
        } else {
            Err(ApiError::Rejected(self.message.unwrap_or_default()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_result_from_server_json() {
        let page: PageResult<String> = serde_json::from_str(
            r#"{"data":["a","b"],"pagination":{"limit":2,"offset":0,"total":5}}"#,
        )
        .unwrap();
        assert_eq!(page.data, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(page.pagination.total_pages(), 3);
    }

    #[test]
    fn test_mutation_response_branches_on_ok() {
        let ok: MutationResponse<u32> = serde_json::from_str(r#"{"ok":true,"data":7}"#).unwrap();
        assert_eq!(ok.into_result(), Ok(Some(7)));

        let rejected: MutationResponse<u32> =
            serde_json::from_str(r#"{"ok":false,"message":"Sudah diproses"}"#).unwrap();
        assert_eq!(
            rejected.into_result(),
            Err(ApiError::Rejected("Sudah diproses".into()))
        );
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Receipt {
        id: String,
    }

    #[test]
    fn test_mutation_payload_needs_no_default() {
        let bare: MutationResponse<Receipt> = serde_json::from_str(r#"{"ok":true}"#).unwrap();
        assert_eq!(bare.into_result(), Ok(None));

        let full: MutationResponse<Receipt> =
            serde_json::from_str(r#"{"ok":true,"data":{"id":"apv-9"}}"#).unwrap();
        assert_eq!(full.into_result(), Ok(Some(Receipt { id: "apv-9".into() })));
    }
}
