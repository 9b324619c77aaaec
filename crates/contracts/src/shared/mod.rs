pub mod api_error;
pub mod api_response;
pub mod pagination;
pub mod query;

pub use api_error::{extract_error_message, ApiError};
pub use api_response::{MutationResponse, PageResult};
pub use pagination::PaginationMeta;
pub use query::{QueryParams, StatusFilter};
