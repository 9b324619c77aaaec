use contracts::domain::a001_company::Company;

use crate::shared::api_client::HttpClient;
use crate::shared::list_resource::RemoteListSource;

pub const COMPANIES_PATH: &str = "/api/companies";

/// Paged `GET /api/companies`
pub fn list_source(client: HttpClient) -> RemoteListSource<Company> {
    RemoteListSource::new(client, COMPANIES_PATH)
}
