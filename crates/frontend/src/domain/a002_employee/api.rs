use contracts::domain::a002_employee::Employee;

use crate::shared::api_client::HttpClient;
use crate::shared::list_resource::RemoteListSource;

pub const EMPLOYEES_PATH: &str = "/api/employees";

/// Query keys understood by the employees endpoint
pub const FILTER_COMPANY: &str = "company_id";
pub const FILTER_CONTRACT_TYPE: &str = "contract_type";

pub fn list_source(client: HttpClient) -> RemoteListSource<Employee> {
    RemoteListSource::new(client, EMPLOYEES_PATH)
}
