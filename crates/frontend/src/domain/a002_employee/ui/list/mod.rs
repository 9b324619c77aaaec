use contracts::domain::a002_employee::Employee;
use contracts::shared::QueryParams;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a002_employee::api::{self, FILTER_COMPANY, FILTER_CONTRACT_TYPE};
use crate::shared::api_client::use_http_client;
use crate::shared::components::ui::EmployeeBadge;
use crate::shared::components::{
    ErrorBanner, FilterSelect, LoadingRow, PageHeader, PaginationControls,
};
use crate::shared::config::use_app_config;
use crate::shared::date_utils::{format_date, format_optional_date};
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::shared::list_resource::use_list_resource;
use crate::shared::list_utils::{contains_any, SearchInput, Searchable};
use crate::system::auth::use_auth;

const CONTRACT_OPTIONS: [(&str, &str); 3] = [
    ("ALL", "Semua Kontrak"),
    ("PKWT", "PKWT"),
    ("PKWTT", "PKWTT"),
];

impl Searchable for Employee {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_any(
            &[
                &self.full_name,
                &self.nik,
                self.position.as_deref().unwrap_or_default(),
            ],
            filter,
        )
    }

    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "id" => Some(self.id.clone()),
            "company_id" => Some(self.company_id.clone()),
            "contract_type" => Some(self.contract_type.code().to_string()),
            "status" => Some(self.status.code().to_string()),
            _ => None,
        }
    }
}

/// Initial query: company operators only ever see their own company.
pub fn initial_params(page_size: u32, company_scope: Option<&str>) -> QueryParams {
    let params = QueryParams::new(page_size);
    match company_scope {
        Some(company_id) => params.with_filter(FILTER_COMPANY, company_id),
        None => params,
    }
}

/// "ALL" clears the filter
fn contract_filter_value(selected: &str) -> &str {
    if selected.eq_ignore_ascii_case("ALL") {
        ""
    } else {
        selected
    }
}

#[component]
pub fn EmployeeList() -> impl IntoView {
    let config = use_app_config();
    let scope = use_auth().with_untracked(|a| a.company_scope());
    let list = use_list_resource(
        api::list_source(use_http_client()),
        initial_params(config.page_size(), scope.as_deref()),
        "Gagal memuat data karyawan",
    );

    let items = list.items();
    let search = Signal::derive(move || list.params().get().search.unwrap_or_default());

    view! {
        <PageFrame entity="a002_employee" category=PageCategory::List>
            <PageHeader title="Karyawan" icon_name="employees">
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <FilterSelect
                        options=CONTRACT_OPTIONS.to_vec()
                        initial="ALL"
                        on_change=Callback::new(move |v: String| {
                            list.set_filter(FILTER_CONTRACT_TYPE, contract_filter_value(&v))
                        })
                    />
                    <SearchInput
                        value=search
                        on_change=Callback::new(move |q: String| list.set_search(q))
                        placeholder="Cari nama, NIK, jabatan..."
                    />
                </Flex>
            </PageHeader>

            <ErrorBanner message=list.error() on_retry=Callback::new(move |_| list.refetch()) />
            <LoadingRow loading=list.loading() />

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Nama"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 170px;">"NIK"</TableHeaderCell>
                        <TableHeaderCell>"Jabatan"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 90px;">"Kontrak"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 130px;">"Mulai"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 130px;">"Berakhir"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 150px;">"Status"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || items.get()
                        key=|employee| employee.id.clone()
                        children=move |employee: Employee| {
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout truncate=true>{employee.full_name}</TableCellLayout></TableCell>
                                    <TableCell>{employee.nik}</TableCell>
                                    <TableCell>{employee.position.unwrap_or_else(|| "-".into())}</TableCell>
                                    <TableCell>
                                        <span title=employee.contract_type.label()>{employee.contract_type.code()}</span>
                                    </TableCell>
                                    <TableCell>{format_date(employee.start_date)}</TableCell>
                                    <TableCell>{format_optional_date(employee.end_date)}</TableCell>
                                    <TableCell>
                                        <EmployeeBadge status=employee.status />
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>

            <PaginationControls
                current_page=list.current_page()
                pagination=list.pagination()
                on_page_change=Callback::new(move |page| list.go_to_page(page))
                on_page_size_change=Callback::new(move |size| list.set_page_size(size))
                page_size_options=config.list.page_size_options.clone()
            />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_resource::FixtureListSource;
    use chrono::NaiveDate;
    use contracts::domain::a002_employee::EmployeeStatus;
    use contracts::domain::a003_contract::ContractType;

    fn employee(id: &str, company_id: &str, contract_type: ContractType) -> Employee {
        Employee {
            id: id.to_string(),
            company_id: company_id.to_string(),
            full_name: format!("Karyawan {}", id),
            nik: format!("32730{}", id),
            position: Some("Operator".to_string()),
            contract_type,
            status: EmployeeStatus::Active,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            end_date: None,
        }
    }

    fn fixture() -> FixtureListSource<Employee> {
        FixtureListSource::new(vec![
            employee("1", "c-1", ContractType::Pkwt),
            employee("2", "c-1", ContractType::Pkwtt),
            employee("3", "c-2", ContractType::Pkwt),
            employee("4", "c-2", ContractType::Pkwt),
        ])
    }

    #[test]
    fn test_company_scope_narrows_initial_query() {
        let params = initial_params(10, Some("c-2"));
        assert_eq!(params.filter(FILTER_COMPANY), Some("c-2"));
        assert_eq!(fixture().query(&params).pagination.total, 2);

        let admin = initial_params(10, None);
        assert_eq!(admin.filter(FILTER_COMPANY), None);
        assert_eq!(fixture().query(&admin).pagination.total, 4);
    }

    #[test]
    fn test_contract_type_filter() {
        let params = initial_params(10, Some("c-1"))
            .with_filter(FILTER_CONTRACT_TYPE, contract_filter_value("PKWTT"));
        let page = fixture().query(&params);
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].id, "2");

        let cleared = params.with_filter(FILTER_CONTRACT_TYPE, contract_filter_value("ALL"));
        assert_eq!(cleared.filter(FILTER_CONTRACT_TYPE), None);
        assert_eq!(fixture().query(&cleared).pagination.total, 2);
    }

    #[test]
    fn test_employee_search_matches_nik() {
        assert!(employee("7", "c-1", ContractType::Pkwt).matches_filter("327307"));
    }
}
