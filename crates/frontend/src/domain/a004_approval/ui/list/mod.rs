use contracts::domain::a004_approval::{ApprovalItem, ApprovalStatus};
use contracts::shared::{QueryParams, StatusFilter};
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use crate::domain::a004_approval::api::{self, FILTER_COMPANY};
use crate::shared::api_client::use_http_client;
use crate::shared::components::ui::ApprovalBadge;
use crate::shared::components::{
    ErrorBanner, FilterSelect, LoadingRow, PageHeader, PaginationControls,
};
use crate::shared::config::use_app_config;
use crate::shared::date_utils::format_datetime;
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::shared::list_resource::use_list_resource;
use crate::shared::list_utils::{contains_any, SearchInput, Searchable};
use crate::system::auth::use_auth;

impl Searchable for ApprovalItem {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_any(&[&self.company_name, &self.employee_name], filter)
    }

    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "id" => Some(self.id.clone()),
            "company_id" => Some(self.company_id.clone()),
            "status" => Some(self.status.code().to_string()),
            "contract_type" => Some(self.contract_type.code().to_string()),
            _ => None,
        }
    }
}

/// "Semua Status" followed by every approval status
fn status_options() -> Vec<(&'static str, &'static str)> {
    std::iter::once(("ALL", "Semua Status"))
        .chain(ApprovalStatus::ALL.iter().map(|s| (s.code(), s.label())))
        .collect()
}

pub fn initial_params(page_size: u32, company_scope: Option<&str>) -> QueryParams {
    let params = QueryParams::new(page_size);
    match company_scope {
        Some(company_id) => params.with_filter(FILTER_COMPANY, company_id),
        None => params,
    }
}

#[component]
pub fn ApprovalList() -> impl IntoView {
    let config = use_app_config();
    let scope = use_auth().with_untracked(|a| a.company_scope());
    let params = initial_params(config.page_size(), scope.as_deref());
    let initial_status = params.status.as_value().to_string();
    let list = use_list_resource(
        api::list_source(use_http_client()),
        params,
        "Gagal memuat data persetujuan",
    );

    let items = list.items();
    let search = Signal::derive(move || list.params().get().search.unwrap_or_default());

    view! {
        <PageFrame entity="a004_approval" category=PageCategory::List>
            <PageHeader title="Persetujuan Kontrak" icon_name="approvals">
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <FilterSelect
                        options=status_options()
                        initial=initial_status
                        on_change=Callback::new(move |v: String| list.set_status(StatusFilter::from_value(&v)))
                    />
                    <SearchInput
                        value=search
                        on_change=Callback::new(move |q: String| list.set_search(q))
                        placeholder="Cari perusahaan atau karyawan..."
                    />
                </Flex>
            </PageHeader>

            <ErrorBanner message=list.error() on_retry=Callback::new(move |_| list.refetch()) />
            <LoadingRow loading=list.loading() />

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Perusahaan"</TableHeaderCell>
                        <TableHeaderCell>"Karyawan"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 90px;">"Kontrak"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 180px;">"Diajukan"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 130px;">"Status"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 90px;"></TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || items.get()
                        key=|item| (item.id.clone(), item.status)
                        children=move |item: ApprovalItem| {
                            let href = format!("/persetujuan/{}", urlencoding::encode(&item.id));
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout truncate=true>{item.company_name}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout truncate=true>{item.employee_name}</TableCellLayout></TableCell>
                                    <TableCell>{item.contract_type.code()}</TableCell>
                                    <TableCell>{format_datetime(&item.submitted_at)}</TableCell>
                                    <TableCell><ApprovalBadge status=item.status /></TableCell>
                                    <TableCell><A href=href>"Detail"</A></TableCell>
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
    use chrono::{TimeZone, Utc};
    use contracts::domain::a003_contract::ContractType;

    fn item(id: &str, company: &str, status: ApprovalStatus) -> ApprovalItem {
        ApprovalItem {
            id: id.to_string(),
            company_id: company.to_string(),
            company_name: format!("PT {}", company),
            employee_name: format!("Pegawai {}", id),
            contract_type: ContractType::Pkwt,
            status,
            submitted_at: Utc.with_ymd_and_hms(2024, 6, 3, 9, 0, 0).unwrap(),
            note: None,
        }
    }

    #[test]
    fn test_status_options_start_with_all() {
        let options = status_options();
        assert_eq!(options.len(), 4);
        assert_eq!(options[0].0, "ALL");
        assert!(options.iter().any(|(v, _)| *v == "REJECTED"));
    }

    #[test]
    fn test_select_starts_on_the_params_status() {
        let params = initial_params(10, None);
        assert_eq!(params.status.as_value(), status_options()[0].0);
        let pending = params.with_status(StatusFilter::from_value("PENDING"));
        assert!(status_options().iter().any(|(v, _)| *v == pending.status.as_value()));
    }

    #[test]
    fn test_status_filter_over_fixture() {
        let source = FixtureListSource::new(vec![
            item("1", "c-1", ApprovalStatus::Pending),
            item("2", "c-1", ApprovalStatus::Approved),
            item("3", "c-1", ApprovalStatus::Pending),
            item("4", "c-2", ApprovalStatus::Pending),
        ]);

        let pending = initial_params(10, Some("c-1")).with_status(StatusFilter::from_value("PENDING"));
        let page = source.query(&pending);
        assert_eq!(page.pagination.total, 2);
        assert!(page.data.iter().all(|a| a.status == ApprovalStatus::Pending));

        let all = initial_params(10, None).with_status(StatusFilter::from_value("ALL"));
        assert_eq!(source.query(&all).pagination.total, 4);
    }
}
