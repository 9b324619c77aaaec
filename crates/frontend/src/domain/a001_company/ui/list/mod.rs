use contracts::domain::a001_company::Company;
use contracts::shared::QueryParams;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_company::api;
use crate::shared::api_client::use_http_client;
use crate::shared::components::{ErrorBanner, LoadingRow, PageHeader, PaginationControls};
use crate::shared::config::use_app_config;
use crate::shared::date_utils::format_datetime;
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::shared::list_resource::use_list_resource;
use crate::shared::list_utils::{contains_any, SearchInput, Searchable};

impl Searchable for Company {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_any(
            &[
                &self.name,
                self.npwp.as_deref().unwrap_or_default(),
                self.address.as_deref().unwrap_or_default(),
            ],
            filter,
        )
    }

    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "id" => Some(self.id.clone()),
            "name" => Some(self.name.clone()),
            "npwp" => self.npwp.clone(),
            _ => None,
        }
    }
}

#[component]
pub fn CompanyList() -> impl IntoView {
    let config = use_app_config();
    let list = use_list_resource(
        api::list_source(use_http_client()),
        QueryParams::new(config.page_size()),
        "Gagal memuat data perusahaan",
    );

    let items = list.items();
    let search = Signal::derive(move || list.params().get().search.unwrap_or_default());

    view! {
        <PageFrame entity="a001_company" category=PageCategory::List>
            <PageHeader title="Perusahaan" icon_name="companies">
                <SearchInput
                    value=search
                    on_change=Callback::new(move |q: String| list.set_search(q))
                    placeholder="Cari nama, NPWP, alamat..."
                />
            </PageHeader>

            <ErrorBanner message=list.error() on_retry=Callback::new(move |_| list.refetch()) />
            <LoadingRow loading=list.loading() />

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Nama Perusahaan"</TableHeaderCell>
                        <TableHeaderCell>"NPWP"</TableHeaderCell>
                        <TableHeaderCell>"Alamat"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 120px;">"Karyawan"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 180px;">"Terdaftar"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || items.get()
                        key=|company| company.id.clone()
                        children=move |company: Company| {
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout truncate=true>{company.name}</TableCellLayout></TableCell>
                                    <TableCell>{company.npwp.unwrap_or_else(|| "-".into())}</TableCell>
                                    <TableCell><TableCellLayout truncate=true>{company.address.unwrap_or_else(|| "-".into())}</TableCellLayout></TableCell>
                                    <TableCell>{company.employee_count}</TableCell>
                                    <TableCell>{format_datetime(&company.created_at)}</TableCell>
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
