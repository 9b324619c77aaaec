use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

use crate::dashboards::OverviewDashboard;
use crate::domain::a001_company::CompanyList;
use crate::domain::a002_employee::EmployeeList;
use crate::domain::a004_approval::{ApprovalDetailPage, ApprovalList};
use crate::system::auth::RequireAdmin;

#[component]
fn CompanyPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <CompanyList />
        </RequireAdmin>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--centered">
            <h2>"Halaman tidak ditemukan"</h2>
        </div>
    }
}

/// `/`, `/perusahaan`, `/karyawan`, `/persetujuan`, `/persetujuan/:id`
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFound /> }>
            <Route path=path!("/") view=OverviewDashboard />
            <Route path=path!("/perusahaan") view=CompanyPage />
            <Route path=path!("/karyawan") view=EmployeeList />
            <Route path=path!("/persetujuan") view=ApprovalList />
            <Route path=path!("/persetujuan/:id") view=ApprovalDetailPage />
        </Routes>
    }
}
