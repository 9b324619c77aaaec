use contracts::domain::a004_approval::{ApprovalDetail, ApprovalEvent};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use thaw::*;

use super::view_model::use_approval_detail;
use crate::shared::components::ui::ApprovalBadge;
use crate::shared::components::ErrorBanner;
use crate::shared::date_utils::{format_date, format_datetime, format_optional_date};
use crate::shared::icons::icon;
use crate::shared::number_format::format_rupiah;
use crate::shared::page_frame::{PageCategory, PageFrame};

#[component]
pub fn ApprovalDetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = Signal::derive(move || params.read().get("id").unwrap_or_default());
    let vm = use_approval_detail(id);

    view! {
        <PageFrame entity="a004_approval" category=PageCategory::Detail>
            <A href="/persetujuan">{icon("chevron-left")}" Kembali ke daftar"</A>

            <ErrorBanner message=vm.error() on_retry=Callback::new(move |_| vm.refetch()) />

            <Show when=move || vm.loading().get() && vm.detail().get().is_none()>
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <Spinner />
                    "Memuat..."
                </Flex>
            </Show>

            {move || vm.detail().get().map(|detail| view! { <DetailCard detail=detail /> })}

            <Show when=move || vm.detail().get().is_some()>
                <section class="card">
                    <h3 class="card__title">"Keputusan"</h3>
                    {move || vm.action_error().get().map(|msg| view! {
                        <div class="alert alert--error" role="alert">{msg}</div>
                    })}
                    <Textarea value=vm.note placeholder="Catatan (opsional)" attr:rows=3 />
                    <Flex gap=FlexGap::Small>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || !vm.can_decide().get())
                            on_click=move |_| vm.approve()
                        >
                            "Setujui"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            disabled=Signal::derive(move || !vm.can_decide().get())
                            on_click=move |_| vm.reject()
                        >
                            "Tolak"
                        </Button>
                        <Show when=move || vm.submitting().get()>
                            <Spinner size=SpinnerSize::Small />
                        </Show>
                    </Flex>
                </section>
            </Show>
        </PageFrame>
    }
}

#[component]
fn DetailCard(detail: ApprovalDetail) -> impl IntoView {
    let contract = detail.contract;
    let duration = contract
        .duration_days()
        .map(|d| format!("{} hari", d))
        .unwrap_or_else(|| "Tidak terbatas".to_string());
    let salary = contract
        .salary
        .map(format_rupiah)
        .unwrap_or_else(|| "-".to_string());

    view! {
        <section class="card">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h2 class="card__title">{detail.item.employee_name}</h2>
                <ApprovalBadge status=detail.item.status />
            </Flex>
            <dl class="detail-grid">
                <dt>"Perusahaan"</dt><dd>{detail.item.company_name}</dd>
                <dt>"Jenis Kontrak"</dt>
                <dd>{format!("{} ({})", contract.contract_type.code(), contract.contract_type.label())}</dd>
                <dt>"Jabatan"</dt><dd>{contract.position}</dd>
                <dt>"Mulai"</dt><dd>{format_date(contract.start_date)}</dd>
                <dt>"Berakhir"</dt><dd>{format_optional_date(contract.end_date)}</dd>
                <dt>"Durasi"</dt><dd>{duration}</dd>
                <dt>"Upah"</dt><dd>{salary}</dd>
                <dt>"Diajukan"</dt><dd>{format_datetime(&detail.item.submitted_at)}</dd>
                <dt>"Catatan"</dt><dd>{detail.item.note.unwrap_or_else(|| "-".to_string())}</dd>
            </dl>

            <h3>"Riwayat"</h3>
            {if detail.history.is_empty() {
                view! { <p class="muted">"Belum ada riwayat"</p> }.into_any()
            } else {
                view! {
                    <ul class="timeline">
                        {detail.history.into_iter().map(history_row).collect_view()}
                    </ul>
                }.into_any()
            }}
        </section>
    }
}

fn history_row(event: ApprovalEvent) -> impl IntoView {
    view! {
        <li class="timeline__item">
            <ApprovalBadge status=event.status />
            <span>{format!(" {} - {}", event.actor, format_datetime(&event.at))}</span>
            {event.note.map(|n| view! { <p>{n}</p> })}
        </li>
    }
}
