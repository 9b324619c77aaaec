use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use crate::dashboards::d100_overview::api;
use crate::shared::api_client::use_http_client;
use crate::shared::components::{PageHeader, StatCard};
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::system::auth::use_auth;
use crate::system::notifications::{use_notification_summary, NotificationPanel};

/// Landing page: pending approvals and the notification feed
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let auth = use_auth();
    let notifications = use_notification_summary();
    let client = use_http_client();

    let (pending, set_pending) = signal(None::<u64>);
    let scope = auth.with_untracked(|a| a.company_scope());

    Effect::new(move |_| {
        let client = client.clone();
        let scope = scope.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match api::pending_approvals(&client, scope.as_deref()).await {
                Ok(total) => {
                    set_pending.try_set(Some(total));
                }
                Err(e) => log::warn!("pending approvals counter unavailable: {}", e),
            }
        });
    });

    let greeting = move || {
        auth.with(|a| {
            a.session
                .as_ref()
                .map(|s| format!("Selamat datang, {}", s.username))
                .unwrap_or_default()
        })
    };

    view! {
        <PageFrame entity="d100_overview" category=PageCategory::Dashboard>
            <PageHeader title="Beranda" icon_name="dashboard" subtitle=Signal::derive(move || Some(greeting())) />

            <Flex gap=FlexGap::Large>
                <StatCard label="Menunggu Persetujuan" icon_name="approvals" value=pending>
                    <A href="/persetujuan">"Lihat daftar"</A>
                </StatCard>
                <StatCard
                    label="Notifikasi Belum Dibaca"
                    icon_name="bell"
                    value=Signal::derive(move || Some(u64::from(notifications.total_unread().get())))
                />
            </Flex>

            <NotificationPanel handle=notifications />
        </PageFrame>
    }
}
