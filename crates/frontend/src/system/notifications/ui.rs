use contracts::system::notifications::NotificationItem;
use leptos::prelude::*;
use thaw::*;

use super::hook::NotificationHandle;
use crate::shared::components::ErrorBanner;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;

/// Unread counter, latest items and the mark-as-read actions
#[component]
pub fn NotificationPanel(handle: NotificationHandle) -> impl IntoView {
    let summary = handle.summary();
    let total_unread = handle.total_unread();

    view! {
        <section class="card notification-panel">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h3 class="card__title">
                    {icon("bell")}
                    " Notifikasi "
                    <span class="counter">{move || total_unread.get()}</span>
                </h3>
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <Show when=move || handle.syncing().get()>
                        <span class="sync-indicator">"Menyinkronkan..."</span>
                    </Show>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(move || total_unread.get() == 0)
                        on_click=move |_| handle.mark_all_as_read()
                    >
                        "Tandai semua dibaca"
                    </Button>
                </Flex>
            </Flex>

            <ErrorBanner message=handle.error() on_retry=Callback::new(move |_| handle.refetch()) />

            <Show
                when=move || !handle.loading().get()
                fallback=|| view! { <Spinner /> }
            >
                {move || {
                    let items = summary.get().items;
                    if items.is_empty() {
                        view! { <p class="muted">"Belum ada notifikasi"</p> }.into_any()
                    } else {
                        view! {
                            <ul class="notification-list">
                                {items.into_iter().map(|item| notification_row(item, handle)).collect_view()}
                            </ul>
                        }.into_any()
                    }
                }}
            </Show>
        </section>
    }
}

fn notification_row(item: NotificationItem, handle: NotificationHandle) -> impl IntoView {
    let id = item.id.clone();
    let is_read = item.is_read;

    view! {
        <li class="notification-item" class:notification-item--unread=!is_read>
            <div class="notification-item__body">
                <strong>{item.title}</strong>
                <p>{item.message}</p>
                <small class="muted">{format_datetime(&item.created_at)}</small>
                {item.link.map(|href| view! { <a href=href>"Lihat"</a> })}
            </div>
            {(!is_read).then(|| view! {
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| handle.mark_as_read(id.clone())
                >
                    "Tandai dibaca"
                </Button>
            })}
        </li>
    }
}
