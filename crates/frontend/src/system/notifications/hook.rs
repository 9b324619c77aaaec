use contracts::system::notifications::NotificationSummary;
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use super::store::NotificationStore;
use crate::shared::api_client::{use_http_client, HttpClient};
use crate::shared::config::use_app_config;

const FETCH_FAILED: &str = "Gagal memuat notifikasi";
const MARK_FAILED: &str = "Gagal menandai notifikasi sebagai dibaca";

#[derive(Clone, Copy)]
pub struct NotificationHandle {
    store: RwSignal<NotificationStore>,
    client: StoredValue<HttpClient>,
    reload: Trigger,
}

impl NotificationHandle {
    pub fn summary(&self) -> Signal<NotificationSummary> {
        let store = self.store;
        Signal::derive(move || store.with(|s| s.summary().clone()))
    }

    pub fn total_unread(&self) -> Signal<u32> {
        let store = self.store;
        Signal::derive(move || store.with(|s| s.total_unread()))
    }

    pub fn loading(&self) -> Signal<bool> {
        let store = self.store;
        Signal::derive(move || store.with(|s| s.loading() && !s.is_loaded()))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let store = self.store;
        Signal::derive(move || store.with(|s| s.error().map(str::to_string)))
    }

    pub fn syncing(&self) -> Signal<bool> {
        let store = self.store;
        Signal::derive(move || store.with(|s| s.pending_mutations() > 0))
    }

    /// Flips the item locally right away, then tells the server.
    pub fn mark_as_read(&self, id: String) {
        let due = self
            .store
            .try_update(|s| {
                let due = s.mark_as_read(&id);
                if due {
                    s.begin_mutation();
                }
                due
            })
            .unwrap_or(false);
        if !due {
            return;
        }

        let store = self.store;
        let Some(client) = self.client.try_get_value() else {
            return;
        };
        spawn_local(async move {
            let result = api::mark_as_read(&client, &id).await.map_err(|e| {
                log::error!("mark-as-read {} failed, keeping local state: {}", id, e);
                e.user_message(MARK_FAILED)
            });
            store.try_update(|s| s.finish_mutation(result));
        });
    }

    pub fn mark_all_as_read(&self) {
        let due = self
            .store
            .try_update(|s| {
                let due = s.mark_all_as_read();
                if due {
                    s.begin_mutation();
                }
                due
            })
            .unwrap_or(false);
        if !due {
            return;
        }

        let store = self.store;
        let Some(client) = self.client.try_get_value() else {
            return;
        };
        spawn_local(async move {
            let result = api::mark_all_as_read(&client).await.map_err(|e| {
                log::error!("mark-all-as-read failed, keeping local state: {}", e);
                e.user_message(MARK_FAILED)
            });
            store.try_update(|s| s.finish_mutation(result));
        });
    }

    pub fn refetch(&self) {
        self.reload.notify();
    }
}

/// Notification summary of the dashboard.
///
/// Fetches once on mount and then on a fixed interval
/// (`notifications.refresh_interval_secs`) until unmounted.
pub fn use_notification_summary() -> NotificationHandle {
    let config = use_app_config();
    let client = use_http_client();

    let store = RwSignal::new(NotificationStore::default());
    let client = StoredValue::new(client);
    let reload = Trigger::new();

    Effect::new(move |_| {
        reload.track();
        let Some(generation) = store.try_update(|s| s.begin_fetch()) else {
            return;
        };
        let Some(client) = client.try_get_value() else {
            return;
        };
        spawn_local(async move {
            let result = api::fetch_summary(&client).await.map_err(|e| {
                log::warn!("notification summary fetch failed: {}", e);
                e.user_message(FETCH_FAILED)
            });
            store.try_update(|s| s.settle_fetch(generation, result));
        });
    });

    let interval = StoredValue::new_local(Some(Interval::new(
        config.refresh_interval_ms(),
        move || {
            log::debug!("notification summary auto-refresh");
            reload.notify();
        },
    )));

    on_cleanup(move || {
        interval.try_update_value(|i| i.take().map(Interval::cancel));
        store.try_update(|s| s.unmount());
    });

    NotificationHandle {
        store,
        client,
        reload,
    }
}
