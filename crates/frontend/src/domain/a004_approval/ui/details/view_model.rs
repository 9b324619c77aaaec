use contracts::domain::a004_approval::{ApprovalAction, ApprovalDetail};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a004_approval::api;
use crate::shared::api_client::{use_http_client, HttpClient};
use crate::shared::list_resource::{DetailResource, Settle};

const FETCH_FAILED: &str = "Gagal memuat detail persetujuan";

fn action_fallback(action: ApprovalAction) -> &'static str {
    match action {
        ApprovalAction::Approve => "Gagal menyetujui pengajuan",
        ApprovalAction::Reject => "Gagal menolak pengajuan",
    }
}

/// ViewModel for one approval record
#[derive(Clone, Copy)]
pub struct ApprovalDetailViewModel {
    state: RwSignal<DetailResource<ApprovalDetail>>,
    client: StoredValue<HttpClient>,
    reload: Trigger,
    /// Reviewer note sent with the decision
    pub note: RwSignal<String>,
}

impl ApprovalDetailViewModel {
    pub fn detail(&self) -> Signal<Option<ApprovalDetail>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.item().cloned()))
    }

    pub fn loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.loading()))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error().map(str::to_string)))
    }

    pub fn submitting(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.submitting()))
    }

    pub fn action_error(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.action_error().map(str::to_string)))
    }

    /// Only pending records can be decided, one decision at a time.
    pub fn can_decide(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || {
            state.with(|s| {
                !s.submitting()
                    && s.item()
                        .map(|d| d.item.status.is_decidable())
                        .unwrap_or(false)
            })
        })
    }

    pub fn refetch(&self) {
        self.reload.notify();
    }

    pub fn approve(&self) {
        self.decide(ApprovalAction::Approve);
    }

    pub fn reject(&self) {
        self.decide(ApprovalAction::Reject);
    }

    fn decide(&self, action: ApprovalAction) {
        let Some(id) = self
            .state
            .try_update(|s| s.begin_action().then(|| s.id().to_string()))
            .flatten()
        else {
            log::debug!("{:?} ignored, another decision is in flight", action);
            return;
        };
        let Some(client) = self.client.try_get_value() else {
            return;
        };

        let state = self.state;
        let note = self.note;
        let reload = self.reload;
        let text = note.get_untracked();

        spawn_local(async move {
            match api::decide(&client, &id, action, &text).await {
                Ok(()) => {
                    log::info!("approval {} {}", id, action.path_segment());
                    state.try_update(|s| s.finish_action(Ok(())));
                    note.try_set(String::new());
                    reload.notify();
                }
                Err(e) => {
                    log::warn!("approval {} {} failed: {}", id, action.path_segment(), e);
                    let message = e.user_message(action_fallback(action));
                    state.try_update(|s| s.finish_action(Err(message)));
                }
            }
        });
    }
}

/// Loads the approval `id` and reloads it whenever `id` changes or after a
/// successful decision. Answers for a previous id are dropped.
pub fn use_approval_detail(id: Signal<String>) -> ApprovalDetailViewModel {
    let state = RwSignal::new(DetailResource::<ApprovalDetail>::new(id.get_untracked()));
    let client = StoredValue::new(use_http_client());
    let reload = Trigger::new();

    Effect::new(move |_| {
        let current = id.get();
        reload.track();

        let Some((generation, id)) = state.try_update(|s| {
            s.set_id(&current);
            s.begin_fetch()
        }) else {
            return;
        };
        if id.trim().is_empty() {
            state.try_update(|s| s.settle(generation, Err("ID persetujuan tidak valid".to_string())));
            return;
        }
        let Some(client) = client.try_get_value() else {
            return;
        };

        spawn_local(async move {
            let result = api::fetch_detail(&client, &id).await.map_err(|e| {
                log::warn!("approval {} fetch failed: {}", id, e);
                e.user_message(FETCH_FAILED)
            });
            if let Some(Settle::Discarded) = state.try_update(|s| s.settle(generation, result)) {
                log::debug!("approval {} fetch #{} discarded", id, generation);
            }
        });
    });

    on_cleanup(move || {
        state.try_update(|s| s.unmount());
    });

    ApprovalDetailViewModel {
        state,
        client,
        reload,
        note: RwSignal::new(String::new()),
    }
}
