use std::rc::Rc;

use contracts::shared::{PaginationMeta, QueryParams, StatusFilter};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::engine::ListResource;
use super::guard::Settle;
use super::source::{load_page, ListSource};

/// Reactive view over a `ListResource`, handed to list pages.
pub struct ListResourceHandle<T: Send + Sync + 'static> {
    state: RwSignal<ListResource<T>>,
    reload: Trigger,
}

impl<T: Send + Sync + 'static> Clone for ListResourceHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListResourceHandle<T> {}

impl<T> ListResourceHandle<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn items(&self) -> Signal<Vec<T>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.items().to_vec()))
    }

    pub fn loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.loading()))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error().map(str::to_string)))
    }

    pub fn pagination(&self) -> Signal<PaginationMeta> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.pagination()))
    }

    pub fn current_page(&self) -> Signal<u32> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.current_page()))
    }

    pub fn total_pages(&self) -> Signal<u32> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.total_pages()))
    }

    pub fn params(&self) -> Signal<QueryParams> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.params().clone()))
    }

    pub fn go_to_page(&self, page: u32) {
        self.state.update(|s| {
            s.go_to_page(page);
        });
    }

    pub fn set_search(&self, query: String) {
        self.state.update(|s| {
            s.set_search(&query);
        });
    }

    pub fn set_status(&self, status: StatusFilter) {
        self.state.update(|s| {
            s.set_status(status);
        });
    }

    pub fn set_filter(&self, key: &str, value: &str) {
        self.state.update(|s| {
            s.set_filter(key, value);
        });
    }

    pub fn set_page_size(&self, limit: u32) {
        self.state.update(|s| {
            s.set_page_size(limit);
        });
    }

    /// Fetches the current params again (retry button).
    pub fn refetch(&self) {
        self.reload.notify();
    }
}

/// Binds a list screen to `source`.
///
/// Fetches on mount and whenever the params change by value. Completions of
/// superseded fetches are dropped; on unmount the in-flight request is
/// aborted and its result ignored.
pub fn use_list_resource<T, S>(
    source: S,
    initial: QueryParams,
    fallback_message: &'static str,
) -> ListResourceHandle<T>
where
    T: Clone + Send + Sync + 'static,
    S: ListSource<T> + 'static,
{
    let state = RwSignal::new(ListResource::<T>::new(initial));
    let reload = Trigger::new();
    let source = StoredValue::new_local(Rc::new(source));

    let params = Memo::new(move |_| state.with(|s| s.params().clone()));

    Effect::new(move |_| {
        params.track();
        reload.track();

        let Some(ticket) = state.try_update(|s| s.begin_fetch()) else {
            return;
        };
        let Some(source) = source.try_get_value() else {
            return;
        };

        spawn_local(async move {
            let result = load_page(source.as_ref(), &ticket, fallback_message).await;
            match state.try_update(|s| s.settle(&ticket, result)) {
                Some(Settle::Applied) => {}
                Some(Settle::Discarded) | None => {
                    log::debug!("list fetch #{} discarded", ticket.generation);
                }
            }
        });
    });

    on_cleanup(move || {
        state.try_update(|s| s.unmount());
        source.try_with_value(|s| s.cancel());
    });

    ListResourceHandle { state, reload }
}
