//! Data providers behind a list resource: the REST API in production, an
//! in-memory fixture in tests and demos.

use std::cell::{Cell, RefCell};
use std::marker::PhantomData;

use async_trait::async_trait;
use contracts::shared::{ApiError, PageResult, PaginationMeta, QueryParams};
use serde::de::DeserializeOwned;
use web_sys::AbortController;

use super::engine::FetchTicket;
use crate::shared::api_client::{new_controller, HttpClient};
use crate::shared::list_utils::Searchable;

#[async_trait(?Send)]
pub trait ListSource<T> {
    async fn fetch_page(&self, params: &QueryParams) -> Result<PageResult<T>, ApiError>;

    /// Abort whatever is in flight. Sources without transport ignore it.
    fn cancel(&self) {}
}

/// Runs the fetch for `ticket` and flattens any error into a banner message.
pub async fn load_page<T, S>(
    source: &S,
    ticket: &FetchTicket,
    fallback: &str,
) -> Result<PageResult<T>, String>
where
    S: ListSource<T> + ?Sized,
{
    log::debug!(
        "list fetch #{}: {}",
        ticket.generation,
        ticket.params.to_query_string()
    );
    source.fetch_page(&ticket.params).await.map_err(|e| {
        if !e.is_aborted() {
            log::warn!("{} (fetch #{}): {}", fallback, ticket.generation, e);
        }
        e.user_message(fallback)
    })
}

// ============================================================================
// Remote
// ============================================================================

/// `GET {path}?limit=..&offset=..&search=..&status=..` against the API.
///
/// Starting a fetch aborts the previous one still on the wire.
pub struct RemoteListSource<T> {
    client: HttpClient,
    path: String,
    in_flight: RefCell<Option<AbortController>>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> RemoteListSource<T> {
    pub fn new(client: HttpClient, path: impl Into<String>) -> Self {
        Self {
            client,
            path: path.into(),
            in_flight: RefCell::new(None),
            _marker: PhantomData,
        }
    }
}

#[async_trait(?Send)]
impl<T> ListSource<T> for RemoteListSource<T>
where
    T: DeserializeOwned + 'static,
{
    async fn fetch_page(&self, params: &QueryParams) -> Result<PageResult<T>, ApiError> {
        let controller = new_controller()?;
        if let Some(previous) = self.in_flight.replace(Some(controller.clone())) {
            previous.abort();
        }
        let path = format!("{}?{}", self.path, params.to_query_string());
        self.client.get_json_with(&path, &controller).await
    }

    fn cancel(&self) {
        if let Some(controller) = self.in_flight.take() {
            controller.abort();
        }
    }
}

// ============================================================================
// Fixture
// ============================================================================

/// In-memory provider with the server's search/status/filter/paging semantics.
pub struct FixtureListSource<T> {
    items: Vec<T>,
    next_failure: RefCell<Option<ApiError>>,
    calls: Cell<usize>,
}

impl<T: Searchable + Clone> FixtureListSource<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            next_failure: RefCell::new(None),
            calls: Cell::new(0),
        }
    }

    /// Makes the next fetch fail with `error`.
    pub fn fail_next(&self, error: ApiError) {
        self.next_failure.replace(Some(error));
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn query(&self, params: &QueryParams) -> PageResult<T> {
        let matching: Vec<&T> = self
            .items
            .iter()
            .filter(|item| {
                params
                    .search
                    .as_deref()
                    .map(|s| item.matches_filter(s))
                    .unwrap_or(true)
            })
            .filter(|item| {
                let status = item.get_field_value("status").unwrap_or_default();
                params.status.matches(&status)
            })
            .filter(|item| {
                params.filters.iter().all(|(key, value)| {
                    item.get_field_value(key)
                        .map(|v| v.eq_ignore_ascii_case(value))
                        .unwrap_or(false)
                })
            })
            .collect();

        let total = matching.len() as u64;
        let data = matching
            .into_iter()
            .skip(params.offset as usize)
            .take(params.limit as usize)
            .cloned()
            .collect();

        PageResult {
            data,
            pagination: PaginationMeta::new(params.limit, params.offset, total),
        }
    }
}

#[async_trait(?Send)]
impl<T> ListSource<T> for FixtureListSource<T>
where
    T: Searchable + Clone + 'static,
{
    async fn fetch_page(&self, params: &QueryParams) -> Result<PageResult<T>, ApiError> {
        self.calls.set(self.calls.get() + 1);
        if let Some(error) = self.next_failure.take() {
            return Err(error);
        }
        Ok(self.query(params))
    }
}
