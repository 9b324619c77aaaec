use contracts::shared::pagination::{is_valid_page, total_pages};
use contracts::shared::{PageResult, PaginationMeta, QueryParams, StatusFilter};

use super::guard::{FetchGuard, Settle};

/// Snapshot of a list as the UI sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Handle of one in-flight fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    pub generation: u64,
    pub params: QueryParams,
}

/// State machine behind every paginated, searchable list screen.
///
/// It never performs I/O itself: the owner calls `begin_fetch`, runs the
/// request for the returned ticket, and hands the outcome to `settle`.
/// A failed fetch keeps the previous items so they can stay on screen under
/// the error banner.
///
/// The current page never stays past `total_pages`: a result that shrank
/// under it moves the params to the last page, which asks for a refetch.
#[derive(Debug, Clone)]
pub struct ListResource<T> {
    params: QueryParams,
    items: Vec<T>,
    pagination: PaginationMeta,
    loading: bool,
    error: Option<String>,
    /// The query changed since the last successful fetch, so the known total
    /// belongs to another result set.
    total_stale: bool,
    guard: FetchGuard,
}

impl<T: Clone> ListResource<T> {
    /// Starts in the loading state: the owner fetches right after creating it.
    pub fn new(params: QueryParams) -> Self {
        let pagination = PaginationMeta::new(params.limit, params.offset, 0);
        Self {
            params,
            items: Vec::new(),
            pagination,
            loading: true,
            error: None,
            total_stale: true,
            guard: FetchGuard::default(),
        }
    }

    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn pagination(&self) -> PaginationMeta {
        self.pagination
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn current_page(&self) -> u32 {
        self.params.current_page()
    }

    /// Pages for the current limit and the last known total.
    pub fn total_pages(&self) -> u32 {
        total_pages(self.pagination.total, self.params.limit)
    }

    pub fn snapshot(&self) -> ResourceState<T> {
        ResourceState {
            items: self.items.clone(),
            loading: self.loading,
            error: self.error.clone(),
        }
    }

    /// Replaces the params; `true` if they differ by value and need a fetch.
    pub fn set_params(&mut self, params: QueryParams) -> bool {
        if self.params == params {
            return false;
        }
        if !same_result_set(&self.params, &params) {
            self.total_stale = true;
        }
        self.params = params;
        true
    }

    /// Rejects pages outside `[1, total_pages]`, and forward moves while the
    /// total is not known for the current query. Moving down is always
    /// allowed so a page past the end can be left.
    pub fn go_to_page(&mut self, page: u32) -> bool {
        let downward = page >= 1 && page < self.current_page();
        let in_range = !self.total_stale && is_valid_page(page, self.pagination.total, self.params.limit);
        if !downward && !in_range {
            log::debug!(
                "Ignoring page {} (valid range 1..={}{})",
                page,
                self.total_pages(),
                if self.total_stale { ", total pending" } else { "" }
            );
            return false;
        }
        let next = self.params.clone().with_page(page);
        self.set_params(next)
    }

    pub fn set_search(&mut self, query: &str) -> bool {
        let next = self.params.clone().with_search(query);
        self.set_params(next)
    }

    pub fn set_status(&mut self, status: StatusFilter) -> bool {
        let next = self.params.clone().with_status(status);
        self.set_params(next)
    }

    pub fn set_filter(&mut self, key: &str, value: &str) -> bool {
        let next = self.params.clone().with_filter(key, value);
        self.set_params(next)
    }

    pub fn set_page_size(&mut self, limit: u32) -> bool {
        let next = self.params.clone().with_limit(limit);
        self.set_params(next)
    }

    /// Starts a fetch for the current params: loading on, error cleared.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.loading = true;
        self.error = None;
        FetchTicket {
            generation: self.guard.issue(),
            params: self.params.clone(),
        }
    }

    /// Applies a completed fetch unless a newer one started or the owner is gone.
    pub fn settle(&mut self, ticket: &FetchTicket, result: Result<PageResult<T>, String>) -> Settle {
        if !self.guard.accepts(ticket.generation) {
            log::debug!(
                "Discarding stale response (generation {} < {})",
                ticket.generation,
                self.guard.current()
            );
            return Settle::Discarded;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.items = page.data;
                self.pagination = page.pagination;
                self.error = None;
                if same_result_set(&ticket.params, &self.params) {
                    self.total_stale = false;
                    self.clamp_to_last_page();
                }
            }
            Err(message) => {
                self.error = Some(message);
            }
        }
        Settle::Applied
    }

    fn clamp_to_last_page(&mut self) {
        let last = self.total_pages();
        if self.current_page() > last {
            log::debug!("Page {} is past the end, moving to {}", self.current_page(), last);
            self.params = self.params.clone().with_page(last);
        }
    }

    pub fn unmount(&mut self) {
        self.guard.unmount();
    }

    pub fn is_mounted(&self) -> bool {
        self.guard.is_mounted()
    }
}

fn same_result_set(a: &QueryParams, b: &QueryParams) -> bool {
    a.search == b.search && a.status == b.status && a.filters == b.filters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(data: Vec<u32>, limit: u32, offset: u32, total: u64) -> PageResult<u32> {
        PageResult {
            data,
            pagination: PaginationMeta::new(limit, offset, total),
        }
    }

    fn settle_total(res: &mut ListResource<u32>, total: u64) -> Settle {
        let ticket = res.begin_fetch();
        let params = ticket.params.clone();
        let data = (params.offset as u64..total.min(params.offset as u64 + params.limit as u64))
            .map(|i| i as u32)
            .collect();
        res.settle(&ticket, Ok(page(data, params.limit, params.offset, total)))
    }

    fn loaded(limit: u32, total: u64) -> ListResource<u32> {
        let mut res = ListResource::new(QueryParams::new(limit));
        let ticket = res.begin_fetch();
        let data = (1..=limit.min(total as u32)).collect();
        assert_eq!(res.settle(&ticket, Ok(page(data, limit, 0, total))), Settle::Applied);
        res
    }

    #[test]
    fn test_begin_fetch_sets_loading_and_clears_error() {
        let mut res = ListResource::<u32>::new(QueryParams::new(10));
        let t = res.begin_fetch();
        res.settle(&t, Err("Gagal memuat data".into()));
        assert_eq!(res.error(), Some("Gagal memuat data"));

        let _ = res.begin_fetch();
        let snap = res.snapshot();
        assert!(snap.loading);
        assert_eq!(snap.error, None);
    }

    #[test]
    fn test_failure_keeps_previous_items() {
        let mut res = loaded(5, 12);
        assert_eq!(res.items(), &[1, 2, 3, 4, 5]);
        let t = res.begin_fetch();
        res.settle(&t, Err("Server error".into()));
        assert_eq!(res.items(), &[1, 2, 3, 4, 5]);
        assert!(!res.loading());
        assert_eq!(res.error(), Some("Server error"));
    }

    #[test]
    fn test_stale_response_is_discarded_even_if_it_settles_last() {
        let mut res = ListResource::<u32>::new(QueryParams::new(10));
        let a = res.begin_fetch();
        assert!(res.set_search("budi"));
        let b = res.begin_fetch();

        assert_eq!(res.settle(&b, Ok(page(vec![2], 10, 0, 1))), Settle::Applied);
        assert_eq!(res.settle(&a, Ok(page(vec![1, 1, 1], 10, 0, 3))), Settle::Discarded);

        assert_eq!(res.items(), &[2]);
        assert_eq!(res.pagination().total, 1);
        assert!(!res.loading());
    }

    #[test]
    fn test_stale_error_does_not_surface() {
        let mut res = ListResource::<u32>::new(QueryParams::new(10));
        let a = res.begin_fetch();
        let b = res.begin_fetch();
        assert_eq!(res.settle(&a, Err("timeout".into())), Settle::Discarded);
        assert!(res.loading());
        assert_eq!(res.error(), None);
        res.settle(&b, Ok(page(vec![7], 10, 0, 1)));
        assert_eq!(res.error(), None);
    }

    #[test]
    fn test_unmounted_resource_ignores_completion() {
        let mut res = ListResource::<u32>::new(QueryParams::new(10));
        let t = res.begin_fetch();
        res.unmount();
        assert_eq!(res.settle(&t, Ok(page(vec![1], 10, 0, 1))), Settle::Discarded);
        assert!(res.items().is_empty());
    }

    #[test]
    fn test_go_to_page_bounds_total_25_limit_7() {
        let mut res = loaded(7, 25);
        assert_eq!(res.total_pages(), 4);

        let before = res.params().clone();
        assert!(!res.go_to_page(5));
        assert!(!res.go_to_page(0));
        assert_eq!(res.params(), &before);

        assert!(res.go_to_page(4));
        assert_eq!(res.params().offset, 21);
        let t = res.begin_fetch();
        res.settle(&t, Ok(page(vec![22, 23, 24, 25], 7, 21, 25)));
        assert_eq!(res.items().len(), 4);
        assert_eq!(res.pagination().displayed_range(), Some((22, 25)));
    }

    #[test]
    fn test_go_to_current_page_needs_no_fetch() {
        let mut res = loaded(10, 30);
        assert!(!res.go_to_page(1));
    }

    #[test]
    fn test_empty_result_still_has_one_page() {
        let res = loaded(10, 0);
        assert_eq!(res.total_pages(), 1);
        let mut res = res;
        assert!(!res.go_to_page(2));
    }

    #[test]
    fn test_search_status_and_filter_reset_to_first_page() {
        let mut res = loaded(10, 100);
        assert!(res.go_to_page(3));
        assert!(res.set_search("siti"));
        assert_eq!(res.current_page(), 1);

        settle_total(&mut res, 100);
        assert!(res.go_to_page(2));
        assert!(res.set_status(StatusFilter::Only("PENDING".into())));
        assert_eq!(res.current_page(), 1);

        settle_total(&mut res, 100);
        assert!(res.go_to_page(5));
        assert!(res.set_filter("contract_type", "PKWT"));
        assert_eq!(res.current_page(), 1);
    }

    #[test]
    fn test_new_resource_starts_loading() {
        let res = ListResource::<u32>::new(QueryParams::new(10));
        assert!(res.loading());
        assert!(res.snapshot().loading);
    }

    #[test]
    fn test_shrunk_total_moves_back_to_last_page() {
        let mut res = loaded(7, 25);
        assert!(res.go_to_page(4));
        settle_total(&mut res, 25);

        // items decided elsewhere, the same query now has 10 rows
        assert_eq!(settle_total(&mut res, 10), Settle::Applied);
        assert_eq!(res.total_pages(), 2);
        assert_eq!(res.current_page(), 2);
        assert_eq!(res.params().offset, 7);

        settle_total(&mut res, 10);
        assert_eq!(res.items().len(), 3);
        assert_eq!(res.pagination().displayed_range(), Some((8, 10)));
    }

    #[test]
    fn test_no_forward_paging_until_new_query_settles() {
        let mut res = loaded(10, 100);
        assert!(res.set_search("x"));
        assert!(!res.go_to_page(7));
        assert_eq!(res.current_page(), 1);

        settle_total(&mut res, 3);
        assert_eq!(res.total_pages(), 1);
        assert!(!res.go_to_page(2));
        assert!(res.current_page() <= res.total_pages());
    }

    #[test]
    fn test_page_past_end_can_move_down() {
        let mut res = loaded(10, 100);
        assert!(res.go_to_page(9));
        // failed refetch keeps the old total, server now has fewer rows
        let t = res.begin_fetch();
        res.settle(&t, Err("Gagal memuat data".into()));
        res.pagination = PaginationMeta::new(10, 80, 20);
        assert_eq!(res.total_pages(), 2);
        assert!(res.go_to_page(8));
        assert_eq!(res.current_page(), 8);
    }

    #[test]
    fn test_stale_page_settle_does_not_clamp_new_query() {
        let mut res = loaded(10, 100);
        assert!(res.go_to_page(5));
        let old = res.begin_fetch();
        assert!(res.set_search("budi"));
        // the old query's answer is current by generation but not by query
        assert_eq!(res.settle(&old, Ok(page(vec![], 10, 40, 3))), Settle::Applied);
        assert_eq!(res.current_page(), 1);
        assert!(!res.go_to_page(2));
    }

    #[test]
    fn test_same_search_on_page_one_is_not_a_change() {
        let mut res = loaded(10, 100);
        assert!(res.set_search("abc"));
        assert!(!res.set_search("abc"));
        assert!(!res.set_search("  abc "));
    }

    #[test]
    fn test_page_size_change_resets_offset() {
        let mut res = loaded(10, 100);
        res.go_to_page(4);
        assert!(res.set_page_size(25));
        assert_eq!(res.params().offset, 0);
        assert_eq!(res.total_pages(), 4);
    }
}
