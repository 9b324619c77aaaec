use super::guard::{FetchGuard, Settle};

/// Single-record counterpart of `ListResource`, with the same stale guard
/// plus the state of a pending mutation (approve, reject, save).
#[derive(Debug, Clone)]
pub struct DetailResource<T> {
    id: String,
    item: Option<T>,
    loading: bool,
    error: Option<String>,
    submitting: bool,
    action_error: Option<String>,
    guard: FetchGuard,
}

impl<T: Clone> DetailResource<T> {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            item: None,
            loading: false,
            error: None,
            submitting: false,
            action_error: None,
            guard: FetchGuard::default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn item(&self) -> Option<&T> {
        self.item.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn submitting(&self) -> bool {
        self.submitting
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    /// Switches to another record; the old record's fetch becomes stale.
    pub fn set_id(&mut self, id: &str) -> bool {
        if self.id == id {
            return false;
        }
        self.id = id.to_string();
        self.item = None;
        true
    }

    pub fn begin_fetch(&mut self) -> (u64, String) {
        self.loading = true;
        self.error = None;
        (self.guard.issue(), self.id.clone())
    }

    pub fn settle(&mut self, generation: u64, result: Result<T, String>) -> Settle {
        if !self.guard.accepts(generation) {
            return Settle::Discarded;
        }
        self.loading = false;
        match result {
            Ok(item) => {
                self.item = Some(item);
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
        Settle::Applied
    }

    /// `false` while another mutation is still running.
    pub fn begin_action(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        self.action_error = None;
        true
    }

    pub fn finish_action(&mut self, result: Result<(), String>) {
        self.submitting = false;
        if let Err(message) = result {
            self.action_error = Some(message);
        }
    }

    pub fn unmount(&mut self) {
        self.guard.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switching_id_discards_previous_fetch() {
        let mut res = DetailResource::<String>::new("ap-1");
        let (first, id) = res.begin_fetch();
        assert_eq!(id, "ap-1");
        assert!(res.set_id("ap-2"));
        let (second, _) = res.begin_fetch();

        assert_eq!(res.settle(second, Ok("detail 2".into())), Settle::Applied);
        assert_eq!(res.settle(first, Ok("detail 1".into())), Settle::Discarded);
        assert_eq!(res.item().map(String::as_str), Some("detail 2"));
    }

    #[test]
    fn test_action_is_single_flight_and_records_error() {
        let mut res = DetailResource::<String>::new("ap-1");
        assert!(res.begin_action());
        assert!(!res.begin_action());
        res.finish_action(Err("Sudah diproses".into()));
        assert!(!res.submitting());
        assert_eq!(res.action_error(), Some("Sudah diproses"));

        assert!(res.begin_action());
        assert_eq!(res.action_error(), None);
        res.finish_action(Ok(()));
        assert_eq!(res.action_error(), None);
    }

    #[test]
    fn test_failed_refetch_keeps_item() {
        let mut res = DetailResource::<u8>::new("x");
        let (g, _) = res.begin_fetch();
        res.settle(g, Ok(1));
        let (g, _) = res.begin_fetch();
        res.settle(g, Err("offline".into()));
        assert_eq!(res.item(), Some(&1));
        assert_eq!(res.error(), Some("offline"));
    }
}
