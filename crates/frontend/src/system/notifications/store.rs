use contracts::system::notifications::NotificationSummary;

use crate::shared::list_resource::{FetchGuard, Settle};

/// Dashboard notifications with optimistic mark-as-read.
///
/// Local patches are applied before the server answers and are never rolled
/// back; a failed call only records an error. The next fetch replaces the
/// summary wholesale, which reconciles any drift.
#[derive(Debug, Clone, Default)]
pub struct NotificationStore {
    summary: NotificationSummary,
    loaded: bool,
    loading: bool,
    error: Option<String>,
    pending_mutations: usize,
    guard: FetchGuard,
}

impl NotificationStore {
    pub fn summary(&self) -> &NotificationSummary {
        &self.summary
    }

    pub fn total_unread(&self) -> u32 {
        self.summary.total_unread
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Server calls still out; the UI shows "menyinkronkan" while > 0.
    pub fn pending_mutations(&self) -> usize {
        self.pending_mutations
    }

    pub fn begin_fetch(&mut self) -> u64 {
        self.loading = true;
        self.error = None;
        self.guard.issue()
    }

    pub fn settle_fetch(&mut self, generation: u64, result: Result<NotificationSummary, String>) -> Settle {
        if !self.guard.accepts(generation) {
            return Settle::Discarded;
        }
        self.loading = false;
        match result {
            Ok(summary) => self.replace(summary),
            Err(message) => self.error = Some(message),
        }
        Settle::Applied
    }

    /// Server truth wins over any local patch.
    pub fn replace(&mut self, summary: NotificationSummary) {
        self.summary = summary;
        self.loaded = true;
    }

    /// Flips one item to read. Returns `true` if the server must be told;
    /// already-read or unknown ids change nothing.
    pub fn mark_as_read(&mut self, id: &str) -> bool {
        let Some(item) = self.summary.items.iter_mut().find(|n| n.id == id) else {
            return false;
        };
        if item.is_read {
            return false;
        }
        item.is_read = true;
        self.summary.total_unread = self.summary.total_unread.saturating_sub(1);
        true
    }

    /// Marks everything read. No-op (and no server call) when nothing is unread.
    pub fn mark_all_as_read(&mut self) -> bool {
        if self.summary.total_unread == 0 {
            return false;
        }
        for item in &mut self.summary.items {
            item.is_read = true;
        }
        self.summary.total_unread = 0;
        true
    }

    pub fn begin_mutation(&mut self) {
        self.pending_mutations += 1;
    }

    /// Records the server's answer. A failure keeps the optimistic state.
    pub fn finish_mutation(&mut self, result: Result<(), String>) {
        self.pending_mutations = self.pending_mutations.saturating_sub(1);
        if let Err(message) = result {
            self.error = Some(message);
        }
    }

    pub fn unmount(&mut self) {
        self.guard.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use contracts::system::notifications::NotificationItem;

    fn item(id: &str, is_read: bool) -> NotificationItem {
        NotificationItem {
            id: id.to_string(),
            title: format!("Pengajuan {}", id),
            message: String::new(),
            is_read,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap(),
            link: None,
        }
    }

    fn store() -> NotificationStore {
        let mut store = NotificationStore::default();
        store.replace(NotificationSummary {
            total_unread: 2,
            items: vec![item("n1", false), item("n2", false), item("n3", true)],
        });
        store
    }

    #[test]
    fn test_mark_as_read_is_immediate_and_idempotent() {
        let mut store = store();
        assert!(store.mark_as_read("n1"));
        assert_eq!(store.total_unread(), 1);
        assert!(store.summary().items[0].is_read);

        assert!(!store.mark_as_read("n1"));
        assert_eq!(store.total_unread(), 1);
    }

    #[test]
    fn test_mark_as_read_ignores_read_and_unknown_items() {
        let mut store = store();
        assert!(!store.mark_as_read("n3"));
        assert!(!store.mark_as_read("missing"));
        assert_eq!(store.total_unread(), 2);
    }

    #[test]
    fn test_mark_all_short_circuits_when_nothing_unread() {
        let mut store = store();
        assert!(store.mark_all_as_read());
        assert_eq!(store.total_unread(), 0);
        assert!(store.summary().items.iter().all(|n| n.is_read));
        assert!(!store.mark_all_as_read());
    }

    #[test]
    fn test_failed_mutation_is_not_rolled_back() {
        let mut store = store();
        store.mark_as_read("n2");
        store.begin_mutation();
        assert_eq!(store.pending_mutations(), 1);
        store.finish_mutation(Err("Gagal menandai notifikasi".into()));
        assert_eq!(store.pending_mutations(), 0);
        assert_eq!(store.total_unread(), 1);
        assert!(store.summary().items[1].is_read);
        assert_eq!(store.error(), Some("Gagal menandai notifikasi"));
    }

    #[test]
    fn test_refetch_replaces_optimistic_state() {
        let mut store = store();
        store.mark_all_as_read();
        let gen = store.begin_fetch();
        store.settle_fetch(
            gen,
            Ok(NotificationSummary {
                total_unread: 1,
                items: vec![item("n4", false)],
            }),
        );
        assert_eq!(store.total_unread(), 1);
        assert_eq!(store.summary().items.len(), 1);
        assert!(!store.loading());
    }

    #[test]
    fn test_stale_summary_is_discarded() {
        let mut store = store();
        let old = store.begin_fetch();
        let new = store.begin_fetch();
        store.settle_fetch(new, Ok(NotificationSummary::default()));
        assert_eq!(
            store.settle_fetch(
                old,
                Ok(NotificationSummary {
                    total_unread: 9,
                    items: vec![]
                })
            ),
            Settle::Discarded
        );
        assert_eq!(store.total_unread(), 0);
    }
}
