//! Pagination arithmetic shared by every list screen.
//!
//! Pages are 1-based. A result set always has at least one page, even when it
//! is empty, so the controls never render "page 1 of 0".

use serde::{Deserialize, Serialize};

/// Pagination block returned by the server alongside a page of items.
///
/// `total` is authoritative; `limit` and `offset` echo the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub limit: u32,
    pub offset: u32,
    pub total: u64,
}

impl Default for PaginationMeta {
    fn default() -> Self {
        Self {
            limit: 10,
            offset: 0,
            total: 0,
        }
    }
}

impl PaginationMeta {
    pub fn new(limit: u32, offset: u32, total: u64) -> Self {
        Self {
            limit: limit.max(1),
            offset,
            total,
        }
    }

    pub fn total_pages(&self) -> u32 {
        total_pages(self.total, self.limit)
    }

    pub fn current_page(&self) -> u32 {
        page_for_offset(self.offset, self.limit)
    }

    pub fn has_prev(&self) -> bool {
        self.current_page() > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page() < self.total_pages()
    }

    pub fn displayed_range(&self) -> Option<(u64, u64)> {
        displayed_range(self.current_page(), self.limit, self.total)
    }
}

/// `max(1, ceil(total / limit))`. A zero limit is treated as 1.
pub fn total_pages(total: u64, limit: u32) -> u32 {
    let limit = u64::from(limit.max(1));
    let pages = total.div_ceil(limit).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Offset of the first row of a 1-based page. Page 0 is treated as page 1.
pub fn offset_for_page(page: u32, limit: u32) -> u32 {
    page.saturating_sub(1).saturating_mul(limit.max(1))
}

/// 1-based page containing `offset`.
pub fn page_for_offset(offset: u32, limit: u32) -> u32 {
    offset / limit.max(1) + 1
}

pub fn is_valid_page(page: u32, total: u64, limit: u32) -> bool {
    page >= 1 && page <= total_pages(total, limit)
}

/// 1-based inclusive row range shown on `page`, e.g. `(22, 25)`.
///
/// `None` for an empty result set or a page past the end.
pub fn displayed_range(page: u32, limit: u32, total: u64) -> Option<(u64, u64)> {
    if total == 0 || page == 0 {
        return None;
    }
    let offset = u64::from(offset_for_page(page, limit));
    if offset >= total {
        return None;
    }
    let last = (offset + u64::from(limit.max(1))).min(total);
    Some((offset + 1, last))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_has_floor_of_one() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
    }

    #[test]
    fn test_total_pages_matches_ceil_for_many_inputs() {
        for total in 0u64..200 {
            for limit in 1u32..25 {
                let expected = ((total as f64) / (limit as f64)).ceil().max(1.0) as u32;
                assert_eq!(total_pages(total, limit), expected, "total={total} limit={limit}");
            }
        }
    }

    #[test]
    fn test_total_25_limit_7() {
        assert_eq!(total_pages(25, 7), 4);
        assert_eq!(offset_for_page(4, 7), 21);
        assert_eq!(displayed_range(4, 7, 25), Some((22, 25)));
        assert!(!is_valid_page(5, 25, 7));
        assert!(!is_valid_page(0, 25, 7));
        assert!(is_valid_page(4, 25, 7));
    }

    #[test]
    fn test_displayed_range_empty() {
        assert_eq!(displayed_range(1, 10, 0), None);
        assert_eq!(displayed_range(3, 10, 15), None);
    }

    #[test]
    fn test_zero_limit_is_clamped() {
        assert_eq!(total_pages(5, 0), 5);
        assert_eq!(offset_for_page(3, 0), 2);
        let meta = PaginationMeta::new(0, 0, 3);
        assert_eq!(meta.limit, 1);
    }

    #[test]
    fn test_meta_navigation_flags() {
        let meta = PaginationMeta::new(7, 7, 25);
        assert_eq!(meta.current_page(), 2);
        assert!(meta.has_prev());
        assert!(meta.has_next());
        assert_eq!(meta.displayed_range(), Some((8, 14)));

        let last = PaginationMeta::new(7, 21, 25);
        assert!(!last.has_next());
    }

    #[test]
    fn test_meta_deserializes_from_server_shape() {
        let meta: PaginationMeta =
            serde_json::from_str(r#"{"limit":10,"offset":20,"total":42}"#).unwrap();
        assert_eq!(meta, PaginationMeta::new(10, 20, 42));
        assert_eq!(meta.current_page(), 3);
    }
}
