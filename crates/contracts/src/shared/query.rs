use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::pagination::{offset_for_page, page_for_offset};

/// Status filter of a list query. `All` is never sent to the server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(String),
}

impl StatusFilter {
    /// Parses a select value; `""` and `"ALL"` mean no filter.
    pub fn from_value(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("ALL") {
            StatusFilter::All
        } else {
            StatusFilter::Only(value.to_string())
        }
    }

    pub fn as_value(&self) -> &str {
        match self {
            StatusFilter::All => "ALL",
            StatusFilter::Only(s) => s,
        }
    }

    pub fn matches(&self, status: &str) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(s) => s.eq_ignore_ascii_case(status),
        }
    }
}

/// Parameters of one list request.
///
/// Compared by value: two equal params describe the same page, a changed
/// value means a new fetch. Invariant: `offset = (page - 1) * limit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    pub limit: u32,
    pub offset: u32,
    pub search: Option<String>,
    pub status: StatusFilter,
    /// Domain filters such as `company_id` or `contract_type`.
    pub filters: BTreeMap<String, String>,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self::new(10)
    }
}

impl QueryParams {
    pub fn new(limit: u32) -> Self {
        Self {
            limit: limit.max(1),
            offset: 0,
            search: None,
            status: StatusFilter::All,
            filters: BTreeMap::new(),
        }
    }

    pub fn current_page(&self) -> u32 {
        page_for_offset(self.offset, self.limit)
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.offset = offset_for_page(page, self.limit);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit.max(1);
        self.offset = 0;
        self
    }

    /// Blank input clears the search. Resets to page 1.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        let trimmed = search.trim();
        self.search = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self.offset = 0;
        self
    }

    /// Resets to page 1.
    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self.offset = 0;
        self
    }

    /// An empty value removes the filter. Resets to page 1.
    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        if value.trim().is_empty() {
            self.filters.remove(&key);
        } else {
            self.filters.insert(key, value);
        }
        self.offset = 0;
        self
    }

    pub fn filter(&self, key: &str) -> Option<&str> {
        self.filters.get(key).map(String::as_str)
    }

    /// `limit=..&offset=..[&search=..][&status=..][&key=value..]`
    pub fn to_query_string(&self) -> String {
        let mut params = format!("limit={}&offset={}", self.limit, self.offset);
        if let Some(search) = &self.search {
            params += &format!("&search={}", urlencoding::encode(search));
        }
        if let StatusFilter::Only(status) = &self.status {
            params += &format!("&status={}", urlencoding::encode(status));
        }
        for (key, value) in &self.filters {
            params += &format!(
                "&{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            );
        }
        params
    }
}
