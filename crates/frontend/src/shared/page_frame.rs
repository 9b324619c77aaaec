//! Root wrapper of every routed page.
//!
//! The root element carries `id="{entity}--{category}"` and
//! `data-page-category`, so an id copied from the DOM inspector leads straight
//! to `domain/{entity}/`.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCategory {
    /// Table with filters and pagination
    List,
    /// One record
    Detail,
    Dashboard,
}

impl PageCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageCategory::List => "list",
            PageCategory::Detail => "detail",
            PageCategory::Dashboard => "dashboard",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            PageCategory::List => "page",
            PageCategory::Detail => "page page--detail",
            PageCategory::Dashboard => "page page--dashboard",
        }
    }
}

pub fn page_id(entity: &str, category: PageCategory) -> String {
    format!("{}--{}", entity, category.as_str())
}

#[component]
pub fn PageFrame(
    /// Directory name of the owning module, e.g. `"a004_approval"`
    entity: &'static str,
    category: PageCategory,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=page_id(entity, category)
            class=category.css_class()
            data-page-category=category.as_str()
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id() {
        assert_eq!(page_id("a001_company", PageCategory::List), "a001_company--list");
        assert_eq!(
            page_id("d100_overview", PageCategory::Dashboard),
            "d100_overview--dashboard"
        );
    }
}
