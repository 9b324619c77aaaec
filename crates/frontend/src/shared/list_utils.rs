/// Shared list helpers: search matching and the debounced search input
use leptos::prelude::*;

use crate::shared::config::use_app_config;
use crate::shared::debounce::use_debounced;

/// Rows that can be matched by free-text search and read by field name
pub trait Searchable {
    /// Case-insensitive free-text match
    fn matches_filter(&self, filter: &str) -> bool;

    /// Value of a named field (status, company_id, ...) for exact filters
    fn get_field_value(&self, field: &str) -> Option<String>;
}

/// Case-insensitive containment over several fields
pub fn contains_any(fields: &[&str], filter: &str) -> bool {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields.iter().any(|f| f.to_lowercase().contains(&needle))
}

/// Search box; forwards its value after the configured debounce delay
#[component]
pub fn SearchInput(
    /// Current search value (initial text of the input)
    #[prop(into)]
    value: Signal<String>,
    /// Receives the debounced value
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Cari...".to_string()
    } else {
        placeholder
    };
    let delay_ms = use_app_config().list.search_debounce_ms;

    let (input_value, set_input_value) = signal(value.get_untracked());
    let debounced = use_debounced(delay_ms, on_change);

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        debounced.flush(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder={placeholder}
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    set_input_value.set(val.clone());
                    debounced.call(val);
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button class="search-input__clear" on:click=clear_filter title="Hapus">
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_any() {
        assert!(contains_any(&["PT Maju Jaya", "01.234"], "maju"));
        assert!(contains_any(&["PT Maju Jaya"], "  "));
        assert!(!contains_any(&["PT Maju Jaya"], "sentosa"));
    }
}
