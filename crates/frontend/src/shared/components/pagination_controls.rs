use contracts::shared::PaginationMeta;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// "Menampilkan 22–25 dari 25" or "Tidak ada data" for an empty list.
pub fn range_label(meta: &PaginationMeta) -> String {
    match meta.displayed_range() {
        Some((first, last)) => format!("Menampilkan {}–{} dari {}", first, last, meta.total),
        None => "Tidak ada data".to_string(),
    }
}

/// PaginationControls component - prev/next controls over 1-based pages
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<u32>,

    /// Pagination block of the last successful fetch
    #[prop(into)]
    pagination: Signal<PaginationMeta>,

    /// Callback when page changes
    on_page_change: Callback<u32>,

    /// Callback when page size changes; hides the selector when absent
    #[prop(optional)]
    on_page_size_change: Option<Callback<u32>>,

    /// Available page size options (defaults to [10, 25, 50, 100])
    #[prop(optional)]
    page_size_options: Option<Vec<u32>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| vec![10, 25, 50, 100]);
    let total_pages = Signal::derive(move || pagination.get().total_pages());

    view! {
        <div class="pagination-controls">
            <span class="pagination-range">{move || range_label(&pagination.get())}</span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get().saturating_sub(1))
                disabled=move || current_page.get() <= 1
                title="Sebelumnya"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!("{} / {}", current_page.get(), total_pages.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get() + 1)
                disabled=move || current_page.get() >= total_pages.get()
                title="Berikutnya"
            >
                {icon("chevron-right")}
            </button>
            {on_page_size_change.map(|on_size| view! {
                <select
                    class="page-size-select"
                    on:change=move |ev| {
                        if let Ok(val) = event_target_value(&ev).parse::<u32>() {
                            on_size.run(val);
                        }
                    }
                    prop:value=move || pagination.get().limit.to_string()
                >
                    {page_size_opts.iter().map(|&size| {
                        view! {
                            <option value={size.to_string()} selected=move || pagination.get().limit == size>
                                {size.to_string()}
                            </option>
                        }
                    }).collect_view()}
                </select>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_label() {
        assert_eq!(
            range_label(&PaginationMeta::new(7, 21, 25)),
            "Menampilkan 22–25 dari 25"
        );
        assert_eq!(range_label(&PaginationMeta::new(10, 0, 0)), "Tidak ada data");
    }
}
