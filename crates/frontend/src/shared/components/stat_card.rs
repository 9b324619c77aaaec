use crate::shared::icons::icon;
use crate::shared::number_format::format_thousands;
use leptos::prelude::*;

/// Counter tile; shows a dash while the value is unknown.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    #[prop(into)]
    value: Signal<Option<u64>>,
    /// Footer content such as a link to the list
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <section class="card stat-card">
            <div class="stat-card__header">
                {icon(icon_name)}
                <span class="stat-card__label">{label}</span>
            </div>
            <span class="stat-card__value">
                {move || {
                    value
                        .get()
                        .map(|v| format_thousands(i64::try_from(v).unwrap_or(i64::MAX)))
                        .unwrap_or_else(|| "-".to_string())
                }}
            </span>
            {children.map(|c| c())}
        </section>
    }
}
