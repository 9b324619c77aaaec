use leptos::prelude::*;

use crate::shared::icons::icon;

/// Icon and title on the left, page actions (filters, search) on the right
#[component]
pub fn PageHeader(
    title: &'static str,
    icon_name: &'static str,
    /// Second line under the title, e.g. the signed-in user
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <header class="page__header">
            <div class="page__heading">
                {icon(icon_name)}
                <h2 class="page__title">{title}</h2>
                {move || subtitle.get().map(|s| view! { <span class="page__subtitle">{s}</span> })}
            </div>
            <div class="page__actions">
                {children.map(|c| c())}
            </div>
        </header>
    }
}
