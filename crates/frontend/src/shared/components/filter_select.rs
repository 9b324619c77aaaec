use leptos::prelude::*;
use thaw::*;

/// Dropdown filter; reports the selected value after the user changes it.
///
/// `options` are `(value, label)` pairs, the first one being the "all" entry.
#[component]
pub fn FilterSelect(
    options: Vec<(&'static str, &'static str)>,
    #[prop(into)] initial: String,
    on_change: Callback<String>,
) -> impl IntoView {
    let value = RwSignal::new(initial);

    Effect::new(move |prev: Option<String>| {
        let current = value.get();
        if prev.as_ref().is_some_and(|p| p != &current) {
            on_change.run(current.clone());
        }
        current
    });

    view! {
        <Select value=value size=SelectSize::Small>
            {options
                .into_iter()
                .map(|(v, label)| view! { <option value=v>{label}</option> })
                .collect_view()}
        </Select>
    }
}
