use leptos::prelude::*;
use thaw::*;

/// Red banner with the flattened error message and a retry action
#[component]
pub fn ErrorBanner(
    #[prop(into)] message: Signal<Option<String>>,
    on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        {move || message.get().map(|msg| view! {
            <div class="alert alert--error" role="alert">
                <pre class="alert__message">{msg}</pre>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_retry.run(())
                >
                    "Coba Lagi"
                </Button>
            </div>
        })}
    }
}

/// Spinner row shown while a fetch is running
#[component]
pub fn LoadingRow(#[prop(into)] loading: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || loading.get()>
            <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: var(--spacing-xl);">
                <Spinner />
                <span>"Memuat..."</span>
            </Flex>
        </Show>
    }
}
