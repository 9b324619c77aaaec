use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_client::HttpClient;
use crate::shared::config::AppConfig;
use crate::system::auth::AuthProvider;
use leptos::prelude::*;
use leptos_router::components::Router;
use thaw::ConfigProvider;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let client = HttpClient::from_config(&config);
    log::info!(
        "API at {} (timeout {} ms)",
        client.url(""),
        client.timeout_ms()
    );

    provide_context(config);
    provide_context(client);
    provide_context(AppGlobalContext::new());

    view! {
        <ConfigProvider>
            <AuthProvider>
                <Router>
                    <AppShell />
                </Router>
            </AuthProvider>
        </ConfigProvider>
    }
}
