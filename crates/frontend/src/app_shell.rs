//! Application shell: session gate around the main layout.

use crate::layout::Shell;
use crate::routes::routes::AppRoutes;
use crate::system::auth::RequireSession;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <Shell>
            <AppRoutes />
        </Shell>
    }
}

/// Shows the main layout only when a session is stored.
#[component]
pub fn AppShell() -> impl IntoView {
    view! {
        <RequireSession>
            <MainLayout />
        </RequireSession>
    }
}
