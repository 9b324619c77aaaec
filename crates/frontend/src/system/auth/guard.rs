use leptos::prelude::*;

use super::context::use_auth;

/// Renders children only when a session is present
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.with(|a| a.is_authenticated())
            fallback=|| view! {
                <div class="page page--centered">
                    <h2>"Sesi tidak ditemukan"</h2>
                    <p>"Silakan masuk kembali melalui portal Disnaker."</p>
                </div>
            }
        >
            {children()}
        </Show>
    }
}

/// Renders children only for labor office staff
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.with(|a| a.is_authenticated() && a.is_admin())
            fallback=|| view! { <div class="page">"Akses ditolak. Halaman ini khusus petugas Disnaker."</div> }
        >
            {children()}
        </Show>
    }
}
