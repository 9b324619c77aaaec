//! Top bar: sidebar toggle, title, current user and sign-out.

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::system::auth::context::{sign_out, use_auth};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let auth = use_auth();

    let username = move || {
        auth.with(|a| {
            a.session
                .as_ref()
                .map(|s| s.username.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Sembunyikan navigasi" } else { "Tampilkan navigasi" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Administrasi PKWT"</span>
            </div>

            <div class="top-header__actions">
                <span class="top-header__user">{username}</span>
                <button class="top-header__icon-btn" on:click=move |_| sign_out(auth) title="Keluar">
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
