pub mod app;
pub mod app_shell;
pub mod dashboards;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;

use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::shared::config::AppConfig;

#[wasm_bindgen]
pub fn hydrate() {
    let config = AppConfig::load();
    _ = console_log::init_with_level(config.log_level());
    console_error_panic_hook::set_once();
    log::info!("starting PKWT frontend");

    leptos::mount::mount_to_body(move || view! { <app::App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
