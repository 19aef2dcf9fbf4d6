pub mod app;
pub mod layout;
pub mod meta;
pub mod routes;
pub mod shared;

use shared::config::AppConfig;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate; must run before the config
    // is read, the configured level is applied right after
    _ = console_log::init_with_level(log::Level::Trace);
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    log::set_max_level(config.log_level.to_level_filter());

    log::info!("WeatherDump GUI {} starting", config.version);

    leptos::mount::mount_to_body(move || view! { <app::App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
