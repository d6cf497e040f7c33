//! Document Cards Frontend Entry Point

mod api;
mod app;
mod autosave;
mod components;
mod config;
mod constants;
mod error;
mod models;
mod ordering;
mod storage;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = AppConfig::load();
    if let Err(e) = rolling_logger::init(config.level_filter(), rolling_logger::DEFAULT_CAPACITY) {
        web_sys::console::warn_1(&format!("Logger not installed: {}", e).into());
    }
    if let Some(e) = config_error {
        log::warn!("[APP] Ignoring invalid app-config: {}", e);
    }

    let api = api::build_api_client(&config);
    mount_to_body(move || view! { <App api=api config=config /> });
}
