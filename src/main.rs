//! Activity To-Do Frontend Entry Point

mod domain;
mod repository;
mod state;
mod presentation;
mod config;
mod context;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use log::{info, warn};

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = AppConfig::load();
    if let Err(e) = console_logger::init(config.level_filter()) {
        web_sys::console::warn_1(&format!("logger already set: {}", e).into());
    }
    if let Some(message) = config_error {
        warn!("{}", message);
    }
    info!("Starting, todos stored under '{}'", config.storage_key);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
