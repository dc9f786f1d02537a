#![allow(warnings)]
//! Redirect Library Frontend Entry Point

mod models;
mod config;
mod error;
mod filter;
mod mutation;
mod session;
mod api;
mod context;
mod store;
mod notify;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::from_env();
    if let Err(err) = console_log::init_with_level(config.log_level) {
        web_sys::console::warn_1(&format!("logger already initialised: {}", err).into());
    }
    log::info!("[APP] Redirect Library UI, backend at {}", config.api_base);
    mount_to_body(move || view! { <App config=config.clone() /> });
}
