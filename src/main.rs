#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod adapters;
mod app;
mod core;
mod global_constants;
mod ports;
mod presentation;

use iced::daemon;

fn main() -> iced::Result {
    env_logger::init();

    log::info!("[MAIN] Starting Plant Identifier application");

    daemon(
        app::PlantApp::build,
        app::PlantApp::handle_update,
        app::PlantApp::render_view,
    )
    .title(app::PlantApp::window_title)
    .theme(app::PlantApp::window_theme)
    .subscription(app::PlantApp::handle_subscription)
    .run()
}
