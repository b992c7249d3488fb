#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use rust_board_app::app::BoardApp;
use rust_board_app::settings::AppSettings;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = AppSettings::load();
    tracing::info!(granularity = ?settings.granularity, dark_mode = settings.dark_mode, "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([900.0, 500.0])
            .with_title("Rust Board App"),
        ..Default::default()
    };

    eframe::run_native(
        "Rust Board App",
        options,
        Box::new(|cc| Ok(Box::new(BoardApp::new(cc, settings)))),
    )
}
