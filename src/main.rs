mod app;
mod color;
mod config;
mod data;
mod export;
mod state;
mod ui;
mod view;

use app::JobFinderApp;
use config::Config;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = Config::load_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Job Finder by City",
        options,
        Box::new(move |_cc| Ok(Box::new(JobFinderApp::new(&config)))),
    )
}
