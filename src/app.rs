use eframe::egui;
use egui_extras::{Size, StripBuilder};

use crate::config::Config;
use crate::state::AppState;
use crate::ui::{charts, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct JobFinderApp {
    pub state: AppState,
}

impl JobFinderApp {
    /// Build the app and run the first (blocking) load.
    pub fn new(config: &Config) -> Self {
        let mut state = AppState::new(config);
        state.reload();
        Self { state }
    }
}

impl eframe::App for JobFinderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: city selector ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: listings + charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Job Finder by City");
            ui.label(
                "Use this tool to explore job listings across Indian cities. \
                 Data is fetched from a shared dataset.",
            );
            ui.separator();

            if let Some(message) = &self.state.error {
                panels::error_banner(ui, message);
                return;
            }
            let Some(view) = &self.state.view else {
                ui.centered_and_justified(|ui| {
                    ui.label("No cities to show.");
                });
                return;
            };

            StripBuilder::new(ui)
                .size(Size::relative(1.0 / 3.0))
                .size(Size::remainder())
                .horizontal(|mut strip| {
                    strip.cell(|ui| panels::job_listing(ui, view));
                    strip.cell(|ui| charts::chart_column(ui, view));
                });
        });
    }
}
