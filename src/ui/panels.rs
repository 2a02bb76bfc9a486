use eframe::egui::{self, Color32, RichText, ScrollArea, Stroke, Ui};

use crate::export;
use crate::state::AppState;
use crate::view::{JobCard, Listing, PageView, NO_JOBS_NOTICE};

// ---------------------------------------------------------------------------
// Left side panel – city selector
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter Jobs");
    ui.separator();

    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    let cities: Vec<String> = dataset.cities().iter().cloned().collect();
    if cities.is_empty() {
        ui.label("The dataset lists no cities.");
        return;
    }

    let current = state
        .selection
        .as_ref()
        .map(|s| s.city().to_string())
        .unwrap_or_default();

    let mut chosen = None;
    ui.strong("Select a City");
    egui::ComboBox::from_id_salt("city_select")
        .selected_text(&current)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for city in &cities {
                if ui.selectable_label(current == *city, city).clicked() {
                    chosen = Some(city.clone());
                }
            }
        });

    if let Some(city) = chosen {
        state.select_city(&city);
    }
}

// ---------------------------------------------------------------------------
// Job listing (left column of the body)
// ---------------------------------------------------------------------------

/// Render the cards of the selected city, or the "no jobs" notice.
pub fn job_listing(ui: &mut Ui, view: &PageView) {
    ui.heading(view.listing_heading());
    ui.add_space(4.0);

    match &view.listing {
        Listing::Cards(cards) => {
            ScrollArea::vertical()
                .id_salt("job_cards")
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    for card in cards {
                        job_card(ui, card);
                        ui.add_space(8.0);
                    }
                });
        }
        Listing::NoJobs => {
            ui.label(RichText::new(NO_JOBS_NOTICE).color(ui.visuals().warn_fg_color));
        }
    }
}

fn job_card(ui: &mut Ui, card: &JobCard) {
    let visuals = ui.visuals();
    egui::Frame::group(ui.style())
        .fill(visuals.faint_bg_color)
        .stroke(visuals.widgets.noninteractive.bg_stroke)
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(&card.job_title).strong().size(15.0));
            ui.label(RichText::new(&card.locality).strong());
            ui.horizontal(|ui: &mut Ui| {
                ui.label("Salary:");
                ui.strong(card.salary_label());
            });
        });
}

// ---------------------------------------------------------------------------
// Error banner
// ---------------------------------------------------------------------------

/// The single message shown when loading failed.
pub fn error_banner(ui: &mut Ui, message: &str) {
    egui::Frame::group(ui.style())
        .fill(ui.visuals().extreme_bg_color)
        .stroke(Stroke::new(1.0, ui.visuals().error_fg_color))
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(message).color(ui.visuals().error_fg_color));
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui
                .add_enabled(state.view.is_some(), egui::Button::new("Export listings…"))
                .clicked()
            {
                export_dialog(state);
                ui.close_menu();
            }
        });

        if ui.button("Reload").clicked() {
            state.reload();
        }

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} postings in {} cities",
                ds.len(),
                ds.cities().len()
            ));
            ui.separator();
        }
        ui.label(RichText::new(state.source.to_string()).weak());

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::GRAY));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open job postings")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.open_file(path);
    }
}

pub fn export_dialog(state: &mut AppState) {
    let Some(view) = &state.view else {
        return;
    };

    let file = rfd::FileDialog::new()
        .set_title("Export job listings")
        .add_filter("HTML", &["html"])
        .set_file_name(format!(
            "jobs-{}.html",
            view.city.to_lowercase().replace(' ', "-")
        ))
        .save_file();

    if let Some(path) = file {
        match export::write_listing_html(view, &path) {
            Ok(()) => {
                log::info!("Exported {} listings to {}", view.city, path.display());
                state.status_message = Some(format!("Exported to {}", path.display()));
            }
            Err(e) => {
                log::error!("Failed to export listings: {e:#}");
                state.status_message = Some(format!("Export failed: {e:#}"));
            }
        }
    }
}
