use eframe::egui::{Stroke, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};

use crate::color::{viridis, DENSITY_LINE, HISTOGRAM_FILL};
use crate::view::{LocalityChart, PageView, SalaryChart};

// ---------------------------------------------------------------------------
// Chart column (right side of the body)
// ---------------------------------------------------------------------------

/// Both charts stacked, splitting the available height.
pub fn chart_column(ui: &mut Ui, view: &PageView) {
    let height = ((ui.available_height() - 80.0) / 2.0).max(150.0);

    ui.heading("Salary Distribution");
    salary_chart(ui, &view.salary_chart, height);

    ui.add_space(12.0);

    ui.heading("Jobs by Locality");
    locality_chart(ui, &view.locality_chart, height);
}

/// Histogram of salaries with the density curve on top.
pub fn salary_chart(ui: &mut Ui, chart: &SalaryChart, height: f32) {
    ui.label(&chart.title);
    if chart.is_empty() {
        ui.weak("No salary figures for this city.");
    }

    let bars: Vec<Bar> = chart
        .bins
        .iter()
        .map(|b| {
            Bar::new(b.center(), b.count as f64)
                .width(b.width())
                .name(format!("{:.0} – {:.0}", b.start, b.end))
        })
        .collect();

    Plot::new("salary_chart")
        .height(height)
        .legend(Legend::default())
        .x_axis_label("Salary")
        .y_axis_label("Count")
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Salary").color(HISTOGRAM_FILL));

            if !chart.density.is_empty() {
                let points: PlotPoints = chart.density.iter().copied().collect();
                plot_ui.line(
                    Line::new(points)
                        .name("Density")
                        .color(DENSITY_LINE)
                        .width(2.0),
                );
            }
        });
}

/// Horizontal bars, busiest locality on top.
pub fn locality_chart(ui: &mut Ui, chart: &LocalityChart, height: f32) {
    ui.label(&chart.title);

    let n = chart.bars.len();
    let bars: Vec<Bar> = chart
        .bars
        .iter()
        .zip(viridis(n))
        .enumerate()
        .map(|(rank, (locality, color))| {
            Bar::new((n - 1 - rank) as f64, locality.count as f64)
                .width(0.7)
                .name(&locality.locality)
                .fill(color)
                .stroke(Stroke::new(1.0, color))
        })
        .collect();

    // Axis position `i` holds the i-th bar from the bottom.
    let labels: Vec<String> = chart
        .bars
        .iter()
        .rev()
        .map(|b| b.locality.clone())
        .collect();

    Plot::new("locality_chart")
        .height(height)
        .x_axis_label("Number of Jobs")
        .y_axis_label("Locality")
        .y_axis_formatter(move |mark, _range| {
            let pos = mark.value.round();
            if (mark.value - pos).abs() > 1e-6 || pos < 0.0 {
                return String::new();
            }
            labels.get(pos as usize).cloned().unwrap_or_default()
        })
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal());
        });
}
