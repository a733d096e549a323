use crate::application::trends::CityStat;
use eframe::egui;
use egui_plot::{Bar, BarChart, Legend, Plot};
use rust_decimal::prelude::ToPrimitive;

/// Renders one bar per city. Bars are named so hover and legend double as
/// the axis labels.
pub fn render_city_bars(
    ui: &mut egui::Ui,
    id: &str,
    name: &str,
    stats: &[CityStat],
    color: egui::Color32,
    height: f32,
) {
    let bars: Vec<Bar> = stats
        .iter()
        .enumerate()
        .map(|(i, stat)| {
            Bar::new(i as f64, stat.total.to_f64().unwrap_or(0.0))
                .name(&stat.city)
                .fill(color)
        })
        .collect();

    Plot::new(id.to_string())
        .height(height)
        .show_grid([false, true])
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(name, bars));
        });
}

/// Renders the feature-importance breakdown, largest coefficient first.
pub fn render_importance_bars(
    ui: &mut egui::Ui,
    importances: &[(String, f64)],
    color: egui::Color32,
    height: f32,
) {
    let bars: Vec<Bar> = importances
        .iter()
        .enumerate()
        .map(|(i, (feature, value))| Bar::new(i as f64, *value).name(feature).fill(color))
        .collect();

    Plot::new("feature_importance")
        .height(height)
        .show_grid([false, true])
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new("|coefficient|", bars));
        });
}
