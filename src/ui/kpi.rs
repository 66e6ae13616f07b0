use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::view::Kpis;

const PRIMARY: Color32 = Color32::from_rgb(13, 110, 253);
const SUCCESS: Color32 = Color32::from_rgb(25, 135, 84);
const INFO: Color32 = Color32::from_rgb(13, 202, 240);
const WARNING: Color32 = Color32::from_rgb(255, 193, 7);

/// Row of four headline cards above the charts.
pub fn kpi_row(ui: &mut Ui, kpis: &Kpis) {
    let mean = kpis
        .mean_score
        .map_or_else(|| "—".to_string(), |m| format!("{m:.2}"));

    let cards = [
        ("Total de Aprovados", kpis.total.to_string(), PRIMARY, Color32::WHITE),
        ("Nota Média", mean, SUCCESS, Color32::WHITE),
        (
            "Percentual Mulheres",
            format!("{:.1}%", kpis.female_percent),
            INFO,
            Color32::BLACK,
        ),
        (
            "Percentual Cotistas",
            format!("{:.1}%", kpis.quota_percent),
            WARNING,
            Color32::BLACK,
        ),
    ];

    ui.columns(cards.len(), |columns| {
        for (ui, (title, value, fill, text)) in columns.iter_mut().zip(cards) {
            card(ui, title, &value, fill, text);
        }
    });
}

fn card(ui: &mut Ui, title: &str, value: &str, fill: Color32, text: Color32) {
    egui::Frame::group(ui.style())
        .fill(fill)
        .inner_margin(12.0)
        .show(ui, |ui: &mut Ui| {
            ui.set_min_width(ui.available_width());
            ui.label(RichText::new(title).color(text));
            ui.label(RichText::new(value).color(text).size(28.0).strong());
        });
}
