use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::data::model::AdmissionDataset;
use crate::state::AppState;
use crate::ui::{kpi, panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    pub state: AppState,
    title: String,
}

impl DashboardApp {
    pub fn new(dataset: AdmissionDataset, title: impl Into<String>) -> Self {
        Self {
            state: AppState::with_dataset(dataset),
            title: title.into(),
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: KPIs and charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    ui.vertical_centered(|ui: &mut Ui| {
                        ui.heading(&self.title);
                    });
                    ui.add_space(8.0);

                    kpi::kpi_row(ui, &self.state.view.kpis);
                    ui.separator();

                    if self.state.view.is_empty() {
                        ui.label(
                            RichText::new("Nenhum aprovado corresponde aos filtros selecionados.")
                                .italics(),
                        );
                    }
                    plot::charts(ui, &self.state);
                });
        });
    }
}
