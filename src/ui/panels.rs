use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::lookup::vacancy_label;
use crate::data::model::Column;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel: one multi-select per filterable column.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filtros");
    ui.separator();

    if state.dataset.is_none() {
        ui.label("Nenhum conjunto de dados carregado.");
        return;
    }

    // Clone what we need so we can mutate state after the widgets are drawn.
    let options = state.view.options.clone();
    let mut toggled: Vec<(Column, String)> = Vec::new();
    let mut cleared: Vec<Column> = Vec::new();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for column in Column::FILTERABLE {
                let values = options.for_column(column);
                let n_selected = state.selected(column).map_or(0, |s| s.len());
                let n_total = values.len();
                let header_text = if n_selected == 0 {
                    format!("{}  (todos)", column.label())
                } else {
                    format!("{}  ({n_selected}/{n_total})", column.label())
                };

                egui::CollapsingHeader::new(RichText::new(header_text).strong())
                    .id_salt(column.header())
                    .default_open(column == Column::City)
                    .show(ui, |ui: &mut Ui| {
                        if n_selected > 0 && ui.small_button("Limpar").clicked() {
                            cleared.push(column);
                        }
                        if values.is_empty() {
                            ui.weak("Nenhuma opção disponível");
                        }
                        for value in values {
                            let mut checked = state.is_selected(column, value);
                            if ui
                                .checkbox(&mut checked, option_label(column, value))
                                .changed()
                            {
                                toggled.push((column, value.clone()));
                            }
                        }
                    });
            }
        });

    for column in cleared {
        state.select_none(column);
    }
    for (column, value) in toggled {
        state.toggle_filter_value(column, &value);
    }
}

fn option_label(column: Column, value: &str) -> String {
    if value.is_empty() {
        return "(vazio)".to_string();
    }
    match column {
        Column::VacancyCode => match vacancy_label(value) {
            label if label == value => value.to_string(),
            label => format!("{value} – {label}"),
        },
        _ => value.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("Arquivo", |ui: &mut Ui| {
            if ui.button("Abrir…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} aprovados carregados, {} no filtro",
                ds.len(),
                state.view.kpis.total
            ));
            if let Some(source) = ds.source() {
                ui.weak(source.display().to_string());
            }
        }

        ui.separator();

        if ui
            .add_enabled(!state.filters.is_empty(), egui::Button::new("Limpar filtros"))
            .clicked()
        {
            state.clear_filters();
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Abrir aprovados")
        .add_filter("Arquivos suportados", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => state.set_dataset(dataset),
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Erro: {e:#}"));
            }
        }
    }
}
