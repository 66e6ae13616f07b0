use std::ops::RangeInclusive;

use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};
use egui_plot::{Bar, BarChart, GridMark, Legend, Plot};

use crate::color::ColorMap;
use crate::data::aggregate::{CountTable, CrossTable};
use crate::data::lookup::vacancy_label;
use crate::data::model::Column;
use crate::state::AppState;

const CHART_HEIGHT: f32 = 240.0;
const BAR_WIDTH: f64 = 0.7;
const TICK_CHARS: usize = 18;

// ---------------------------------------------------------------------------
// Chart grid (central panel)
// ---------------------------------------------------------------------------

/// Render the four charts and the area × sex table.
pub fn charts(ui: &mut Ui, state: &AppState) {
    let view = &state.view;

    ui.columns(2, |columns| {
        count_chart(
            &mut columns[0],
            "vacancy_chart",
            "Aprovados por modalidade de vaga",
            &view.by_vacancy,
            state.color_maps.get(&Column::VacancyCode),
            vacancy_display,
        );
        count_chart(
            &mut columns[1],
            "sex_chart",
            "Aprovados por sexo",
            &view.by_sex,
            state.color_maps.get(&Column::Sex),
            str::to_string,
        );
    });

    ui.add_space(12.0);

    ui.columns(2, |columns| {
        count_chart(
            &mut columns[0],
            "area_chart",
            "Aprovados por área",
            &view.by_area,
            state.color_maps.get(&Column::Area),
            str::to_string,
        );
        area_sex_chart(
            &mut columns[1],
            &view.by_area_sex,
            state.color_maps.get(&Column::Sex),
        );
    });

    ui.add_space(12.0);
    area_sex_table(ui, &view.by_area_sex);
}

fn vacancy_display(code: &str) -> String {
    if code.is_empty() {
        "(sem código)".to_string()
    } else {
        vacancy_label(code).to_string()
    }
}

fn no_data(ui: &mut Ui) {
    ui.add_sized(
        [ui.available_width(), CHART_HEIGHT],
        egui::Label::new(RichText::new("Sem dados para os filtros selecionados").weak()),
    );
}

/// Tick label for an integer x position; other positions stay blank.
fn category_tick(labels: &[String], mark: GridMark) -> String {
    let idx = mark.value.round();
    if idx < 0.0 || (mark.value - idx).abs() > 1e-6 {
        return String::new();
    }
    labels
        .get(idx as usize)
        .map(|label| {
            if label.chars().count() > TICK_CHARS {
                let short: String = label.chars().take(TICK_CHARS - 1).collect();
                format!("{short}…")
            } else {
                label.clone()
            }
        })
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Single-column bar chart
// ---------------------------------------------------------------------------

fn count_chart(
    ui: &mut Ui,
    id: &str,
    title: &str,
    table: &CountTable,
    colors: Option<&ColorMap>,
    label_for: impl Fn(&str) -> String,
) {
    ui.strong(title);
    if table.is_empty() {
        no_data(ui);
        return;
    }

    let labels: Vec<String> = table
        .rows()
        .iter()
        .map(|row| label_for(&row.category))
        .collect();

    let bars: Vec<Bar> = table
        .rows()
        .iter()
        .zip(&labels)
        .enumerate()
        .map(|(i, (row, label))| {
            let fill = colors.map_or(Color32::LIGHT_BLUE, |c| c.color_for(&row.category));
            Bar::new(i as f64, row.count as f64)
                .name(label)
                .fill(fill)
                .width(BAR_WIDTH)
        })
        .collect();
    let chart = BarChart::new(bars).name(title);

    Plot::new(id)
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            category_tick(&labels, mark)
        })
        .show(ui, |plot_ui| plot_ui.bar_chart(chart));

    if let Some(headline) = table.headline() {
        ui.label(format!(
            "Maior grupo: {} ({:.1}%)",
            label_for(&headline.category),
            headline.percent
        ));
    }
}

// ---------------------------------------------------------------------------
// Area × sex stacked chart and table
// ---------------------------------------------------------------------------

fn area_sex_chart(ui: &mut Ui, cross: &CrossTable, colors: Option<&ColorMap>) {
    ui.strong("Aprovados por área e sexo");
    if cross.is_empty() {
        no_data(ui);
        return;
    }

    let labels: Vec<String> = cross.primary_categories().to_vec();
    let mut charts: Vec<BarChart> = Vec::new();

    for sex in cross.secondary_categories() {
        let fill = colors.map_or(Color32::LIGHT_BLUE, |c| c.color_for(sex));
        let bars: Vec<Bar> = cross
            .series(sex)
            .into_iter()
            .enumerate()
            .map(|(i, n)| {
                Bar::new(i as f64, n as f64)
                    .name(format!("{} – {sex}", labels[i]))
                    .fill(fill)
                    .width(BAR_WIDTH)
            })
            .collect();

        let chart = {
            let below: Vec<&BarChart> = charts.iter().collect();
            BarChart::new(bars).name(sex).color(fill).stack_on(&below)
        };
        charts.push(chart);
    }

    Plot::new("area_sex_chart")
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            category_tick(&labels, mark)
        })
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

fn area_sex_table(ui: &mut Ui, cross: &CrossTable) {
    if cross.is_empty() {
        return;
    }
    let sexes = cross.secondary_categories();

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(TableColumn::remainder().at_least(160.0));
    for _ in sexes {
        table = table.column(TableColumn::auto().at_least(48.0));
    }
    table = table.column(TableColumn::auto().at_least(48.0));

    table
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Área");
            });
            for sex in sexes {
                header.col(|ui| {
                    ui.strong(sex.as_str());
                });
            }
            header.col(|ui| {
                ui.strong("Total");
            });
        })
        .body(|mut body| {
            for area in cross.primary_categories() {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(area.as_str());
                    });
                    let mut total = 0;
                    for sex in sexes {
                        let n = cross.count(area, sex);
                        total += n;
                        row.col(|ui| {
                            ui.label(n.to_string());
                        });
                    }
                    row.col(|ui| {
                        ui.label(total.to_string());
                    });
                });
            }
        });
}
