use std::collections::BTreeSet;

use serde::Serialize;

use super::aggregate::{aggregate_by, aggregate_by_pair, percentage, CountTable, CrossTable};
use super::filter::{filter, FilterState, RowSubset};
use super::model::{AdmissionDataset, Column};
use super::options::resolve_course_options;

// ---------------------------------------------------------------------------
// KPIs
// ---------------------------------------------------------------------------

/// Headline numbers shown in the card row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Kpis {
    pub total: usize,
    /// `None` when no selected row has a score.
    pub mean_score: Option<f64>,
    /// Share of rows with a recorded sex that are female.
    pub female_percent: f64,
    /// Share of rows admitted through any track other than open competition.
    pub quota_percent: f64,
}

pub fn compute_kpis(subset: &RowSubset<'_>) -> Kpis {
    let total = subset.len();
    let mut female = 0;
    let mut with_sex = 0;
    let mut quota = 0;
    let mut score_sum = 0.0;
    let mut scored = 0usize;

    for record in subset.records() {
        if record.sex.is_some() {
            with_sex += 1;
        }
        if record.is_female() {
            female += 1;
        }
        if record.is_quota() {
            quota += 1;
        }
        if let Some(score) = record.score {
            score_sum += score;
            scored += 1;
        }
    }

    Kpis {
        total,
        mean_score: (scored > 0).then(|| score_sum / scored as f64),
        female_percent: percentage(female, with_sex),
        quota_percent: percentage(quota, total),
    }
}

// ---------------------------------------------------------------------------
// Dropdown options
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub universities: Vec<String>,
    /// Narrowed by the city selection.
    pub courses: Vec<String>,
    pub cities: Vec<String>,
    pub vacancy_codes: Vec<String>,
}

impl FilterOptions {
    pub fn for_column(&self, column: Column) -> &[String] {
        match column {
            Column::University => &self.universities,
            Column::Course => &self.courses,
            Column::City => &self.cities,
            Column::VacancyCode => &self.vacancy_codes,
            Column::Sex | Column::Area => &[],
        }
    }
}

// ---------------------------------------------------------------------------
// DashboardView – everything the UI draws for one selection
// ---------------------------------------------------------------------------

/// All display values for one filter selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardView {
    pub kpis: Kpis,
    pub by_vacancy: CountTable,
    pub by_sex: CountTable,
    pub by_area: CountTable,
    pub by_area_sex: CrossTable,
    pub options: FilterOptions,
}

impl DashboardView {
    pub fn compute(dataset: &AdmissionDataset, filters: &FilterState) -> Self {
        let subset = filter(dataset, filters);
        log::debug!(
            "recomputing view: {} of {} rows selected",
            subset.len(),
            dataset.len()
        );

        let empty = BTreeSet::new();
        let cities = filters.get(&Column::City).unwrap_or(&empty);
        let courses = filters.get(&Column::Course).unwrap_or(&empty);

        DashboardView {
            kpis: compute_kpis(&subset),
            by_vacancy: aggregate_by(&subset, Column::VacancyCode),
            by_sex: aggregate_by(&subset, Column::Sex),
            by_area: aggregate_by(&subset, Column::Area),
            by_area_sex: aggregate_by_pair(&subset, Column::Area, Column::Sex),
            options: FilterOptions {
                universities: dataset.unique_values(Column::University),
                courses: resolve_course_options(dataset, cities, courses).options,
                cities: dataset.unique_values(Column::City),
                vacancy_codes: dataset.unique_values(Column::VacancyCode),
            },
        }
    }

    /// Whether the selection matched no rows.
    pub fn is_empty(&self) -> bool {
        self.kpis.total == 0
    }
}

/// Recompute every display value for the current selection.
pub fn recompute(dataset: &AdmissionDataset, filters: &FilterState) -> DashboardView {
    DashboardView::compute(dataset, filters)
}
