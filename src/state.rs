use std::collections::{BTreeMap, BTreeSet};

use crate::color::ColorMap;
use crate::data::filter::FilterState;
use crate::data::model::{AdmissionDataset, Column};
use crate::data::options::resolve_course_options;
use crate::data::view::DashboardView;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset; read-only once set.
    pub dataset: Option<AdmissionDataset>,

    /// Per-column filter selections.
    pub filters: FilterState,

    /// Display values for the current filters (cached).
    pub view: DashboardView,

    /// Category colours for the charts, per grouped column.
    pub color_maps: BTreeMap<Column, ColorMap>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn with_dataset(dataset: AdmissionDataset) -> Self {
        let mut state = Self::default();
        state.set_dataset(dataset);
        state
    }

    /// Ingest a newly loaded dataset: reset filters, colours and the view.
    pub fn set_dataset(&mut self, dataset: AdmissionDataset) {
        self.filters = FilterState::new();
        self.color_maps = [Column::VacancyCode, Column::Sex, Column::Area]
            .into_iter()
            .map(|column| (column, ColorMap::new(&dataset.unique_values(column))))
            .collect();

        self.dataset = Some(dataset);
        self.status_message = None;
        self.refresh();
    }

    /// Recompute the view after a filter change.
    pub fn refresh(&mut self) {
        if let Some(ds) = &self.dataset {
            self.view = DashboardView::compute(ds, &self.filters);
        }
    }

    pub fn selected(&self, column: Column) -> Option<&BTreeSet<String>> {
        self.filters.get(&column)
    }

    pub fn is_selected(&self, column: Column, value: &str) -> bool {
        self.selected(column).is_some_and(|set| set.contains(value))
    }

    /// Toggle a single value in a column's filter.
    pub fn toggle_filter_value(&mut self, column: Column, value: &str) {
        let selected = self.filters.entry(column).or_default();
        if !selected.remove(value) {
            selected.insert(value.to_string());
        }
        if selected.is_empty() {
            self.filters.remove(&column);
        }
        self.after_selection_change(column);
    }

    /// Clear a column's filter (no constraint).
    pub fn select_none(&mut self, column: Column) {
        self.filters.remove(&column);
        self.after_selection_change(column);
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.refresh();
    }

    fn after_selection_change(&mut self, column: Column) {
        if column == Column::City {
            self.prune_courses();
        }
        self.refresh();
    }

    /// Drop selected courses that are not taught in the selected cities.
    fn prune_courses(&mut self) {
        let Some(ds) = &self.dataset else {
            return;
        };
        let empty = BTreeSet::new();
        let cities = self.filters.get(&Column::City).unwrap_or(&empty);
        let courses = self.filters.get(&Column::Course).unwrap_or(&empty);
        let resolved = resolve_course_options(ds, cities, courses);

        if resolved.selection.is_empty() {
            self.filters.remove(&Column::Course);
        } else {
            self.filters.insert(Column::Course, resolved.selection);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::StudentRecord;

    fn state() -> AppState {
        AppState::with_dataset(AdmissionDataset::from_records(vec![
            StudentRecord::new("U", "A", "X", "A", "F", Some(1.0)),
            StudentRecord::new("U", "B", "Y", "B", "M", Some(2.0)),
        ]))
    }

    #[test]
    fn selecting_a_city_prunes_courses_and_narrows_options() {
        let mut state = state();
        state.toggle_filter_value(Column::Course, "A");
        assert_eq!(state.view.kpis.total, 1);

        state.toggle_filter_value(Column::City, "Y");
        assert!(state.selected(Column::Course).is_none());
        assert_eq!(state.view.options.courses, vec!["B".to_string()]);
        assert_eq!(state.view.kpis.total, 1);
    }

    #[test]
    fn toggling_twice_restores_everything() {
        let mut state = state();
        state.toggle_filter_value(Column::VacancyCode, "B");
        assert!(state.is_selected(Column::VacancyCode, "B"));
        state.toggle_filter_value(Column::VacancyCode, "B");
        assert!(!state.is_selected(Column::VacancyCode, "B"));
        assert!(state.selected(Column::VacancyCode).is_none());
        assert!(state.filters.is_empty());
        assert_eq!(state.view.kpis.total, 2);
    }

    #[test]
    fn clearing_cities_offers_every_course_again() {
        let mut state = state();
        state.toggle_filter_value(Column::City, "X");
        assert_eq!(state.view.options.courses, vec!["A".to_string()]);
        state.select_none(Column::City);
        assert_eq!(
            state.view.options.courses,
            vec!["A".to_string(), "B".to_string()]
        );
    }
}
