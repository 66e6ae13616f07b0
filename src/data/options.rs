use std::collections::BTreeSet;

use serde::Serialize;

use super::model::{AdmissionDataset, Column};

/// Valid course dropdown entries plus the course selection pruned to them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CourseOptions {
    /// Sorted ascending.
    pub options: Vec<String>,
    pub selection: BTreeSet<String>,
}

/// Recompute the course dropdown after the city selection changed.
///
/// * No city selected: every course of the full dataset is offered and the
///   course selection is returned as-is.
/// * Otherwise only courses taught in a selected city are offered, and the
///   selection keeps just the courses still on offer.
pub fn resolve_course_options(
    dataset: &AdmissionDataset,
    selected_cities: &BTreeSet<String>,
    selected_courses: &BTreeSet<String>,
) -> CourseOptions {
    if selected_cities.is_empty() {
        return CourseOptions {
            options: dataset.unique_values(Column::Course),
            selection: selected_courses.clone(),
        };
    }

    let valid: BTreeSet<&str> = dataset
        .records()
        .iter()
        .filter(|record| selected_cities.contains(&record.city))
        .map(|record| record.course.as_str())
        .collect();

    let selection = selected_courses
        .iter()
        .filter(|course| valid.contains(course.as_str()))
        .cloned()
        .collect();

    CourseOptions {
        options: valid.into_iter().map(str::to_string).collect(),
        selection,
    }
}
