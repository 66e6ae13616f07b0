#![allow(dead_code)]

use std::collections::BTreeSet;

use admitted_dashboard::data::{AdmissionDataset, Column, FilterState, StudentRecord};
use proptest::prelude::*;

pub fn record(
    university: &str,
    course: &str,
    city: &str,
    vacancy: &str,
    sex: &str,
    score: f64,
) -> StudentRecord {
    StudentRecord::new(university, course, city, vacancy, sex, Some(score))
}

pub fn set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn filters(entries: &[(Column, &[&str])]) -> FilterState {
    entries
        .iter()
        .map(|(column, values)| (*column, set(values)))
        .collect()
}

/// Ten students, six of them female, across two cities.
pub fn ten_students() -> AdmissionDataset {
    AdmissionDataset::from_records(vec![
        record("UFN", "MEDICINA", "Recife", "A", "F", 780.0),
        record("UFN", "MEDICINA", "Recife", "B", "F", 760.0),
        record("UFN", "DIREITO", "Recife", "A", "M", 700.0),
        record("UFN", "PEDAGOGIA", "Caruaru", "C", "F", 610.0),
        record("UFN", "PEDAGOGIA", "Caruaru", "A", "M", 620.0),
        record("UEL", "MEDICINA", "Salvador", "D", "F", 770.0),
        record("UEL", "PSICOLOGIA", "Salvador", "A", "F", 680.0),
        record("UEL", "PSICOLOGIA", "Salvador", "E", "M", 650.0),
        record("UEL", "AGRONOMIA", "Ilhéus", "A", "F", 600.0),
        record("UEL", "GASTRONOMIA", "Ilhéus", "J", "M", 590.0),
    ])
}

const UNIVERSITIES: &[&str] = &["U1", "U2"];
const COURSES: &[&str] = &["MEDICINA", "DIREITO", "PEDAGOGIA", "GASTRONOMIA"];
const CITIES: &[&str] = &["X", "Y", "Z"];
const CODES: &[&str] = &["A", "B", "C", ""];
const SEXES: &[&str] = &["F", "M"];

pub fn arb_record() -> impl Strategy<Value = StudentRecord> {
    (
        prop::sample::select(UNIVERSITIES),
        prop::sample::select(COURSES),
        prop::sample::select(CITIES),
        prop::sample::select(CODES),
        prop::sample::select(SEXES),
        prop::option::of(500.0f64..900.0),
    )
        .prop_map(|(u, c, city, code, sex, score)| {
            StudentRecord::new(u, c, city, code, sex, score)
        })
}

pub fn arb_dataset() -> impl Strategy<Value = AdmissionDataset> {
    prop::collection::vec(arb_record(), 0..40).prop_map(AdmissionDataset::from_records)
}

fn arb_values(pool: &'static [&'static str]) -> impl Strategy<Value = BTreeSet<String>> {
    prop::sample::subsequence(pool, 0..=pool.len())
        .prop_map(|values| values.into_iter().map(str::to_string).collect::<BTreeSet<String>>())
}

/// Values drawn from the same pools as the dataset, plus a value never present.
pub fn arb_filters() -> impl Strategy<Value = FilterState> {
    (
        arb_values(UNIVERSITIES),
        arb_values(COURSES),
        arb_values(&["X", "Y", "Z", "NOWHERE"]),
        arb_values(CODES),
    )
        .prop_map(|(universities, courses, cities, codes)| {
            let mut filters = FilterState::new();
            filters.insert(Column::University, universities);
            filters.insert(Column::Course, courses);
            filters.insert(Column::City, cities);
            filters.insert(Column::VacancyCode, codes);
            filters
        })
}

pub fn arb_cities() -> impl Strategy<Value = BTreeSet<String>> {
    arb_values(CITIES)
}

pub fn arb_courses() -> impl Strategy<Value = BTreeSet<String>> {
    arb_values(COURSES)
}
