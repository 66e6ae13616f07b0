mod common;

use std::collections::BTreeSet;

use admitted_dashboard::data::{resolve_course_options, AdmissionDataset};
use common::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn two_cities() -> AdmissionDataset {
    AdmissionDataset::from_records(vec![
        record("U", "A", "X", "A", "F", 700.0),
        record("U", "B", "Y", "A", "M", 650.0),
    ])
}

#[test]
fn selecting_a_city_narrows_options_and_prunes_stale_courses() {
    let ds = two_cities();
    let resolved = resolve_course_options(&ds, &set(&["Y"]), &set(&["A"]));
    assert_eq!(resolved.options, vec!["B".to_string()]);
    assert!(resolved.selection.is_empty());
}

#[test]
fn still_valid_courses_survive_a_city_change() {
    let ds = two_cities();
    let resolved = resolve_course_options(&ds, &set(&["X", "Y"]), &set(&["A", "B"]));
    assert_eq!(resolved.options, vec!["A".to_string(), "B".to_string()]);
    assert_eq!(resolved.selection, set(&["A", "B"]));
}

#[test]
fn no_city_offers_every_course_and_leaves_selection_alone() {
    let ds = ten_students();
    let previous = set(&["MEDICINA", "NOT-IN-DATASET"]);
    let resolved = resolve_course_options(&ds, &BTreeSet::new(), &previous);
    assert_eq!(
        resolved.options,
        vec![
            "AGRONOMIA".to_string(),
            "DIREITO".to_string(),
            "GASTRONOMIA".to_string(),
            "MEDICINA".to_string(),
            "PEDAGOGIA".to_string(),
            "PSICOLOGIA".to_string(),
        ]
    );
    assert_eq!(resolved.selection, previous);
}

#[test]
fn empty_previous_selection_stays_empty() {
    let ds = ten_students();
    let resolved = resolve_course_options(&ds, &set(&["Recife"]), &BTreeSet::new());
    assert_eq!(resolved.options, vec!["DIREITO".to_string(), "MEDICINA".to_string()]);
    assert!(resolved.selection.is_empty());
}

proptest! {
    #[test]
    fn resolving_is_idempotent(
        ds in arb_dataset(),
        cities in arb_cities(),
        courses in arb_courses(),
    ) {
        let first = resolve_course_options(&ds, &cities, &courses);
        let second = resolve_course_options(&ds, &cities, &courses);
        prop_assert_eq!(&first, &second);

        // Feeding the pruned selection back in changes nothing either.
        let again = resolve_course_options(&ds, &cities, &first.selection);
        prop_assert_eq!(&again, &first);
    }

    #[test]
    fn selection_is_previous_intersected_with_options(
        ds in arb_dataset(),
        cities in arb_cities(),
        courses in arb_courses(),
    ) {
        let resolved = resolve_course_options(&ds, &cities, &courses);
        let valid: BTreeSet<String> = resolved.options.iter().cloned().collect();

        if cities.is_empty() {
            prop_assert_eq!(&resolved.selection, &courses);
        } else {
            let expected: BTreeSet<String> = courses.intersection(&valid).cloned().collect();
            prop_assert_eq!(&resolved.selection, &expected);
        }

        // Options are exactly the courses taught in the selected cities.
        let taught: BTreeSet<String> = ds
            .records()
            .iter()
            .filter(|r| cities.is_empty() || cities.contains(&r.city))
            .map(|r| r.course.clone())
            .collect();
        prop_assert_eq!(valid, taught);
    }
}
