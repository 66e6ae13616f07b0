mod common;

use admitted_dashboard::data::filter::matches;
use admitted_dashboard::data::{aggregate_by, filter, Column, FilterState};
use common::*;
use proptest::prelude::*;

#[test]
fn no_criteria_returns_the_full_table() {
    let ds = ten_students();
    let subset = filter(&ds, &FilterState::new());
    assert_eq!(subset.indices(), (0..10).collect::<Vec<_>>().as_slice());

    let empty_sets = filters(&[(Column::City, &[]), (Column::Course, &[])]);
    assert_eq!(filter(&ds, &empty_sets).len(), 10);
}

#[test]
fn absent_vacancy_code_yields_no_rows_and_an_empty_aggregate() {
    let ds = ten_students();
    let subset = filter(&ds, &filters(&[(Column::VacancyCode, &["Z"])]));
    assert!(subset.is_empty());

    let by_vacancy = aggregate_by(&subset, Column::VacancyCode);
    assert!(by_vacancy.is_empty());
    assert_eq!(by_vacancy.total(), 0);
    assert_eq!(by_vacancy.headline(), None);
}

#[test]
fn criteria_combine_across_columns() {
    let ds = ten_students();
    let subset = filter(
        &ds,
        &filters(&[
            (Column::University, &["UFN"]),
            (Column::Course, &["MEDICINA", "PEDAGOGIA"]),
            (Column::VacancyCode, &["A"]),
        ]),
    );
    let rows: Vec<_> = subset.records().map(|r| (r.course.as_str(), r.city.as_str())).collect();
    assert_eq!(rows, vec![("MEDICINA", "Recife"), ("PEDAGOGIA", "Caruaru")]);
}

#[test]
fn filtering_never_mutates_the_dataset() {
    let ds = ten_students();
    let before = ds.records().to_vec();
    let _ = filter(&ds, &filters(&[(Column::City, &["Recife"])])).to_dataset();
    assert_eq!(ds.records(), before.as_slice());
}

proptest! {
    #[test]
    fn empty_criteria_is_identity(ds in arb_dataset()) {
        let subset = filter(&ds, &FilterState::new());
        prop_assert_eq!(subset.len(), ds.len());
        let subset_ds = subset.to_dataset();
        prop_assert_eq!(subset_ds.records(), ds.records());
    }

    #[test]
    fn retained_rows_are_exactly_those_meeting_every_criterion(
        ds in arb_dataset(),
        criteria in arb_filters(),
    ) {
        let subset = filter(&ds, &criteria);

        // Subset law: strictly increasing indices into the original table.
        prop_assert!(subset.indices().windows(2).all(|w| w[0] < w[1]));
        prop_assert!(subset.indices().iter().all(|&i| i < ds.len()));

        for (i, record) in ds.records().iter().enumerate() {
            let satisfies_all = criteria.iter().all(|(column, accepted)| {
                accepted.is_empty()
                    || record.value(*column).is_some_and(|v| accepted.contains(v))
            });
            prop_assert_eq!(subset.indices().contains(&i), satisfies_all);
            prop_assert_eq!(matches(record, &criteria), satisfies_all);
        }
    }
}
