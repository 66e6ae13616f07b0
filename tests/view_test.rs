mod common;

use admitted_dashboard::data::lookup::{AREA_EDUCATION, AREA_HEALTH, AREA_HUMANITIES};
use admitted_dashboard::data::view::compute_kpis;
use admitted_dashboard::data::{
    filter, percentage, recompute, AdmissionDataset, Column, FilterState, RowSubset,
};
use common::*;

#[test]
fn female_share_of_ten_students_is_sixty_percent() {
    let ds = ten_students();
    let view = recompute(&ds, &FilterState::new());
    assert_eq!(view.kpis.total, 10);
    assert_eq!(view.kpis.female_percent, 60.0);
    assert_eq!(view.by_sex.count_of("F"), 6);
}

#[test]
fn blank_sex_is_left_out_of_the_female_share_and_the_sex_chart() {
    let ds = AdmissionDataset::from_records(vec![
        record("U", "MEDICINA", "X", "A", "F", 700.0),
        record("U", "MEDICINA", "X", "A", "F", 710.0),
        record("U", "DIREITO", "X", "B", "M", 650.0),
        record("U", "DIREITO", "X", "B", "", 640.0),
    ]);
    let view = recompute(&ds, &FilterState::new());

    assert_eq!(view.kpis.total, 4);
    assert!((view.kpis.female_percent - 200.0 / 3.0).abs() < 1e-9);
    assert_eq!(view.by_sex.total(), 3);
    assert!(view.by_sex.rows().iter().all(|row| !row.category.is_empty()));
    assert_eq!(view.by_area_sex.secondary_categories(), &["F".to_string(), "M".to_string()]);
}

#[test]
fn quota_share_counts_every_track_but_open_competition() {
    let ds = ten_students();
    let kpis = compute_kpis(&RowSubset::all(&ds));
    assert_eq!(kpis.quota_percent, 50.0);
    let mean = kpis.mean_score.expect("every row has a score");
    assert!((mean - 676.0).abs() < 1e-9);
}

#[test]
fn empty_selection_is_an_explicit_no_data_view() {
    let ds = ten_students();
    let view = recompute(&ds, &filters(&[(Column::City, &["Nowhere"])]));
    assert!(view.is_empty());
    assert_eq!(view.kpis.total, 0);
    assert_eq!(view.kpis.mean_score, None);
    assert_eq!(view.kpis.female_percent, 0.0);
    assert_eq!(view.kpis.quota_percent, 0.0);
    assert!(view.by_vacancy.is_empty());
    assert!(view.by_sex.is_empty());
    assert!(view.by_area.is_empty());
    assert!(view.by_area_sex.is_empty());
    // Dropdowns still list what can be picked.
    assert_eq!(view.options.cities.len(), 4);
    assert!(view.options.courses.is_empty());
}

#[test]
fn area_charts_skip_unmapped_courses() {
    let ds = ten_students();
    let view = recompute(&ds, &FilterState::new());

    // GASTRONOMIA has no area.
    assert_eq!(view.by_area.total(), 9);
    assert_eq!(view.by_area.count_of(AREA_HEALTH), 3);
    assert_eq!(view.by_area.count_of(AREA_EDUCATION), 2);
    assert_eq!(view.by_area.count_of(AREA_HUMANITIES), 2);

    assert_eq!(view.by_area_sex.count(AREA_HEALTH, "F"), 3);
    assert_eq!(view.by_area_sex.count(AREA_HEALTH, "M"), 0);
    assert_eq!(view.by_area_sex.series("M").iter().sum::<usize>(), 3);
    assert_eq!(view.by_area_sex.primary_categories()[0], AREA_HEALTH);
}

#[test]
fn vacancy_headline_is_share_of_largest_track() {
    let ds = ten_students();
    let view = recompute(&ds, &FilterState::new());
    let headline = view.by_vacancy.headline().expect("non-empty table");
    assert_eq!(headline.category, "A");
    assert_eq!(headline.percent, 50.0);
}

#[test]
fn single_group_after_filtering_is_valid() {
    let ds = ten_students();
    let subset = filter(&ds, &filters(&[(Column::Course, &["MEDICINA"])]));
    let view = recompute(&ds, &filters(&[(Column::Course, &["MEDICINA"])]));
    assert_eq!(subset.len(), 3);
    assert_eq!(view.by_sex.rows().len(), 1);
    assert_eq!(view.by_sex.share_of("F"), 100.0);
    assert_eq!(view.kpis.female_percent, 100.0);
}

#[test]
fn city_selection_narrows_course_options_in_the_view() {
    let ds = ten_students();
    let view = recompute(&ds, &filters(&[(Column::City, &["Ilhéus"])]));
    assert_eq!(
        view.options.courses,
        vec!["AGRONOMIA".to_string(), "GASTRONOMIA".to_string()]
    );
    assert_eq!(view.options.universities, vec!["UEL".to_string(), "UFN".to_string()]);
}

#[test]
fn percentage_of_nothing_is_zero() {
    assert_eq!(percentage(0, 0), 0.0);
}

#[test]
fn view_serializes_for_the_summary_output() {
    let ds = ten_students();
    let json = serde_json::to_value(recompute(&ds, &FilterState::new())).unwrap();
    assert_eq!(json["kpis"]["total"], 10);
    assert_eq!(json["kpis"]["female_percent"], 60.0);
    assert_eq!(json["by_sex"]["total"], 10);
}
