use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::lookup;
use super::normalize::{collapse_whitespace, normalize_code, normalize_course};

// ---------------------------------------------------------------------------
// Column – a categorical column that can be filtered or grouped on
// ---------------------------------------------------------------------------

/// Categorical columns of the admitted-students table.
///
/// `Area` is derived from `Course` and never read from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Column {
    University,
    Course,
    City,
    VacancyCode,
    Sex,
    Area,
}

impl Column {
    /// Columns exposed as dropdown filters, in display order.
    pub const FILTERABLE: [Column; 4] = [
        Column::University,
        Column::Course,
        Column::City,
        Column::VacancyCode,
    ];

    pub const ALL: [Column; 6] = [
        Column::University,
        Column::Course,
        Column::City,
        Column::VacancyCode,
        Column::Sex,
        Column::Area,
    ];

    /// Canonical header name.
    pub fn header(self) -> &'static str {
        match self {
            Column::University => "UNIVERSIDADE",
            Column::Course => "CURSO",
            Column::City => "CIDADE",
            Column::VacancyCode => "VAGA CLASSIFICAÇÃO",
            Column::Sex => "SEXO",
            Column::Area => "AREA",
        }
    }

    /// Short label shown above a dropdown.
    pub fn label(self) -> &'static str {
        match self {
            Column::University => "Universidade",
            Column::Course => "Curso",
            Column::City => "Cidade",
            Column::VacancyCode => "Vaga",
            Column::Sex => "Sexo",
            Column::Area => "Área",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

// ---------------------------------------------------------------------------
// StudentRecord – one row of the table
// ---------------------------------------------------------------------------

/// One admitted applicant, already normalized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRecord {
    pub university: String,
    pub course: String,
    pub city: String,
    /// Single letter A–J; empty when the source cell was blank.
    pub vacancy_code: String,
    /// `None` when the source cell was blank.
    pub sex: Option<String>,
    /// `None` when the source cell was blank.
    pub score: Option<f64>,
}

impl StudentRecord {
    /// Build a record from raw cell text, applying the load-time clean-up.
    pub fn new(
        university: &str,
        course: &str,
        city: &str,
        vacancy_code: &str,
        sex: &str,
        score: Option<f64>,
    ) -> Self {
        Self {
            university: collapse_whitespace(university),
            course: normalize_course(course),
            city: collapse_whitespace(city),
            vacancy_code: normalize_code(vacancy_code),
            sex: Some(normalize_code(sex)).filter(|s| !s.is_empty()),
            score: score.filter(|s| !s.is_nan()),
        }
    }

    /// Value of a categorical column; `None` for a blank sex or an unmapped area.
    pub fn value(&self, column: Column) -> Option<&str> {
        match column {
            Column::University => Some(&self.university),
            Column::Course => Some(&self.course),
            Column::City => Some(&self.city),
            Column::VacancyCode => Some(&self.vacancy_code),
            Column::Sex => self.sex.as_deref(),
            Column::Area => self.area(),
        }
    }

    pub fn area(&self) -> Option<&'static str> {
        lookup::area_for_course(&self.course)
    }

    pub fn vacancy_label(&self) -> &str {
        lookup::vacancy_label(&self.vacancy_code)
    }

    pub fn is_female(&self) -> bool {
        self.sex.as_deref() == Some("F")
    }

    pub fn is_quota(&self) -> bool {
        !lookup::is_open_competition(&self.vacancy_code)
    }
}

// ---------------------------------------------------------------------------
// AdmissionDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The loaded table with pre-computed distinct values per column.
///
/// Rows are private: once built, a dataset is only ever read.
#[derive(Debug, Clone, Default)]
pub struct AdmissionDataset {
    records: Vec<StudentRecord>,
    unique_values: BTreeMap<Column, BTreeSet<String>>,
    source: Option<PathBuf>,
}

impl AdmissionDataset {
    /// Build column indices from the loaded records.
    pub fn from_records(records: Vec<StudentRecord>) -> Self {
        let mut unique_values: BTreeMap<Column, BTreeSet<String>> =
            Column::ALL.iter().map(|c| (*c, BTreeSet::new())).collect();

        for record in &records {
            for column in Column::ALL {
                if let Some(value) = record.value(column) {
                    if let Some(values) = unique_values.get_mut(&column) {
                        values.insert(value.to_string());
                    }
                }
            }
        }

        AdmissionDataset {
            records,
            unique_values,
            source: None,
        }
    }

    /// Remember which file the dataset came from.
    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(path.into());
        self
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    /// Sorted distinct values of a column across the whole table.
    pub fn unique_values(&self, column: Column) -> Vec<String> {
        self.unique_values
            .get(&column)
            .map(|values| values.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
