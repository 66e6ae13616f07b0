use std::collections::{BTreeMap, BTreeSet};

use super::model::{AdmissionDataset, Column, StudentRecord};

// ---------------------------------------------------------------------------
// Filter predicate: which values are accepted per column
// ---------------------------------------------------------------------------

/// Per-column selection state: maps column → set of accepted values.
/// If a column is absent or its set is empty, it means "no filter" (show all).
pub type FilterState = BTreeMap<Column, BTreeSet<String>>;

/// Whether a record passes every active column filter.
///
/// AND across columns, OR within one column's accepted set.
pub fn matches(record: &StudentRecord, filters: &FilterState) -> bool {
    filters.iter().all(|(column, accepted)| {
        accepted.is_empty()
            || record
                .value(*column)
                .is_some_and(|value| accepted.contains(value))
    })
}

/// Return indices of records that pass all active filters.
pub fn filtered_indices(dataset: &AdmissionDataset, filters: &FilterState) -> Vec<usize> {
    dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, record)| matches(record, filters))
        .map(|(i, _)| i)
        .collect()
}

/// Apply `filters` to `dataset`. Never fails; an empty subset is valid.
pub fn filter<'a>(dataset: &'a AdmissionDataset, filters: &FilterState) -> RowSubset<'a> {
    RowSubset {
        dataset,
        indices: filtered_indices(dataset, filters),
    }
}

// ---------------------------------------------------------------------------
// RowSubset – a filtered view that borrows the dataset
// ---------------------------------------------------------------------------

/// Rows of a dataset selected by a filter, in original order.
#[derive(Debug, Clone)]
pub struct RowSubset<'a> {
    dataset: &'a AdmissionDataset,
    indices: Vec<usize>,
}

impl<'a> RowSubset<'a> {
    /// Every row of the dataset.
    pub fn all(dataset: &'a AdmissionDataset) -> Self {
        Self {
            dataset,
            indices: (0..dataset.len()).collect(),
        }
    }

    pub fn dataset(&self) -> &'a AdmissionDataset {
        self.dataset
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn records(&self) -> impl Iterator<Item = &'a StudentRecord> + '_ {
        let rows = self.dataset.records();
        self.indices.iter().map(move |&i| &rows[i])
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Copy the selected rows into a standalone dataset.
    pub fn to_dataset(&self) -> AdmissionDataset {
        AdmissionDataset::from_records(self.records().cloned().collect())
    }
}
