//! Group-and-count over a [`RowSubset`], feeding the charts and KPI cards.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::filter::RowSubset;
use super::model::{Column, StudentRecord};

/// `part` as a percentage of `total`; 0 when `total` is 0.
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 * 100.0 / total as f64
    }
}

// ---------------------------------------------------------------------------
// CountTable – category → count
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Share of the largest group, shown under a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Headline {
    pub category: String,
    pub percent: f64,
}

/// Counts per category, largest first (ties broken by category name).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CountTable {
    rows: Vec<CategoryCount>,
    total: usize,
}

impl CountTable {
    /// Count each value yielded by `values`.
    pub fn from_values<'r, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'r str>,
    {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for value in values {
            *counts.entry(value).or_default() += 1;
        }
        let total = counts.values().sum();

        let mut rows: Vec<CategoryCount> = counts
            .into_iter()
            .map(|(category, count)| CategoryCount {
                category: category.to_string(),
                count,
            })
            .collect();
        // BTreeMap already yields categories in order; a stable sort keeps it
        // for equal counts.
        rows.sort_by(|a, b| b.count.cmp(&a.count));

        CountTable { rows, total }
    }

    pub fn rows(&self) -> &[CategoryCount] {
        &self.rows
    }

    /// Number of rows that were counted (missing values excluded).
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn count_of(&self, category: &str) -> usize {
        self.rows
            .iter()
            .find(|row| row.category == category)
            .map_or(0, |row| row.count)
    }

    pub fn share_of(&self, category: &str) -> f64 {
        percentage(self.count_of(category), self.total)
    }

    pub fn top(&self) -> Option<&CategoryCount> {
        self.rows.first()
    }

    /// Largest group and its share of the total; `None` for an empty table.
    pub fn headline(&self) -> Option<Headline> {
        self.top().map(|top| Headline {
            category: top.category.clone(),
            percent: percentage(top.count, self.total),
        })
    }
}

// ---------------------------------------------------------------------------
// CrossTable – (primary, secondary) → count
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossCount {
    pub primary: String,
    pub secondary: String,
    pub count: usize,
}

/// Counts over two columns, e.g. area × sex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CrossTable {
    /// Ordered like a [`CountTable`] over the primary column.
    primary_categories: Vec<String>,
    /// Sorted ascending.
    secondary_categories: Vec<String>,
    rows: Vec<CrossCount>,
}

impl CrossTable {
    pub fn from_pairs<'r, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'r str, &'r str)>,
    {
        let mut counts: BTreeMap<(&str, &str), usize> = BTreeMap::new();
        for pair in pairs {
            *counts.entry(pair).or_default() += 1;
        }

        let primary = CountTable::from_values(
            counts
                .iter()
                .flat_map(|((p, _), n)| std::iter::repeat(*p).take(*n)),
        );
        let secondary: BTreeSet<&str> = counts.keys().map(|(_, s)| *s).collect();

        CrossTable {
            primary_categories: primary.rows.into_iter().map(|r| r.category).collect(),
            secondary_categories: secondary.into_iter().map(str::to_string).collect(),
            rows: counts
                .into_iter()
                .map(|((p, s), count)| CrossCount {
                    primary: p.to_string(),
                    secondary: s.to_string(),
                    count,
                })
                .collect(),
        }
    }

    pub fn rows(&self) -> &[CrossCount] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn primary_categories(&self) -> &[String] {
        &self.primary_categories
    }

    pub fn secondary_categories(&self) -> &[String] {
        &self.secondary_categories
    }

    pub fn count(&self, primary: &str, secondary: &str) -> usize {
        self.rows
            .iter()
            .find(|r| r.primary == primary && r.secondary == secondary)
            .map_or(0, |r| r.count)
    }

    /// Counts for one secondary category, aligned with `primary_categories`.
    pub fn series(&self, secondary: &str) -> Vec<usize> {
        self.primary_categories
            .iter()
            .map(|p| self.count(p, secondary))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Aggregators
// ---------------------------------------------------------------------------

/// Count the rows of `subset` per value of `column`.
pub fn aggregate_by(subset: &RowSubset<'_>, column: Column) -> CountTable {
    aggregate_by_key(subset, |record| record.value(column))
}

/// Count rows per arbitrary key; rows mapped to `None` are skipped.
pub fn aggregate_by_key<'a, F>(subset: &RowSubset<'a>, key: F) -> CountTable
where
    F: Fn(&'a StudentRecord) -> Option<&'a str>,
{
    CountTable::from_values(subset.records().filter_map(key))
}

/// Count rows per pair of column values; rows missing either value are skipped.
pub fn aggregate_by_pair(subset: &RowSubset<'_>, primary: Column, secondary: Column) -> CrossTable {
    CrossTable::from_pairs(
        subset
            .records()
            .filter_map(|record| Some((record.value(primary)?, record.value(secondary)?))),
    )
}
