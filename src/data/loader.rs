use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use arrow::array::{Array, AsArray, Float32Array, Float64Array, Int32Array, Int64Array};
use arrow::datatypes::DataType;
use arrow::util::display::array_value_to_string;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::error::DatasetError;
use super::model::{AdmissionDataset, StudentRecord};
use super::normalize::SourceField;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the admitted-students table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row, `,` or `;` separated (sniffed from the header)
/// * `.json`    – `[{ "CURSO": "...", "PONTUAÇÃO": 712.4, ... }, ...]`
/// * `.parquet` – one column per field, scores as float, int or text
///
/// Headers are matched after accent folding, so both dataset revisions load.
pub fn load_file(path: &Path) -> Result<AdmissionDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => return Err(DatasetError::UnsupportedExtension(other.to_string()).into()),
    };

    let dataset = AdmissionDataset::from_records(records).with_source(path);
    log::info!(
        "Loaded {} admitted students from {}",
        dataset.len(),
        path.display()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Row assembly shared by all formats
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
enum RawScore {
    #[default]
    Missing,
    Number(f64),
    Text(String),
}

/// Cell values of one source row, keyed by the field they belong to.
#[derive(Debug, Default)]
struct RawRow {
    text: BTreeMap<SourceField, String>,
    score: RawScore,
}

impl RawRow {
    fn set_text(&mut self, field: SourceField, value: String) {
        if field == SourceField::Score {
            self.score = RawScore::Text(value);
        } else {
            self.text.insert(field, value);
        }
    }

    fn into_record(self, row: usize) -> Result<StudentRecord, DatasetError> {
        let RawRow { text, score } = self;
        let score = match score {
            RawScore::Missing => None,
            RawScore::Number(v) if v.is_finite() => Some(v),
            RawScore::Number(v) => {
                return Err(DatasetError::InvalidScore {
                    row,
                    value: v.to_string(),
                })
            }
            RawScore::Text(t) => parse_score(&t, row)?,
        };
        let cell = |field: SourceField| text.get(&field).map(String::as_str).unwrap_or("");

        Ok(StudentRecord::new(
            cell(SourceField::University),
            cell(SourceField::Course),
            cell(SourceField::City),
            cell(SourceField::VacancyCode),
            cell(SourceField::Sex),
            score,
        ))
    }
}

/// Blank → missing; `,` is accepted as decimal separator. Infinities and NaN
/// spelled out in the cell are rejected.
fn parse_score(text: &str, row: usize) -> Result<Option<f64>, DatasetError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(Some)
        .ok_or_else(|| DatasetError::InvalidScore {
            row,
            value: trimmed.to_string(),
        })
}

/// Map source column positions to fields; first matching header wins.
fn resolve_fields<'h, I>(headers: I) -> Result<Vec<(usize, SourceField)>, DatasetError>
where
    I: IntoIterator<Item = &'h str>,
{
    let mut found: BTreeMap<SourceField, usize> = BTreeMap::new();
    for (idx, header) in headers.into_iter().enumerate() {
        match SourceField::from_header(header) {
            Some(field) => {
                found.entry(field).or_insert(idx);
            }
            None => log::debug!("ignoring column '{header}'"),
        }
    }
    check_required(found.keys().copied())?;
    log::debug!("resolved columns: {found:?}");

    Ok(found.into_iter().map(|(field, idx)| (idx, field)).collect())
}

fn check_required(present: impl IntoIterator<Item = SourceField>) -> Result<(), DatasetError> {
    let present: BTreeSet<SourceField> = present.into_iter().collect();
    let missing: Vec<&'static str> = SourceField::ALL
        .iter()
        .filter(|field| field.is_required() && !present.contains(field))
        .map(|field| field.header())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(DatasetError::MissingColumns(missing))
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Header row with column names, one admitted student per line.
fn load_csv(path: &Path) -> Result<Vec<StudentRecord>> {
    let delimiter = sniff_delimiter(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_path(path)
        .context("opening CSV")?;

    let headers = reader.headers().context("reading CSV headers")?.clone();
    let fields = resolve_fields(headers.iter())?;

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let mut raw = RawRow::default();
        for &(idx, field) in &fields {
            if let Some(value) = record.get(idx) {
                raw.set_text(field, value.to_string());
            }
        }
        records.push(raw.into_record(row_no)?);
    }

    Ok(records)
}

/// Spreadsheet exports from Brazilian locales use `;`.
fn sniff_delimiter(path: &Path) -> Result<u8> {
    let file = File::open(path).context("opening CSV")?;
    let mut header = String::new();
    BufReader::new(file)
        .read_line(&mut header)
        .context("reading CSV headers")?;

    let semicolons = header.matches(';').count();
    let commas = header.matches(',').count();
    Ok(if semicolons > commas { b';' } else { b',' })
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (one object per row):
///
/// ```json
/// [
///   { "UNIVERSIDADE": "UFX", "CURSO": "MEDICINA", "CIDADE": "Recife",
///     "VAGA CLASSIFICAÇÃO": "A", "SEXO": "F", "PONTUAÇÃO": 781.2 },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Vec<StudentRecord>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let rows = root.as_array().ok_or(DatasetError::NotAnArray)?;
    let objects = rows
        .iter()
        .enumerate()
        .map(|(row, value)| value.as_object().ok_or(DatasetError::NotAnObject { row }))
        .collect::<Result<Vec<_>, _>>()?;

    // An empty array has no keys to check, like a header-only CSV has no rows.
    if !objects.is_empty() {
        check_required(
            objects
                .iter()
                .flat_map(|obj| obj.keys())
                .filter_map(|key| SourceField::from_header(key)),
        )?;
    }

    let mut records = Vec::with_capacity(objects.len());
    for (row, obj) in objects.iter().enumerate() {
        let mut raw = RawRow::default();
        for (key, value) in obj.iter() {
            let Some(field) = SourceField::from_header(key) else {
                continue;
            };
            match value {
                JsonValue::Null => {}
                JsonValue::Number(n) if field == SourceField::Score => {
                    raw.score = n.as_f64().map_or(RawScore::Missing, RawScore::Number);
                }
                JsonValue::String(s) => raw.set_text(field, s.clone()),
                other => raw.set_text(field, other.to_string()),
            }
        }
        records.push(raw.into_record(row)?);
    }

    Ok(records)
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet export of the table.
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<Vec<StudentRecord>> {
    let file = File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let fields = resolve_fields(
        builder
            .schema()
            .fields()
            .iter()
            .map(|f| f.name().as_str()),
    )?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;

        for row in 0..batch.num_rows() {
            let mut raw = RawRow::default();
            for &(idx, field) in &fields {
                let col = batch.column(idx);
                if field == SourceField::Score {
                    raw.score = extract_score(col, row)
                        .with_context(|| format!("Row {}: failed to read score", records.len()))?;
                } else if let Some(text) = extract_text(col, row) {
                    raw.set_text(field, text);
                }
            }
            records.push(raw.into_record(records.len())?);
        }
    }

    Ok(records)
}

// -- Parquet / Arrow helpers --

/// Render a cell as text; nulls are missing.
fn extract_text(col: &Arc<dyn Array>, row: usize) -> Option<String> {
    if col.is_null(row) {
        return None;
    }
    match col.data_type() {
        DataType::Utf8 => Some(col.as_string::<i32>().value(row).to_string()),
        DataType::LargeUtf8 => Some(col.as_string::<i64>().value(row).to_string()),
        _ => array_value_to_string(col.as_ref(), row).ok(),
    }
}

fn extract_score(col: &Arc<dyn Array>, row: usize) -> Result<RawScore> {
    if col.is_null(row) {
        return Ok(RawScore::Missing);
    }
    let value = match col.data_type() {
        DataType::Float64 => col
            .as_any()
            .downcast_ref::<Float64Array>()
            .map(|a| a.value(row)),
        DataType::Float32 => col
            .as_any()
            .downcast_ref::<Float32Array>()
            .map(|a| a.value(row) as f64),
        DataType::Int32 => col
            .as_any()
            .downcast_ref::<Int32Array>()
            .map(|a| a.value(row) as f64),
        DataType::Int64 => col
            .as_any()
            .downcast_ref::<Int64Array>()
            .map(|a| a.value(row) as f64),
        DataType::Utf8 | DataType::LargeUtf8 => {
            return Ok(extract_text(col, row).map_or(RawScore::Missing, RawScore::Text));
        }
        other => bail!("Score column has unsupported type {other:?}"),
    };
    value.map(RawScore::Number).context("score array type mismatch")
}
