use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use log::debug;

use super::columns::{CATEGORY, GEO, REF_DATE, VALUE};
use super::model::{Dataset, Observation, YearMonth};
use crate::error::{CleanError, Result};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a CPI table from a comma-separated file with a header row.
///
/// Only the four required columns are materialised; anything else in the
/// file is skipped while reading. Short rows read their missing cells as
/// blank. The first bad row aborts the load.
pub fn load_csv(path: &Path) -> Result<Dataset> {
    let reader = reader_builder().from_path(path)?;
    let dataset = read_rows(reader)?;
    debug!("loaded {} rows from {}", dataset.len(), path.display());
    Ok(dataset)
}

/// Same as [`load_csv`] but from any byte source.
pub fn read_csv<R: Read>(source: R) -> Result<Dataset> {
    read_rows(reader_builder().from_reader(source))
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.flexible(true);
    builder
}

// ---------------------------------------------------------------------------
// Header lookup
// ---------------------------------------------------------------------------

/// Positions of the required columns inside the source header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnIndex {
    ref_date: usize,
    geo: usize,
    category: usize,
    value: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or(CleanError::MissingColumn { column })
        };
        Ok(ColumnIndex {
            ref_date: find(REF_DATE)?,
            geo: find(GEO)?,
            category: find(CATEGORY)?,
            value: find(VALUE)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Row parsing
// ---------------------------------------------------------------------------

fn read_rows<R: Read>(mut reader: csv::Reader<R>) -> Result<Dataset> {
    let index = ColumnIndex::from_headers(reader.headers()?)?;

    let mut rows = Vec::new();
    let mut record = StringRecord::new();
    let mut row_no = 0;
    while reader.read_record(&mut record)? {
        row_no += 1;
        rows.push(parse_row(&record, &index, row_no)?);
    }
    Ok(Dataset::from_rows(rows))
}

fn parse_row(record: &StringRecord, index: &ColumnIndex, row: usize) -> Result<Observation> {
    // Flexible reader: cells past the end of a short row are blank.
    let cell = |i: usize| record.get(i).unwrap_or("");

    let raw_date = cell(index.ref_date);
    let ref_date: YearMonth = raw_date.parse().map_err(|_| CleanError::InvalidDate {
        row,
        value: raw_date.to_string(),
    })?;

    Ok(Observation {
        ref_date,
        geo: cell(index.geo).to_string(),
        category: cell(index.category).to_string(),
        value: parse_value(cell(index.value), row)?,
    })
}

/// Cell texts read as a missing reading, in addition to the blank cell.
/// Same set pandas treats as NA by default.
const NA_TOKENS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn parse_value(raw: &str, row: usize) -> Result<Option<f64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || NA_TOKENS.contains(&trimmed) {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| CleanError::InvalidValue {
            row,
            value: raw.to_string(),
        })
}
