//! CSV coupon table loader.
//!
//! Reads a header row followed by `code,discount` rows. Bad discount
//! values never abort the load (they are clamped or coerced to 0), but a
//! structurally broken source is rejected as a whole: every row is
//! validated before anything is inserted, so a failed load always
//! leaves the table empty.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{debug, info};

use crate::error::LoadError;
use crate::table::{CouponTable, DiscountValue, clamp_discount};

/// Outcome of a load: counters on success, the reason on failure.
pub type LoadOutcome = Result<LoadReport, LoadError>;

/// Counters describing a successful load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Data rows read (header excluded).
    pub rows: usize,
    /// Distinct codes in the resulting table.
    pub codes: usize,
    /// Rows whose discount was outside `[0, 100]`.
    pub clamped: usize,
    /// Rows whose discount was not an integer.
    pub coerced: usize,
    /// Rows that overwrote an earlier row with the same code.
    pub duplicates: usize,
}

/// Load the coupon table from a CSV file.
pub fn load_file(path: &Path) -> (CouponTable, LoadOutcome) {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            return (
                CouponTable::empty(),
                Err(LoadError::SourceUnavailable(format!("{}: {e}", path.display()))),
            );
        }
    };

    debug!(path = ?path, "reading coupon source");
    load_reader(BufReader::new(file))
}

/// Load the coupon table from any CSV byte source.
pub fn load_reader<R: Read>(source: R) -> (CouponTable, LoadOutcome) {
    match parse_rows(source) {
        Ok(rows) => build_table(rows),
        Err(e) => (CouponTable::empty(), Err(e)),
    }
}

/// Parse and validate every data row before anything is inserted.
fn parse_rows<R: Read>(source: R) -> Result<Vec<(String, String)>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(source);

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(map_csv_error)?;

        let (Some(code), Some(discount)) = (record.get(0), record.get(1)) else {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            return Err(LoadError::MalformedSource(format!(
                "line {line}: expected at least 2 fields, found {}",
                record.len()
            )));
        };

        rows.push((code.to_string(), discount.to_string()));
    }

    Ok(rows)
}

fn build_table(rows: Vec<(String, String)>) -> (CouponTable, LoadOutcome) {
    let mut table = CouponTable::empty();
    let mut report = LoadReport {
        rows: rows.len(),
        ..LoadReport::default()
    };

    for (code, raw) in rows {
        let value = clamp_discount(&raw);
        match value {
            DiscountValue::Exact(_) => {}
            DiscountValue::Clamped(v) => {
                report.clamped += 1;
                debug!(%code, raw = %raw, clamped = v, "discount out of range, clamped");
            }
            DiscountValue::Coerced => {
                report.coerced += 1;
                debug!(%code, raw = %raw, "discount is not an integer, using 0");
            }
        }

        if table.insert(code, value.value()) {
            report.duplicates += 1;
        }
    }

    if table.is_empty() {
        return (table, Err(LoadError::NoCodesFound));
    }

    report.codes = table.len();
    info!(
        rows = report.rows,
        codes = report.codes,
        clamped = report.clamped,
        coerced = report.coerced,
        duplicates = report.duplicates,
        "coupon table loaded"
    );

    (table, Ok(report))
}

fn map_csv_error(err: csv::Error) -> LoadError {
    if err.is_io_error() {
        LoadError::SourceUnavailable(err.to_string())
    } else {
        LoadError::MalformedSource(err.to_string())
    }
}
