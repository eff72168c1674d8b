use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, warn};

use crate::income::{parse_records, ColumnLayout, IncomeError, Transaction};

/// Reads every row of a headerless export as raw fields. Record lengths are not
/// checked here so arity errors come back from the record parser with their row.
pub fn read_rows(path: &Path) -> Result<Vec<csv::StringRecord>> {
    let file = File::open(path).with_context(|| format!("could not open {}", path.display()))?;
    debug!("opened {}", path.display());

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let rows = csv_reader
        .records()
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("failed to read {}", path.display()))?;

    Ok(rows)
}

/// Parses `rows` with `layout`. With `skip_invalid` malformed rows and bad amounts are
/// logged and dropped, otherwise the first one aborts.
pub fn load_transactions(
    rows: &[csv::StringRecord],
    layout: &ColumnLayout,
    skip_invalid: bool,
) -> Result<Vec<Transaction>, IncomeError> {
    let mut transactions = Vec::with_capacity(rows.len());

    for parsed in parse_records(rows, layout) {
        match parsed {
            Ok(transaction) => transactions.push(transaction),
            Err(err) if skip_invalid => warn!("skipping row, err={}", err),
            Err(err) => return Err(err),
        }
    }

    Ok(transactions)
}
