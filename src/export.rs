//! CSV export of a filtered catalog view.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use thiserror::Error;
use tracing::info;

use crate::catalog::record::DERIVED_COLUMNS;
use crate::catalog::ProductRecord;

/// File name offered for the filtered table.
pub const DEFAULT_EXPORT_FILE: &str = "dados_amazon_filtrados.csv";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write export {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode export csv: {0}")]
    Csv(#[from] csv::Error),
}

/// Header of an export: input columns in file order, then the derived ones.
/// Derived names already present in the input are not repeated.
pub fn export_header(columns: &[String]) -> Vec<String> {
    let mut header = columns.to_vec();
    for derived in DERIVED_COLUMNS {
        if !header.iter().any(|c| c == derived) {
            header.push(derived.to_string());
        }
    }
    header
}

/// Write `records` as UTF-8 CSV with a header row. Returns the row count.
pub fn write_csv<W: Write>(
    columns: &[String],
    records: &[&ProductRecord],
    writer: W,
) -> Result<usize, ExportError> {
    let header = export_header(columns);
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(&header)?;
    for record in records {
        wtr.write_record(header.iter().map(|column| record.column_value(column).into_owned()))?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(records.len())
}

/// Write the export to `path`, replacing any existing file.
pub fn export_to_path(
    columns: &[String],
    records: &[&ProductRecord],
    path: impl AsRef<Path>,
) -> Result<usize, ExportError> {
    let path = path.as_ref();
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    let rows = write_csv(columns, records, BufWriter::new(file))?;
    info!(path = %path.display(), rows, "exported filtered catalog");
    Ok(rows)
}
