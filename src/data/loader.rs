use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{Point3, PointTable};

/// Fields expected on every non-blank line.
const FIELDS_PER_ROW: usize = 3;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Any of these aborts the load; there is no partial table.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV input")]
    Csv(#[from] csv::Error),

    #[error("line {line}: expected 3 fields, found {found}")]
    FieldCount { line: u64, found: usize },

    #[error("line {line}, column {column}: '{token}' is not a number")]
    Parse {
        line: u64,
        column: usize,
        token: String,
    },

    #[error("line {line}, column {column}: '{token}' is not a finite number")]
    NonFinite {
        line: u64,
        column: usize,
        token: String,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a point table from a headerless `x,y,z` file.
pub fn load_points(path: &Path) -> Result<PointTable, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_table(file, Some(path))
}

/// Parse `x,y,z` rows from any reader.
///
/// Blank lines and lines starting with `#` are skipped and surrounding
/// whitespace is trimmed. Every other line must hold exactly three finite
/// numbers, otherwise the whole input is rejected.
pub fn parse_points<R: Read>(input: R) -> Result<PointTable, LoadError> {
    read_table(input, None)
}

/// Shared reader; `path` names the source in I/O errors hit mid-read.
fn read_table<R: Read>(input: R, path: Option<&Path>) -> Result<PointTable, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(input);

    let mut points = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| csv_error(e, path))?;
        let line = record.position().map_or(0, |p| p.line());

        // Whitespace-only lines come through as a single empty field.
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }
        if record.len() != FIELDS_PER_ROW {
            return Err(LoadError::FieldCount {
                line,
                found: record.len(),
            });
        }

        let mut coords = [0.0; FIELDS_PER_ROW];
        for (i, (slot, token)) in coords.iter_mut().zip(record.iter()).enumerate() {
            *slot = parse_coordinate(token, line, i + 1)?;
        }
        points.push(Point3::new(coords[0], coords[1], coords[2]));
    }

    Ok(PointTable::new(points))
}

fn csv_error(err: csv::Error, path: Option<&Path>) -> LoadError {
    match path {
        Some(path) if err.is_io_error() => {
            let source = match err.into_kind() {
                csv::ErrorKind::Io(source) => source,
                other => std::io::Error::new(std::io::ErrorKind::Other, format!("{other:?}")),
            };
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
        _ => LoadError::Csv(err),
    }
}

fn parse_coordinate(token: &str, line: u64, column: usize) -> Result<f64, LoadError> {
    let value = token.parse::<f64>().map_err(|_| LoadError::Parse {
        line,
        column,
        token: token.to_string(),
    })?;
    if !value.is_finite() {
        return Err(LoadError::NonFinite {
            line,
            column,
            token: token.to_string(),
        });
    }
    Ok(value)
}
