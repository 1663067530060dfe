//! Spreadsheet Loader Module
//! Reads the rate tables and extracts one labelled row as a year series.

use calamine::{open_workbook_auto, Data, Reader};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::{AppConfig, SeriesSource, YearBounds};
use crate::data::series::YearSeries;

/// Why a single cell could not become a number.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CellError {
    #[error("cell is empty")]
    Empty,
    #[error("'{0}' is not a number")]
    NotNumeric(String),
    #[error("'{0}' is not a finite number")]
    NotFinite(String),
}

#[derive(Error, Debug)]
pub enum DataFormatError {
    #[error("Failed to read spreadsheet {}: {source}", path.display())]
    Spreadsheet {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },
    #[error("Failed to read CSV {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },
    #[error("Unsupported table format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("Table {} has no worksheet", .0.display())]
    EmptyTable(PathBuf),
    #[error("Row '{label}' not found in {}", path.display())]
    MissingRow { label: String, path: PathBuf },
    #[error("Row '{label}', year {year}: {source}")]
    InvalidCell {
        label: String,
        year: i32,
        #[source]
        source: CellError,
    },
    #[error("Row '{label}' has {found} values, expected {expected}")]
    LengthMismatch {
        label: String,
        expected: usize,
        found: usize,
    },
}

/// A single spreadsheet cell as read from disk, before numeric coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
    Empty,
}

impl Cell {
    fn label(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s.trim()),
            _ => None,
        }
    }
}

impl From<&Data> for Cell {
    fn from(value: &Data) -> Self {
        match value {
            Data::Float(f) => Cell::Number(*f),
            Data::Int(i) => Cell::Number(*i as f64),
            Data::String(s) => Cell::Text(s.clone()),
            Data::Empty => Cell::Empty,
            other => Cell::Text(other.to_string()),
        }
    }
}

/// Rows of cells, in sheet order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Find the row whose first cell matches `label` exactly (ignoring
    /// surrounding whitespace) and return the cells after it.
    pub fn find_row(&self, label: &str) -> Option<&[Cell]> {
        self.rows.iter().find_map(|row| {
            let (head, rest) = row.split_first()?;
            (head.label() == Some(label)).then_some(rest)
        })
    }
}

/// Capability for reading a tabular file into memory.
pub trait TableReader {
    fn read_table(&self, path: &Path) -> Result<Table, DataFormatError>;
}

/// Reads spreadsheets with calamine and CSV files with Polars.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileTableReader;

impl FileTableReader {
    pub fn new() -> Self {
        Self
    }

    fn read_workbook(path: &Path) -> Result<Table, DataFormatError> {
        let spreadsheet_err = |source: calamine::Error| DataFormatError::Spreadsheet {
            path: path.to_path_buf(),
            source,
        };

        let mut workbook = open_workbook_auto(path).map_err(spreadsheet_err)?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| DataFormatError::EmptyTable(path.to_path_buf()))?
            .map_err(spreadsheet_err)?;

        let rows = range
            .rows()
            .map(|row| row.iter().map(Cell::from).collect())
            .collect();
        Ok(Table::new(rows))
    }

    fn read_csv(path: &Path) -> Result<Table, DataFormatError> {
        let csv_err = |source: PolarsError| DataFormatError::Csv {
            path: path.to_path_buf(),
            source,
        };

        // Schema inference is off so every column stays text; numbers are
        // parsed cell by cell later.
        let df = LazyCsvReader::new(path)
            .with_has_header(false)
            .with_infer_schema_length(Some(0))
            .finish()
            .and_then(|lazy| lazy.collect())
            .map_err(csv_err)?;

        let columns = df.get_columns();
        let rows = (0..df.height())
            .map(|i| {
                columns
                    .iter()
                    .map(|col| match col.get(i) {
                        Ok(AnyValue::String(s)) if s.trim().is_empty() => Cell::Empty,
                        Ok(AnyValue::String(s)) => Cell::Text(s.to_string()),
                        Ok(AnyValue::Null) | Err(_) => Cell::Empty,
                        Ok(other) => Cell::Text(other.to_string().trim_matches('"').to_string()),
                    })
                    .collect()
            })
            .collect();
        Ok(Table::new(rows))
    }
}

impl TableReader for FileTableReader {
    fn read_table(&self, path: &Path) -> Result<Table, DataFormatError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match ext.as_str() {
            "xls" | "xlsx" | "xlsm" | "xlsb" | "ods" => Self::read_workbook(path),
            "csv" => Self::read_csv(path),
            _ => Err(DataFormatError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Convert one cell to a number. Text cells are trimmed and parsed.
pub fn parse_cell(cell: &Cell) -> Result<f64, CellError> {
    match cell {
        Cell::Number(v) if v.is_finite() => Ok(*v),
        Cell::Number(v) => Err(CellError::NotFinite(v.to_string())),
        Cell::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Err(CellError::Empty);
            }
            let value = trimmed
                .parse::<f64>()
                .map_err(|_| CellError::NotNumeric(trimmed.to_string()))?;
            if !value.is_finite() {
                return Err(CellError::NotFinite(trimmed.to_string()));
            }
            Ok(value)
        }
        Cell::Empty => Err(CellError::Empty),
    }
}

/// Extract the labelled row of `table` as a series covering `bounds`.
pub fn extract_series(
    table: &Table,
    source: &SeriesSource,
    bounds: YearBounds,
) -> Result<YearSeries, DataFormatError> {
    let cells = table
        .find_row(&source.row_label)
        .ok_or_else(|| DataFormatError::MissingRow {
            label: source.row_label.clone(),
            path: source.path.clone(),
        })?;

    // Trailing padding from the sheet's used range is not data
    let used = cells
        .iter()
        .rposition(|c| *c != Cell::Empty)
        .map_or(0, |last| last + 1);
    let cells = &cells[..used];

    let expected = bounds.year_count();
    if cells.len() != expected {
        return Err(DataFormatError::LengthMismatch {
            label: source.row_label.clone(),
            expected,
            found: cells.len(),
        });
    }

    let data = cells
        .iter()
        .zip(bounds.min_year..)
        .map(|(cell, year)| {
            parse_cell(cell).map_err(|source_err| DataFormatError::InvalidCell {
                label: source.row_label.clone(),
                year,
                source: source_err,
            })
        })
        .collect::<Result<Vec<f64>, _>>()?;

    log::debug!(
        "Row '{}': {} values for {}..={}",
        source.row_label,
        data.len(),
        bounds.min_year,
        bounds.max_year
    );

    Ok(YearSeries::new(source.axis_label.clone(), bounds.min_year, data))
}

/// Read one configured source into a series.
pub fn load_series(
    reader: &dyn TableReader,
    source: &SeriesSource,
    bounds: YearBounds,
) -> Result<YearSeries, DataFormatError> {
    log::info!("Reading {}", source.path.display());
    let table = reader.read_table(&source.path)?;
    log::debug!("{}: {} rows", source.path.display(), table.rows.len());
    let series = extract_series(&table, source, bounds)?;
    log::info!("Loaded '{}' from {}", series.label, source.path.display());
    Ok(series)
}

/// Load the unemployment and inflation series, in that order.
pub fn load_data(
    reader: &dyn TableReader,
    config: &AppConfig,
) -> Result<(YearSeries, YearSeries), DataFormatError> {
    let unemployment = load_series(reader, &config.unemployment, config.years)?;
    let inflation = load_series(reader, &config.inflation, config.years)?;
    Ok((unemployment, inflation))
}
