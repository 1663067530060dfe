//! Data module - table loading and year range selection

mod loader;
mod series;

pub use loader::{
    extract_series, load_data, load_series, parse_cell, Cell, CellError, DataFormatError,
    FileTableReader, Table, TableReader,
};
pub use series::{select_range, RangeError, YearRange, YearSelection, YearSeries};
