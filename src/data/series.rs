//! Year Series Module
//! Year-indexed value series and year range selection.

use std::ops::Range;
use thiserror::Error;

use crate::config::YearBounds;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    #[error("error: year out of range")]
    OutOfBounds {
        requested: YearRange,
        bounds: YearBounds,
    },
    #[error("error: start year is after end year")]
    Reversed { requested: YearRange },
}

/// Inclusive span of years requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

impl YearRange {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Years in ascending order, both ends included.
    pub fn years(&self) -> impl Iterator<Item = i32> {
        self.start..=self.end
    }

    pub fn len(&self) -> usize {
        if self.end < self.start {
            0
        } else {
            (self.end - self.start) as usize + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Values for consecutive years, starting at `first_year`.
#[derive(Debug, Clone, PartialEq)]
pub struct YearSeries {
    pub label: String,
    first_year: i32,
    data: Vec<f64>,
}

impl YearSeries {
    pub fn new(label: impl Into<String>, first_year: i32, data: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            first_year,
            data,
        }
    }

    pub fn first_year(&self) -> i32 {
        self.first_year
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Value recorded for `year`, if the series covers it.
    pub fn value_at(&self, year: i32) -> Option<f64> {
        let index = usize::try_from(year - self.first_year).ok()?;
        self.data.get(index).copied()
    }

    /// Values for the given index slice (see [`select_range`]), or `None`
    /// when the series is too short to cover it.
    pub fn slice(&self, indices: Range<usize>) -> Option<&[f64]> {
        self.data.get(indices)
    }
}

/// A validated year range together with its index slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearSelection {
    range: YearRange,
    first_year: i32,
    indices: Range<usize>,
}

impl YearSelection {
    pub fn new(bounds: YearBounds, range: YearRange) -> Result<Self, RangeError> {
        let indices = select_range(bounds, range)?;
        Ok(Self {
            range,
            first_year: bounds.min_year,
            indices,
        })
    }

    pub fn range(&self) -> YearRange {
        self.range
    }

    /// Year at index 0 of every series this selection applies to.
    pub fn first_year(&self) -> i32 {
        self.first_year
    }

    pub fn indices(&self) -> Range<usize> {
        self.indices.clone()
    }
}

/// Validate `requested` against `bounds` and return the zero-based index
/// slice covering it, end year included.
pub fn select_range(bounds: YearBounds, requested: YearRange) -> Result<Range<usize>, RangeError> {
    if requested.start < bounds.min_year || requested.end > bounds.max_year {
        return Err(RangeError::OutOfBounds { requested, bounds });
    }
    if requested.start > requested.end {
        return Err(RangeError::Reversed { requested });
    }

    let start = (requested.start - bounds.min_year) as usize;
    let end = (requested.end - bounds.min_year) as usize + 1;
    Ok(start..end)
}
