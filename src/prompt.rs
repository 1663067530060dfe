//! Prompt Module
//! Usage banner and the interactive start/end year prompts.

use std::io::{self, BufRead, Write};
use thiserror::Error;

use crate::config::YearBounds;
use crate::data::YearRange;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error("'{0}' is not a year")]
    NotAYear(String),
    #[error("Input ended before a year was entered")]
    Closed,
}

pub fn banner(bounds: YearBounds) -> String {
    format!(
        "This program shows the Phillips curve. Data is available from {} up to {}.\n",
        bounds.min_year, bounds.max_year
    )
}

/// Print `message`, then read one line and parse it as a year.
pub fn prompt_year<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<i32, InputError> {
    writeln!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(InputError::Closed);
    }
    let trimmed = line.trim();
    trimmed
        .parse::<i32>()
        .map_err(|_| InputError::NotAYear(trimmed.to_string()))
}

/// Show the banner and ask for the start and end year.
pub fn ask_range<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    bounds: YearBounds,
) -> Result<YearRange, InputError> {
    writeln!(output, "{}", banner(bounds))?;
    let start = prompt_year(
        input,
        output,
        &format!("Enter the start year. ex) {}", bounds.min_year),
    )?;
    let end = prompt_year(
        input,
        output,
        &format!("Enter the end year. ex) {}", bounds.max_year),
    )?;
    Ok(YearRange::new(start, end))
}
