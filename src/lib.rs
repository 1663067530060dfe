//! Phillips Curve Viewer
//!
//! Loads yearly unemployment and inflation rates from two spreadsheet tables
//! and plots one against the other for a chosen span of years, each point
//! annotated with its year.

pub mod charts;
pub mod config;
pub mod data;
pub mod gui;
pub mod prompt;

use anyhow::{Context, Result};

use charts::{ChartSurface, CurveRenderer};
use config::AppConfig;
use data::{TableReader, YearRange, YearSelection};

/// How a run ended, short of a hard error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Displayed,
    /// The requested range was rejected; nothing was loaded or drawn.
    Rejected,
}

/// Validate `range`, load both series and hand the curve to `surface`.
///
/// A rejected range is reported on `notice` and is not an error.
pub fn run(
    config: &AppConfig,
    reader: &dyn TableReader,
    surface: &mut dyn ChartSurface,
    range: YearRange,
    notice: &mut dyn std::io::Write,
) -> Result<Outcome> {
    let selection = match YearSelection::new(config.years, range) {
        Ok(selection) => selection,
        Err(err) => {
            log::debug!("Rejected range {}..={}: {err:?}", range.start, range.end);
            writeln!(notice, "{err}")?;
            return Ok(Outcome::Rejected);
        }
    };

    let (unemployment, inflation) =
        data::load_data(reader, config).context("Loading rate tables")?;

    CurveRenderer::render(surface, &unemployment, &inflation, &selection)
        .context("Rendering Phillips curve")?;
    Ok(Outcome::Displayed)
}
