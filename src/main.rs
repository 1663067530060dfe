//! Phillips Curve Viewer - interactive year range prompt and chart window.

use anyhow::{Context, Result};
use phillips_curve::config::AppConfig;
use phillips_curve::data::FileTableReader;
use phillips_curve::gui::EguiSurface;
use phillips_curve::{prompt, run, Outcome};

fn main() -> Result<()> {
    env_logger::init();

    let config = AppConfig::load().context("Loading configuration")?;

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let range = prompt::ask_range(&mut stdin.lock(), &mut stdout, config.years)?;

    let mut surface = EguiSurface::new(config.window);
    let outcome = run(&config, &FileTableReader::new(), &mut surface, range, &mut stdout)?;
    if outcome == Outcome::Rejected {
        log::info!("No chart drawn");
    }
    Ok(())
}
