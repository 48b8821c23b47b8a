//! Interactive dashboard command.

use anyhow::Result;
use classboard_core::config::Config;

use crate::logging;

pub fn run(config: &Config) -> Result<()> {
    // No log file for a run that cannot start
    classboard_tui::ensure_terminal()?;
    let _guard = logging::init(&config.log)?;
    classboard_tui::run_dashboard(config)
}
