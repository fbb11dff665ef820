//! Handlers for the three owner/reserver transitions. They share one
//! flow: resolve session, locate the row, run the state machine, persist
//! both tables.

use crate::cli::commands::{require_session, store_for};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::transition::{SpotAction, apply_transition};
use crate::core::windows::DateWindows;
use crate::errors::{AppError, AppResult};
use crate::models::assignment::SpotLocator;
use crate::ui::messages::success;
use crate::utils::colors::{color_for_state, paint};
use crate::utils::date::{fmt_date, parse_date, today};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let (date_str, spot_str, action) = match &cli.command {
        Commands::Confirm { date, spot } => (date, spot, SpotAction::Confirm),
        Commands::Release { date, spot } => (date, spot, SpotAction::Release),
        Commands::Reserve { date, spot } => (date, spot, SpotAction::Reserve),
        _ => return Ok(()),
    };

    let session = require_session(cli)?;
    let date = parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.clone()))?;
    let locator = SpotLocator::parse(date, spot_str)?;

    let store = store_for(cli, cfg);
    let (mut assignments, users) = store.load_tables()?;
    let windows = DateWindows::for_today(today());
    let identity = session.identity();

    let (label, state) = {
        let row = apply_transition(&mut assignments, &locator, action, &identity, &windows)?;
        (row.spot_label(), row.state.clone())
    };

    // Persist or drop: a failed save surfaces here and the mutation
    // never reaches the workbook.
    store.save(&assignments, &users)?;

    success(format!(
        "Spot {} on {} is now {}",
        label,
        fmt_date(&date, &cfg.date_format),
        paint(color_for_state(&state), state.to_sheet_str()),
    ));

    Ok(())
}
