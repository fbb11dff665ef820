//! The assignment state machine.
//!
//! Valid owner transitions: Pending → Confirmed | Released, Confirmed →
//! Released. A released row additionally accepts Reserve from a different
//! identity, which writes `reassigned_to`. Released and Reassigned are
//! absorbing for the owner. Every precondition the interface would
//! normally hide behind an unavailable action is re-checked here as a
//! guard clause, so programmatic misuse cannot corrupt the table.

use crate::core::windows::DateWindows;
use crate::errors::{AppError, AppResult};
use crate::models::assignment::{Assignment, SpotLocator};
use crate::models::identity::Identity;
use crate::models::spot_state::SpotState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpotAction {
    Confirm,
    Release,
    Reserve,
}

impl SpotAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpotAction::Confirm => "confirm",
            SpotAction::Release => "release",
            SpotAction::Reserve => "reserve",
        }
    }
}

/// Apply one transition to the row addressed by `locator`, mutating it in
/// place. The caller persists the full table pair afterwards.
pub fn apply_transition<'a>(
    rows: &'a mut [Assignment],
    locator: &SpotLocator,
    action: SpotAction,
    actor: &Identity,
    windows: &DateWindows,
) -> AppResult<&'a Assignment> {
    let row = rows
        .iter_mut()
        .find(|r| locator.matches(r))
        .ok_or_else(|| {
            AppError::RowNotFound(format!("spot {} on {}", locator.label(), locator.date))
        })?;

    if locator.date < windows.today {
        return Err(AppError::TransitionNotAllowed(
            "the date has already passed".to_string(),
        ));
    }

    let is_owner = row.owner_email == actor.email;

    match (&row.state, action) {
        (SpotState::Pending, SpotAction::Confirm) => {
            require_owner(is_owner, action)?;
            if locator.date > windows.end_of_next_week {
                return Err(AppError::TransitionNotAllowed(format!(
                    "confirmation opens on {}; until then the spot can only be released in advance",
                    windows.end_of_next_week
                )));
            }
            row.state = SpotState::Confirmed;
        }
        (SpotState::Pending, SpotAction::Release) => {
            require_owner(is_owner, action)?;
            row.state = SpotState::Released;
        }
        (SpotState::Confirmed, SpotAction::Release) => {
            require_owner(is_owner, action)?;
            row.state = SpotState::Released;
        }
        (SpotState::Released, SpotAction::Reserve) => {
            if is_owner {
                return Err(AppError::TransitionNotAllowed(
                    "you cannot reserve a spot assigned to you".to_string(),
                ));
            }
            if locator.date > windows.end_of_next_week {
                return Err(AppError::TransitionNotAllowed(
                    "reservations are open only through the end of next week".to_string(),
                ));
            }
            row.state = SpotState::Reassigned;
            row.reassigned_to = actor.email.clone();
        }
        (state, action) => {
            return Err(AppError::TransitionNotAllowed(format!(
                "cannot {} a spot in state '{}'",
                action.as_str(),
                state.to_sheet_str()
            )));
        }
    }

    Ok(row)
}

fn require_owner(is_owner: bool, action: SpotAction) -> AppResult<()> {
    if !is_owner {
        return Err(AppError::TransitionNotAllowed(format!(
            "only the assigned owner can {} this spot",
            action.as_str()
        )));
    }
    Ok(())
}
