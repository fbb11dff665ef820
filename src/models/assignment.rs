//! Typed rows of the `Cocheras` worksheet.
//! These are thin wrappers around spreadsheet rows.

use crate::errors::{AppError, AppResult};
use crate::models::spot_state::SpotState;
use chrono::NaiveDate;
use serde::Serialize;

/// One parking spot's allocation for one calendar date.
///
/// `date` is `None` when the source cell could not be parsed as a date;
/// such rows are invisible to every view and never actionable, but they
/// survive a load/save round-trip (written back as an empty cell).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Assignment {
    pub date: Option<NaiveDate>,
    pub spot_number: String,
    pub spot_letter: String,
    pub owner_email: String,
    pub owner_name: String,
    pub state: SpotState,
    pub reassigned_to: String,
    pub usage_day: String,
}

impl Assignment {
    /// Physical spot label, e.g. `12A`.
    pub fn spot_label(&self) -> String {
        format!("{}{}", self.spot_number, self.spot_letter)
    }

    /// Owner display name, falling back to the email when empty.
    pub fn owner_display(&self) -> &str {
        if self.owner_name.trim().is_empty() {
            &self.owner_email
        } else {
            &self.owner_name
        }
    }
}

/// Locates one row by its occurrence date and physical spot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotLocator {
    pub date: NaiveDate,
    pub number: String,
    pub letter: String,
}

impl SpotLocator {
    /// Parse a spot label of the form `<digits><letters>`, e.g. `12A`
    /// or plain `7` for spots without a letter.
    pub fn parse(date: NaiveDate, spot: &str) -> AppResult<Self> {
        let spot = spot.trim();
        let split = spot
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(spot.len());
        let (number, letter) = spot.split_at(split);

        if number.is_empty() || !letter.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(AppError::InvalidSpot(spot.to_string()));
        }

        Ok(Self {
            date,
            number: number.to_string(),
            letter: letter.to_string(),
        })
    }

    pub fn label(&self) -> String {
        format!("{}{}", self.number, self.letter)
    }

    /// Whether this locator points at the given row.
    pub fn matches(&self, row: &Assignment) -> bool {
        row.date == Some(self.date)
            && row.spot_number == self.number
            && row.spot_letter.eq_ignore_ascii_case(&self.letter)
    }
}
