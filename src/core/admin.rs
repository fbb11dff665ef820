//! Admin bulk-edit operations: whole-table replace and mass
//! reassignment. Both validate before touching anything; a rejected
//! request leaves the stored workbook untouched.

use crate::errors::{AppError, AppResult};
use crate::models::assignment::Assignment;
use crate::store::schema::validate_assignment_columns;
use crate::store::workbook;
use std::path::Path;

/// Read and validate a candidate replacement for the assignments table.
/// The candidate's first worksheet must carry exactly the canonical
/// column list; otherwise the mismatch is returned and nothing changes.
pub fn load_replacement(path: &Path) -> AppResult<Vec<Assignment>> {
    let (headers, rows) = workbook::read_candidate(path)?;
    validate_assignment_columns(&headers)?;
    Ok(rows)
}

/// Expected-vs-found report for a rejected replacement, in the shape the
/// admin pastes back to whoever produced the file.
pub fn mismatch_report(expected: &[String], found: &[String]) -> String {
    let report = serde_json::json!({
        "expected": expected,
        "found": found,
    });
    serde_json::to_string_pretty(&report).unwrap_or_else(|_| report.to_string())
}

/// All four reassignment inputs are required; reject before any mutation.
pub fn validate_reassign_inputs(from: &str, to_email: &str, to_name: &str) -> AppResult<()> {
    if from.trim().is_empty() || to_email.trim().is_empty() || to_name.trim().is_empty() {
        return Err(AppError::Validation(
            "source user, destination email and destination name are all required".to_string(),
        ));
    }
    Ok(())
}

/// Move every row owned by `from` to the destination identity, regardless
/// of state or date. Returns the number of rows rewritten; zero is a
/// no-op the caller reports as a warning.
pub fn reassign_all(rows: &mut [Assignment], from: &str, to_email: &str, to_name: &str) -> usize {
    let mut count = 0;
    for row in rows.iter_mut() {
        if row.owner_email == from {
            row.owner_email = to_email.to_string();
            row.owner_name = to_name.to_string();
            count += 1;
        }
    }
    count
}
