//! The three date-filtered views, computed fresh from the full table on
//! every render. All views are sorted ascending by date.

use crate::core::windows::DateWindows;
use crate::models::assignment::Assignment;

/// Rows owned by `email` from today on. The default bounds the horizon to
/// the end of next week; `expand` lifts that bound.
pub fn my_assignments(
    rows: &[Assignment],
    email: &str,
    expand: bool,
    windows: &DateWindows,
) -> Vec<Assignment> {
    let mut out: Vec<Assignment> = rows
        .iter()
        .filter(|r| r.owner_email == email)
        .filter(|r| match r.date {
            Some(d) => d >= windows.today && (expand || d <= windows.end_of_next_week),
            None => false,
        })
        .cloned()
        .collect();
    out.sort_by_key(|r| r.date);
    out
}

/// Future rows owned by `email` hidden by the default horizon; tells the
/// caller whether offering the expand toggle makes sense.
pub fn hidden_future_count(rows: &[Assignment], email: &str, windows: &DateWindows) -> usize {
    rows.iter()
        .filter(|r| r.owner_email == email)
        .filter(|r| matches!(r.date, Some(d) if d > windows.end_of_next_week))
        .count()
}

/// Released rows inside the two-week horizon. This view never expands,
/// whatever the session toggle says.
pub fn available_spots(rows: &[Assignment], windows: &DateWindows) -> Vec<Assignment> {
    let mut out: Vec<Assignment> = rows
        .iter()
        .filter(|r| r.state.is_released())
        .filter(|r| matches!(r.date, Some(d) if windows.within_horizon(d)))
        .cloned()
        .collect();
    out.sort_by_key(|r| r.date);
    out
}

/// Rows someone else released and `email` reserved, from today on.
pub fn my_reservations(
    rows: &[Assignment],
    email: &str,
    windows: &DateWindows,
) -> Vec<Assignment> {
    let mut out: Vec<Assignment> = rows
        .iter()
        .filter(|r| r.reassigned_to == email)
        .filter(|r| matches!(r.date, Some(d) if d >= windows.today))
        .cloned()
        .collect();
    out.sort_by_key(|r| r.date);
    out
}
