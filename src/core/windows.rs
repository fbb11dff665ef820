//! Rolling date windows that gate transitions and default visibility.
//! Weeks start on Monday.

use chrono::{Datelike, Duration, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindows {
    pub today: NaiveDate,
    pub start_of_current_week: NaiveDate,
    pub end_of_current_week: NaiveDate,
    pub end_of_next_week: NaiveDate,
}

impl DateWindows {
    pub fn for_today(today: NaiveDate) -> Self {
        let offset = today.weekday().num_days_from_monday() as i64;
        let start_of_current_week = today - Duration::days(offset);
        let end_of_current_week = start_of_current_week + Duration::days(6);
        let end_of_next_week = end_of_current_week + Duration::days(7);

        Self {
            today,
            start_of_current_week,
            end_of_current_week,
            end_of_next_week,
        }
    }

    /// `today ≤ date ≤ end_of_next_week`, the bound on reservations and
    /// on the default assignments view.
    pub fn within_horizon(&self, date: NaiveDate) -> bool {
        date >= self.today && date <= self.end_of_next_week
    }
}
