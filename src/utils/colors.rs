/// ANSI color helper utilities for terminal output.
use crate::models::spot_state::SpotState;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";

/// Color code for a spot-day state as shown in list views.
pub fn color_for_state(state: &SpotState) -> &'static str {
    match state {
        SpotState::Pending => YELLOW,
        SpotState::Confirmed => GREEN,
        SpotState::Released => BLUE,
        SpotState::Reassigned => MAGENTA,
        SpotState::Other(_) => GREY,
    }
}

pub fn paint(color: &str, s: &str) -> String {
    format!("{}{}{}", color, s, RESET)
}
