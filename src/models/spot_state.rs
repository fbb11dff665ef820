use serde::Serialize;

/// Lifecycle state of a single spot-day row, as stored in the `Estado`
/// column. Cell values outside the four known literals round-trip
/// untouched through `Other` and admit no transitions.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub enum SpotState {
    Pending,
    Confirmed,
    Released,
    Reassigned,
    Other(String),
}

impl SpotState {
    /// Convert sheet string → enum
    pub fn from_sheet_str(s: &str) -> Self {
        match s {
            "Pendiente" => SpotState::Pending,
            "Confirmada" => SpotState::Confirmed,
            "Liberado" => SpotState::Released,
            "Reasignada" => SpotState::Reassigned,
            other => SpotState::Other(other.to_string()),
        }
    }

    /// Convert enum → sheet string
    pub fn to_sheet_str(&self) -> &str {
        match self {
            SpotState::Pending => "Pendiente",
            SpotState::Confirmed => "Confirmada",
            SpotState::Released => "Liberado",
            SpotState::Reassigned => "Reasignada",
            SpotState::Other(raw) => raw,
        }
    }

    pub fn is_released(&self) -> bool {
        matches!(self, SpotState::Released)
    }
}
