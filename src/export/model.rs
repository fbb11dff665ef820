//! Flat export row shared by every output format. Field names mirror the
//! workbook columns so a JSON export reads like the sheet itself.

use crate::models::assignment::Assignment;
use crate::store::schema::ASSIGNMENT_COLUMNS;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct AssignmentExport {
    #[serde(rename = "Fecha")]
    pub date: String,
    #[serde(rename = "Numero cochera")]
    pub spot_number: String,
    #[serde(rename = "Letra cochera")]
    pub spot_letter: String,
    #[serde(rename = "Correo")]
    pub owner_email: String,
    #[serde(rename = "Nombre y apellido")]
    pub owner_name: String,
    #[serde(rename = "Estado")]
    pub state: String,
    #[serde(rename = "Persona reasignada")]
    pub reassigned_to: String,
    #[serde(rename = "Dia de uso")]
    pub usage_day: String,
}

impl From<&Assignment> for AssignmentExport {
    fn from(a: &Assignment) -> Self {
        AssignmentExport {
            date: a
                .date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            spot_number: a.spot_number.clone(),
            spot_letter: a.spot_letter.clone(),
            owner_email: a.owner_email.clone(),
            owner_name: a.owner_name.clone(),
            state: a.state.to_sheet_str().to_string(),
            reassigned_to: a.reassigned_to.clone(),
            usage_day: a.usage_day.clone(),
        }
    }
}

pub(crate) fn get_headers() -> [&'static str; 8] {
    ASSIGNMENT_COLUMNS
}

pub(crate) fn export_to_row(e: &AssignmentExport) -> Vec<String> {
    vec![
        e.date.clone(),
        e.spot_number.clone(),
        e.spot_letter.clone(),
        e.owner_email.clone(),
        e.owner_name.clone(),
        e.state.clone(),
        e.reassigned_to.clone(),
        e.usage_day.clone(),
    ]
}
