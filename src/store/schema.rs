//! Canonical worksheet and column names of the backing workbook.
//! The Spanish names are the data's external interface and must not be
//! localized.

use crate::errors::{AppError, AppResult};

pub const SHEET_ASSIGNMENTS: &str = "Cocheras";
pub const SHEET_USERS: &str = "Credenciales";

pub const COL_DATE: &str = "Fecha";
pub const COL_SPOT_NUMBER: &str = "Numero cochera";
pub const COL_SPOT_LETTER: &str = "Letra cochera";
pub const COL_OWNER_EMAIL: &str = "Correo";
pub const COL_OWNER_NAME: &str = "Nombre y apellido";
pub const COL_STATE: &str = "Estado";
pub const COL_REASSIGNED_TO: &str = "Persona reasignada";
pub const COL_USAGE_DAY: &str = "Dia de uso";

pub const ASSIGNMENT_COLUMNS: [&str; 8] = [
    COL_DATE,
    COL_SPOT_NUMBER,
    COL_SPOT_LETTER,
    COL_OWNER_EMAIL,
    COL_OWNER_NAME,
    COL_STATE,
    COL_REASSIGNED_TO,
    COL_USAGE_DAY,
];

pub const COL_USER_EMAIL: &str = "Correo";
pub const COL_USER_SECRET: &str = "Contraseña";
pub const COL_USER_ROLE: &str = "Tipo usuario";

pub const CREDENTIAL_COLUMNS: [&str; 3] = [COL_USER_EMAIL, COL_USER_SECRET, COL_USER_ROLE];

/// Exact, order-sensitive header comparison for uploaded replacement
/// tables. A mismatch carries both lists so the caller can report them.
pub fn validate_assignment_columns(found: &[String]) -> AppResult<()> {
    let expected: Vec<String> = ASSIGNMENT_COLUMNS.iter().map(|c| c.to_string()).collect();
    if found != expected.as_slice() {
        return Err(AppError::SchemaMismatch {
            expected,
            found: found.to_vec(),
        });
    }
    Ok(())
}
