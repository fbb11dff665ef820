//! Typed rows of the `Credenciales` worksheet.

use serde::Serialize;

/// One user record. `role` keeps the raw `Tipo usuario` cell so that
/// saving the table never rewrites values it does not understand.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Credential {
    pub email: String,
    pub secret: String,
    pub role: String,
}
