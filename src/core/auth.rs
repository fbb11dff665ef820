//! Credential check and identity resolution.

use crate::errors::{AppError, AppResult};
use crate::models::assignment::Assignment;
use crate::models::credential::Credential;
use crate::models::identity::{Identity, Role};

/// Validate an identifier/secret pair against the credentials table.
///
/// The identifier matches case-insensitively; the secret must match as an
/// exact string (values that look numeric included). The resulting
/// identity carries the canonical email casing from the record and a
/// display name resolved from the first assignment row owned by that
/// email, falling back to the email itself. Both failure causes collapse
/// into the same generic error so identifiers cannot be enumerated.
pub fn authenticate(
    users: &[Credential],
    assignments: &[Assignment],
    identifier: &str,
    secret: &str,
) -> AppResult<Identity> {
    let wanted = identifier.trim().to_lowercase();

    let user = users
        .iter()
        .find(|u| u.email.to_lowercase() == wanted && u.secret == secret)
        .ok_or(AppError::AuthFailure)?;

    let display_name = assignments
        .iter()
        .find(|a| a.owner_email == user.email)
        .map(|a| a.owner_name.clone())
        .unwrap_or_else(|| user.email.clone());

    Ok(Identity {
        email: user.email.clone(),
        role: Role::from_sheet_str(&user.role),
        display_name,
    })
}
