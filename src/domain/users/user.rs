use serde::Serialize;

/// Identities seeded by the platform. They can never be deleted.
pub const PROTECTED_SSOS: [&str; 2] = ["ADMIN", "FXX_USER"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub sso: String,
    pub role: String,
    pub agree: bool,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    #[error("Pre-defined users cannot be deleted.")]
    ProtectedUser { sso: String },
}

pub fn is_protected(sso: &str) -> bool {
    PROTECTED_SSOS.contains(&sso)
}

pub fn ensure_deletable(sso: &str) -> Result<(), UserError> {
    if is_protected(sso) {
        return Err(UserError::ProtectedUser {
            sso: sso.to_string(),
        });
    }
    Ok(())
}
