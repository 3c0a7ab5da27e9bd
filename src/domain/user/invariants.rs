use super::entity::User;
use crate::domain::{DomainError, DomainResult};

/// Validates all User invariants
pub fn validate_user(user: &User) -> DomainResult<()> {
    if user.nombre_usuario.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "nombre_usuario cannot be empty".to_string(),
        ));
    }
    if user.contrasena.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "contrasena cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Invariants that must hold for the User domain:
///
/// 1. nombre_usuario is unique (enforced by the usuarios table)
/// 2. nombre_usuario and contrasena are never blank
/// 3. Identity is immutable once assigned
/// 4. Users are never mutated by the application after seeding
