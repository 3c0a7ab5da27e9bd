use super::entity::Copia;
use crate::domain::{DomainError, DomainResult};

/// Validates all Copia invariants
///
/// The fixed-pelicula rule for persisted copies needs the stored row
/// and is checked by `CopiaService::save_copia`, not here.
pub fn validate_copia(copia: &Copia) -> DomainResult<()> {
    if copia.pelicula_id < 1 {
        return Err(DomainError::InvariantViolation(
            "copia must reference a persisted pelicula".to_string(),
        ));
    }
    if copia.usuario_id < 1 {
        return Err(DomainError::InvariantViolation(
            "copia must reference a persisted usuario".to_string(),
        ));
    }
    Ok(())
}

/// Invariants that must hold for the Copia domain:
///
/// 1. A copia always belongs to exactly one usuario
/// 2. A copia always references exactly one pelicula
/// 3. Once persisted, pelicula_id never changes
/// 4. estado and soporte always carry one of the catalog labels
