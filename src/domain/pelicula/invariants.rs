use chrono::{Datelike, Utc};

use super::entity::Pelicula;
use crate::domain::{DomainError, DomainResult};

/// Oldest release year the catalog accepts
pub const MIN_ANIO: i32 = 1900;

/// Validates all Pelicula invariants
pub fn validate_pelicula(pelicula: &Pelicula) -> DomainResult<()> {
    if pelicula.titulo.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "titulo cannot be empty".to_string(),
        ));
    }
    if pelicula.genero.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "genero cannot be empty".to_string(),
        ));
    }

    let max = Utc::now().year();
    if pelicula.anio < MIN_ANIO || pelicula.anio > max {
        return Err(DomainError::YearOutOfRange {
            year: pelicula.anio,
            min: MIN_ANIO,
            max,
        });
    }

    Ok(())
}

/// Invariants that must hold for the Pelicula domain:
///
/// 1. titulo and genero are never blank
/// 2. anio lies in MIN_ANIO..=current year at creation time
/// 3. Identity is immutable once assigned
/// 4. A pelicula can exist without copies
