// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file declares all domain modules and re-exports their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod copia;
pub mod pelicula;
pub mod user;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use copia::{validate_copia, Copia, EstadoCopia, Soporte};
pub use pelicula::{validate_pelicula, Pelicula, MIN_ANIO};
pub use user::{validate_user, User};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Year {year} outside allowed range {min}..={max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
