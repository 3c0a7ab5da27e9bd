use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// A physical copy (DVD / Blu-ray / VHS) of a pelicula owned by a user.
///
/// Both references are plain foreign keys; reverse lookups go through
/// the repository (`find_by_owner`, `find_by_movie`). Once persisted,
/// `pelicula_id` is fixed: the copy form disables re-selection and the
/// service rejects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Copia {
    /// Row identity; `None` until the copia is persisted
    pub id: Option<i64>,

    pub pelicula_id: i64,

    pub usuario_id: i64,

    pub estado: EstadoCopia,

    pub soporte: Soporte,
}

/// Physical condition of a copy, labelled as shown in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EstadoCopia {
    Nueva,
    Buena,
    Usada,
    Deteriorada,
}

/// Physical medium of a copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Soporte {
    #[serde(rename = "DVD")]
    Dvd,
    #[serde(rename = "Blu-ray")]
    BluRay,
    #[serde(rename = "VHS")]
    Vhs,
}

impl Copia {
    pub fn new(pelicula_id: i64, usuario_id: i64, estado: EstadoCopia, soporte: Soporte) -> Self {
        Self {
            id: None,
            pelicula_id,
            usuario_id,
            estado,
            soporte,
        }
    }
}

impl std::fmt::Display for EstadoCopia {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EstadoCopia::Nueva => write!(f, "Nueva"),
            EstadoCopia::Buena => write!(f, "Buena"),
            EstadoCopia::Usada => write!(f, "Usada"),
            EstadoCopia::Deteriorada => write!(f, "Deteriorada"),
        }
    }
}

impl FromStr for EstadoCopia {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Nueva" => Ok(EstadoCopia::Nueva),
            "Buena" => Ok(EstadoCopia::Buena),
            "Usada" => Ok(EstadoCopia::Usada),
            "Deteriorada" => Ok(EstadoCopia::Deteriorada),
            _ => Err(DomainError::InvariantViolation(format!(
                "unknown estado: {s}"
            ))),
        }
    }
}

impl std::fmt::Display for Soporte {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Soporte::Dvd => write!(f, "DVD"),
            Soporte::BluRay => write!(f, "Blu-ray"),
            Soporte::Vhs => write!(f, "VHS"),
        }
    }
}

impl FromStr for Soporte {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DVD" => Ok(Soporte::Dvd),
            "Blu-ray" => Ok(Soporte::BluRay),
            "VHS" => Ok(Soporte::Vhs),
            _ => Err(DomainError::InvariantViolation(format!(
                "unknown soporte: {s}"
            ))),
        }
    }
}
