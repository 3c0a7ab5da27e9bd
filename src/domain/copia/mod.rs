pub mod entity;
pub mod invariants;

pub use entity::{Copia, EstadoCopia, Soporte};
pub use invariants::validate_copia;
