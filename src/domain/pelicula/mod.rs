pub mod entity;
pub mod invariants;

pub use entity::Pelicula;
pub use invariants::{validate_pelicula, MIN_ANIO};
