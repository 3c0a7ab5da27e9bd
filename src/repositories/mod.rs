// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - NO cross-repository calls
// - One unit of work per call, never shared across calls
//
// The CRUD contract is implemented once (`SqliteRepository`); entities
// plug in through an `EntityMapper` and extend the contract with their
// own query methods.

pub mod copia_repository;
pub mod pelicula_repository;
pub mod repository;
pub mod sqlite;
pub mod user_repository;

pub use copia_repository::{CopiaMapper, CopiaRepository, SqliteCopiaRepository};
pub use pelicula_repository::{PeliculaMapper, PeliculaRepository, SqlitePeliculaRepository};
pub use repository::Repository;
pub use sqlite::{EntityMapper, SqliteRepository};
pub use user_repository::{SqliteUserRepository, UserMapper, UserRepository};
