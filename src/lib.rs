// src/lib.rs
// Filmoteca - local-first movie copy collection manager
//
// Architecture:
// - Domain-centric: entities and invariants live in domains
// - Explicit: no implicit behavior, no magic
// - Local-first: one embedded SQLite file, user controls all data
// - One unit of work per repository call, never shared across calls
// - GUI-free: an external shell renders forms and calls the services

// ============================================================================
// MODULES
// ============================================================================

pub mod application;
pub mod db;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_copia,
    validate_pelicula,
    validate_user,
    // Copia
    Copia,
    DomainError,
    DomainResult,
    EstadoCopia,
    // Pelicula
    Pelicula,
    Soporte,
    // User
    User,
    MIN_ANIO,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{
    create_connection_pool, create_connection_pool_at, get_connection, get_database_path,
    initialize_database, seed_if_empty, verify_database_integrity, ConnectionPool, DatabaseStats,
};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    CopiaRepository,
    EntityMapper,
    PeliculaRepository,
    Repository,
    SqliteCopiaRepository,
    SqlitePeliculaRepository,
    SqliteRepository,
    SqliteUserRepository,
    UserRepository,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    filter_by_title_prefix,
    // Auth
    AuthService,
    // Copias
    CopiaService,
    CreatePeliculaRequest,
    OwnedCopy,
    // Peliculas
    PeliculaService,
    // Session
    Session,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;
