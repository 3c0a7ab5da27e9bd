// src/services/mod.rs
//
// Services Module - Orchestration Layer
//
// The operations an embedding GUI calls in response to discrete user
// actions (login, save, delete, search-text-changed). Validation lives
// here and in the domain, never in the repositories.

pub mod auth_service;
pub mod copia_service;
pub mod pelicula_service;
pub mod session;

// Re-export all services and their types
pub use auth_service::AuthService;

pub use copia_service::{filter_by_title_prefix, CopiaService, OwnedCopy};

pub use pelicula_service::{CreatePeliculaRequest, PeliculaService};

pub use session::Session;
