// src/application/state.rs

use std::sync::{Arc, Mutex};

use crate::db::ConnectionPool;
use crate::repositories::{
    CopiaRepository, PeliculaRepository, SqliteCopiaRepository, SqlitePeliculaRepository,
    SqliteUserRepository, UserRepository,
};
use crate::services::{AuthService, CopiaService, PeliculaService, Session};

/// Application state held by the embedding GUI shell.
/// Services are Arc-wrapped for thread-safe sharing across UI callbacks.
/// The session is an owned value behind a lock, not a process-wide
/// static: callers thread it through explicitly.
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub pelicula_service: Arc<PeliculaService>,
    pub copia_service: Arc<CopiaService>,
    pub session: Mutex<Session>,
}

impl AppState {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        let users: Arc<dyn UserRepository> = Arc::new(SqliteUserRepository::new(pool.clone()));
        let peliculas: Arc<dyn PeliculaRepository> =
            Arc::new(SqlitePeliculaRepository::new(pool.clone()));
        let copias: Arc<dyn CopiaRepository> = Arc::new(SqliteCopiaRepository::new(pool));

        Self {
            auth_service: Arc::new(AuthService::new(users)),
            pelicula_service: Arc::new(PeliculaService::new(peliculas.clone())),
            copia_service: Arc::new(CopiaService::new(copias, peliculas)),
            session: Mutex::new(Session::new()),
        }
    }
}
