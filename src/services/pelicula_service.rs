// src/services/pelicula_service.rs
//
// Registering and listing catalog titles. Creation is the only write
// the application surface offers; peliculas are never edited or
// deleted from a form.

use std::sync::Arc;

use crate::domain::{validate_pelicula, Pelicula};
use crate::error::{AppError, AppResult};
use crate::repositories::PeliculaRepository;

#[derive(Debug, Clone)]
pub struct CreatePeliculaRequest {
    pub titulo: String,
    pub genero: String,
    pub anio: i32,
    pub descripcion: Option<String>,
    pub director: Option<String>,
}

pub struct PeliculaService {
    peliculas: Arc<dyn PeliculaRepository>,
}

impl PeliculaService {
    pub fn new(peliculas: Arc<dyn PeliculaRepository>) -> Self {
        Self { peliculas }
    }

    /// Register a new pelicula. Titulo and genero must be non-blank and
    /// anio within the accepted range; on success the persisted entity
    /// is returned with its id assigned.
    pub fn create_pelicula(&self, request: CreatePeliculaRequest) -> AppResult<Pelicula> {
        let mut pelicula = Pelicula::new(request.titulo, request.genero, request.anio);
        pelicula.descripcion = request.descripcion;
        pelicula.director = request.director;

        validate_pelicula(&pelicula).map_err(AppError::Domain)?;
        let pelicula = self.peliculas.save(pelicula)?;

        log::info!("registered pelicula {}", pelicula);
        Ok(pelicula)
    }

    pub fn get_pelicula(&self, id: i64) -> AppResult<Option<Pelicula>> {
        self.peliculas.find_by_id(id)
    }

    /// All titles, for the copy form's picker.
    pub fn list_peliculas(&self) -> AppResult<Vec<Pelicula>> {
        self.peliculas.find_all()
    }
}
