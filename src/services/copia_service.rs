// src/services/copia_service.rs
//
// The listing screen and copy form, minus the widgets: list a user's
// copies with their titles, save with validation, delete, and the
// incremental search filter.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::{validate_copia, Copia, DomainError, Pelicula, User};
use crate::error::{AppError, AppResult};
use crate::repositories::{CopiaRepository, PeliculaRepository};

/// One row of the main listing: a copia together with its pelicula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnedCopy {
    pub copia: Copia,
    pub pelicula: Pelicula,
}

pub struct CopiaService {
    copias: Arc<dyn CopiaRepository>,
    peliculas: Arc<dyn PeliculaRepository>,
}

impl CopiaService {
    pub fn new(copias: Arc<dyn CopiaRepository>, peliculas: Arc<dyn PeliculaRepository>) -> Self {
        Self { copias, peliculas }
    }

    /// The user's copies joined with their peliculas, in storage order.
    pub fn list_owned(&self, user: &User) -> AppResult<Vec<OwnedCopy>> {
        let copias = self.copias.find_by_owner(user)?;

        let mut rows = Vec::with_capacity(copias.len());
        for copia in copias {
            let pelicula = self
                .peliculas
                .find_by_id(copia.pelicula_id)?
                .ok_or(AppError::NotFound)?;
            rows.push(OwnedCopy { copia, pelicula });
        }

        Ok(rows)
    }

    /// Persist a new or edited copia.
    ///
    /// An existing copia may change estado and soporte but never its
    /// pelicula; the form disables re-selection and this check backs it
    /// up.
    pub fn save_copia(&self, copia: Copia) -> AppResult<Copia> {
        validate_copia(&copia).map_err(AppError::Domain)?;

        if let Some(id) = copia.id {
            let stored = self.copias.find_by_id(id)?.ok_or(AppError::NotFound)?;
            if stored.pelicula_id != copia.pelicula_id {
                return Err(AppError::Domain(DomainError::InvariantViolation(
                    "a persisted copia cannot be moved to another pelicula".to_string(),
                )));
            }
        }

        self.copias.save(copia)
    }

    /// Remove a copia after the user confirmed the action.
    pub fn delete_copia(&self, copia: Copia) -> AppResult<Option<Copia>> {
        self.copias.delete(copia)
    }
}

/// Incremental search over the loaded listing.
///
/// Keeps the rows whose titulo starts with the typed prefix, comparing
/// case-insensitively on the trimmed input. An empty prefix keeps
/// everything; input order is preserved. Recomputed on every keystroke,
/// so it never touches the database.
pub fn filter_by_title_prefix<'a>(copies: &'a [OwnedCopy], prefix: &str) -> Vec<&'a OwnedCopy> {
    let filtro = prefix.trim().to_lowercase();
    if filtro.is_empty() {
        return copies.iter().collect();
    }

    copies
        .iter()
        .filter(|row| row.pelicula.titulo.to_lowercase().starts_with(&filtro))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::create_test_pool;
    use crate::domain::{EstadoCopia, Soporte};
    use crate::repositories::{
        Repository, SqliteCopiaRepository, SqlitePeliculaRepository, SqliteUserRepository,
    };

    struct Fixture {
        _dir: tempfile::TempDir,
        users: SqliteUserRepository,
        peliculas: Arc<SqlitePeliculaRepository>,
        service: CopiaService,
    }

    fn fixture() -> Fixture {
        let (dir, pool) = create_test_pool();
        let users = SqliteUserRepository::new(pool.clone());
        let peliculas = Arc::new(SqlitePeliculaRepository::new(pool.clone()));
        let copias = Arc::new(SqliteCopiaRepository::new(pool));
        let service = CopiaService::new(copias, peliculas.clone());
        Fixture {
            _dir: dir,
            users,
            peliculas,
            service,
        }
    }

    fn owned_row(titulo: &str, anio: i32) -> OwnedCopy {
        let mut pelicula = Pelicula::new(titulo.to_string(), "Drama".to_string(), anio);
        pelicula.id = Some(anio as i64);
        let mut copia = Copia::new(pelicula.id.unwrap(), 1, EstadoCopia::Buena, Soporte::Dvd);
        copia.id = Some(anio as i64);
        OwnedCopy { copia, pelicula }
    }

    #[test]
    fn test_empty_prefix_keeps_everything_in_order() {
        let rows = vec![
            owned_row("El Padrino", 1972),
            owned_row("Matrix", 1999),
            owned_row("El Paciente Inglés", 1996),
        ];

        let filtered = filter_by_title_prefix(&rows, "");
        assert_eq!(filtered.len(), 3);
        assert_eq!(filtered[0], &rows[0]);
        assert_eq!(filtered[1], &rows[1]);
        assert_eq!(filtered[2], &rows[2]);
    }

    #[test]
    fn test_prefix_matches_case_insensitively() {
        let rows = vec![
            owned_row("El Padrino", 1972),
            owned_row("Matrix", 1999),
            owned_row("El Paciente Inglés", 1996),
        ];

        let filtered = filter_by_title_prefix(&rows, "el pa");
        let titulos: Vec<&str> = filtered
            .iter()
            .map(|row| row.pelicula.titulo.as_str())
            .collect();
        assert_eq!(titulos, vec!["El Padrino", "El Paciente Inglés"]);
    }

    #[test]
    fn test_prefix_input_is_trimmed() {
        let rows = vec![owned_row("El Padrino", 1972), owned_row("Matrix", 1999)];

        let filtered = filter_by_title_prefix(&rows, "  EL PAD ");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].pelicula.titulo, "El Padrino");
    }

    #[test]
    fn test_prefix_is_anchored_at_the_start() {
        let rows = vec![owned_row("El Padrino", 1972)];

        assert!(filter_by_title_prefix(&rows, "padrino").is_empty());
    }

    #[test]
    fn test_list_owned_joins_peliculas() {
        let f = fixture();

        let ana = f
            .users
            .save(User::new("ana".to_string(), "x".to_string(), false))
            .unwrap();
        let matrix = f
            .peliculas
            .save(Pelicula::new("Matrix".to_string(), "Ciencia ficción".to_string(), 1999))
            .unwrap();

        f.service
            .save_copia(Copia::new(
                matrix.id.unwrap(),
                ana.id.unwrap(),
                EstadoCopia::Nueva,
                Soporte::BluRay,
            ))
            .unwrap();

        let rows = f.service.list_owned(&ana).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].pelicula, matrix);
        assert_eq!(rows[0].copia.estado, EstadoCopia::Nueva);
    }

    #[test]
    fn test_save_copia_rejects_pelicula_change() {
        let f = fixture();

        let ana = f
            .users
            .save(User::new("ana".to_string(), "x".to_string(), false))
            .unwrap();
        let matrix = f
            .peliculas
            .save(Pelicula::new("Matrix".to_string(), "Ciencia ficción".to_string(), 1999))
            .unwrap();
        let padrino = f
            .peliculas
            .save(Pelicula::new("El Padrino".to_string(), "Drama".to_string(), 1972))
            .unwrap();

        let mut copia = f
            .service
            .save_copia(Copia::new(
                matrix.id.unwrap(),
                ana.id.unwrap(),
                EstadoCopia::Usada,
                Soporte::Vhs,
            ))
            .unwrap();

        // Estado and soporte may change freely.
        copia.estado = EstadoCopia::Deteriorada;
        copia.soporte = Soporte::Dvd;
        let copia = f.service.save_copia(copia).unwrap();

        // The pelicula reference is fixed.
        let mut moved = copia.clone();
        moved.pelicula_id = padrino.id.unwrap();
        assert!(matches!(
            f.service.save_copia(moved),
            Err(AppError::Domain(DomainError::InvariantViolation(_)))
        ));

        // The stored row is untouched.
        let rows = f.service.list_owned(&ana).unwrap();
        assert_eq!(rows[0].copia, copia);
    }

    #[test]
    fn test_save_copia_of_vanished_row_is_not_found() {
        let f = fixture();

        let ana = f
            .users
            .save(User::new("ana".to_string(), "x".to_string(), false))
            .unwrap();
        let matrix = f
            .peliculas
            .save(Pelicula::new("Matrix".to_string(), "Ciencia ficción".to_string(), 1999))
            .unwrap();

        let copia = f
            .service
            .save_copia(Copia::new(
                matrix.id.unwrap(),
                ana.id.unwrap(),
                EstadoCopia::Nueva,
                Soporte::Dvd,
            ))
            .unwrap();

        f.service.delete_copia(copia.clone()).unwrap();

        assert!(matches!(
            f.service.save_copia(copia),
            Err(AppError::NotFound)
        ));
    }

    #[test]
    fn test_delete_copia_reflects_immediately() {
        let f = fixture();

        let ana = f
            .users
            .save(User::new("ana".to_string(), "x".to_string(), false))
            .unwrap();
        let matrix = f
            .peliculas
            .save(Pelicula::new("Matrix".to_string(), "Ciencia ficción".to_string(), 1999))
            .unwrap();

        let copia = f
            .service
            .save_copia(Copia::new(
                matrix.id.unwrap(),
                ana.id.unwrap(),
                EstadoCopia::Nueva,
                Soporte::Dvd,
            ))
            .unwrap();

        let deleted = f.service.delete_copia(copia.clone()).unwrap();
        assert_eq!(deleted, Some(copia));
        assert!(f.service.list_owned(&ana).unwrap().is_empty());
    }
}
