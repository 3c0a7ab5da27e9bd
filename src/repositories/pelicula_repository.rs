// src/repositories/pelicula_repository.rs
//
// Pelicula persistence

use rusqlite::types::Value;
use rusqlite::Row;

use crate::domain::Pelicula;
use crate::repositories::repository::Repository;
use crate::repositories::sqlite::{EntityMapper, SqliteRepository};

/// No extra queries yet; the picker only needs the CRUD contract.
pub trait PeliculaRepository: Repository<Pelicula> {}

pub struct PeliculaMapper;

impl EntityMapper for PeliculaMapper {
    type Entity = Pelicula;

    const TABLE: &'static str = "peliculas";
    const COLUMNS: &'static [&'static str] =
        &["titulo", "genero", "anio", "descripcion", "director"];

    fn id(entity: &Pelicula) -> Option<i64> {
        entity.id
    }

    fn set_id(entity: &mut Pelicula, id: i64) {
        entity.id = Some(id);
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Pelicula> {
        Ok(Pelicula {
            id: Some(row.get("id")?),
            titulo: row.get("titulo")?,
            genero: row.get("genero")?,
            anio: row.get("anio")?,
            descripcion: row.get("descripcion")?,
            director: row.get("director")?,
        })
    }

    fn values(entity: &Pelicula) -> Vec<Value> {
        vec![
            Value::from(entity.titulo.clone()),
            Value::from(entity.genero.clone()),
            Value::from(i64::from(entity.anio)),
            Value::from(entity.descripcion.clone()),
            Value::from(entity.director.clone()),
        ]
    }
}

pub type SqlitePeliculaRepository = SqliteRepository<PeliculaMapper>;

impl PeliculaRepository for SqliteRepository<PeliculaMapper> {}
