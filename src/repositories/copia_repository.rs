// src/repositories/copia_repository.rs
//
// Copia persistence

use rusqlite::types::Value;
use rusqlite::{params, Row};

use crate::domain::{Copia, Pelicula, User};
use crate::error::{AppError, AppResult};
use crate::repositories::repository::Repository;
use crate::repositories::sqlite::{EntityMapper, SqliteRepository};

pub trait CopiaRepository: Repository<Copia> {
    /// Every copia owned by the given user. An unsaved user owns
    /// nothing.
    fn find_by_owner(&self, user: &User) -> AppResult<Vec<Copia>>;

    /// Every copia of the given pelicula. An unsaved pelicula has no
    /// copias.
    fn find_by_movie(&self, pelicula: &Pelicula) -> AppResult<Vec<Copia>>;
}

pub struct CopiaMapper;

impl EntityMapper for CopiaMapper {
    type Entity = Copia;

    const TABLE: &'static str = "copias";
    const COLUMNS: &'static [&'static str] =
        &["pelicula_id", "usuario_id", "estado", "soporte"];

    fn id(entity: &Copia) -> Option<i64> {
        entity.id
    }

    fn set_id(entity: &mut Copia, id: i64) {
        entity.id = Some(id);
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Copia> {
        let estado: String = row.get("estado")?;
        let estado = estado
            .parse()
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let soporte: String = row.get("soporte")?;
        let soporte = soporte
            .parse()
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        Ok(Copia {
            id: Some(row.get("id")?),
            pelicula_id: row.get("pelicula_id")?,
            usuario_id: row.get("usuario_id")?,
            estado,
            soporte,
        })
    }

    fn values(entity: &Copia) -> Vec<Value> {
        vec![
            Value::from(entity.pelicula_id),
            Value::from(entity.usuario_id),
            Value::from(entity.estado.to_string()),
            Value::from(entity.soporte.to_string()),
        ]
    }
}

pub type SqliteCopiaRepository = SqliteRepository<CopiaMapper>;

impl CopiaRepository for SqliteRepository<CopiaMapper> {
    fn find_by_owner(&self, user: &User) -> AppResult<Vec<Copia>> {
        let usuario_id = match user.id {
            Some(id) => id,
            None => return Ok(Vec::new()),
        };

        self.find_by_fk("usuario_id", usuario_id)
    }

    fn find_by_movie(&self, pelicula: &Pelicula) -> AppResult<Vec<Copia>> {
        let pelicula_id = match pelicula.id {
            Some(id) => id,
            None => return Ok(Vec::new()),
        };

        self.find_by_fk("pelicula_id", pelicula_id)
    }
}

impl SqliteRepository<CopiaMapper> {
    fn find_by_fk(&self, column: &str, value: i64) -> AppResult<Vec<Copia>> {
        let conn = self.conn()?;

        let sql = format!(
            "SELECT id, pelicula_id, usuario_id, estado, soporte
             FROM copias WHERE {} = ?1",
            column
        );
        let mut stmt = conn.prepare(&sql)?;

        let copias: Vec<Copia> = stmt
            .query_map(params![value], CopiaMapper::from_row)
            .map_err(AppError::Database)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(copias)
    }
}
