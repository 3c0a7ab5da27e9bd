// src/repositories/user_repository.rs
//
// User persistence

use rusqlite::types::Value;
use rusqlite::{params, Row};

use crate::domain::User;
use crate::error::{AppError, AppResult};
use crate::repositories::repository::Repository;
use crate::repositories::sqlite::{EntityMapper, SqliteRepository};

pub trait UserRepository: Repository<User> {
    /// Equality lookup on the unique login name.
    fn find_by_username(&self, nombre_usuario: &str) -> AppResult<Option<User>>;
}

pub struct UserMapper;

impl EntityMapper for UserMapper {
    type Entity = User;

    const TABLE: &'static str = "usuarios";
    const COLUMNS: &'static [&'static str] = &["nombre_usuario", "contrasena", "es_admin"];

    fn id(entity: &User) -> Option<i64> {
        entity.id
    }

    fn set_id(entity: &mut User, id: i64) {
        entity.id = Some(id);
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<User> {
        Ok(User {
            id: Some(row.get("id")?),
            nombre_usuario: row.get("nombre_usuario")?,
            contrasena: row.get("contrasena")?,
            es_admin: row.get("es_admin")?,
        })
    }

    fn values(entity: &User) -> Vec<Value> {
        vec![
            Value::from(entity.nombre_usuario.clone()),
            Value::from(entity.contrasena.clone()),
            Value::from(entity.es_admin),
        ]
    }
}

pub type SqliteUserRepository = SqliteRepository<UserMapper>;

impl UserRepository for SqliteRepository<UserMapper> {
    fn find_by_username(&self, nombre_usuario: &str) -> AppResult<Option<User>> {
        let conn = self.conn()?;

        let mut stmt = conn.prepare(
            "SELECT id, nombre_usuario, contrasena, es_admin
             FROM usuarios WHERE nombre_usuario = ?1",
        )?;

        match stmt.query_row(params![nombre_usuario], UserMapper::from_row) {
            Ok(user) => Ok(Some(user)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }
}
