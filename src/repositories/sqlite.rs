// src/repositories/sqlite.rs
//
// Generic SQLite repository - the CRUD contract implemented once
//
// Mutating operations run inside a single rusqlite transaction that
// commits on success; dropping the transaction on any error path rolls
// it back, so no partial write ever survives.

use std::marker::PhantomData;
use std::sync::Arc;

use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};

use crate::db::connection::{ConnectionPool, PooledConn};
use crate::error::{AppError, AppResult};
use crate::repositories::repository::Repository;

/// Row mapping contract an entity provides to plug into the generic
/// repository.
///
/// `COLUMNS` lists every column except `id`, in the order `values`
/// produces them; `from_row` reads columns by name.
pub trait EntityMapper {
    type Entity;

    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];

    fn id(entity: &Self::Entity) -> Option<i64>;
    fn set_id(entity: &mut Self::Entity, id: i64);
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self::Entity>;
    fn values(entity: &Self::Entity) -> Vec<Value>;
}

/// The single SQLite implementation of `Repository`. Entity-specific
/// queries are layered on top through extension traits implemented on
/// `SqliteRepository<TheirMapper>`.
pub struct SqliteRepository<M: EntityMapper> {
    pool: Arc<ConnectionPool>,
    _marker: PhantomData<fn() -> M>,
}

impl<M: EntityMapper> SqliteRepository<M> {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self {
            pool,
            _marker: PhantomData,
        }
    }

    pub(crate) fn conn(&self) -> AppResult<PooledConn> {
        Ok(self.pool.get()?)
    }

    fn select_sql() -> String {
        format!("SELECT id, {} FROM {}", M::COLUMNS.join(", "), M::TABLE)
    }

    fn placeholders(n: usize) -> String {
        (1..=n)
            .map(|i| format!("?{}", i))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn insert(conn: &Connection, entity: &M::Entity) -> AppResult<i64> {
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            M::TABLE,
            M::COLUMNS.join(", "),
            Self::placeholders(M::COLUMNS.len()),
        );
        conn.execute(&sql, params_from_iter(M::values(entity)))?;
        Ok(conn.last_insert_rowid())
    }

    fn insert_with_id(conn: &Connection, entity: &M::Entity, id: i64) -> AppResult<()> {
        let sql = format!(
            "INSERT INTO {} (id, {}) VALUES ({})",
            M::TABLE,
            M::COLUMNS.join(", "),
            Self::placeholders(M::COLUMNS.len() + 1),
        );
        let mut values = vec![Value::from(id)];
        values.extend(M::values(entity));
        conn.execute(&sql, params_from_iter(values))?;
        Ok(())
    }

    fn find_in(conn: &Connection, id: i64) -> AppResult<Option<M::Entity>> {
        let sql = format!("{} WHERE id = ?1", Self::select_sql());
        let mut stmt = conn.prepare(&sql)?;
        match stmt.query_row(params![id], M::from_row) {
            Ok(entity) => Ok(Some(entity)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }
}

impl<M: EntityMapper> Repository<M::Entity> for SqliteRepository<M> {
    fn save(&self, entity: M::Entity) -> AppResult<M::Entity> {
        let mut entity = entity;
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        match M::id(&entity) {
            None => {
                let id = Self::insert(&tx, &entity)?;
                M::set_id(&mut entity, id);
            }
            Some(id) => {
                let assignments = M::COLUMNS
                    .iter()
                    .enumerate()
                    .map(|(i, col)| format!("{} = ?{}", col, i + 1))
                    .collect::<Vec<_>>()
                    .join(", ");
                let sql = format!(
                    "UPDATE {} SET {} WHERE id = ?{}",
                    M::TABLE,
                    assignments,
                    M::COLUMNS.len() + 1,
                );
                let mut values = M::values(&entity);
                values.push(Value::from(id));
                let updated = tx.execute(&sql, params_from_iter(values))?;
                if updated == 0 {
                    // Detached entity whose row is gone: reconcile by
                    // writing it back under the same id (merge).
                    Self::insert_with_id(&tx, &entity, id)?;
                }
            }
        }

        tx.commit()?;
        Ok(entity)
    }

    fn delete(&self, entity: M::Entity) -> AppResult<Option<M::Entity>> {
        match M::id(&entity) {
            None => Ok(None),
            Some(id) => self.delete_by_id(id),
        }
    }

    fn delete_by_id(&self, id: i64) -> AppResult<Option<M::Entity>> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        let existing = match Self::find_in(&tx, id)? {
            Some(entity) => entity,
            None => return Ok(None),
        };

        let sql = format!("DELETE FROM {} WHERE id = ?1", M::TABLE);
        tx.execute(&sql, params![id])?;

        tx.commit()?;
        Ok(Some(existing))
    }

    fn find_by_id(&self, id: i64) -> AppResult<Option<M::Entity>> {
        let conn = self.conn()?;
        Self::find_in(&conn, id)
    }

    fn find_all(&self) -> AppResult<Vec<M::Entity>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&Self::select_sql())?;

        let entities: Vec<M::Entity> = stmt
            .query_map([], M::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(entities)
    }

    fn count(&self) -> AppResult<i64> {
        let conn = self.conn()?;
        let sql = format!("SELECT COUNT(*) FROM {}", M::TABLE);

        let count: i64 = conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::create_test_pool;
    use crate::domain::Pelicula;
    use crate::repositories::pelicula_repository::{PeliculaMapper, SqlitePeliculaRepository};

    fn sample() -> Pelicula {
        let mut pelicula = Pelicula::new("Matrix".to_string(), "Ciencia ficción".to_string(), 1999);
        pelicula.director = Some("Lana y Lilly Wachowski".to_string());
        pelicula
    }

    #[test]
    fn test_save_assigns_fresh_id() {
        let (_dir, pool) = create_test_pool();
        let repo: SqliteRepository<PeliculaMapper> = SqliteRepository::new(pool);

        let first = repo.save(sample()).unwrap();
        let second = repo.save(sample()).unwrap();

        let first_id = first.id.unwrap();
        let second_id = second.id.unwrap();
        assert!(first_id >= 1);
        assert_ne!(first_id, second_id);
    }

    #[test]
    fn test_save_round_trips_all_fields() {
        let (_dir, pool) = create_test_pool();
        let repo = SqlitePeliculaRepository::new(pool);

        let saved = repo.save(sample()).unwrap();
        let found = repo.find_by_id(saved.id.unwrap()).unwrap().unwrap();

        assert_eq!(found, saved);
        assert_eq!(found.descripcion, None);
        assert_eq!(found.director.as_deref(), Some("Lana y Lilly Wachowski"));
    }

    #[test]
    fn test_save_with_id_updates_in_place() {
        let (_dir, pool) = create_test_pool();
        let repo = SqlitePeliculaRepository::new(pool);

        let mut saved = repo.save(sample()).unwrap();
        let id = saved.id.unwrap();

        saved.genero = "Acción".to_string();
        saved.descripcion = Some("Trilogía".to_string());
        let updated = repo.save(saved).unwrap();

        assert_eq!(updated.id, Some(id));
        assert_eq!(repo.count().unwrap(), 1);

        let found = repo.find_by_id(id).unwrap().unwrap();
        assert_eq!(found.genero, "Acción");
        assert_eq!(found.descripcion.as_deref(), Some("Trilogía"));
    }

    #[test]
    fn test_save_reconciles_deleted_row() {
        let (_dir, pool) = create_test_pool();
        let repo = SqlitePeliculaRepository::new(pool);

        let saved = repo.save(sample()).unwrap();
        let id = saved.id.unwrap();
        repo.delete_by_id(id).unwrap();

        // A detached copy still carrying the old id is merged back.
        let merged = repo.save(saved).unwrap();
        assert_eq!(merged.id, Some(id));
        assert!(repo.find_by_id(id).unwrap().is_some());
    }

    #[test]
    fn test_delete_by_id_removes_row() {
        let (_dir, pool) = create_test_pool();
        let repo = SqlitePeliculaRepository::new(pool);

        let saved = repo.save(sample()).unwrap();
        let id = saved.id.unwrap();

        let deleted = repo.delete_by_id(id).unwrap();
        assert_eq!(deleted, Some(saved));
        assert!(repo.find_by_id(id).unwrap().is_none());
    }

    #[test]
    fn test_delete_by_id_unknown_is_a_no_op() {
        let (_dir, pool) = create_test_pool();
        let repo = SqlitePeliculaRepository::new(pool);
        repo.save(sample()).unwrap();

        assert_eq!(repo.delete_by_id(9999).unwrap(), None);
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_delete_unsaved_entity_returns_none() {
        let (_dir, pool) = create_test_pool();
        let repo = SqlitePeliculaRepository::new(pool);

        assert_eq!(repo.delete(sample()).unwrap(), None);
    }

    #[test]
    fn test_find_all_and_count() {
        let (_dir, pool) = create_test_pool();
        let repo = SqlitePeliculaRepository::new(pool);

        assert!(repo.find_all().unwrap().is_empty());
        assert_eq!(repo.count().unwrap(), 0);

        repo.save(sample()).unwrap();
        repo.save(Pelicula::new("El Padrino".to_string(), "Drama".to_string(), 1972))
            .unwrap();

        let all = repo.find_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(repo.count().unwrap(), 2);
    }
}
