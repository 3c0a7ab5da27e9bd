// src/repositories/repository.rs
//
// The generic CRUD contract every entity repository fulfils.

use crate::error::AppResult;

/// Basic persistence operations over an entity type.
///
/// Every operation is its own unit of work: it acquires a connection,
/// runs to commit or rollback and releases everything before returning.
/// No transaction ever spans two calls.
pub trait Repository<T>: Send + Sync {
    /// Insert the entity when it has no id (assigning a fresh one) or
    /// update the stored row matching its id. Returns the persisted
    /// entity, id filled in.
    fn save(&self, entity: T) -> AppResult<T>;

    /// Remove the entity's stored row. The row is re-read first, so the
    /// returned value reflects what the store held; `None` when the
    /// entity was never persisted or its row no longer exists.
    fn delete(&self, entity: T) -> AppResult<Option<T>>;

    /// Find-then-delete by id. Returns the deleted entity, or `None`
    /// (with no side effects) when the id is unknown.
    fn delete_by_id(&self, id: i64) -> AppResult<Option<T>>;

    /// Primary-key lookup.
    fn find_by_id(&self, id: i64) -> AppResult<Option<T>>;

    /// Full scan in the store's natural order.
    fn find_all(&self) -> AppResult<Vec<T>>;

    /// Total number of stored rows.
    fn count(&self) -> AppResult<i64>;
}
