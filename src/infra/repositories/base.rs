//! Base building block shared by the in-memory repositories.
//!
//! A `Table` is an insertion-ordered list behind an async `RwLock`.
//! Lookups are linear scans; ids are assigned as `max + 1`.

use tokio::sync::RwLock;

use crate::errors::{AppError, AppResult};

/// Entity with a numeric primary key
pub trait Identified: Clone + Send + Sync {
    fn id(&self) -> u64;
}

/// Insertion-ordered in-memory table
#[derive(Debug)]
pub struct Table<T> {
    rows: RwLock<Vec<T>>,
}

impl<T: Identified> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Identified> Table<T> {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }

    /// Snapshot of all rows
    pub async fn all(&self) -> Vec<T> {
        self.rows.read().await.clone()
    }

    /// Rows matching a predicate, in insertion order
    pub async fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows
            .read()
            .await
            .iter()
            .filter(|row| predicate(row))
            .cloned()
            .collect()
    }

    pub async fn get(&self, id: u64) -> Option<T> {
        self.rows.read().await.iter().find(|row| row.id() == id).cloned()
    }

    /// First row in insertion order
    pub async fn first(&self) -> Option<T> {
        self.rows.read().await.first().cloned()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Insert a row built from its final id.
    ///
    /// Without a requested id the next id (`max + 1`, starting at 1) is used.
    ///
    /// # Errors
    /// `Conflict` when the requested id is already taken, `BadRequest`
    /// when the largest id is `u64::MAX` and no next id exists.
    pub async fn insert(
        &self,
        requested_id: Option<u64>,
        label: &str,
        build: impl FnOnce(u64) -> T,
    ) -> AppResult<T> {
        let mut rows = self.rows.write().await;

        let id = match requested_id {
            Some(id) if rows.iter().any(|row| row.id() == id) => {
                return Err(AppError::conflict(format!("{} {}", label, id)));
            }
            Some(id) => id,
            None => next_id(&rows).ok_or_else(|| {
                AppError::BadRequest(format!("no {} id left, pass an explicit id", label))
            })?,
        };

        let row = build(id);
        rows.push(row.clone());
        Ok(row)
    }

    /// Mutate one row in place under the write lock.
    ///
    /// # Errors
    /// `NotFound` when no row has the id.
    pub async fn update<R>(&self, id: u64, f: impl FnOnce(&mut T) -> R) -> AppResult<R> {
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|row| row.id() == id)
            .ok_or(AppError::NotFound)?;
        Ok(f(row))
    }
}

/// `max(id) + 1`, or 1 for an empty table; `None` once `u64::MAX` is taken
fn next_id<T: Identified>(rows: &[T]) -> Option<u64> {
    rows.iter().map(Identified::id).max().unwrap_or(0).checked_add(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u64,
        value: u32,
    }

    impl Identified for Row {
        fn id(&self) -> u64 {
            self.id
        }
    }

    #[tokio::test]
    async fn test_ids_start_at_one_and_follow_max() {
        let table: Table<Row> = Table::new();
        let first = table.insert(None, "Row", |id| Row { id, value: 0 }).await.unwrap();
        assert_eq!(first.id, 1);

        table.insert(Some(10), "Row", |id| Row { id, value: 0 }).await.unwrap();
        let next = table.insert(None, "Row", |id| Row { id, value: 0 }).await.unwrap();
        assert_eq!(next.id, 11);
        assert_eq!(table.len().await, 3);
    }

    #[tokio::test]
    async fn test_duplicate_id_is_rejected() {
        let table: Table<Row> = Table::new();
        table.insert(Some(3), "Row", |id| Row { id, value: 0 }).await.unwrap();
        let err = table
            .insert(Some(3), "Row", |id| Row { id, value: 1 })
            .await
            .unwrap_err();
        assert_eq!(err, AppError::conflict("Row 3"));
        assert_eq!(table.len().await, 1);
    }

    #[tokio::test]
    async fn test_auto_id_after_max_id_is_rejected() {
        let table: Table<Row> = Table::new();
        table
            .insert(Some(u64::MAX), "Row", |id| Row { id, value: 0 })
            .await
            .unwrap();

        let err = table
            .insert(None, "Row", |id| Row { id, value: 1 })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(table.len().await, 1);

        // Explicit ids still work
        let row = table.insert(Some(7), "Row", |id| Row { id, value: 2 }).await.unwrap();
        assert_eq!(row.id, 7);
    }

    #[tokio::test]
    async fn test_update_and_missing_row() {
        let table: Table<Row> = Table::new();
        table.insert(None, "Row", |id| Row { id, value: 1 }).await.unwrap();

        let value = table
            .update(1, |row| {
                row.value += 1;
                row.value
            })
            .await
            .unwrap();
        assert_eq!(value, 2);
        assert_eq!(table.get(1).await.unwrap().value, 2);

        assert_eq!(table.update(9, |_| ()).await, Err(AppError::NotFound));
    }

    #[tokio::test]
    async fn test_first_and_filter_keep_insertion_order() {
        let table: Table<Row> = Table::new();
        assert!(table.is_empty().await);
        for value in [5, 1, 5] {
            table.insert(None, "Row", |id| Row { id, value }).await.unwrap();
        }
        assert_eq!(table.first().await.unwrap().value, 5);
        let fives: Vec<u64> = table.filter(|r| r.value == 5).await.iter().map(|r| r.id).collect();
        assert_eq!(fives, vec![1, 3]);
    }
}
