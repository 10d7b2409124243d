//! Memory Store
//!
//! In-process `StudentStore` keyed by identifier. Used by the tests and
//! handy for running the service without a database.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{Result, StudentError};
use crate::models::Student;
use crate::store::StudentStore;

// == Memory Store ==
/// Student rows held in a `BTreeMap`, listed in ascending id order.
#[derive(Debug, Default)]
pub struct MemoryStudentStore {
    rows: RwLock<BTreeMap<i32, Student>>,
}

impl MemoryStudentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with `students`; later duplicates win.
    pub fn with_students(students: impl IntoIterator<Item = Student>) -> Self {
        let rows = students.into_iter().map(|s| (s.id, s)).collect();
        Self {
            rows: RwLock::new(rows),
        }
    }

    /// Number of stored students.
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait]
impl StudentStore for MemoryStudentStore {
    async fn list(&self) -> Result<Vec<Student>> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<Student> {
        self.rows
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| StudentError::student_not_found(id))
    }

    async fn create(&self, student: &Student) -> Result<()> {
        let mut rows = self.rows.write().await;

        // Same outcome as a primary-key violation
        if rows.contains_key(&student.id) {
            return Err(StudentError::Conflict(format!(
                "Student {} already exists",
                student.id
            )));
        }

        rows.insert(student.id, student.clone());
        Ok(())
    }

    async fn update(&self, id: i32, student: &Student) -> Result<Student> {
        let mut rows = self.rows.write().await;
        let row = rows
            .get_mut(&id)
            .ok_or_else(|| StudentError::student_not_found(id))?;

        row.name = student.name.clone();
        row.email = student.email.clone();
        row.age = student.age;
        Ok(row.clone())
    }

    async fn delete(&self, id: i32) -> Result<Student> {
        self.rows
            .write()
            .await
            .remove(&id)
            .ok_or_else(|| StudentError::student_not_found(id))
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Student {
        Student::new(1, "Alice", "alice@example.com", 20)
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let store = MemoryStudentStore::new();
        store.create(&alice()).await.unwrap();

        let fetched = store.get(1).await.unwrap();
        assert_eq!(fetched, alice());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_create_duplicate_id_conflicts() {
        let store = MemoryStudentStore::new();
        store.create(&alice()).await.unwrap();

        let result = store
            .create(&Student::new(1, "Other", "other@example.com", 30))
            .await;
        assert!(matches!(result, Err(StudentError::Conflict(_))));

        // Existing row untouched
        assert_eq!(store.get(1).await.unwrap(), alice());
    }

    #[tokio::test]
    async fn test_get_missing() {
        let store = MemoryStudentStore::new();
        let result = store.get(42).await;
        assert!(matches!(result, Err(StudentError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let store = MemoryStudentStore::with_students([
            Student::new(3, "C", "c@x.com", 23),
            Student::new(1, "A", "a@x.com", 21),
            Student::new(2, "B", "b@x.com", 22),
        ]);

        let ids: Vec<i32> = store.list().await.unwrap().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_update_only_touches_target_row() {
        let store = MemoryStudentStore::with_students([
            alice(),
            Student::new(2, "Bob", "bob@example.com", 25),
        ]);

        // Body id differs from the addressed id; the addressed row wins
        let patch = Student::new(99, "Alicia", "alicia@example.com", 21);
        let updated = store.update(1, &patch).await.unwrap();

        assert_eq!(updated, Student::new(1, "Alicia", "alicia@example.com", 21));
        assert_eq!(
            store.get(2).await.unwrap(),
            Student::new(2, "Bob", "bob@example.com", 25)
        );
        assert!(store.get(99).await.is_err());
    }

    #[tokio::test]
    async fn test_update_missing() {
        let store = MemoryStudentStore::new();
        let result = store.update(5, &alice()).await;
        assert!(matches!(result, Err(StudentError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_returns_removed_row() {
        let store = MemoryStudentStore::with_students([alice()]);

        let deleted = store.delete(1).await.unwrap();
        assert_eq!(deleted, alice());
        assert!(store.is_empty().await);
        assert!(matches!(
            store.delete(1).await,
            Err(StudentError::NotFound(_))
        ));
    }
}
