//! Store Module
//!
//! Persistence accessors for student records. Handlers only see the
//! `StudentStore` trait; the server runs on `PgStudentStore` and the
//! tests run on `MemoryStudentStore`.

mod memory;
mod postgres;


use async_trait::async_trait;

use crate::error::Result;
use crate::models::Student;

// Re-export public types
pub use memory::MemoryStudentStore;
pub use postgres::PgStudentStore;

/// Query and exec primitives over the `student` table.
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// Every student, in the order the backend returns them.
    async fn list(&self) -> Result<Vec<Student>>;

    /// The student with `id`, or `NotFound`.
    async fn get(&self, id: i32) -> Result<Student>;

    /// Inserts `student` as given. A taken id is a `Conflict`.
    async fn create(&self, student: &Student) -> Result<()>;

    /// Overwrites name, email and age of the row `id`.
    ///
    /// Returns the stored record; `NotFound` when no row has that id.
    async fn update(&self, id: i32, student: &Student) -> Result<Student>;

    /// Removes the row `id` and returns it, or `NotFound`.
    async fn delete(&self, id: i32) -> Result<Student>;

    /// Checks that the backend is reachable.
    async fn ping(&self) -> Result<()>;
}
