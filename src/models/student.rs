//! Student record
//!
//! The single persisted entity, mapped to `student` table rows through
//! `sqlx::FromRow` and to JSON bodies through serde.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A student row. The identifier is supplied by the caller, never generated.
///
/// Capitalized keys (`ID`, `Name`, ...) are accepted on input for older
/// clients; output always uses the lowercase names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[schema(example = json!({"id": 1, "name": "Lazizbek", "email": "lazizbek@gmail.com", "age": 21}))]
pub struct Student {
    /// Caller-supplied identifier (primary key)
    #[serde(alias = "ID", alias = "Id")]
    pub id: i32,
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Email")]
    pub email: String,
    #[serde(alias = "Age")]
    pub age: i32,
}

impl Student {
    /// Creates a new Student
    pub fn new(id: i32, name: impl Into<String>, email: impl Into<String>, age: i32) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            age,
        }
    }

    /// Returns a copy carrying `id` instead of the submitted identifier.
    pub fn with_id(self, id: i32) -> Self {
        Self { id, ..self }
    }
}
