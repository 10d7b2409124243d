//! Postgres Store
//!
//! `StudentStore` over a sqlx `PgPool` using parameterized SQL.

use async_trait::async_trait;
use sqlx::postgres::PgPool;
use tracing::{debug, info};

use crate::config::DatabaseConfig;
use crate::error::{Result, StudentError};
use crate::models::Student;
use crate::store::StudentStore;

const SELECT_ALL: &str = "SELECT id, name, email, age FROM student";
const SELECT_ONE: &str = "SELECT id, name, email, age FROM student WHERE id = $1";
const INSERT: &str = "INSERT INTO student (id, name, email, age) VALUES ($1, $2, $3, $4)";
const UPDATE: &str = "UPDATE student SET name = $1, email = $2, age = $3 WHERE id = $4";
const DELETE: &str = "DELETE FROM student WHERE id = $1 RETURNING id, name, email, age";

/// Table definition used by `ensure_table`.
const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS student (
    id    INTEGER PRIMARY KEY,
    name  TEXT    NOT NULL,
    email TEXT    NOT NULL,
    age   INTEGER NOT NULL
)";

// == Postgres Store ==
/// Student store backed by one shared Postgres pool handle.
#[derive(Debug, Clone)]
pub struct PgStudentStore {
    pool: PgPool,
}

impl PgStudentStore {
    /// Wraps an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens the database described by `config`.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let options = config.connect_options()?;
        info!("Connecting to database {}", config);

        let pool = PgPool::connect_with(options).await?;
        Ok(Self::new(pool))
    }

    /// Creates the `student` table when it does not exist yet.
    pub async fn ensure_table(&self) -> Result<()> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        debug!("student table ready");
        Ok(())
    }

    /// Closes the pool, waiting for checked-out connections.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl StudentStore for PgStudentStore {
    async fn list(&self) -> Result<Vec<Student>> {
        let students = sqlx::query_as::<_, Student>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;
        Ok(students)
    }

    async fn get(&self, id: i32) -> Result<Student> {
        sqlx::query_as::<_, Student>(SELECT_ONE)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StudentError::student_not_found(id))
    }

    async fn create(&self, student: &Student) -> Result<()> {
        sqlx::query(INSERT)
            .bind(student.id)
            .bind(&student.name)
            .bind(&student.email)
            .bind(student.age)
            .execute(&self.pool)
            .await
            .map_err(|err| match StudentError::from(err) {
                StudentError::Conflict(_) => {
                    StudentError::Conflict(format!("Student {} already exists", student.id))
                }
                other => other,
            })?;
        Ok(())
    }

    async fn update(&self, id: i32, student: &Student) -> Result<Student> {
        let result = sqlx::query(UPDATE)
            .bind(&student.name)
            .bind(&student.email)
            .bind(student.age)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StudentError::student_not_found(id));
        }
        Ok(student.clone().with_id(id))
    }

    async fn delete(&self, id: i32) -> Result<Student> {
        sqlx::query_as::<_, Student>(DELETE)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StudentError::student_not_found(id))
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
