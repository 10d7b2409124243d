//! Seed Data
//!
//! Inserts the sample students. Rows whose id already exists are skipped,
//! so seeding twice leaves the table unchanged.

use tracing::{info, warn};

use crate::error::{Result, StudentError};
use crate::models::Student;
use crate::store::StudentStore;

/// The sample students.
pub fn sample_students() -> Vec<Student> {
    vec![
        Student::new(1, "Lazizbek", "lazizbek@gmail.com", 21),
        Student::new(2, "Zafar aka", "zafarAka@novalab.com", 23),
        Student::new(3, "Izzat aka", "izzatAka@novalab.com", 23),
    ]
}

/// Inserts `students` into `store`, returning how many were new.
pub async fn seed_students(store: &dyn StudentStore, students: &[Student]) -> Result<usize> {
    let mut inserted = 0;

    for student in students {
        match store.create(student).await {
            Ok(()) => {
                info!(id = student.id, name = %student.name, "Seeded student");
                inserted += 1;
            }
            Err(StudentError::Conflict(_)) => {
                warn!(id = student.id, "Student already present, skipping");
            }
            Err(err) => return Err(err),
        }
    }

    Ok(inserted)
}
