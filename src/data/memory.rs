use crate::{
    data::{
        StudentStore,
        student::{NewStudent, Student},
    },
    error::{RosterError, RosterResult},
};
use async_trait::async_trait;
use std::sync::Mutex;
use time::OffsetDateTime;

/// Test double with the same visibility rules as the postgres table.
#[derive(Debug, Default)]
pub struct MemoryStudentStore {
    rows: Mutex<Vec<Student>>,
}

#[async_trait]
impl StudentStore for MemoryStudentStore {
    async fn insert_into_database(&self, to_be_added: NewStudent) -> RosterResult<Student> {
        let mut rows = self.rows.lock().unwrap();
        let now = OffsetDateTime::now_utc();
        let student = Student {
            id: rows.last().map_or(1, |last| last.id + 1),
            created_at: now,
            updated_at: now,
            deleted_at: None,
            name: to_be_added.name,
            age: to_be_added.age,
            class: to_be_added.class,
            email: to_be_added.email,
        };
        rows.push(student.clone());
        Ok(student)
    }

    async fn get_all(&self) -> RosterResult<Vec<Student>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| row.deleted_at.is_none())
            .cloned()
            .collect())
    }

    async fn get_from_db_by_id(&self, id: i64) -> RosterResult<Option<Student>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.id == id && row.deleted_at.is_none())
            .cloned())
    }

    async fn save(&self, student: &Student) -> RosterResult<Student> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.id == student.id && row.deleted_at.is_none())
            .ok_or(RosterError::MakeQuery {
                source: sqlx::Error::RowNotFound,
            })?;

        row.name.clone_from(&student.name);
        row.age = student.age;
        row.class.clone_from(&student.class);
        row.email.clone_from(&student.email);
        row.updated_at = OffsetDateTime::now_utc();
        Ok(row.clone())
    }

    async fn soft_delete(&self, id: i64) -> RosterResult<()> {
        if let Some(row) = self
            .rows
            .lock()
            .unwrap()
            .iter_mut()
            .find(|row| row.id == id && row.deleted_at.is_none())
        {
            row.deleted_at = Some(OffsetDateTime::now_utc());
        }
        Ok(())
    }
}
