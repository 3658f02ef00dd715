use crate::{
    data::student::{NewStudent, Student},
    error::RosterResult,
};
use async_trait::async_trait;
use std::fmt::Debug;

#[cfg(test)]
pub mod memory;
pub mod postgres;
pub mod student;

/// Single-row operations over the students table. Soft-deleted rows are invisible to all of them.
#[async_trait]
pub trait StudentStore: Debug + Send + Sync {
    async fn insert_into_database(&self, to_be_added: NewStudent) -> RosterResult<Student>;
    async fn get_all(&self) -> RosterResult<Vec<Student>>;
    async fn get_from_db_by_id(&self, id: i64) -> RosterResult<Option<Student>>;
    /// Full overwrite of the mutable columns, refreshing `updated_at`.
    async fn save(&self, student: &Student) -> RosterResult<Student>;
    async fn soft_delete(&self, id: i64) -> RosterResult<()>;

    async fn close(&self) {}
}
