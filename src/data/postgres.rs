use crate::{
    data::{
        StudentStore,
        student::{NewStudent, Student},
    },
    error::{MakeQuerySnafu, RosterResult},
};
use async_trait::async_trait;
use snafu::ResultExt;
use sqlx::{Pool, Postgres};

#[derive(Clone, Debug)]
pub struct PgStudentStore {
    pool: Pool<Postgres>,
}

impl PgStudentStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentStore for PgStudentStore {
    async fn insert_into_database(&self, to_be_added: NewStudent) -> RosterResult<Student> {
        let NewStudent {
            name,
            age,
            class,
            email,
        } = to_be_added;

        sqlx::query_as::<_, Student>(
            "INSERT INTO public.students (name, age, class, email) VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(name)
        .bind(age)
        .bind(class)
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .context(MakeQuerySnafu)
    }

    async fn get_all(&self) -> RosterResult<Vec<Student>> {
        sqlx::query_as::<_, Student>(
            "SELECT * FROM public.students WHERE deleted_at IS NULL ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .context(MakeQuerySnafu)
    }

    async fn get_from_db_by_id(&self, id: i64) -> RosterResult<Option<Student>> {
        sqlx::query_as::<_, Student>(
            "SELECT * FROM public.students WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context(MakeQuerySnafu)
    }

    async fn save(&self, student: &Student) -> RosterResult<Student> {
        //RowNotFound here means it was deleted between lookup and save, which surfaces as a 404
        sqlx::query_as::<_, Student>(
            "UPDATE public.students SET name = $2, age = $3, class = $4, email = $5, updated_at = now() WHERE id = $1 AND deleted_at IS NULL RETURNING *",
        )
        .bind(student.id)
        .bind(&student.name)
        .bind(student.age)
        .bind(&student.class)
        .bind(&student.email)
        .fetch_one(&self.pool)
        .await
        .context(MakeQuerySnafu)
    }

    async fn soft_delete(&self, id: i64) -> RosterResult<()> {
        sqlx::query(
            "UPDATE public.students SET deleted_at = now() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .context(MakeQuerySnafu)?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
