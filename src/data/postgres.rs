use crate::{
    data::{Student, StudentForm, StudentStore, name_search_pattern},
    error::{GetDatabaseConnectionSnafu, MakeQuerySnafu, MissingStudentSnafu, TrackerResult},
};
use async_trait::async_trait;
use snafu::{OptionExt, ResultExt};
use sqlx::{PgPool, Postgres, pool::PoolConnection};

/// [`StudentStore`] backed by the `public.student` table.
///
/// The pool is owned by whoever builds this - closing it is their job.
#[derive(Clone, Debug)]
pub struct PostgresStudentStore {
    pool: PgPool,
}

impl PostgresStudentStore {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    //the connection goes back to the pool when it's dropped, whether or not the query worked
    async fn get_connection(&self) -> TrackerResult<PoolConnection<Postgres>> {
        self.pool
            .acquire()
            .await
            .context(GetDatabaseConnectionSnafu)
    }
}

#[async_trait]
impl StudentStore for PostgresStudentStore {
    async fn get_all(&self) -> TrackerResult<Vec<Student>> {
        let mut conn = self.get_connection().await?;

        sqlx::query_as::<_, Student>(
            "SELECT id, first_name, last_name, email FROM public.student ORDER BY last_name",
        )
        .fetch_all(&mut *conn)
        .await
        .context(MakeQuerySnafu)
    }

    async fn get_by_id(&self, id: i32) -> TrackerResult<Student> {
        let mut conn = self.get_connection().await?;

        sqlx::query_as::<_, Student>(
            "SELECT id, first_name, last_name, email FROM public.student WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .context(MakeQuerySnafu)?
        .context(MissingStudentSnafu { id })
    }

    async fn insert(&self, to_be_added: StudentForm) -> TrackerResult<i32> {
        let StudentForm {
            first_name,
            last_name,
            email,
        } = to_be_added;
        let mut conn = self.get_connection().await?;

        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO public.student (first_name, last_name, email) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .fetch_one(&mut *conn)
        .await
        .context(MakeQuerySnafu)?;

        info!(%id, "Added student");
        Ok(id)
    }

    async fn update(&self, student: Student) -> TrackerResult<()> {
        let Student {
            id,
            first_name,
            last_name,
            email,
        } = student;
        let mut conn = self.get_connection().await?;

        let result = sqlx::query(
            "UPDATE public.student SET first_name = $1, last_name = $2, email = $3 WHERE id = $4",
        )
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .bind(id)
        .execute(&mut *conn)
        .await
        .context(MakeQuerySnafu)?;

        if result.rows_affected() == 0 {
            warn!(%id, "Tried to update student that doesn't exist");
        } else {
            info!(%id, "Updated student");
        }
        Ok(())
    }

    async fn remove(&self, id: i32) -> TrackerResult<()> {
        let mut conn = self.get_connection().await?;

        sqlx::query("DELETE FROM public.student WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .context(MakeQuerySnafu)?;

        info!(%id, "Removed student");
        Ok(())
    }

    async fn search_by_name(&self, name: Option<&str>) -> TrackerResult<Vec<Student>> {
        let Some(pattern) = name_search_pattern(name) else {
            return self.get_all().await;
        };
        let mut conn = self.get_connection().await?;

        sqlx::query_as::<_, Student>(
            "SELECT id, first_name, last_name, email FROM public.student WHERE lower(first_name) LIKE $1 OR lower(last_name) LIKE $1 ORDER BY last_name",
        )
        .bind(pattern)
        .fetch_all(&mut *conn)
        .await
        .context(MakeQuerySnafu)
    }
}
