//! PostgreSQL implementation of the user repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    first_name: String,
    last_name: String,
    age: i32,
    email: String,
    password: Option<String>,
}

impl From<UserRow> for User {
    fn from(r: UserRow) -> Self {
        User::new(r.id, r.first_name, r.last_name, r.age, r.email, r.password)
    }
}

/// PostgreSQL repository for the `users` table.
///
/// Ids come from an identity column. Writes with an explicit id go through
/// `ON CONFLICT (id) DO UPDATE` and then move the identity sequence past the
/// largest stored id. The sequence only ever moves forward, so ids of deleted
/// rows are not handed out again.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, first_name, last_name, age, email, password
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, first_name, last_name, age, email, password
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(User::from))
    }

    async fn save(&self, user: NewUser) -> Result<User, AppError> {
        let Some(id) = user.id else {
            let row = sqlx::query_as::<_, UserRow>(
                r#"
                INSERT INTO users (first_name, last_name, age, email, password)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, first_name, last_name, age, email, password
                "#,
            )
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(user.age)
            .bind(&user.email)
            .bind(&user.password)
            .fetch_one(self.pool.as_ref())
            .await?;

            return Ok(row.into());
        };

        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (id, first_name, last_name, age, email, password)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE SET
                first_name = EXCLUDED.first_name,
                last_name  = EXCLUDED.last_name,
                age        = EXCLUDED.age,
                email      = EXCLUDED.email,
                password   = EXCLUDED.password
            RETURNING id, first_name, last_name, age, email, password
            "#,
        )
        .bind(id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.age)
        .bind(&user.email)
        .bind(&user.password)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            SELECT setval(
                seq,
                GREATEST(
                    (SELECT MAX(id) FROM users),
                    pg_sequence_last_value(seq::regclass),
                    1
                )
            )
            FROM (SELECT pg_get_serial_sequence('users', 'id') AS seq) AS s
            "#,
        )
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(row.into())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            tracing::debug!(user_id = id, "Delete of missing user ignored");
        }

        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
