//! Car body style repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::CarBody};

/// Repository for car body style database operations
pub struct BodyRepository;

impl BodyRepository {
    /// Create a new body style
    pub async fn create(pool: &PgPool, name: &str) -> AppResult<CarBody> {
        let body = sqlx::query_as::<_, CarBody>(
            r#"INSERT INTO car_bodies (name) VALUES ($1) RETURNING *"#,
        )
        .bind(name)
        .fetch_one(pool)
        .await?;

        Ok(body)
    }

    /// Find body style by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<CarBody>> {
        let body = sqlx::query_as::<_, CarBody>(r#"SELECT * FROM car_bodies WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(body)
    }

    /// Check whether a body style exists
    pub async fn exists(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM car_bodies WHERE id = $1)"#)
                .bind(id)
                .fetch_one(pool)
                .await?;

        Ok(exists)
    }

    /// Check whether a body style name is taken, optionally ignoring one row
    pub async fn name_in_use(pool: &PgPool, name: &str, exclude: Option<&Uuid>) -> AppResult<bool> {
        let in_use: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM car_bodies
                WHERE name = $1 AND ($2::uuid IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(name)
        .bind(exclude)
        .fetch_one(pool)
        .await?;

        Ok(in_use)
    }

    /// List all body styles
    pub async fn list(pool: &PgPool) -> AppResult<Vec<CarBody>> {
        let bodies = sqlx::query_as::<_, CarBody>(r#"SELECT * FROM car_bodies ORDER BY name"#)
            .fetch_all(pool)
            .await?;

        Ok(bodies)
    }

    /// Rename a body style
    pub async fn update(pool: &PgPool, id: &Uuid, name: &str) -> AppResult<CarBody> {
        let body = sqlx::query_as::<_, CarBody>(
            r#"UPDATE car_bodies SET name = $2, updated_at = NOW() WHERE id = $1 RETURNING *"#,
        )
        .bind(id)
        .bind(name)
        .fetch_one(pool)
        .await?;

        Ok(body)
    }

    /// Delete a body style; returns false when no row matched
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM car_bodies WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
