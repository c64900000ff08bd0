//! Car brand repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::CarBrand};

/// Repository for car brand database operations
pub struct BrandRepository;

impl BrandRepository {
    /// Create a new brand
    pub async fn create(pool: &PgPool, name: &str) -> AppResult<CarBrand> {
        let brand = sqlx::query_as::<_, CarBrand>(
            r#"INSERT INTO car_brands (name) VALUES ($1) RETURNING *"#,
        )
        .bind(name)
        .fetch_one(pool)
        .await?;

        Ok(brand)
    }

    /// Find brand by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<CarBrand>> {
        let brand = sqlx::query_as::<_, CarBrand>(r#"SELECT * FROM car_brands WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(brand)
    }

    /// Check whether a brand exists
    pub async fn exists(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM car_brands WHERE id = $1)"#)
                .bind(id)
                .fetch_one(pool)
                .await?;

        Ok(exists)
    }

    /// Check whether a brand name is taken, optionally ignoring one brand
    pub async fn name_in_use(pool: &PgPool, name: &str, exclude: Option<&Uuid>) -> AppResult<bool> {
        let in_use: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM car_brands
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

    /// List all brands
    pub async fn list(pool: &PgPool) -> AppResult<Vec<CarBrand>> {
        let brands = sqlx::query_as::<_, CarBrand>(r#"SELECT * FROM car_brands ORDER BY name"#)
            .fetch_all(pool)
            .await?;

        Ok(brands)
    }

    /// Rename a brand
    pub async fn update(pool: &PgPool, id: &Uuid, name: &str) -> AppResult<CarBrand> {
        let brand = sqlx::query_as::<_, CarBrand>(
            r#"UPDATE car_brands SET name = $2, updated_at = NOW() WHERE id = $1 RETURNING *"#,
        )
        .bind(id)
        .bind(name)
        .fetch_one(pool)
        .await?;

        Ok(brand)
    }

    /// Delete a brand; returns false when no row matched
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM car_brands WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
