//! Country repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Continent, Country, DrivingSide},
};

/// Repository for country database operations
pub struct CountryRepository;

impl CountryRepository {
    /// Create a new country
    pub async fn create(
        pool: &PgPool,
        name: &str,
        capital: Option<&str>,
        flag_url: Option<&str>,
        driving_side: Option<DrivingSide>,
        continent: Continent,
    ) -> AppResult<Country> {
        let country = sqlx::query_as::<_, Country>(
            r#"
            INSERT INTO countries (name, capital, flag_url, driving_side, continent)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(capital)
        .bind(flag_url)
        .bind(driving_side)
        .bind(continent)
        .fetch_one(pool)
        .await?;

        Ok(country)
    }

    /// Find country by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Country>> {
        let country = sqlx::query_as::<_, Country>(r#"SELECT * FROM countries WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(country)
    }

    /// Check whether a country exists
    pub async fn exists(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM countries WHERE id = $1)"#)
                .bind(id)
                .fetch_one(pool)
                .await?;

        Ok(exists)
    }

    /// List all countries
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Country>> {
        let countries = sqlx::query_as::<_, Country>(r#"SELECT * FROM countries ORDER BY name"#)
            .fetch_all(pool)
            .await?;

        Ok(countries)
    }

    /// Update country fields; absent values are left unchanged
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        name: Option<&str>,
        capital: Option<&str>,
        flag_url: Option<&str>,
        driving_side: Option<DrivingSide>,
        continent: Option<Continent>,
    ) -> AppResult<Country> {
        let country = sqlx::query_as::<_, Country>(
            r#"
            UPDATE countries
            SET
                name = COALESCE($2, name),
                capital = COALESCE($3, capital),
                flag_url = COALESCE($4, flag_url),
                driving_side = COALESCE($5, driving_side),
                continent = COALESCE($6, continent),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(capital)
        .bind(flag_url)
        .bind(driving_side)
        .bind(continent)
        .fetch_one(pool)
        .await?;

        Ok(country)
    }

    /// Delete a country; returns false when no row matched
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM countries WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
