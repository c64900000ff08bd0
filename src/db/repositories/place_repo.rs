//! Place repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Place};

/// Repository for place database operations
pub struct PlaceRepository;

impl PlaceRepository {
    /// Create a new place
    pub async fn create(
        pool: &PgPool,
        name: &str,
        description: Option<&str>,
        image_url: Option<&str>,
        web_url: Option<&str>,
        location_url: Option<&str>,
        country_id: &Uuid,
    ) -> AppResult<Place> {
        let place = sqlx::query_as::<_, Place>(
            r#"
            INSERT INTO places (name, description, image_url, web_url, location_url, country_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(image_url)
        .bind(web_url)
        .bind(location_url)
        .bind(country_id)
        .fetch_one(pool)
        .await?;

        Ok(place)
    }

    /// Find place by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Place>> {
        let place = sqlx::query_as::<_, Place>(r#"SELECT * FROM places WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(place)
    }

    /// List all places
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Place>> {
        let places = sqlx::query_as::<_, Place>(r#"SELECT * FROM places ORDER BY name"#)
            .fetch_all(pool)
            .await?;

        Ok(places)
    }

    /// Update place fields; absent values are left unchanged
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        name: Option<&str>,
        description: Option<&str>,
        image_url: Option<&str>,
        web_url: Option<&str>,
        location_url: Option<&str>,
        country_id: Option<&Uuid>,
    ) -> AppResult<Place> {
        let place = sqlx::query_as::<_, Place>(
            r#"
            UPDATE places
            SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                image_url = COALESCE($4, image_url),
                web_url = COALESCE($5, web_url),
                location_url = COALESCE($6, location_url),
                country_id = COALESCE($7, country_id),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .bind(image_url)
        .bind(web_url)
        .bind(location_url)
        .bind(country_id)
        .fetch_one(pool)
        .await?;

        Ok(place)
    }

    /// Delete a place; returns false when no row matched
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM places WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
