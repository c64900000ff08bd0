//! Car repository

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Car, CarStatus, Gearbox},
};

/// Repository for car database operations
pub struct CarRepository;

impl CarRepository {
    /// Create a new car
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &PgPool,
        brand_id: &Uuid,
        body_id: &Uuid,
        country_id: &Uuid,
        year: Option<i16>,
        seats: i16,
        gearbox: Option<Gearbox>,
        status: CarStatus,
        daily_rate: Decimal,
    ) -> AppResult<Car> {
        let car = sqlx::query_as::<_, Car>(
            r#"
            INSERT INTO cars (brand_id, body_id, country_id, year, seats, gearbox, status, daily_rate)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(brand_id)
        .bind(body_id)
        .bind(country_id)
        .bind(year)
        .bind(seats)
        .bind(gearbox)
        .bind(status)
        .bind(daily_rate)
        .fetch_one(pool)
        .await?;

        Ok(car)
    }

    /// Find car by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Car>> {
        let car = sqlx::query_as::<_, Car>(r#"SELECT * FROM cars WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(car)
    }

    /// List all cars
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Car>> {
        let cars = sqlx::query_as::<_, Car>(r#"SELECT * FROM cars ORDER BY created_at"#)
            .fetch_all(pool)
            .await?;

        Ok(cars)
    }

    /// Update car fields; absent values are left unchanged
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        brand_id: Option<&Uuid>,
        body_id: Option<&Uuid>,
        country_id: Option<&Uuid>,
        year: Option<i16>,
        seats: Option<i16>,
        gearbox: Option<Gearbox>,
        status: Option<CarStatus>,
        daily_rate: Option<Decimal>,
    ) -> AppResult<Car> {
        let car = sqlx::query_as::<_, Car>(
            r#"
            UPDATE cars
            SET
                brand_id = COALESCE($2, brand_id),
                body_id = COALESCE($3, body_id),
                country_id = COALESCE($4, country_id),
                year = COALESCE($5, year),
                seats = COALESCE($6, seats),
                gearbox = COALESCE($7, gearbox),
                status = COALESCE($8, status),
                daily_rate = COALESCE($9, daily_rate),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(brand_id)
        .bind(body_id)
        .bind(country_id)
        .bind(year)
        .bind(seats)
        .bind(gearbox)
        .bind(status)
        .bind(daily_rate)
        .fetch_one(pool)
        .await?;

        Ok(car)
    }

    /// Delete a car; rentals for it are removed by the cascade.
    /// Returns false when no row matched.
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM cars WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
