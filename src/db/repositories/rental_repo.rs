//! Rental repository

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Rental};

/// Repository for rental database operations
pub struct RentalRepository;

impl RentalRepository {
    /// Create a new rental with its derived cost
    pub async fn create(
        pool: &PgPool,
        car_id: &Uuid,
        client_id: &Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
        cost: Decimal,
    ) -> AppResult<Rental> {
        let rental = sqlx::query_as::<_, Rental>(
            r#"
            INSERT INTO rentals (car_id, client_id, start_date, end_date, cost)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(car_id)
        .bind(client_id)
        .bind(start_date)
        .bind(end_date)
        .bind(cost)
        .fetch_one(pool)
        .await?;

        Ok(rental)
    }

    /// Find rental by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Rental>> {
        let rental = sqlx::query_as::<_, Rental>(r#"SELECT * FROM rentals WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(rental)
    }

    /// List all rentals
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Rental>> {
        let rentals = sqlx::query_as::<_, Rental>(r#"SELECT * FROM rentals ORDER BY start_date"#)
            .fetch_all(pool)
            .await?;

        Ok(rentals)
    }

    /// List the rentals booked for a car (the availability scan source)
    pub async fn list_by_car(pool: &PgPool, car_id: &Uuid) -> AppResult<Vec<Rental>> {
        let rentals = sqlx::query_as::<_, Rental>(
            r#"SELECT * FROM rentals WHERE car_id = $1 ORDER BY start_date"#,
        )
        .bind(car_id)
        .fetch_all(pool)
        .await?;

        Ok(rentals)
    }

    /// Update rental fields; absent values are left unchanged
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        car_id: Option<&Uuid>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        cost: Option<Decimal>,
    ) -> AppResult<Rental> {
        let rental = sqlx::query_as::<_, Rental>(
            r#"
            UPDATE rentals
            SET
                car_id = COALESCE($2, car_id),
                start_date = COALESCE($3, start_date),
                end_date = COALESCE($4, end_date),
                cost = COALESCE($5, cost),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(car_id)
        .bind(start_date)
        .bind(end_date)
        .bind(cost)
        .fetch_one(pool)
        .await?;

        Ok(rental)
    }

    /// Delete a rental; returns false when no row matched
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM rentals WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
