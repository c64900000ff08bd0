//! Car service

use std::collections::HashMap;

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{
        BodyRepository, BrandRepository, CarRepository, CountryRepository, RentalRepository,
    },
    error::{AppError, AppResult, FieldErrors},
    handlers::cars::response::CarDetail,
    middleware::auth::AuthenticatedUser,
    models::{Car, CarStatus, Gearbox, Rental},
    utils::validation::{validate_daily_rate, validate_seats, validate_year},
};

/// Car service for fleet management
pub struct CarService;

impl CarService {
    /// List all cars with their booked periods
    pub async fn list(pool: &PgPool) -> AppResult<Vec<(CarDetail, Vec<Rental>)>> {
        let cars = sqlx::query_as::<_, CarDetail>(&detail_query(""))
            .fetch_all(pool)
            .await?;

        let mut by_car: HashMap<Uuid, Vec<Rental>> = HashMap::new();
        for rental in RentalRepository::list(pool).await? {
            by_car.entry(rental.car_id).or_default().push(rental);
        }

        Ok(cars
            .into_iter()
            .map(|car| {
                let rentals = by_car.remove(&car.id).unwrap_or_default();
                (car, rentals)
            })
            .collect())
    }

    /// Show a car with its booked periods
    pub async fn get(pool: &PgPool, car_id: &Uuid) -> AppResult<(CarDetail, Vec<Rental>)> {
        let car = sqlx::query_as::<_, CarDetail>(&detail_query("WHERE c.id = $1"))
            .bind(car_id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Car not found".to_string()))?;

        let rentals = RentalRepository::list_by_car(pool, &car.id).await?;

        Ok((car, rentals))
    }

    /// Add a car to the fleet (staff only)
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &PgPool,
        requester: &AuthenticatedUser,
        brand_id: Uuid,
        body_id: Uuid,
        country_id: Uuid,
        year: Option<i16>,
        seats: i16,
        gearbox: Option<Gearbox>,
        status: Option<CarStatus>,
        daily_rate: Decimal,
    ) -> AppResult<Car> {
        if !requester.is_staff() {
            return Err(AppError::Forbidden(
                "Only administrators can add a new car.".to_string(),
            ));
        }

        let mut errors = FieldErrors::new();
        Self::collect_reference_errors(
            pool,
            Some(&brand_id),
            Some(&body_id),
            Some(&country_id),
            &mut errors,
        )
        .await?;
        Self::collect_field_errors(year, Some(seats), Some(daily_rate), &mut errors);

        if !errors.is_empty() {
            return Err(AppError::validation(errors));
        }

        CarRepository::create(
            pool,
            &brand_id,
            &body_id,
            &country_id,
            year,
            seats,
            gearbox,
            status.unwrap_or(CarStatus::Available),
            daily_rate,
        )
        .await
    }

    /// Update a car (staff only); absent fields are left unchanged
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        pool: &PgPool,
        requester: &AuthenticatedUser,
        car_id: &Uuid,
        brand_id: Option<Uuid>,
        body_id: Option<Uuid>,
        country_id: Option<Uuid>,
        year: Option<i16>,
        seats: Option<i16>,
        gearbox: Option<Gearbox>,
        status: Option<CarStatus>,
        daily_rate: Option<Decimal>,
    ) -> AppResult<Car> {
        if !requester.is_staff() {
            return Err(AppError::Forbidden(
                "Only administrators can edit a car.".to_string(),
            ));
        }

        if CarRepository::find_by_id(pool, car_id).await?.is_none() {
            return Err(AppError::NotFound("Car not found".to_string()));
        }

        let mut errors = FieldErrors::new();
        Self::collect_reference_errors(
            pool,
            brand_id.as_ref(),
            body_id.as_ref(),
            country_id.as_ref(),
            &mut errors,
        )
        .await?;
        Self::collect_field_errors(year, seats, daily_rate, &mut errors);

        if !errors.is_empty() {
            return Err(AppError::validation(errors));
        }

        CarRepository::update(
            pool,
            car_id,
            brand_id.as_ref(),
            body_id.as_ref(),
            country_id.as_ref(),
            year,
            seats,
            gearbox,
            status,
            daily_rate,
        )
        .await
    }

    /// Remove a car from the fleet (staff only); its rentals cascade away
    pub async fn delete(
        pool: &PgPool,
        requester: &AuthenticatedUser,
        car_id: &Uuid,
    ) -> AppResult<()> {
        if !requester.is_staff() {
            return Err(AppError::Forbidden(
                "Only administrators can delete a car.".to_string(),
            ));
        }

        if !CarRepository::delete(pool, car_id).await? {
            return Err(AppError::NotFound("Car not found".to_string()));
        }

        Ok(())
    }

    async fn collect_reference_errors(
        pool: &PgPool,
        brand_id: Option<&Uuid>,
        body_id: Option<&Uuid>,
        country_id: Option<&Uuid>,
        errors: &mut FieldErrors,
    ) -> AppResult<()> {
        if let Some(id) = brand_id {
            if !BrandRepository::exists(pool, id).await? {
                errors.add("brand_id", "The selected brand does not exist.");
            }
        }
        if let Some(id) = body_id {
            if !BodyRepository::exists(pool, id).await? {
                errors.add("body_id", "The selected body style does not exist.");
            }
        }
        if let Some(id) = country_id {
            if !CountryRepository::exists(pool, id).await? {
                errors.add("country_id", "The selected country does not exist.");
            }
        }
        Ok(())
    }

    fn collect_field_errors(
        year: Option<i16>,
        seats: Option<i16>,
        daily_rate: Option<Decimal>,
        errors: &mut FieldErrors,
    ) {
        if let Some(year) = year {
            if let Err(message) = validate_year(year) {
                errors.add("year", message);
            }
        }
        if let Some(seats) = seats {
            if let Err(message) = validate_seats(seats) {
                errors.add("seats", message);
            }
        }
        if let Some(rate) = daily_rate {
            if let Err(message) = validate_daily_rate(rate) {
                errors.add("daily_rate", message);
            }
        }
    }
}

/// Query joining a car with its brand, body style and country names
fn detail_query(filter: &str) -> String {
    format!(
        r#"
        SELECT
            c.id,
            b.name AS brand,
            bo.name AS body,
            c.year,
            c.seats,
            c.gearbox,
            c.status,
            c.daily_rate,
            co.name AS country
        FROM cars c
        JOIN car_brands b ON c.brand_id = b.id
        JOIN car_bodies bo ON c.body_id = bo.id
        JOIN countries co ON c.country_id = co.id
        {filter}
        ORDER BY c.created_at
        "#
    )
}
