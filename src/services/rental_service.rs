//! Rental service
//!
//! Booking lifecycle: authorization, availability conflict detection and
//! derived pricing. Cost is always computed server-side from the car's
//! daily rate; it is never taken from a request payload.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::MONEY_SCALE,
    db::repositories::{CarRepository, RentalRepository, UserRepository},
    error::{AppError, AppResult, FieldErrors},
    handlers::rentals::response::RentalDetail,
    middleware::auth::AuthenticatedUser,
    models::{Car, DateRange, Rental},
};

/// Rental service for booking business logic
pub struct RentalService;

impl RentalService {
    /// List all rentals (staff only)
    pub async fn list(pool: &PgPool, requester: &AuthenticatedUser) -> AppResult<Vec<RentalDetail>> {
        if !requester.is_staff() {
            return Err(AppError::Forbidden(
                "Only administrators can view all rentals.".to_string(),
            ));
        }

        let rentals = sqlx::query_as::<_, RentalDetail>(&detail_query(""))
            .fetch_all(pool)
            .await?;

        Ok(rentals)
    }

    /// Create a rental for the resolved client
    pub async fn create(
        pool: &PgPool,
        requester: &AuthenticatedUser,
        car_id: Uuid,
        client_id: Option<Uuid>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> AppResult<RentalDetail> {
        let client_id = Self::resolve_client_id(requester, client_id)?;

        let mut errors = FieldErrors::new();

        let car = CarRepository::find_by_id(pool, &car_id).await?;
        if car.is_none() {
            errors.add("car_id", "The selected car does not exist.");
        }
        if !UserRepository::exists(pool, &client_id).await? {
            errors.add("client_id", "The selected client does not exist.");
        }
        let period = DateRange::new(start_date, end_date);
        if period.is_none() {
            errors.add("end_date", "The end date must be after the start date.");
        }

        let (car, period) = match (car, period) {
            (Some(car), Some(period)) if errors.is_empty() => (car, period),
            _ => return Err(AppError::validation(errors)),
        };

        let cost = Self::price_booking(pool, &car, period, None).await?;

        let rental =
            RentalRepository::create(pool, &car.id, &client_id, period.start, period.end, cost)
                .await?;

        Self::detail(pool, &rental.id).await
    }

    /// Show a rental (staff or the rental's own client)
    pub async fn get(
        pool: &PgPool,
        requester: &AuthenticatedUser,
        rental_id: &Uuid,
    ) -> AppResult<RentalDetail> {
        let rental = Self::find_or_not_found(pool, rental_id).await?;

        Self::ensure_can_access(
            requester,
            &rental,
            "Only an administrator or the rental's own client can view a rental.",
        )?;

        Self::detail(pool, &rental.id).await
    }

    /// Update a rental.
    ///
    /// The rental id and its client are immutable. Availability and pricing
    /// are re-evaluated only when the car and both dates are all supplied
    /// together; a partial update leaves cost and conflicts untouched.
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        pool: &PgPool,
        requester: &AuthenticatedUser,
        rental_id: &Uuid,
        supplied_id: Option<Uuid>,
        supplied_client_id: Option<Uuid>,
        car_id: Option<Uuid>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> AppResult<RentalDetail> {
        let rental = Self::find_or_not_found(pool, rental_id).await?;

        Self::ensure_can_access(
            requester,
            &rental,
            "Only an administrator or the rental's own client can edit a rental.",
        )?;

        if supplied_id.is_some_and(|id| id != rental.id) {
            return Err(AppError::unprocessable("The rental id cannot be changed."));
        }
        if supplied_client_id.is_some_and(|id| id != rental.client_id) {
            return Err(AppError::unprocessable(
                "The client of a rental cannot be changed.",
            ));
        }

        let mut errors = FieldErrors::new();

        let car = match car_id {
            Some(id) => {
                let car = CarRepository::find_by_id(pool, &id).await?;
                if car.is_none() {
                    errors.add("car_id", "The selected car does not exist.");
                }
                car
            }
            None => None,
        };

        // Supplied dates are validated against the stored ones they combine with
        let effective_start = start_date.unwrap_or(rental.start_date);
        let effective_end = end_date.unwrap_or(rental.end_date);
        let period = DateRange::new(effective_start, effective_end);
        if (start_date.is_some() || end_date.is_some()) && period.is_none() {
            errors.add("end_date", "The end date must be after the start date.");
        }

        if !errors.is_empty() {
            return Err(AppError::validation(errors));
        }

        // A full car+dates reassignment re-enters the availability and
        // pricing pipeline; anything less keeps the stored cost.
        let cost = match (Self::reprices(car_id, start_date, end_date), car, period) {
            (true, Some(car), Some(period)) => {
                Some(Self::price_booking(pool, &car, period, Some(rental.id)).await?)
            }
            _ => None,
        };

        let updated = RentalRepository::update(
            pool,
            &rental.id,
            car_id.as_ref(),
            start_date,
            end_date,
            cost,
        )
        .await?;

        Self::detail(pool, &updated.id).await
    }

    /// Delete a rental (staff or the rental's own client)
    pub async fn delete(
        pool: &PgPool,
        requester: &AuthenticatedUser,
        rental_id: &Uuid,
    ) -> AppResult<()> {
        let rental = Self::find_or_not_found(pool, rental_id).await?;

        Self::ensure_can_access(
            requester,
            &rental,
            "Only an administrator or the rental's own client can delete a rental.",
        )?;

        RentalRepository::delete(pool, &rental.id).await?;

        Ok(())
    }

    // =========================================================================
    // Booking pipeline
    // =========================================================================

    /// Car-state check, availability scan and pricing for a booking
    async fn price_booking(
        pool: &PgPool,
        car: &Car,
        period: DateRange,
        exclude_rental: Option<Uuid>,
    ) -> AppResult<Decimal> {
        if !car.is_rentable() {
            return Err(AppError::CarUnavailable);
        }

        let existing = RentalRepository::list_by_car(pool, &car.id).await?;
        if Self::has_conflict(&existing, period, exclude_rental) {
            return Err(AppError::DateConflict);
        }

        Ok(Self::compute_cost(period, car.daily_rate))
    }

    /// Scan a car's rentals for an inclusive date overlap.
    ///
    /// `exclude_rental` drops the rental being updated from the scan so it
    /// does not conflict with its own prior record.
    fn has_conflict(existing: &[Rental], period: DateRange, exclude_rental: Option<Uuid>) -> bool {
        existing
            .iter()
            .filter(|rental| exclude_rental.is_none_or(|id| rental.id != id))
            .any(|rental| rental.period().overlaps(period))
    }

    /// Cost of a booking: billed days times the daily rate, rounded
    /// half-up to cents
    fn compute_cost(period: DateRange, daily_rate: Decimal) -> Decimal {
        (Decimal::from(period.days()) * daily_rate)
            .round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Work out which client the rental is for.
    ///
    /// Plain clients always book for themselves; naming someone else is
    /// forbidden. Staff must name the client explicitly.
    fn resolve_client_id(
        requester: &AuthenticatedUser,
        supplied: Option<Uuid>,
    ) -> AppResult<Uuid> {
        if requester.is_staff() {
            supplied.ok_or_else(|| {
                AppError::validation_field(
                    "client_id",
                    "The client id is mandatory for administrators and superadministrators.",
                )
            })
        } else {
            match supplied {
                Some(id) if id != requester.id => Err(AppError::Forbidden(
                    "You are not allowed to rent on behalf of another client.".to_string(),
                )),
                _ => Ok(requester.id),
            }
        }
    }

    /// A partial update bypasses the availability and pricing pipeline;
    /// only a full car+dates reassignment re-enters it.
    fn reprices(
        car_id: Option<Uuid>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> bool {
        car_id.is_some() && start_date.is_some() && end_date.is_some()
    }

    // =========================================================================
    // Shared lookups
    // =========================================================================

    async fn find_or_not_found(pool: &PgPool, id: &Uuid) -> AppResult<Rental> {
        RentalRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Rental not found".to_string()))
    }

    fn ensure_can_access(
        requester: &AuthenticatedUser,
        rental: &Rental,
        denial: &str,
    ) -> AppResult<()> {
        if requester.is_staff() || rental.is_owned_by(requester.id) {
            Ok(())
        } else {
            Err(AppError::Forbidden(denial.to_string()))
        }
    }

    async fn detail(pool: &PgPool, id: &Uuid) -> AppResult<RentalDetail> {
        sqlx::query_as::<_, RentalDetail>(&detail_query("WHERE r.id = $1"))
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Rental not found".to_string()))
    }
}

/// Nested-summary query joining the rental with its car, catalog names
/// and client
fn detail_query(filter: &str) -> String {
    format!(
        r#"
        SELECT
            r.id,
            c.id AS car_id,
            b.name AS brand,
            bo.name AS body,
            c.year,
            c.seats,
            c.gearbox,
            c.status,
            c.daily_rate,
            co.name AS country,
            u.id AS client_id,
            u.name AS client_name,
            r.start_date,
            r.end_date,
            r.cost
        FROM rentals r
        JOIN cars c ON r.car_id = c.id
        JOIN car_brands b ON c.brand_id = b.id
        JOIN car_bodies bo ON c.body_id = bo.id
        JOIN countries co ON c.country_id = co.id
        JOIN users u ON r.client_id = u.id
        {filter}
        ORDER BY r.start_date
        "#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    use crate::models::Role;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn range(start: &str, end: &str) -> DateRange {
        DateRange::new(date(start), date(end)).unwrap()
    }

    fn rental(car_id: Uuid, start: &str, end: &str) -> Rental {
        Rental {
            id: Uuid::new_v4(),
            car_id,
            client_id: Uuid::new_v4(),
            start_date: date(start),
            end_date: date(end),
            cost: dec!(100.00),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn user(role: Role) -> AuthenticatedUser {
        AuthenticatedUser {
            id: Uuid::new_v4(),
            name: "test".to_string(),
            role,
        }
    }

    #[test]
    fn test_cost_for_inclusive_days() {
        // 2025-09-01 to 2025-09-05 spans 5 billed days
        let cost = RentalService::compute_cost(range("2025-09-01", "2025-09-05"), dec!(45.99));
        assert_eq!(cost, dec!(229.95));
    }

    #[test]
    fn test_cost_rounds_half_up_to_cents() {
        // 3 days at 33.335 = 100.005 -> 100.01
        let cost = RentalService::compute_cost(range("2025-09-01", "2025-09-03"), dec!(33.335));
        assert_eq!(cost, dec!(100.01));
    }

    #[test]
    fn test_no_conflict_with_disjoint_bookings() {
        let car = Uuid::new_v4();
        let existing = vec![rental(car, "2025-09-01", "2025-09-05")];
        assert!(!RentalService::has_conflict(
            &existing,
            range("2025-09-06", "2025-09-10"),
            None
        ));
    }

    #[test]
    fn test_touching_boundary_conflicts() {
        let car = Uuid::new_v4();
        let existing = vec![rental(car, "2025-09-01", "2025-09-05")];
        assert!(RentalService::has_conflict(
            &existing,
            range("2025-09-05", "2025-09-10"),
            None
        ));
    }

    #[test]
    fn test_update_does_not_conflict_with_itself() {
        let car = Uuid::new_v4();
        let existing = vec![rental(car, "2025-09-01", "2025-09-05")];
        let own_id = existing[0].id;
        assert!(!RentalService::has_conflict(
            &existing,
            range("2025-09-02", "2025-09-06"),
            Some(own_id)
        ));
        // But it still conflicts with everyone else
        assert!(RentalService::has_conflict(
            &existing,
            range("2025-09-02", "2025-09-06"),
            Some(Uuid::new_v4())
        ));
    }

    #[test]
    fn test_client_books_for_themselves_by_default() {
        let requester = user(Role::Client);
        let resolved = RentalService::resolve_client_id(&requester, None).unwrap();
        assert_eq!(resolved, requester.id);

        // Naming themselves explicitly is fine too
        let resolved = RentalService::resolve_client_id(&requester, Some(requester.id)).unwrap();
        assert_eq!(resolved, requester.id);
    }

    #[test]
    fn test_client_cannot_book_for_someone_else() {
        let requester = user(Role::Client);
        let result = RentalService::resolve_client_id(&requester, Some(Uuid::new_v4()));
        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }

    #[test]
    fn test_staff_must_name_the_client() {
        let requester = user(Role::Admin);
        assert!(matches!(
            RentalService::resolve_client_id(&requester, None),
            Err(AppError::Validation { .. })
        ));

        let client = Uuid::new_v4();
        let resolved = RentalService::resolve_client_id(&requester, Some(client)).unwrap();
        assert_eq!(resolved, client);
    }

    #[test]
    fn test_partial_updates_bypass_repricing() {
        let car = Some(Uuid::new_v4());
        let start = Some(date("2025-09-01"));
        let end = Some(date("2025-09-05"));

        // Only a full car+dates reassignment re-enters the pipeline
        assert!(RentalService::reprices(car, start, end));
        assert!(!RentalService::reprices(None, start, None));
        assert!(!RentalService::reprices(None, start, end));
        assert!(!RentalService::reprices(car, None, end));
        assert!(!RentalService::reprices(None, None, None));
    }

    #[test]
    fn test_owner_and_staff_can_access() {
        let car = Uuid::new_v4();
        let booking = rental(car, "2025-09-01", "2025-09-05");

        let owner = AuthenticatedUser {
            id: booking.client_id,
            name: "owner".to_string(),
            role: Role::Client,
        };
        assert!(RentalService::ensure_can_access(&owner, &booking, "denied").is_ok());

        let admin = user(Role::Admin);
        assert!(RentalService::ensure_can_access(&admin, &booking, "denied").is_ok());

        let stranger = user(Role::Client);
        assert!(matches!(
            RentalService::ensure_can_access(&stranger, &booking, "denied"),
            Err(AppError::Forbidden(_))
        ));
    }
}
