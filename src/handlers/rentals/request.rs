//! Rental request DTOs

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

/// Create rental request.
///
/// `client_id` is mandatory for staff booking on a client's behalf and
/// defaults to the requester for plain clients. Cost is never accepted
/// from the payload.
#[derive(Debug, Deserialize)]
pub struct CreateRentalRequest {
    pub car_id: Uuid,
    pub client_id: Option<Uuid>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Update rental request.
///
/// `id` and `client_id` are accepted only so attempts to change them can
/// be rejected; both are immutable after creation.
#[derive(Debug, Deserialize)]
pub struct UpdateRentalRequest {
    pub id: Option<Uuid>,
    pub client_id: Option<Uuid>,
    pub car_id: Option<Uuid>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}
