//! Catalog service
//!
//! CRUD over the travel catalog: countries, places, car brands and car
//! body styles. Reads are open; mutations are staff-only.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{BodyRepository, BrandRepository, CountryRepository, PlaceRepository},
    error::{AppError, AppResult},
    handlers::places::response::PlaceDetail,
    middleware::auth::AuthenticatedUser,
    models::{CarBody, CarBrand, Continent, Country, DrivingSide},
};

/// Catalog service for countries, places, brands and body styles
pub struct CatalogService;

impl CatalogService {
    // =========================================================================
    // Countries
    // =========================================================================

    pub async fn list_countries(pool: &PgPool) -> AppResult<Vec<Country>> {
        CountryRepository::list(pool).await
    }

    pub async fn get_country(pool: &PgPool, country_id: &Uuid) -> AppResult<Country> {
        CountryRepository::find_by_id(pool, country_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Country not found".to_string()))
    }

    pub async fn create_country(
        pool: &PgPool,
        requester: &AuthenticatedUser,
        name: &str,
        capital: Option<&str>,
        flag_url: Option<&str>,
        driving_side: Option<DrivingSide>,
        continent: Continent,
    ) -> AppResult<Country> {
        Self::ensure_staff(requester, "Only administrators can create a country.")?;

        CountryRepository::create(pool, name, capital, flag_url, driving_side, continent).await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update_country(
        pool: &PgPool,
        requester: &AuthenticatedUser,
        country_id: &Uuid,
        name: Option<&str>,
        capital: Option<&str>,
        flag_url: Option<&str>,
        driving_side: Option<DrivingSide>,
        continent: Option<Continent>,
    ) -> AppResult<Country> {
        Self::ensure_staff(requester, "Only administrators can edit a country.")?;

        if !CountryRepository::exists(pool, country_id).await? {
            return Err(AppError::NotFound("Country not found".to_string()));
        }

        CountryRepository::update(
            pool,
            country_id,
            name,
            capital,
            flag_url,
            driving_side,
            continent,
        )
        .await
    }

    pub async fn delete_country(
        pool: &PgPool,
        requester: &AuthenticatedUser,
        country_id: &Uuid,
    ) -> AppResult<()> {
        Self::ensure_staff(requester, "Only administrators can delete a country.")?;

        if !CountryRepository::delete(pool, country_id).await? {
            return Err(AppError::NotFound("Country not found".to_string()));
        }

        Ok(())
    }

    // =========================================================================
    // Places
    // =========================================================================

    pub async fn list_places(pool: &PgPool) -> AppResult<Vec<PlaceDetail>> {
        let places = sqlx::query_as::<_, PlaceDetail>(&place_detail_query(""))
            .fetch_all(pool)
            .await?;

        Ok(places)
    }

    pub async fn get_place(pool: &PgPool, place_id: &Uuid) -> AppResult<PlaceDetail> {
        sqlx::query_as::<_, PlaceDetail>(&place_detail_query("WHERE p.id = $1"))
            .bind(place_id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Place not found".to_string()))
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create_place(
        pool: &PgPool,
        requester: &AuthenticatedUser,
        name: &str,
        description: Option<&str>,
        image_url: Option<&str>,
        web_url: Option<&str>,
        location_url: Option<&str>,
        country_id: &Uuid,
    ) -> AppResult<PlaceDetail> {
        Self::ensure_staff(requester, "Only administrators can create a place.")?;

        if !CountryRepository::exists(pool, country_id).await? {
            return Err(AppError::validation_field(
                "country_id",
                "The selected country does not exist.",
            ));
        }

        let place = PlaceRepository::create(
            pool,
            name,
            description,
            image_url,
            web_url,
            location_url,
            country_id,
        )
        .await?;

        Self::get_place(pool, &place.id).await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update_place(
        pool: &PgPool,
        requester: &AuthenticatedUser,
        place_id: &Uuid,
        name: Option<&str>,
        description: Option<&str>,
        image_url: Option<&str>,
        web_url: Option<&str>,
        location_url: Option<&str>,
        country_id: Option<&Uuid>,
    ) -> AppResult<PlaceDetail> {
        Self::ensure_staff(requester, "Only administrators can edit a place.")?;

        if PlaceRepository::find_by_id(pool, place_id).await?.is_none() {
            return Err(AppError::NotFound("Place not found".to_string()));
        }

        if let Some(country_id) = country_id {
            if !CountryRepository::exists(pool, country_id).await? {
                return Err(AppError::validation_field(
                    "country_id",
                    "The selected country does not exist.",
                ));
            }
        }

        let place = PlaceRepository::update(
            pool,
            place_id,
            name,
            description,
            image_url,
            web_url,
            location_url,
            country_id,
        )
        .await?;

        Self::get_place(pool, &place.id).await
    }

    pub async fn delete_place(
        pool: &PgPool,
        requester: &AuthenticatedUser,
        place_id: &Uuid,
    ) -> AppResult<()> {
        Self::ensure_staff(requester, "Only administrators can delete a place.")?;

        if !PlaceRepository::delete(pool, place_id).await? {
            return Err(AppError::NotFound("Place not found".to_string()));
        }

        Ok(())
    }

    // =========================================================================
    // Car brands
    // =========================================================================

    pub async fn list_brands(pool: &PgPool) -> AppResult<Vec<CarBrand>> {
        BrandRepository::list(pool).await
    }

    pub async fn get_brand(pool: &PgPool, brand_id: &Uuid) -> AppResult<CarBrand> {
        BrandRepository::find_by_id(pool, brand_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Brand not found".to_string()))
    }

    pub async fn create_brand(
        pool: &PgPool,
        requester: &AuthenticatedUser,
        name: &str,
    ) -> AppResult<CarBrand> {
        Self::ensure_staff(requester, "Only administrators can create a brand.")?;

        if BrandRepository::name_in_use(pool, name, None).await? {
            return Err(AppError::validation_field(
                "name",
                "A brand with that name already exists.",
            ));
        }

        BrandRepository::create(pool, name).await
    }

    pub async fn update_brand(
        pool: &PgPool,
        requester: &AuthenticatedUser,
        brand_id: &Uuid,
        name: &str,
    ) -> AppResult<CarBrand> {
        Self::ensure_staff(requester, "Only administrators can edit a brand.")?;

        if !BrandRepository::exists(pool, brand_id).await? {
            return Err(AppError::NotFound("Brand not found".to_string()));
        }

        if BrandRepository::name_in_use(pool, name, Some(brand_id)).await? {
            return Err(AppError::validation_field(
                "name",
                "A brand with that name already exists.",
            ));
        }

        BrandRepository::update(pool, brand_id, name).await
    }

    pub async fn delete_brand(
        pool: &PgPool,
        requester: &AuthenticatedUser,
        brand_id: &Uuid,
    ) -> AppResult<()> {
        Self::ensure_staff(requester, "Only administrators can delete a brand.")?;

        if !BrandRepository::delete(pool, brand_id).await? {
            return Err(AppError::NotFound("Brand not found".to_string()));
        }

        Ok(())
    }

    // =========================================================================
    // Car body styles
    // =========================================================================

    pub async fn list_bodies(pool: &PgPool) -> AppResult<Vec<CarBody>> {
        BodyRepository::list(pool).await
    }

    pub async fn get_body(pool: &PgPool, body_id: &Uuid) -> AppResult<CarBody> {
        BodyRepository::find_by_id(pool, body_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Body style not found".to_string()))
    }

    pub async fn create_body(
        pool: &PgPool,
        requester: &AuthenticatedUser,
        name: &str,
    ) -> AppResult<CarBody> {
        Self::ensure_staff(requester, "Only administrators can create a body style.")?;

        if BodyRepository::name_in_use(pool, name, None).await? {
            return Err(AppError::validation_field(
                "name",
                "A body style with that name already exists.",
            ));
        }

        BodyRepository::create(pool, name).await
    }

    pub async fn update_body(
        pool: &PgPool,
        requester: &AuthenticatedUser,
        body_id: &Uuid,
        name: &str,
    ) -> AppResult<CarBody> {
        Self::ensure_staff(requester, "Only administrators can edit a body style.")?;

        if !BodyRepository::exists(pool, body_id).await? {
            return Err(AppError::NotFound("Body style not found".to_string()));
        }

        if BodyRepository::name_in_use(pool, name, Some(body_id)).await? {
            return Err(AppError::validation_field(
                "name",
                "A body style with that name already exists.",
            ));
        }

        BodyRepository::update(pool, body_id, name).await
    }

    pub async fn delete_body(
        pool: &PgPool,
        requester: &AuthenticatedUser,
        body_id: &Uuid,
    ) -> AppResult<()> {
        Self::ensure_staff(requester, "Only administrators can delete a body style.")?;

        if !BodyRepository::delete(pool, body_id).await? {
            return Err(AppError::NotFound("Body style not found".to_string()));
        }

        Ok(())
    }

    fn ensure_staff(requester: &AuthenticatedUser, denial: &str) -> AppResult<()> {
        if requester.is_staff() {
            Ok(())
        } else {
            Err(AppError::Forbidden(denial.to_string()))
        }
    }
}

/// Query joining a place with its country name
fn place_detail_query(filter: &str) -> String {
    format!(
        r#"
        SELECT
            p.id,
            p.name,
            p.description,
            p.image_url,
            p.web_url,
            p.location_url,
            co.name AS country
        FROM places p
        JOIN countries co ON p.country_id = co.id
        {filter}
        ORDER BY p.name
        "#
    )
}
