//! Database repositories

pub mod body_repo;
pub mod brand_repo;
pub mod car_repo;
pub mod country_repo;
pub mod place_repo;
pub mod rental_repo;
pub mod user_repo;

pub use body_repo::BodyRepository;
pub use brand_repo::BrandRepository;
pub use car_repo::CarRepository;
pub use country_repo::CountryRepository;
pub use place_repo::PlaceRepository;
pub use rental_repo::RentalRepository;
pub use user_repo::UserRepository;
