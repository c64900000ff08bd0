//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod body;
pub mod brand;
pub mod car;
pub mod country;
pub mod place;
pub mod rental;
pub mod user;

pub use body::*;
pub use brand::*;
pub use car::*;
pub use country::*;
pub use place::*;
pub use rental::*;
pub use user::*;
