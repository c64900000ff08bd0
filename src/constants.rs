//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

// =============================================================================
// USER VALIDATION
// =============================================================================

/// Maximum user name length
pub const MAX_USER_NAME_LENGTH: u64 = 255;

/// Exact number of digits in a phone number
pub const PHONE_DIGITS: usize = 9;

/// Number of leading digits in a national id
pub const NATIONAL_ID_DIGITS: usize = 8;

/// Control letters accepted at the end of a national id
/// (I, O and U are never issued)
pub const NATIONAL_ID_CONTROL_LETTERS: &str = "ABCDEFGHJKLMNPQRSTVWXYZ";

// =============================================================================
// CAR VALIDATION
// =============================================================================

/// Allowed seat counts for a car
pub const SEAT_OPTIONS: &[i16] = &[2, 4, 5, 7];

/// Lowest accepted daily rental rate
pub const MIN_DAILY_RATE: Decimal = Decimal::ZERO;

/// Highest accepted daily rental rate
pub const MAX_DAILY_RATE: Decimal = dec!(99.99);

/// Decimal places used for money amounts
pub const MONEY_SCALE: u32 = 2;

// =============================================================================
// API VERSIONING
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api";
