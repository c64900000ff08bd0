//! Input validation utilities

use rust_decimal::Decimal;

use crate::constants::{
    MAX_DAILY_RATE, MIN_DAILY_RATE, NATIONAL_ID_CONTROL_LETTERS, NATIONAL_ID_DIGITS, PHONE_DIGITS,
    SEAT_OPTIONS,
};

/// Validate a phone number (exactly nine digits)
pub fn validate_phone(phone: &str) -> Result<(), &'static str> {
    if phone.len() != PHONE_DIGITS || !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err("The phone number must be exactly 9 digits.");
    }
    Ok(())
}

/// Validate a national id (eight digits followed by a control letter)
pub fn validate_national_id(id: &str) -> Result<(), &'static str> {
    let chars: Vec<char> = id.chars().collect();
    if chars.len() != NATIONAL_ID_DIGITS + 1
        || !chars[..NATIONAL_ID_DIGITS].iter().all(|c| c.is_ascii_digit())
    {
        return Err("The national id must be 8 digits followed by a letter.");
    }
    let letter = chars[NATIONAL_ID_DIGITS].to_ascii_uppercase();
    if !NATIONAL_ID_CONTROL_LETTERS.contains(letter) {
        return Err("The national id control letter is not valid.");
    }
    Ok(())
}

/// Validate a car seat count
pub fn validate_seats(seats: i16) -> Result<(), &'static str> {
    if SEAT_OPTIONS.contains(&seats) {
        Ok(())
    } else {
        Err("The number of seats must be 2, 4, 5 or 7.")
    }
}

/// Validate a car daily rental rate
pub fn validate_daily_rate(rate: Decimal) -> Result<(), &'static str> {
    if rate < MIN_DAILY_RATE || rate > MAX_DAILY_RATE {
        return Err("The daily rate must be between 0 and 99.99.");
    }
    Ok(())
}

/// Validate a car model year (four digits)
pub fn validate_year(year: i16) -> Result<(), &'static str> {
    if (1000..=9999).contains(&year) {
        Ok(())
    } else {
        Err("The year must be a 4-digit number.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("123456789").is_ok());
        assert!(validate_phone("12345678").is_err()); // Too short
        assert!(validate_phone("1234567890").is_err()); // Too long
        assert!(validate_phone("12345678a").is_err()); // Non-digit
    }

    #[test]
    fn test_validate_national_id() {
        assert!(validate_national_id("12345678Z").is_ok());
        assert!(validate_national_id("12345678z").is_ok()); // Case-insensitive
        assert!(validate_national_id("12345678I").is_err()); // I never issued
        assert!(validate_national_id("12345678O").is_err()); // O never issued
        assert!(validate_national_id("12345678U").is_err()); // U never issued
        assert!(validate_national_id("1234567Z").is_err()); // Too few digits
        assert!(validate_national_id("123456789").is_err()); // No letter
        assert!(validate_national_id("1234567aZ").is_err()); // Non-digit
    }

    #[test]
    fn test_validate_seats() {
        assert!(validate_seats(2).is_ok());
        assert!(validate_seats(4).is_ok());
        assert!(validate_seats(5).is_ok());
        assert!(validate_seats(7).is_ok());
        assert!(validate_seats(3).is_err());
        assert!(validate_seats(9).is_err());
    }

    #[test]
    fn test_validate_daily_rate() {
        assert!(validate_daily_rate(dec!(0)).is_ok());
        assert!(validate_daily_rate(dec!(45.99)).is_ok());
        assert!(validate_daily_rate(dec!(99.99)).is_ok());
        assert!(validate_daily_rate(dec!(100.00)).is_err());
        assert!(validate_daily_rate(dec!(-0.01)).is_err());
    }

    #[test]
    fn test_validate_year() {
        assert!(validate_year(2020).is_ok());
        assert!(validate_year(999).is_err());
    }
}
