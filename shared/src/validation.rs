use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use crate::constants::{MAX_LOT_NAME_LENGTH, MAX_PROMO_CODE_LENGTH, MIN_PASSWORD_LENGTH, WHEEL_SLOTS};
use crate::lot::Lot;

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex color pattern compiles")
});

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles")
});

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if !EMAIL.is_match(email.trim()) {
        return Err(ValidationError::new("invalid_email_format"));
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    let has_minimum_length = password.chars().count() >= MIN_PASSWORD_LENGTH;
    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !has_minimum_length || !has_uppercase || !has_lowercase || !has_digit {
        return Err(ValidationError::new("invalid_password"));
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let allowed = phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')' | '.'));
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();

    if !allowed || !(6..=20).contains(&digits) {
        return Err(ValidationError::new("invalid_phone"));
    }
    Ok(())
}

pub fn validate_hex_color(color: &str) -> Result<(), ValidationError> {
    if !HEX_COLOR.is_match(color) {
        return Err(ValidationError::new("invalid_hex_color"));
    }
    Ok(())
}

/// Settings-form rules for the prize list. Zero odds are allowed on any
/// single lot but the wheel as a whole must be spinnable.
pub fn validate_lots(lots: &[Lot]) -> Result<(), ValidationError> {
    if lots.is_empty() || lots.len() > WHEEL_SLOTS {
        return Err(ValidationError::new("invalid_lot_count"));
    }
    if lots
        .iter()
        .any(|lot| lot.name.chars().count() > MAX_LOT_NAME_LENGTH)
    {
        return Err(ValidationError::new("lot_name_too_long"));
    }
    if lots.iter().any(|lot| {
        lot.promo_code
            .as_ref()
            .map_or(false, |code| code.chars().count() > MAX_PROMO_CODE_LENGTH)
    }) {
        return Err(ValidationError::new("promo_code_too_long"));
    }
    if !lots.iter().any(Lot::is_eligible) {
        return Err(ValidationError::new("no_eligible_lot"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("owner@cafe.fr").is_ok());
        assert!(validate_email("  owner@cafe.fr ").is_ok());
        assert!(validate_email("owner@cafe").is_err());
        assert!(validate_email("").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("Spinning1").is_ok());
        assert!(validate_password("short1A").is_err());
        assert!(validate_password("alllowercase1").is_err());
        assert!(validate_password("NoDigitsHere").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("+33 6 12 34 56 78").is_ok());
        assert!(validate_phone("(555) 123-4567").is_ok());
        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("call me").is_err());
    }

    #[test]
    fn test_validate_hex_color() {
        assert!(validate_hex_color("#fff").is_ok());
        assert!(validate_hex_color("#A1b2C3").is_ok());
        assert!(validate_hex_color("fff").is_err());
        assert!(validate_hex_color("#12345").is_err());
    }

    #[test]
    fn test_validate_lots() {
        let lots = vec![Lot::new("Coffee", 0), Lot::new("Cake", 2)];
        assert!(validate_lots(&lots).is_ok());

        let all_zero = vec![Lot::new("Coffee", 0), Lot::new("Cake", 0)];
        assert_eq!(
            validate_lots(&all_zero).unwrap_err().code,
            "no_eligible_lot"
        );

        assert!(validate_lots(&[]).is_err());

        let long_name = vec![Lot::new("x".repeat(MAX_LOT_NAME_LENGTH + 1), 1)];
        assert_eq!(
            validate_lots(&long_name).unwrap_err().code,
            "lot_name_too_long"
        );

        let long_code = vec![Lot::new("Cake", 1).with_promo_code("C".repeat(40))];
        assert_eq!(
            validate_lots(&long_code).unwrap_err().code,
            "promo_code_too_long"
        );
    }
}
