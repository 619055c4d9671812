//! Field-level parsing and validation of request payloads.
//!
//! Payload DTOs keep every field optional so the same shape serves create and partial
//! edit. These helpers decide whether a field counts as present and coerce loosely typed
//! JSON (numbers sent as strings, identifiers sent as numbers) into the column types.

use chrono::{NaiveDate, NaiveDateTime};
use email_address::EmailAddress;
use serde_json::Value;

use crate::server::error::validation::ValidationError;

/// Serialized form of date columns.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Serialized form of datetime columns.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Minimum accepted password length in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Returns the text when it is not blank.
pub fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Returns the JSON value when it is neither null nor a blank string.
///
/// Numeric zero and `false` count as present.
pub fn present_value(value: Option<Value>) -> Option<Value> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.trim().is_empty() => None,
        Some(v) => Some(v),
    }
}

/// Reads a text column that clients may send as a JSON string or number.
///
/// # Returns
/// - `Ok(None)` - Field absent, null or blank
/// - `Ok(Some(String))` - The text, numbers rendered in their JSON form
/// - `Err(ValidationError::EmptyField)` - Value was an object, array or boolean
pub fn text_value(field: &str, value: Option<Value>) -> Result<Option<String>, ValidationError> {
    match present_value(value) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(_) => Err(ValidationError::EmptyField(field.to_string())),
    }
}

/// Parses a float from a JSON number or numeric string.
///
/// # Arguments
/// - `field` - Field name used in the error message
/// - `value` - The present JSON value
///
/// # Returns
/// - `Ok(f64)` - Finite parsed value
/// - `Err(ValidationError::InvalidNumber)` - Not a number or not finite
pub fn parse_float(field: &str, value: &Value) -> Result<f64, ValidationError> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed
        .filter(|v| v.is_finite())
        .ok_or_else(|| ValidationError::InvalidNumber(field.to_string()))
}

/// Parses an integer from a JSON number or numeric string.
///
/// Whole floats such as `3.0` are accepted, anything with a fractional part is not.
///
/// # Returns
/// - `Ok(i32)` - Parsed value
/// - `Err(ValidationError::InvalidInteger)` - Not an integer or out of range
pub fn parse_int(field: &str, value: &Value) -> Result<i32, ValidationError> {
    let parsed = match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(i),
            None => n
                .as_f64()
                .filter(|f| f.fract() == 0.0 && f.is_finite())
                .map(|f| f as i64),
        },
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed
        .and_then(|i| i32::try_from(i).ok())
        .ok_or_else(|| ValidationError::InvalidInteger(field.to_string()))
}

/// Parses an integer that must not be negative, as used by counters and quantities.
pub fn parse_count(field: &str, value: &Value) -> Result<i32, ValidationError> {
    let count = parse_int(field, value)?;
    if count < 0 {
        return Err(ValidationError::NegativeValue(field.to_string()));
    }

    Ok(count)
}

/// Parses an optional float field, treating absent, null and blank as `None`.
pub fn optional_float(field: &str, value: Option<Value>) -> Result<Option<f64>, ValidationError> {
    present_value(value)
        .map(|v| parse_float(field, &v))
        .transpose()
}

/// Parses an optional non-negative integer field, treating absent, null and blank as `None`.
pub fn optional_count(field: &str, value: Option<Value>) -> Result<Option<i32>, ValidationError> {
    present_value(value)
        .map(|v| parse_count(field, &v))
        .transpose()
}

/// Parses an optional identifier field.
pub fn optional_id(field: &str, value: Option<Value>) -> Result<Option<i32>, ValidationError> {
    present_value(value)
        .map(|v| parse_int(field, &v))
        .transpose()
}

/// Rejects a field that was sent but is blank.
///
/// Used by partial edits where absence means "unchanged" but an explicit empty string is
/// an attempt to clear a mandatory column.
pub fn non_blank(field: &str, value: Option<String>) -> Result<Option<String>, ValidationError> {
    match value {
        Some(v) if v.trim().is_empty() => Err(ValidationError::EmptyField(field.to_string())),
        other => Ok(other),
    }
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(field.to_string()))
}

/// Parses a `YYYY-MM-DD HH:MM:SS` datetime.
pub fn parse_datetime(field: &str, value: &str) -> Result<NaiveDateTime, ValidationError> {
    NaiveDateTime::parse_from_str(value.trim(), DATETIME_FORMAT)
        .map_err(|_| ValidationError::InvalidDateTime(field.to_string()))
}

/// Checks that an address has the shape `local@domain.tld`.
///
/// Syntax is checked by `email_address`. On top of that the local part must not hold
/// empty dot-separated segments and the domain must be a dotted host name whose labels
/// neither start nor end with a hyphen, which rules out bare hosts and domain literals.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.chars().any(char::is_whitespace) || !EmailAddress::is_valid(email) {
        return Err(ValidationError::InvalidEmail);
    }

    let Some((local, domain)) = email.rsplit_once('@') else {
        return Err(ValidationError::InvalidEmail);
    };
    if local.split('.').any(str::is_empty) {
        return Err(ValidationError::InvalidEmail);
    }

    let label_ok = |label: &str| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_alphanumeric() || c == '-')
    };
    if !domain.contains('.') || !domain.split('.').all(label_ok) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

/// Checks the minimum password length.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn zero_counts_as_present() {
        assert_eq!(present_value(Some(json!(0))), Some(json!(0)));
        assert_eq!(present_value(Some(json!("  "))), None);
        assert_eq!(present_value(Some(Value::Null)), None);
        assert_eq!(present(Some(" ".to_string())), None);
    }

    #[test]
    fn float_accepts_numbers_and_numeric_strings() {
        assert_eq!(parse_float("price", &json!(12.5)), Ok(12.5));
        assert_eq!(parse_float("price", &json!("12.5")), Ok(12.5));
        assert_eq!(parse_float("price", &json!(3)), Ok(3.0));
        assert_eq!(
            parse_float("price", &json!("abc")),
            Err(ValidationError::InvalidNumber("price".to_string()))
        );
        assert!(parse_float("price", &json!("NaN")).is_err());
        assert!(parse_float("price", &json!(true)).is_err());
    }

    #[test]
    fn int_rejects_fractional_values() {
        assert_eq!(parse_int("stock", &json!(4)), Ok(4));
        assert_eq!(parse_int("stock", &json!("4")), Ok(4));
        assert_eq!(parse_int("stock", &json!(4.0)), Ok(4));
        assert_eq!(
            parse_int("stock", &json!(4.5)),
            Err(ValidationError::InvalidInteger("stock".to_string()))
        );
        assert!(parse_int("stock", &json!("4.5")).is_err());
        assert!(parse_int("stock", &json!(10_000_000_000_i64)).is_err());
    }

    #[test]
    fn count_rejects_negative_values() {
        assert_eq!(
            parse_count("red_cards", &json!(-1)),
            Err(ValidationError::NegativeValue("red_cards".to_string()))
        );
        assert_eq!(parse_count("red_cards", &json!(0)), Ok(0));
    }

    #[test]
    fn text_value_renders_numbers() {
        assert_eq!(
            text_value("jersey_number", Some(json!(10))),
            Ok(Some("10".to_string()))
        );
        assert_eq!(text_value("jersey_number", Some(json!(""))), Ok(None));
        assert!(text_value("jersey_number", Some(json!([1]))).is_err());
    }

    #[test]
    fn email_rules() {
        assert!(validate_email("a@b.com").is_ok());
        assert!(validate_email("first.last@club.co.uk").is_ok());
        assert!(validate_email("a@b").is_err());
        assert!(validate_email("a@@b.com").is_err());
        assert!(validate_email("a@b@c.com").is_err());
        assert!(validate_email("@b.com").is_err());
        assert!(validate_email("a b@c.com").is_err());
        assert!(validate_email("a@b..com").is_err());
        assert!(validate_email("a@.com").is_err());
        assert!(validate_email("a..b@c.com").is_err());
        assert!(validate_email(".a@b.com").is_err());
        assert!(validate_email("a.@b.com").is_err());
        assert!(validate_email("a@-b.com").is_err());
        assert!(validate_email("a@b-.com").is_err());
        assert!(validate_email("a@[127.0.0.1]").is_err());
        assert!(validate_email("first+club@my-club.org").is_ok());
    }

    #[test]
    fn date_and_datetime_formats() {
        assert_eq!(
            parse_date("join_date", "2024-02-29"),
            Ok(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
        );
        assert!(parse_date("join_date", "29/02/2024").is_err());
        assert!(parse_datetime("date", "2025-06-01 15:00:00").is_ok());
        assert_eq!(
            parse_datetime("date", "2025-06-01"),
            Err(ValidationError::InvalidDateTime("date".to_string()))
        );
    }

    #[test]
    fn password_length() {
        assert_eq!(validate_password("short"), Err(ValidationError::PasswordTooShort));
        assert!(validate_password("longenough").is_ok());
    }
}
