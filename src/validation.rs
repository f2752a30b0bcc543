use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{ApiError, ApiResult};

pub fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Fails with a 400 naming `field` when `value` is empty or whitespace.
pub fn required(field: &str, value: &str) -> ApiResult<()> {
    if value.trim().is_empty() {
        return Err(ApiError::BadRequest(format!("{field} is required")));
    }
    Ok(())
}

/// Length limit of the `VARCHAR(255)` columns.
pub const MAX_VARCHAR: usize = 255;

/// Fails with a 400 when `value` has more than `max` characters.
pub fn max_len(field: &str, value: &str, max: usize) -> ApiResult<()> {
    if value.chars().count() > max {
        return Err(ApiError::BadRequest(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

/// Parses a required integer form field.
pub fn required_int(field: &str, value: Option<&str>) -> ApiResult<i32> {
    let raw = value.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(ApiError::BadRequest(format!("{field} is required")));
    }
    raw.parse::<i32>()
        .map_err(|_| ApiError::BadRequest(format!("{field} must be an integer")))
}

/// Path ids that are not numbers fall back to 0, which never matches a row.
pub fn parse_id(raw: &str) -> i32 {
    raw.trim().parse().unwrap_or(0)
}
