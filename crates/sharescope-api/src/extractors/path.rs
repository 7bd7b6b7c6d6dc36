//! Typed path parameter helpers.
//!
//! Identifiers arrive as text and are coerced the way a loosely typed
//! client would write them: surrounding whitespace is ignored, and any
//! numeric literal (`"7"`, `"7.0"`, `"7e0"`, `"0x7"`) naming a positive
//! whole number is accepted. Ids above [`MAX_SAFE_ID`] are rejected rather
//! than rounded.

use std::num::IntErrorKind;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use sharescope_core::error::AppError;
use sharescope_core::result::AppResult;

use crate::error::ApiError;

const FIELD: &str = "id";

/// Largest id a client can name exactly as a double (`2^53 - 1`).
pub const MAX_SAFE_ID: i64 = 9_007_199_254_740_991;

/// Parses a positive integer identifier from a path segment.
pub fn parse_positive_id(raw: &str) -> AppResult<i64> {
    let raw = raw.trim();

    // Plain decimal integers are taken exactly, never through a float.
    if let Ok(value) = raw.parse::<i64>() {
        return check_range(value);
    }

    let value = parse_number(raw).ok_or_else(|| invalid("parameter 'id' must be a number"))?;

    if !value.is_finite() || value.fract() != 0.0 {
        return Err(invalid("parameter 'id' must be an integer"));
    }
    if value < 1.0 {
        return Err(invalid("parameter 'id' must be a positive number"));
    }
    if value > MAX_SAFE_ID as f64 {
        return Err(invalid("parameter 'id' must be an integer"));
    }

    Ok(value as i64)
}

fn check_range(value: i64) -> AppResult<i64> {
    if value < 1 {
        Err(invalid("parameter 'id' must be a positive number"))
    } else if value > MAX_SAFE_ID {
        Err(invalid("parameter 'id' must be an integer"))
    } else {
        Ok(value)
    }
}

fn invalid(issue: &str) -> AppError {
    AppError::invalid_field(FIELD, issue)
}

/// Numeric value of a literal, or `None` if it is not one. Empty input is
/// zero.
fn parse_number(s: &str) -> Option<f64> {
    if s.is_empty() {
        return Some(0.0);
    }

    let lower = s.to_ascii_lowercase();
    for (prefix, base) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        if lower.starts_with(prefix) {
            let digits = &s[prefix.len()..];
            if digits.starts_with('+') {
                return None;
            }
            return match u64::from_str_radix(digits, base) {
                Ok(v) => Some(v as f64),
                Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(f64::INFINITY),
                Err(_) => None,
            };
        }
    }

    match s {
        "Infinity" | "+Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        _ if s.chars().any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E')) => None,
        _ => s.parse::<f64>().ok().filter(|v| !v.is_nan()),
    }
}

/// The `{id}` path segment, validated as a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositiveId(pub i64);

impl<S> FromRequestParts<S> for PositiveId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::invalid_field(FIELD, e.body_text()))?;

        Ok(Self(parse_positive_id(&raw)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(raw: &str) -> String {
        parse_positive_id(raw).unwrap_err().message
    }

    #[test]
    fn test_accepts_positive_integers() {
        assert_eq!(parse_positive_id("7").unwrap(), 7);
        assert_eq!(parse_positive_id(" 42 ").unwrap(), 42);
        assert_eq!(parse_positive_id("5.0").unwrap(), 5);
        assert_eq!(parse_positive_id("1e2").unwrap(), 100);
        assert_eq!(parse_positive_id("0x10").unwrap(), 16);
        assert_eq!(parse_positive_id("+3").unwrap(), 3);
        assert_eq!(parse_positive_id("9007199254740991").unwrap(), MAX_SAFE_ID);
        assert_eq!(parse_positive_id("9007199254740990").unwrap(), 9_007_199_254_740_990);
    }

    #[test]
    fn test_rejects_non_numbers() {
        assert_eq!(issue("abc"), "parameter 'id' must be a number");
        assert_eq!(issue("12abc"), "parameter 'id' must be a number");
        assert_eq!(issue("NaN"), "parameter 'id' must be a number");
        assert_eq!(issue("inf"), "parameter 'id' must be a number");
    }

    #[test]
    fn test_rejects_fractions() {
        assert_eq!(issue("1.5"), "parameter 'id' must be an integer");
        assert_eq!(issue("Infinity"), "parameter 'id' must be an integer");
    }

    #[test]
    fn test_rejects_ids_beyond_exact_range() {
        for raw in [
            "9007199254740992",
            "9007199254740993",
            "9223372036854775807",
            "9223372036854775808",
            "99999999999999999999999",
            "1e300",
            "0x20000000000000",
            "0xffffffffffffffffffff",
        ] {
            assert_eq!(issue(raw), "parameter 'id' must be an integer", "{raw}");
        }
    }

    #[test]
    fn test_rejects_non_positive() {
        assert_eq!(issue("0"), "parameter 'id' must be a positive number");
        assert_eq!(issue("-1"), "parameter 'id' must be a positive number");
        assert_eq!(issue("   "), "parameter 'id' must be a positive number");
    }

    #[test]
    fn test_error_names_the_field() {
        let err = parse_positive_id("abc").unwrap_err();
        assert_eq!(err.field.as_deref(), Some("id"));
    }
}
