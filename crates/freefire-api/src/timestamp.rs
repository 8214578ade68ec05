//! Epoch-seconds normalization.
//!
//! The service reports creation and login times as whole seconds since the
//! epoch, sometimes as JSON numbers and sometimes as digit strings.
//! `normalize` is total: any value outside that domain maps to the
//! "Not found" sentinel instead of failing.

use chrono::DateTime;
use serde_json::Value;

use freefire_types::profile::MISSING;

/// Convert an epoch-seconds-like value to `YYYY-MM-DD HH:MM:SS` (UTC).
pub fn normalize(value: Option<&Value>) -> String {
    let secs = match value {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    secs.filter(|s| *s >= 0)
        .and_then(|s| DateTime::from_timestamp(s, 0))
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| MISSING.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_seconds() {
        assert_eq!(normalize(Some(&json!(1700000000))), "2023-11-14 22:13:20");
    }

    #[test]
    fn test_digit_string_seconds() {
        assert_eq!(normalize(Some(&json!("1700000000"))), "2023-11-14 22:13:20");
    }

    #[test]
    fn test_epoch_zero() {
        assert_eq!(normalize(Some(&json!(0))), "1970-01-01 00:00:00");
    }

    #[test]
    fn test_absent_value() {
        assert_eq!(normalize(None), MISSING);
    }

    #[test]
    fn test_non_numeric_string() {
        assert_eq!(normalize(Some(&json!("not-a-number"))), MISSING);
    }

    #[test]
    fn test_null_value() {
        assert_eq!(normalize(Some(&Value::Null)), MISSING);
    }

    #[test]
    fn test_negative_seconds_rejected() {
        assert_eq!(normalize(Some(&json!(-1))), MISSING);
    }

    #[test]
    fn test_fractional_number_rejected() {
        // as_i64 is None for non-integral numbers
        assert_eq!(normalize(Some(&json!(1700000000.5))), MISSING);
    }

    #[test]
    fn test_out_of_range_seconds_rejected() {
        assert_eq!(normalize(Some(&json!(i64::MAX))), MISSING);
    }
}
