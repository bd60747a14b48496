//! Safe numeric coercion for raw attribute values.
//!
//! This is the only place numeric validation happens. Anything that is
//! not a finite number (missing keys, nulls, blanks, text, booleans,
//! `NaN`, infinities) becomes `0.0`. Coercion never fails.

use serde_json::Value;

/// Coerces an optional raw value to a finite `f64`, falling back to `0.0`.
///
/// Numeric strings are accepted after trimming, since spreadsheet and CSV
/// exports deliver every cell as text.
#[must_use]
pub fn safe_number(value: Option<&Value>) -> f64 {
    value.and_then(parse_number).unwrap_or(0.0)
}

/// Like [`safe_number`] but additionally clamps negative results to `0.0`.
///
/// Used for quantity fields (populations, tonnages, volumes).
#[must_use]
pub fn safe_quantity(value: Option<&Value>) -> f64 {
    let n = safe_number(value);
    if n > 0.0 { n } else { 0.0 }
}

fn parse_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => return None,
    };
    n.is_finite().then_some(n)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn passes_through_numbers() {
        assert!((safe_number(Some(&json!(42.5))) - 42.5).abs() < f64::EPSILON);
        assert!((safe_number(Some(&json!(7))) - 7.0).abs() < f64::EPSILON);
        assert!((safe_number(Some(&json!(-3.25))) + 3.25).abs() < f64::EPSILON);
    }

    #[test]
    fn parses_numeric_strings() {
        assert!((safe_number(Some(&json!(" 1234.5 "))) - 1234.5).abs() < f64::EPSILON);
        assert!((safe_number(Some(&json!("1e3"))) - 1000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_and_non_numeric_become_zero() {
        let cases = [
            None,
            Some(json!(null)),
            Some(json!("")),
            Some(json!("   ")),
            Some(json!("n/a")),
            Some(json!("1,234")),
            Some(json!("NaN")),
            Some(json!("inf")),
            Some(json!("-infinity")),
            Some(json!(true)),
            Some(json!([1, 2])),
            Some(json!({"value": 3})),
        ];
        for case in &cases {
            let n = safe_number(case.as_ref());
            assert!(n == 0.0 && n.is_sign_positive(), "{case:?} -> {n}");
        }
    }

    #[test]
    fn quantities_are_never_negative() {
        assert!(safe_quantity(Some(&json!(-12.0))) == 0.0);
        assert!(safe_quantity(Some(&json!("-0.5"))) == 0.0);
        assert!(safe_quantity(Some(&json!(-0.0))).is_sign_positive());
        assert!((safe_quantity(Some(&json!(8.25))) - 8.25).abs() < f64::EPSILON);
    }
}
