//! Loose (type-coercing) comparison and truthiness over `serde_json::Value`
//!
//! Test authors routinely compare ids that arrive as numbers in one payload and
//! as strings in another, so record lookups and expectation gating use
//! coercing rules instead of `PartialEq`:
//!
//! - `null` equals only `null` or a missing field
//! - booleans compare as `0` / `1`
//! - numbers and strings compare numerically (`"42" == 42`, `"" == 0`)
//! - arrays and objects compare structurally with each other, and through their
//!   primitive string form (`[1,2]` → `"1,2"`) against scalars

use serde_json::Value;

/// Compare a record field against a probe value.
///
/// `field` is `None` when the record has no such property; that only matches `null`.
#[must_use]
pub fn loosely_equal(field: Option<&Value>, value: &Value) -> bool {
    match field {
        None => value.is_null(),
        Some(f) => loose_eq(f, value),
    }
}

/// Whether a value counts as "supplied" when gating optional expectations.
///
/// `null`, `false`, `0`, and `""` are falsy; every array and object is truthy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Null, _) | (_, Value::Null) => false,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Number(_), Value::Number(_)) => to_number(a) == to_number(b),
        (Value::Array(_) | Value::Object(_), Value::Array(_) | Value::Object(_)) => a == b,
        (Value::Bool(x), other) => loose_eq(&Value::from(u8::from(*x)), other),
        (other, Value::Bool(y)) => loose_eq(other, &Value::from(u8::from(*y))),
        (Value::Number(_), Value::String(_)) | (Value::String(_), Value::Number(_)) => {
            to_number(a) == to_number(b)
        }
        (Value::Array(_) | Value::Object(_), scalar) | (scalar, Value::Array(_) | Value::Object(_)) => {
            let compound = if a.is_array() || a.is_object() { a } else { b };
            loose_eq(&Value::String(primitive_string(compound)), scalar)
        }
    }
}

/// Numeric conversion; `NaN` for anything that does not read as a number.
fn to_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => string_to_number(s),
        Value::Array(_) | Value::Object(_) => string_to_number(&primitive_string(value)),
    }
}

fn string_to_number(s: &str) -> f64 {
    let t = s.trim();
    if t.is_empty() {
        return 0.0;
    }
    match t {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = t.strip_prefix(prefix) {
            // `from_str_radix` tolerates a leading sign after the prefix
            if digits.starts_with(['+', '-']) {
                return f64::NAN;
            }
            return u64::from_str_radix(digits, radix).map_or(f64::NAN, |n| n as f64);
        }
    }
    // `f64::from_str` also accepts "inf"/"nan" spellings, which are not numbers here
    if !t
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return f64::NAN;
    }
    t.parse().unwrap_or(f64::NAN)
}

/// String form of a value as it appears inside an array join or a message.
pub(crate) fn primitive_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.as_f64().map_or_else(|| n.to_string(), format_number),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(primitive_string)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Render a number without a trailing `.0` for integral values.
pub(crate) fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e21 {
        format!("{n:.0}")
    } else {
        format!("{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn number_matches_numeric_string() {
        assert!(loosely_equal(Some(&json!(42)), &json!("42")));
        assert!(loosely_equal(Some(&json!("42")), &json!(42)));
        assert!(loosely_equal(Some(&json!(" 42 ")), &json!(42)));
        assert!(!loosely_equal(Some(&json!("42a")), &json!(42)));
    }

    #[test]
    fn integer_and_float_forms_are_equal() {
        assert!(loosely_equal(Some(&json!(1)), &json!(1.0)));
    }

    #[test]
    fn empty_string_equals_zero() {
        assert!(loosely_equal(Some(&json!("")), &json!(0)));
        assert!(!loosely_equal(Some(&json!("")), &json!(1)));
    }

    #[test]
    fn booleans_compare_as_numbers() {
        assert!(loosely_equal(Some(&json!(true)), &json!(1)));
        assert!(loosely_equal(Some(&json!(false)), &json!("0")));
        assert!(!loosely_equal(Some(&json!(true)), &json!("true")));
    }

    #[test]
    fn null_only_matches_null_or_missing() {
        assert!(loosely_equal(None, &json!(null)));
        assert!(loosely_equal(Some(&json!(null)), &json!(null)));
        assert!(!loosely_equal(Some(&json!(null)), &json!(0)));
        assert!(!loosely_equal(Some(&json!(null)), &json!("")));
        assert!(!loosely_equal(None, &json!(0)));
    }

    #[test]
    fn compound_against_scalar_uses_string_form() {
        assert!(loosely_equal(Some(&json!([1, 2])), &json!("1,2")));
        assert!(loosely_equal(Some(&json!([7])), &json!(7)));
        assert!(loosely_equal(Some(&json!({"a": 1})), &json!("[object Object]")));
    }

    #[test]
    fn compound_against_compound_is_structural() {
        assert!(loosely_equal(Some(&json!({"a": [1]})), &json!({"a": [1]})));
        assert!(!loosely_equal(Some(&json!([1])), &json!({"0": 1})));
    }

    #[test]
    fn hex_strings_are_numeric() {
        assert!(loosely_equal(Some(&json!("0x1A")), &json!(26)));
    }

    #[test]
    fn signed_digits_after_radix_prefix_are_not_numbers() {
        assert!(!loosely_equal(Some(&json!("0x+1")), &json!(1)));
        assert!(string_to_number("0b-1").is_nan());
        assert!(string_to_number("0o+7").is_nan());
    }

    #[test]
    fn rust_only_float_spellings_are_not_numbers() {
        assert!(!loosely_equal(Some(&json!("inf")), &json!(f64::MAX)));
        assert!(string_to_number("nan").is_nan());
    }

    #[test]
    fn truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("schema")));
        assert!(is_truthy(&json!({})));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!(-1)));
    }

    #[test]
    fn format_number_drops_integral_fraction() {
        assert_eq!(format_number(2.0), "2");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(0.25), "0.25");
    }
}
