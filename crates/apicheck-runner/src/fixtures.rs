//! Random fixture values for test input data
//!
//! The typed functions are infallible. The `generate_*` entry points accept
//! loosely typed JSON arguments (as read from a suite file or the command line)
//! and reject non-numeric ones with [`UsageError::InvalidArgument`], and string
//! lengths past [`MAX_STRING_LENGTH`] with [`UsageError::OutOfRange`].

use apicheck_core::UsageError;
use rand::Rng;
use serde_json::{Number, Value};

/// Alphabet for [`random_alnum`]: 26 upper, 26 lower, 10 digits.
pub const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Uniform integer in `[min(a, b), max(a, b)]`, both ends inclusive.
///
/// Reversed bounds are swapped rather than rejected.
pub fn number_between(a: i64, b: i64, rng: &mut impl Rng) -> i64 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    rng.gen_range(lo..=hi)
}

/// `len` characters drawn uniformly, with replacement, from [`ALPHANUMERIC`].
pub fn random_alnum(len: usize, rng: &mut impl Rng) -> String {
    (0..len)
        .map(|_| ALPHANUMERIC[rng.gen_range(0..ALPHANUMERIC.len())] as char)
        .collect()
}

/// Longest string [`generate_string`] will build.
pub const MAX_STRING_LENGTH: usize = 1 << 20;

/// Random integer between two JSON bounds.
///
/// Integer bounds draw uniformly from `[min, max]`. Other finite bounds take the
/// floor of a uniform draw over `[lo, hi + 1)`, clamped to `[floor(lo), floor(hi)]`,
/// so `1.5..5` yields `1..=5` and bounds beyond `i64` stay representable.
///
/// # Errors
///
/// Both bounds must be finite numbers.
pub fn generate_number(min: &Value, max: &Value, rng: &mut impl Rng) -> Result<Number, UsageError> {
    let invalid = || UsageError::invalid_argument("generateNumber(min, max)", "number");
    if let (Some(a), Some(b)) = (min.as_i64(), max.as_i64()) {
        return Ok(Number::from(number_between(a, b, rng)));
    }

    let (Some(a), Some(b)) = (finite(min), finite(max)) else {
        return Err(invalid());
    };
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let u: f64 = rng.r#gen();
    // convex combination keeps the draw finite even when hi - lo overflows
    let drawn = (lo * (1.0 - u) + (hi + 1.0) * u)
        .floor()
        .clamp(lo.floor(), hi.floor());
    integral_number(drawn).ok_or_else(invalid)
}

/// Random alphanumeric string of a JSON-given length.
///
/// Zero or negative lengths give an empty string; a fractional length rounds up.
///
/// # Errors
///
/// `length` must be a number no larger than [`MAX_STRING_LENGTH`].
pub fn generate_string(length: &Value, rng: &mut impl Rng) -> Result<String, UsageError> {
    let n = length
        .as_f64()
        .ok_or_else(|| UsageError::invalid_argument("generateString(length)", "number"))?;
    if n <= 0.0 {
        return Ok(String::new());
    }
    let len = n.ceil();
    if len > MAX_STRING_LENGTH as f64 {
        return Err(UsageError::OutOfRange {
            function: "generateString(length)",
            value: n,
            limit: MAX_STRING_LENGTH,
        });
    }
    Ok(random_alnum(len as usize, rng))
}

fn finite(value: &Value) -> Option<f64> {
    value.as_f64().filter(|f| f.is_finite())
}

/// Integral `f64` as a JSON number, an integer when it fits in `i64`.
fn integral_number(f: f64) -> Option<Number> {
    // i64::MAX is not exactly representable; stay strictly below 2^63
    if f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(Number::from(f as i64))
    } else {
        Number::from_f64(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use serde_json::json;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(42)
    }

    #[test]
    fn equal_bounds_return_the_bound() {
        assert_eq!(number_between(7, 7, &mut rng()), 7);
        assert_eq!(
            generate_number(&json!(-3), &json!(-3), &mut rng()),
            Ok(Number::from(-3))
        );
    }

    #[test]
    fn reversed_bounds_are_swapped() {
        let mut r = rng();
        for _ in 0..100 {
            let n = generate_number(&json!(10), &json!(-10), &mut r).unwrap();
            assert!((-10..=10).contains(&n.as_i64().unwrap()));
        }
    }

    #[test]
    fn both_bounds_are_reachable() {
        let mut r = rng();
        let seen: Vec<i64> = (0..200).map(|_| number_between(0, 1, &mut r)).collect();
        assert!(seen.contains(&0));
        assert!(seen.contains(&1));
    }

    #[test]
    fn integral_floats_are_accepted() {
        assert_eq!(
            generate_number(&json!(2.0), &json!(2), &mut rng()),
            Ok(Number::from(2))
        );
    }

    #[test]
    fn fractional_bounds_draw_integers_in_range() {
        let mut r = rng();
        let seen: Vec<i64> = (0..300)
            .map(|_| {
                generate_number(&json!(1.5), &json!(5), &mut r)
                    .unwrap()
                    .as_i64()
                    .unwrap()
            })
            .collect();
        assert!(seen.iter().all(|n| (1..=5).contains(n)));
        assert!(seen.contains(&1));
        assert!(seen.contains(&5));
    }

    #[test]
    fn bounds_beyond_i64_stay_finite() {
        let mut r = rng();
        for _ in 0..50 {
            let n = generate_number(&json!(-1e300), &json!(1e300), &mut r)
                .unwrap()
                .as_f64()
                .unwrap();
            assert!(n.is_finite());
            assert!((-1e300..=1e300).contains(&n));
        }
    }

    #[test]
    fn non_numeric_bounds_are_rejected() {
        for (min, max) in [
            (json!("1"), json!(5)),
            (json!(1), json!(null)),
            (json!(true), json!(5)),
            (json!([1]), json!(5)),
        ] {
            assert!(matches!(
                generate_number(&min, &max, &mut rng()),
                Err(UsageError::InvalidArgument { .. })
            ));
        }
    }

    #[test]
    fn string_of_zero_length_is_empty() {
        assert_eq!(generate_string(&json!(0), &mut rng()), Ok(String::new()));
    }

    #[test]
    fn negative_length_is_empty_not_an_error() {
        assert_eq!(generate_string(&json!(-4), &mut rng()), Ok(String::new()));
    }

    #[test]
    fn fractional_length_rounds_up() {
        assert_eq!(generate_string(&json!(2.5), &mut rng()).unwrap().len(), 3);
    }

    #[test]
    fn oversized_length_is_rejected_without_allocating() {
        assert!(matches!(
            generate_string(&json!(1e19), &mut rng()),
            Err(UsageError::OutOfRange { .. })
        ));
        let limit = MAX_STRING_LENGTH as u64;
        assert!(generate_string(&json!(limit + 1), &mut rng()).is_err());
        assert_eq!(
            generate_string(&json!(limit), &mut rng()).unwrap().len(),
            MAX_STRING_LENGTH
        );
    }

    #[test]
    fn non_numeric_length_is_rejected() {
        assert!(generate_string(&json!("8"), &mut rng()).is_err());
        assert!(generate_string(&json!(true), &mut rng()).is_err());
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        assert_eq!(random_alnum(16, &mut rng()), random_alnum(16, &mut rng()));
    }

    proptest! {
        #[test]
        fn number_stays_within_bounds(a in any::<i64>(), b in any::<i64>(), seed in any::<u64>()) {
            let mut r = SmallRng::seed_from_u64(seed);
            let n = number_between(a, b, &mut r);
            prop_assert!(a.min(b) <= n && n <= a.max(b));
        }

        #[test]
        fn string_has_exact_length_and_alphabet(len in 0usize..200, seed in any::<u64>()) {
            let mut r = SmallRng::seed_from_u64(seed);
            let s = generate_string(&json!(len), &mut r).unwrap();
            prop_assert_eq!(s.chars().count(), len);
            prop_assert!(s.bytes().all(|c| ALPHANUMERIC.contains(&c)));
        }
    }
}
