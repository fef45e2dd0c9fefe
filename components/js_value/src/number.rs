//! Numeric canonicalisation and Number-to-String.
//!
//! The evaluator produces numbers in two encodings (exact integers and
//! doubles). Everything that creates a numeric [`Value`] from a host number
//! should go through [`int_to_value`] / [`float_to_value`] so that integral
//! results stay on the integer fast path.

use num_traits::ToPrimitive;

use crate::value::Value;

/// 2^32 as a double, the modulus of ToInt32 / ToUint32.
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Returns true for `-0.0`.
#[inline]
pub fn is_negative_zero(n: f64) -> bool {
    n == 0.0 && n.is_sign_negative()
}

/// Canonical numeric value for an exact integer.
///
/// Values in 32-bit range become `Integer`, the rest `BigInteger`.
#[inline]
pub fn int_to_value(n: i64) -> Value {
    match i32::try_from(n) {
        Ok(small) => Value::Integer(small),
        Err(_) => Value::BigInteger(n),
    }
}

/// Canonical numeric value for a double.
///
/// Integral doubles in 32-bit range (except `-0`) become `Integer`.
#[inline]
pub fn float_to_value(n: f64) -> Value {
    if n.fract() == 0.0 && !is_negative_zero(n) {
        if let Some(small) = n.to_i32() {
            return Value::Integer(small);
        }
    }
    Value::Float(n)
}

/// Integer conversion clipped to the `i64` range. NaN maps to 0.
#[inline]
pub fn f64_to_integer(n: f64) -> i64 {
    // `as` saturates at the bounds and maps NaN to zero.
    n as i64
}

/// ToInt32 on a double.
///
/// NaN is 0, the infinities clip to the `i32` bounds, finite values wrap
/// modulo 2^32.
pub fn f64_to_int32(n: f64) -> i32 {
    if n.is_nan() {
        0
    } else if n == f64::INFINITY {
        i32::MAX
    } else if n == f64::NEG_INFINITY {
        i32::MIN
    } else {
        wrap_u32(n) as i32
    }
}

/// ToUint32 on a double.
///
/// NaN and `-Infinity` are 0, `+Infinity` clips to `u32::MAX`, finite values
/// wrap modulo 2^32.
pub fn f64_to_uint32(n: f64) -> u32 {
    if n.is_nan() || n == f64::NEG_INFINITY {
        0
    } else if n == f64::INFINITY {
        u32::MAX
    } else {
        wrap_u32(n)
    }
}

#[inline]
fn wrap_u32(n: f64) -> u32 {
    let truncated = n.trunc();
    if truncated >= 0.0 && truncated < TWO_POW_32 {
        return truncated as u32;
    }
    truncated.rem_euclid(TWO_POW_32) as u32
}

/// Formats a double the way `Number.prototype.toString()` does.
///
/// Uses the shortest digit string that round-trips, in positional notation
/// for decimal exponents in `-6..21` and exponential notation otherwise.
///
/// # Examples
///
/// ```
/// use js_value::number_to_string;
///
/// assert_eq!(number_to_string(3.0), "3");
/// assert_eq!(number_to_string(0.1), "0.1");
/// assert_eq!(number_to_string(1e21), "1e+21");
/// assert_eq!(number_to_string(1.5e-7), "1.5e-7");
/// assert_eq!(number_to_string(-0.0), "0");
/// assert_eq!(number_to_string(f64::NEG_INFINITY), "-Infinity");
/// ```
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let mut buf = ryu::Buffer::new();
    let (digits, point) = decimal_digits(buf.format_finite(n.abs()));
    let k = digits.len() as i32;

    let mut out = String::with_capacity(digits.len() + 8);
    if n < 0.0 {
        out.push('-');
    }
    if k <= point && point <= 21 {
        out.push_str(&digits);
        out.extend(std::iter::repeat('0').take((point - k) as usize));
    } else if 0 < point && point <= 21 {
        let (int_part, frac_part) = digits.split_at(point as usize);
        out.push_str(int_part);
        out.push('.');
        out.push_str(frac_part);
    } else if -6 < point && point <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat('0').take((-point) as usize));
        out.push_str(&digits);
    } else {
        let exponent = point - 1;
        let (first, rest) = digits.split_at(1);
        out.push_str(first);
        if !rest.is_empty() {
            out.push('.');
            out.push_str(rest);
        }
        out.push('e');
        out.push(if exponent < 0 { '-' } else { '+' });
        out.push_str(&exponent.abs().to_string());
    }
    out
}

/// Splits a `ryu` rendering into significant digits and the decimal point
/// position, so that the value is `0.DIGITS * 10^point`.
fn decimal_digits(repr: &str) -> (String, i32) {
    let (mantissa, exp10) = match repr.split_once(['e', 'E']) {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (repr, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let mut point = int_part.len() as i32 + exp10;
    let mut digits: String = int_part.chars().chain(frac_part.chars()).collect();

    let leading = digits.len() - digits.trim_start_matches('0').len();
    digits.drain(..leading);
    point -= leading as i32;

    let trimmed = digits.trim_end_matches('0').len();
    digits.truncate(trimmed);

    (digits, point)
}
