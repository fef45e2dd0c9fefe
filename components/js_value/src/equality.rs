//! The equality relations.
//!
//! - [`Value::same_value`]: identity-like. NaN equals NaN, `+0` and `-0`
//!   differ.
//! - [`Value::same_value_zero`]: as above but the zeros are equal. Used for
//!   map and set keys.
//! - [`Value::strict_equals`]: `===`. No coercion beyond the numeric family.
//! - [`Value::abstract_equals`]: `==`. Coerces toward a common kind.
//!
//! The numeric kinds compare by mathematical value across encodings, so
//! `Integer(n)`, `BigInteger(n)` and `Float(n)` are interchangeable. All
//! relations raise a ReferenceError when either side is unresolved.

use crate::error::{JsError, JsResult};
use crate::number::is_negative_zero;
use crate::value::Value;

/// 2^63 as a double: the first float above the `i64` range.
const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

#[derive(Clone, Copy)]
enum Numeric {
    Int(i64),
    Float(f64),
}

fn numeric(value: &Value) -> Option<Numeric> {
    match value {
        Value::Integer(n) => Some(Numeric::Int(i64::from(*n))),
        Value::BigInteger(n) => Some(Numeric::Int(*n)),
        Value::Float(n) => Some(Numeric::Float(*n)),
        _ => None,
    }
}

/// Exact comparison of an integer against a double, without rounding the
/// integer through `f64`.
fn int_equals_float(i: i64, f: f64) -> bool {
    f.fract() == 0.0 && (-TWO_POW_63..TWO_POW_63).contains(&f) && f as i64 == i
}

/// Numeric `===`: NaN is unequal to everything, the zeros are equal.
fn numeric_equals(a: Numeric, b: Numeric) -> bool {
    match (a, b) {
        (Numeric::Int(x), Numeric::Int(y)) => x == y,
        (Numeric::Float(x), Numeric::Float(y)) => x == y,
        (Numeric::Int(i), Numeric::Float(f)) | (Numeric::Float(f), Numeric::Int(i)) => {
            int_equals_float(i, f)
        }
    }
}

/// Numeric SameValue. Integers count as `+0`.
fn numeric_same_value(a: Numeric, b: Numeric, zeros_equal: bool) -> bool {
    match (a, b) {
        (Numeric::Int(x), Numeric::Int(y)) => x == y,
        (Numeric::Float(x), Numeric::Float(y)) => {
            if x.is_nan() && y.is_nan() {
                true
            } else {
                x == y && (zeros_equal || x.is_sign_negative() == y.is_sign_negative())
            }
        }
        (Numeric::Int(i), Numeric::Float(f)) | (Numeric::Float(f), Numeric::Int(i)) => {
            int_equals_float(i, f) && (zeros_equal || !is_negative_zero(f))
        }
    }
}

fn check_resolved(a: &Value, b: &Value) -> JsResult<()> {
    match (a, b) {
        (Value::Unresolved(name), _) | (_, Value::Unresolved(name)) => {
            Err(JsError::reference_error(name.as_str()))
        }
        _ => Ok(()),
    }
}

impl Value {
    /// SameValue.
    ///
    /// ```
    /// use js_value::Value;
    ///
    /// let nan = Value::Float(f64::NAN);
    /// assert!(nan.same_value(&nan).unwrap());
    /// assert!(!Value::Float(0.0).same_value(&Value::Float(-0.0)).unwrap());
    /// assert!(Value::Integer(0).same_value(&Value::Float(0.0)).unwrap());
    /// ```
    pub fn same_value(&self, other: &Value) -> JsResult<bool> {
        self.same_value_impl(other, false)
    }

    /// SameValueZero: SameValue except that `+0` equals `-0`.
    pub fn same_value_zero(&self, other: &Value) -> JsResult<bool> {
        self.same_value_impl(other, true)
    }

    fn same_value_impl(&self, other: &Value, zeros_equal: bool) -> JsResult<bool> {
        check_resolved(self, other)?;
        if let (Some(a), Some(b)) = (numeric(self), numeric(other)) {
            return Ok(numeric_same_value(a, b, zeros_equal));
        }
        Ok(match (self, other) {
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Null, Value::Null) | (Value::Undefined, Value::Undefined) => true,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            (Value::PropertySlot(a), Value::PropertySlot(b)) => a.ptr_eq(b),
            _ => false,
        })
    }

    /// Strict equality (`===`).
    ///
    /// ```
    /// use js_value::Value;
    ///
    /// assert!(Value::Integer(5).strict_equals(&Value::Float(5.0)).unwrap());
    /// assert!(!Value::Integer(5).strict_equals(&Value::from("5")).unwrap());
    /// ```
    pub fn strict_equals(&self, other: &Value) -> JsResult<bool> {
        check_resolved(self, other)?;
        if let (Some(a), Some(b)) = (numeric(self), numeric(other)) {
            return Ok(numeric_equals(a, b));
        }
        Ok(match (self, other) {
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Null, Value::Null) | (Value::Undefined, Value::Undefined) => true,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a.strict_equals(b),
            _ => false,
        })
    }

    /// Abstract (loose) equality (`==`).
    ///
    /// Booleans become `Integer(0|1)`, strings compared with numbers become
    /// numbers, and an object compared with a primitive is reduced to a
    /// primitive once. Null and undefined equal only each other. A symbol
    /// is only ever equal to the same symbol.
    ///
    /// ```
    /// use js_value::Value;
    ///
    /// assert!(Value::Null.abstract_equals(&Value::Undefined).unwrap());
    /// assert!(!Value::Null.abstract_equals(&Value::Integer(0)).unwrap());
    /// assert!(Value::from("1.0").abstract_equals(&Value::Boolean(true)).unwrap());
    /// ```
    pub fn abstract_equals(&self, other: &Value) -> JsResult<bool> {
        check_resolved(self, other)?;
        if let (Some(a), Some(b)) = (numeric(self), numeric(other)) {
            return Ok(numeric_equals(a, b));
        }
        match (self, other) {
            (Value::PropertySlot(_), _) | (_, Value::PropertySlot(_)) => Ok(false),

            (Value::Null | Value::Undefined, Value::Null | Value::Undefined) => Ok(true),
            (Value::Null | Value::Undefined, _) | (_, Value::Null | Value::Undefined) => Ok(false),

            (Value::Boolean(a), Value::Boolean(b)) => Ok(a == b),
            (Value::String(a), Value::String(b)) => Ok(a == b),
            (Value::Symbol(a), Value::Symbol(b)) => Ok(a == b),
            (Value::Object(a), Value::Object(b)) => Ok(a.strict_equals(b)),

            (Value::Boolean(b), _) => Value::Integer(i32::from(*b)).abstract_equals(other),
            (_, Value::Boolean(b)) => self.abstract_equals(&Value::Integer(i32::from(*b))),

            (Value::String(s), n) | (n, Value::String(s)) if n.is_number() => {
                Ok(string_number_equals(s.to_number(), n))
            }

            (Value::Object(_), _) => self.to_primitive()?.abstract_equals(other),
            (_, Value::Object(_)) => self.abstract_equals(&other.to_primitive()?),

            _ => Ok(false),
        }
    }
}

fn string_number_equals(from_string: Value, number: &Value) -> bool {
    match (numeric(&from_string), numeric(number)) {
        (Some(a), Some(b)) => numeric_equals(a, b),
        _ => false,
    }
}
