//! JavaScript value representation.
//!
//! This module provides the core `Value` enum. Every runtime value is exactly
//! one of its variants; all polymorphism over values is an exhaustive match,
//! so adding an operation forces a decision for every kind.

use std::fmt;

use crate::number::{int_to_value, number_to_string};
use crate::object::ObjectRef;
use crate::property::PropertySlot;
use crate::string::JsString;
use crate::symbol::Symbol;

/// Represents any JavaScript value.
///
/// Primitive scalars are stored inline, reference kinds behind cheap shared
/// handles.
///
/// # Integer encodings
///
/// `Integer` and `BigInteger` hold the same mathematical integers in two
/// widths. They are interchangeable under every equality relation and hash
/// alike; only the width of the fast path differs.
///
/// # Examples
///
/// ```
/// use js_value::Value;
///
/// let undefined = Value::Undefined;
/// let number = Value::Integer(42);
/// let float = Value::Float(3.5);
///
/// assert!(!undefined.to_boolean().unwrap());
/// assert!(number.to_boolean().unwrap());
/// assert_eq!(float.type_of(), "number");
/// ```
#[derive(Clone, Debug)]
pub enum Value {
    /// Exact integer in 32-bit range
    Integer(i32),
    /// Exact 64-bit integer
    BigInteger(i64),
    /// IEEE 754 double-precision floating point
    Float(f64),
    /// JavaScript boolean (true or false)
    Boolean(bool),
    /// JavaScript null value
    Null,
    /// JavaScript undefined value
    Undefined,
    /// JavaScript string value
    String(JsString),
    /// JavaScript symbol value
    Symbol(Symbol),
    /// Reference to an object owned by the object model
    Object(ObjectRef),
    /// Property descriptor stored in an object's property table.
    /// Never observable as an ordinary value.
    PropertySlot(PropertySlot),
    /// Binding that failed to resolve; forcing it raises a ReferenceError
    /// naming the binding.
    Unresolved(JsString),
}

/// The kind tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `Value::Integer`
    Integer,
    /// `Value::BigInteger`
    BigInteger,
    /// `Value::Float`
    Float,
    /// `Value::Boolean`
    Boolean,
    /// `Value::Null`
    Null,
    /// `Value::Undefined`
    Undefined,
    /// `Value::String`
    String,
    /// `Value::Symbol`
    Symbol,
    /// `Value::Object`
    Object,
    /// `Value::PropertySlot`
    PropertySlot,
    /// `Value::Unresolved`
    Unresolved,
}

impl Value {
    /// Placeholder for a binding that could not be resolved.
    pub fn unresolved(name: impl Into<JsString>) -> Self {
        Value::Unresolved(name.into())
    }

    /// The kind tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Integer(_) => ValueKind::Integer,
            Value::BigInteger(_) => ValueKind::BigInteger,
            Value::Float(_) => ValueKind::Float,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Null => ValueKind::Null,
            Value::Undefined => ValueKind::Undefined,
            Value::String(_) => ValueKind::String,
            Value::Symbol(_) => ValueKind::Symbol,
            Value::Object(_) => ValueKind::Object,
            Value::PropertySlot(_) => ValueKind::PropertySlot,
            Value::Unresolved(_) => ValueKind::Unresolved,
        }
    }

    /// Returns true for the numeric family (Integer, BigInteger, Float).
    pub fn is_number(&self) -> bool {
        matches!(
            self,
            Value::Integer(_) | Value::BigInteger(_) | Value::Float(_)
        )
    }

    /// Returns true for object references.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns true for null and undefined.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }

    /// The exact integer held by an integer-kind value. No coercion.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(i64::from(*n)),
            Value::BigInteger(n) => Some(*n),
            _ => None,
        }
    }

    /// The double held by a `Float`. No coercion.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// The string held by a `String`. No coercion.
    pub fn as_string(&self) -> Option<&JsString> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The symbol held by a `Symbol`.
    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Value::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// The object reference held by an `Object`.
    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// The slot held by a `PropertySlot`.
    pub fn as_property_slot(&self) -> Option<&PropertySlot> {
        match self {
            Value::PropertySlot(p) => Some(p),
            _ => None,
        }
    }

    /// Returns the JavaScript typeof result for this value.
    ///
    /// - undefined → "undefined"
    /// - null → "object" (historical quirk)
    /// - number (any numeric kind) → "number"
    /// - callable objects → "function"
    ///
    /// Internal kinds report "undefined".
    ///
    /// # Examples
    ///
    /// ```
    /// use js_value::Value;
    ///
    /// assert_eq!(Value::Undefined.type_of(), "undefined");
    /// assert_eq!(Value::Null.type_of(), "object");
    /// assert_eq!(Value::Boolean(true).type_of(), "boolean");
    /// assert_eq!(Value::BigInteger(1 << 40).type_of(), "number");
    /// ```
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "object", // JavaScript quirk
            Value::Boolean(_) => "boolean",
            Value::Integer(_) | Value::BigInteger(_) | Value::Float(_) => "number",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Object(o) => {
                if o.get().is_callable() {
                    "function"
                } else {
                    "object"
                }
            }
            Value::PropertySlot(_) | Value::Unresolved(_) => "undefined",
        }
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        int_to_value(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(JsString::new(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(JsString::from(s))
    }
}

impl From<JsString> for Value {
    fn from(s: JsString) -> Self {
        Value::String(s)
    }
}

impl From<Symbol> for Value {
    fn from(s: Symbol) -> Self {
        Value::Symbol(s)
    }
}

impl From<ObjectRef> for Value {
    fn from(o: ObjectRef) -> Self {
        Value::Object(o)
    }
}

impl From<PropertySlot> for Value {
    fn from(p: PropertySlot) -> Self {
        Value::PropertySlot(p)
    }
}

/// Diagnostic rendering.
///
/// Primitives print as their ToString result. Kinds whose ToString may run
/// guest code or fail print a fixed form instead, so formatting never
/// raises.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Integer(n) => write!(f, "{}", n),
            Value::BigInteger(n) => write!(f, "{}", n),
            Value::Float(n) => f.write_str(&number_to_string(*n)),
            Value::String(s) => write!(f, "{}", s),
            Value::Symbol(s) => f.write_str(&s.descriptive_string()),
            Value::Object(o) => write!(f, "[object {}]", o.get().class_name()),
            Value::PropertySlot(_) => Ok(()),
            Value::Unresolved(name) => write!(f, "<unresolved {}>", name),
        }
    }
}
