//! Type coercion abstract operations.
//!
//! Each operation is a total function over [`Value`]'s kinds:
//!
//! | kind | numeric | boolean | string |
//! |------|---------|---------|--------|
//! | Integer / BigInteger | identity, reinterpreted for 32-bit forms | `n != 0` | decimal digits |
//! | Float | NaN → 0, infinities clip, finite truncates | not 0, not NaN | `Number::toString` |
//! | Boolean | 1 / 0 | identity | `"true"` / `"false"` |
//! | Null | 0 | false | `"null"` |
//! | Undefined | NaN (integer forms 0) | false | `"undefined"` |
//! | String | StringToNumber | non-empty | identity |
//! | Symbol | TypeError | true | TypeError |
//! | Object | primitive hook, then this table | true | primitive hook, then this table |
//! | PropertySlot | inert 0 / NaN | false | `""` |
//! | Unresolved | ReferenceError | ReferenceError | ReferenceError |
//!
//! Objects are reduced to a primitive exactly once; a primitive hook that
//! hands back another object is a TypeError.

use crate::error::{JsError, JsResult};
use crate::number::{f64_to_int32, f64_to_integer, f64_to_uint32, number_to_string};
use crate::object::{ObjectRef, PrototypeKind, Runtime};
use crate::string::JsString;
use crate::value::Value;

const SYMBOL_TO_NUMBER: &str = "Cannot convert a Symbol value to a number";
const SYMBOL_TO_STRING: &str = "Cannot convert a Symbol value to a string";

#[derive(Clone, Copy)]
enum Hint {
    Number,
    String,
    Default,
}

fn object_to_primitive(obj: &ObjectRef, hint: Hint) -> JsResult<Value> {
    let primitive = match hint {
        Hint::Number => obj.get().to_primitive_number()?,
        Hint::String => obj.get().to_primitive_string()?,
        Hint::Default => obj.get().to_primitive()?,
    };
    if primitive.is_object() {
        return Err(JsError::type_error("Cannot convert object to primitive value"));
    }
    Ok(primitive)
}

fn unresolved(name: &JsString) -> JsError {
    JsError::reference_error(name.as_str())
}

impl Value {
    /// ToNumber, as a canonical numeric value.
    ///
    /// Booleans and null give exact integers, keeping the integer fast path.
    ///
    /// ```
    /// use js_value::Value;
    ///
    /// assert!(matches!(Value::Boolean(true).to_number().unwrap(), Value::Integer(1)));
    /// assert!(matches!(Value::Undefined.to_number().unwrap(), Value::Float(n) if n.is_nan()));
    /// ```
    pub fn to_number(&self) -> JsResult<Value> {
        match self {
            Value::Integer(_) | Value::BigInteger(_) | Value::Float(_) => Ok(self.clone()),
            Value::Boolean(b) => Ok(Value::Integer(i32::from(*b))),
            Value::Null => Ok(Value::Integer(0)),
            Value::Undefined => Ok(Value::Float(f64::NAN)),
            Value::String(s) => Ok(s.to_number()),
            Value::Symbol(_) => Err(JsError::type_error(SYMBOL_TO_NUMBER)),
            Value::Object(obj) => object_to_primitive(obj, Hint::Number)?.to_number(),
            Value::PropertySlot(_) => Ok(Value::Float(f64::NAN)),
            Value::Unresolved(name) => Err(unresolved(name)),
        }
    }

    /// ToNumber, as a double.
    pub fn to_float(&self) -> JsResult<f64> {
        match self {
            Value::Integer(n) => Ok(f64::from(*n)),
            Value::BigInteger(n) => Ok(*n as f64),
            Value::Float(n) => Ok(*n),
            Value::Boolean(b) => Ok(if *b { 1.0 } else { 0.0 }),
            Value::Null => Ok(0.0),
            Value::Undefined => Ok(f64::NAN),
            Value::String(s) => Ok(s.to_f64()),
            Value::Symbol(_) => Err(JsError::type_error(SYMBOL_TO_NUMBER)),
            Value::Object(obj) => object_to_primitive(obj, Hint::Number)?.to_float(),
            Value::PropertySlot(_) => Ok(f64::NAN),
            Value::Unresolved(name) => Err(unresolved(name)),
        }
    }

    /// ToInteger: truncation toward zero, clipped to the `i64` range.
    ///
    /// NaN and undefined give 0.
    pub fn to_integer(&self) -> JsResult<i64> {
        match self {
            Value::Integer(n) => Ok(i64::from(*n)),
            Value::BigInteger(n) => Ok(*n),
            Value::Float(n) => Ok(f64_to_integer(*n)),
            Value::Boolean(b) => Ok(i64::from(*b)),
            Value::Null | Value::Undefined => Ok(0),
            Value::String(s) => Ok(f64_to_integer(s.to_f64())),
            Value::Symbol(_) => Err(JsError::type_error(SYMBOL_TO_NUMBER)),
            Value::Object(obj) => object_to_primitive(obj, Hint::Number)?.to_integer(),
            Value::PropertySlot(_) => Ok(0),
            Value::Unresolved(name) => Err(unresolved(name)),
        }
    }

    /// ToInt64. Same policy as [`to_integer`](Value::to_integer).
    pub fn to_int64(&self) -> JsResult<i64> {
        self.to_integer()
    }

    /// ToInt32.
    ///
    /// Integers are reinterpreted in 32 bits; floats follow
    /// [`f64_to_int32`](crate::number::f64_to_int32).
    pub fn to_int32(&self) -> JsResult<i32> {
        match self {
            Value::Integer(n) => Ok(*n),
            Value::BigInteger(n) => Ok(*n as i32),
            Value::Float(n) => Ok(f64_to_int32(*n)),
            Value::Boolean(b) => Ok(i32::from(*b)),
            Value::Null | Value::Undefined => Ok(0),
            Value::String(s) => Ok(f64_to_int32(s.to_f64())),
            Value::Symbol(_) => Err(JsError::type_error(SYMBOL_TO_NUMBER)),
            Value::Object(obj) => object_to_primitive(obj, Hint::Number)?.to_int32(),
            Value::PropertySlot(_) => Ok(0),
            Value::Unresolved(name) => Err(unresolved(name)),
        }
    }

    /// ToUint32.
    ///
    /// Integers are reinterpreted in 32 bits; floats follow
    /// [`f64_to_uint32`](crate::number::f64_to_uint32).
    pub fn to_uint32(&self) -> JsResult<u32> {
        match self {
            Value::Integer(n) => Ok(*n as u32),
            Value::BigInteger(n) => Ok(*n as u32),
            Value::Float(n) => Ok(f64_to_uint32(*n)),
            Value::Boolean(b) => Ok(u32::from(*b)),
            Value::Null | Value::Undefined => Ok(0),
            Value::String(s) => Ok(f64_to_uint32(s.to_f64())),
            Value::Symbol(_) => Err(JsError::type_error(SYMBOL_TO_NUMBER)),
            Value::Object(obj) => object_to_primitive(obj, Hint::Number)?.to_uint32(),
            Value::PropertySlot(_) => Ok(0),
            Value::Unresolved(name) => Err(unresolved(name)),
        }
    }

    /// ToBoolean. Objects and symbols are always truthy.
    pub fn to_boolean(&self) -> JsResult<bool> {
        match self {
            Value::Integer(n) => Ok(*n != 0),
            Value::BigInteger(n) => Ok(*n != 0),
            Value::Float(n) => Ok(*n != 0.0 && !n.is_nan()),
            Value::Boolean(b) => Ok(*b),
            Value::Null | Value::Undefined => Ok(false),
            Value::String(s) => Ok(!s.is_empty()),
            Value::Symbol(_) | Value::Object(_) => Ok(true),
            Value::PropertySlot(_) => Ok(false),
            Value::Unresolved(name) => Err(unresolved(name)),
        }
    }

    /// ToString.
    ///
    /// Implicit string conversion of a symbol raises; explicit access goes
    /// through [`Symbol::description_string`](crate::Symbol::description_string).
    ///
    /// ```
    /// use js_value::Value;
    ///
    /// assert_eq!(Value::Float(3.0).to_js_string().unwrap().as_str(), "3");
    /// assert_eq!(Value::Float(f64::NAN).to_js_string().unwrap().as_str(), "NaN");
    /// assert_eq!(Value::Null.to_js_string().unwrap().as_str(), "null");
    /// ```
    pub fn to_js_string(&self) -> JsResult<JsString> {
        match self {
            Value::Integer(n) => Ok(JsString::new(itoa::Buffer::new().format(*n))),
            Value::BigInteger(n) => Ok(JsString::new(itoa::Buffer::new().format(*n))),
            Value::Float(n) => Ok(JsString::from(number_to_string(*n))),
            Value::Boolean(b) => Ok(JsString::new(if *b { "true" } else { "false" })),
            Value::Null => Ok(JsString::new("null")),
            Value::Undefined => Ok(JsString::new("undefined")),
            Value::String(s) => Ok(s.clone()),
            Value::Symbol(_) => Err(JsError::type_error(SYMBOL_TO_STRING)),
            Value::Object(obj) => object_to_primitive(obj, Hint::String)?.to_js_string(),
            Value::PropertySlot(_) => Ok(JsString::new("")),
            Value::Unresolved(name) => Err(unresolved(name)),
        }
    }

    /// ToPrimitive with the default hint. Non-objects are returned as is.
    pub fn to_primitive(&self) -> JsResult<Value> {
        match self {
            Value::Object(obj) => object_to_primitive(obj, Hint::Default),
            Value::Unresolved(name) => Err(unresolved(name)),
            other => Ok(other.clone()),
        }
    }

    /// ToObject: box a primitive into its wrapper object.
    pub fn to_object(&self, runtime: &dyn Runtime) -> JsResult<ObjectRef> {
        let kind = match self {
            Value::Integer(_) | Value::BigInteger(_) | Value::Float(_) => PrototypeKind::Number,
            Value::Boolean(_) => PrototypeKind::Boolean,
            Value::String(_) => PrototypeKind::String,
            Value::Symbol(_) => PrototypeKind::Symbol,
            Value::Object(obj) => return Ok(obj.clone()),
            Value::Null | Value::Undefined => {
                return Err(runtime.type_error(
                    "Cannot convert undefined or null to object".to_string(),
                ))
            }
            Value::PropertySlot(_) => {
                return Err(runtime.type_error(
                    "Cannot convert a property slot to object".to_string(),
                ))
            }
            Value::Unresolved(name) => return Err(runtime.reference_error(name.as_str())),
        };
        Ok(runtime.new_primitive_object(self.clone(), runtime.prototype(kind), kind.class_name()))
    }

    /// The object consulted for property lookups on this value.
    ///
    /// Primitives use their prototype (symbols are boxed), objects are
    /// their own base, and null/undefined have none.
    pub fn base_object(&self, runtime: &dyn Runtime) -> JsResult<Option<ObjectRef>> {
        match self {
            Value::Integer(_) | Value::BigInteger(_) | Value::Float(_) => {
                Ok(Some(runtime.prototype(PrototypeKind::Number)))
            }
            Value::Boolean(_) => Ok(Some(runtime.prototype(PrototypeKind::Boolean))),
            Value::String(_) => Ok(Some(runtime.prototype(PrototypeKind::String))),
            Value::Symbol(_) => self.to_object(runtime).map(Some),
            Value::Object(obj) => Ok(Some(obj.clone())),
            Value::Null | Value::Undefined => Ok(None),
            Value::PropertySlot(_) => Err(runtime.type_error(
                "BUG: base_object() called on a property slot".to_string(),
            )),
            Value::Unresolved(name) => Err(runtime.reference_error(name.as_str())),
        }
    }
}
