//! Exporting values to plain host data.

use serde::{Serialize, Serializer};

use crate::error::{contract_violation, JsError, JsResult};
use crate::value::Value;

/// Plain host representation of a value.
///
/// Serialises with `serde` as the matching JSON-like shape; non-finite
/// floats become `null` in formats that cannot represent them.
///
/// ```
/// use js_value::Exported;
///
/// let data = Exported::Map(vec![
///     ("a".to_string(), Exported::Integer(1)),
///     ("b".to_string(), Exported::Array(vec![Exported::Null, Exported::Bool(true)])),
/// ]);
/// assert_eq!(serde_json::to_string(&data).unwrap(), r#"{"a":1,"b":[null,true]}"#);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Exported {
    /// null and undefined
    Null,
    /// A boolean
    Bool(bool),
    /// An exact integer
    Integer(i64),
    /// Any other number, including NaN, the infinities and `-0`
    Float(f64),
    /// A string, or a symbol's description
    String(String),
    /// An array-like object
    Array(Vec<Exported>),
    /// Own enumerable string-keyed properties, in order
    Map(Vec<(String, Exported)>),
}

impl Serialize for Exported {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Exported::Null => serializer.serialize_unit(),
            Exported::Bool(b) => serializer.serialize_bool(*b),
            Exported::Integer(n) => serializer.serialize_i64(*n),
            Exported::Float(n) => serializer.serialize_f64(*n),
            Exported::String(s) => serializer.serialize_str(s),
            Exported::Array(items) => serializer.collect_seq(items),
            Exported::Map(entries) => serializer.collect_map(entries.iter().map(|(k, v)| (k, v))),
        }
    }
}

impl Value {
    /// Export to plain host data.
    ///
    /// Integers export as `Integer`; every float, integral or not, as
    /// `Float`. Objects export through their capability.
    ///
    /// # Panics
    ///
    /// Exporting a property slot is a caller bug and aborts.
    pub fn export(&self) -> JsResult<Exported> {
        match self {
            Value::Integer(n) => Ok(Exported::Integer(i64::from(*n))),
            Value::BigInteger(n) => Ok(Exported::Integer(*n)),
            Value::Float(n) => Ok(Exported::Float(*n)),
            Value::Boolean(b) => Ok(Exported::Bool(*b)),
            Value::Null | Value::Undefined => Ok(Exported::Null),
            Value::String(s) => Ok(Exported::String(s.as_str().to_string())),
            Value::Symbol(sym) => Ok(Exported::String(sym.description_string().to_string())),
            Value::Object(obj) => obj.get().export(),
            Value::PropertySlot(_) => contract_violation("cannot export a property slot"),
            Value::Unresolved(name) => Err(JsError::reference_error(name.as_str())),
        }
    }
}
