//! Value layer of the JavaScript runtime.
//!
//! This crate defines how runtime values are represented and how they
//! behave under the language's implicit conversions, equality relations and
//! hashing. The object model, the evaluator and the garbage collector live
//! above it and are reached only through the [`Object`] and [`Runtime`]
//! capabilities.
//!
//! # Overview
//!
//! - [`Value`] - the closed set of value kinds
//! - Coercions - [`Value::to_number`], [`Value::to_int32`],
//!   [`Value::to_js_string`] and friends
//! - Equality - [`Value::same_value`], [`Value::strict_equals`],
//!   [`Value::abstract_equals`]
//! - Hashing - [`Value::hash`], [`HashSeeds`], [`MapKey`]
//! - [`PropertySlot`] - data and accessor property descriptors
//! - [`intern`] - boxed small-integer cache
//! - Memory accounting - [`Value::mem_usage`], [`MemUsageContext`]
//!
//! # Examples
//!
//! ```
//! use js_value::{ErrorKind, Symbol, Value};
//!
//! let n = Value::from("  42  ").to_number().unwrap();
//! assert!(n.strict_equals(&Value::Integer(42)).unwrap());
//! assert_eq!(Value::Float(-1.0).to_uint32().unwrap(), u32::MAX);
//!
//! let error = Value::Symbol(Symbol::new(Some("s"))).to_number().unwrap_err();
//! assert_eq!(error.kind, ErrorKind::TypeError);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod convert;
mod equality;
mod error;
mod export;
mod hash;
pub mod intern;
mod mem_usage;
pub mod number;
mod object;
mod property;
mod string;
mod symbol;
mod value;

pub use error::{AccountingError, ErrorKind, JsError, JsResult};
pub use export::Exported;
pub use hash::{HashSeeds, MapKey};
pub use mem_usage::{
    AccountingContext, MemUsage, MemUsageContext, DEFAULT_MAX_DEPTH, SIZE_BOOL,
    SIZE_EMPTY_STRUCT, SIZE_NUMBER, SIZE_STRING,
};
pub use number::{float_to_value, int_to_value, number_to_string};
pub use object::{Object, ObjectId, ObjectRef, PrototypeKind, Runtime};
pub use property::{PropertyFlags, PropertySlot};
pub use string::JsString;
pub use symbol::{property_key_name, Symbol};
pub use value::{Value, ValueKind};
