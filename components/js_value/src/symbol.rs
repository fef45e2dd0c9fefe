//! JavaScript Symbol primitives.
//!
//! Every symbol gets a unique id from a global counter when it is created.
//! The id is its identity for equality and hashing; the description is only
//! for display.

use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::string::JsString;
use crate::value::Value;

/// Global counter for generating unique symbol IDs
static SYMBOL_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Debug)]
struct SymbolData {
    id: u64,
    description: Option<JsString>,
}

/// A JavaScript Symbol.
///
/// Clones refer to the same symbol. Two symbols created separately are
/// never equal, whatever their descriptions.
///
/// ```
/// use js_value::Symbol;
///
/// let a = Symbol::new(Some("tag"));
/// let b = Symbol::new(Some("tag"));
/// assert_ne!(a, b);
/// assert_eq!(a, a.clone());
/// assert_eq!(a.descriptive_string(), "Symbol(tag)");
/// ```
#[derive(Clone)]
pub struct Symbol(Rc<SymbolData>);

impl Symbol {
    /// Create a new unique symbol with an optional description.
    pub fn new(description: Option<&str>) -> Self {
        let id = SYMBOL_COUNTER.fetch_add(1, Ordering::Relaxed);
        Symbol(Rc::new(SymbolData {
            id,
            description: description.map(JsString::new),
        }))
    }

    /// The stable identity of this symbol.
    pub fn id(&self) -> u64 {
        self.0.id
    }

    /// The description, if one was given.
    pub fn description(&self) -> Option<&JsString> {
        self.0.description.as_ref()
    }

    /// Explicit string access: the description, or the empty string.
    ///
    /// This is what `String(sym)` / `sym.description` observe; implicit
    /// string coercion of a symbol raises instead.
    pub fn description_string(&self) -> &str {
        self.0.description.as_ref().map_or("", JsString::as_str)
    }

    /// `Symbol(description)`, as produced by `Symbol.prototype.toString`.
    pub fn descriptive_string(&self) -> String {
        format!("Symbol({})", self.description_string())
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }
}

impl Eq for Symbol {}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Symbol")
            .field("id", &self.0.id)
            .field("description", &self.0.description)
            .finish()
    }
}

/// Derives a function name from a property key.
///
/// Symbol keys contribute `[description]` (nothing when they have no
/// description); other keys contribute their string form. Keys whose string
/// form cannot be computed contribute nothing.
///
/// ```
/// use js_value::{property_key_name, Symbol, Value};
///
/// let key = Value::Symbol(Symbol::new(Some("iterator")));
/// assert_eq!(property_key_name("get ", &key), "get [iterator]");
/// assert_eq!(property_key_name("", &Value::from("size")), "size");
/// ```
pub fn property_key_name(prefix: &str, key: &Value) -> String {
    let mut name = String::from(prefix);
    match key {
        Value::Symbol(sym) => {
            if let Some(desc) = sym.description() {
                name.push('[');
                name.push_str(desc.as_str());
                name.push(']');
            }
        }
        other => {
            if let Ok(text) = other.to_js_string() {
                name.push_str(text.as_str());
            }
        }
    }
    name
}
