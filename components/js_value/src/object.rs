//! Capabilities the value layer requires from its collaborators.
//!
//! The object model and the runtime live above this crate. The value layer
//! reaches them only through the [`Object`] and [`Runtime`] traits.

use std::any::Any;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{AccountingError, JsError, JsResult};
use crate::export::Exported;
use crate::mem_usage::{AccountingContext, MemUsage};
use crate::string::JsString;
use crate::value::Value;

static OBJECT_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Stable identity of an object, assigned once at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

impl ObjectId {
    fn next() -> Self {
        ObjectId(OBJECT_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw id, used as the object's hash.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// The object capability.
///
/// Implemented by the object model for every kind of object it stores.
/// Methods that may run guest code (primitive coercion, calls) return
/// [`JsResult`] and propagate guest exceptions unchanged.
pub trait Object: Any {
    /// Class name used for diagnostics (`[object Class]`).
    fn class_name(&self) -> &str {
        "Object"
    }

    /// ToPrimitive with hint "number".
    fn to_primitive_number(&self) -> JsResult<Value>;

    /// ToPrimitive with hint "string".
    fn to_primitive_string(&self) -> JsResult<Value>;

    /// ToPrimitive with hint "default".
    fn to_primitive(&self) -> JsResult<Value> {
        self.to_primitive_number()
    }

    /// Exotic strict-equality hook for objects that are not the same
    /// instance. Boxed primitives use it; plain objects never equal another
    /// instance.
    fn self_equals(&self, _other: &dyn Object) -> bool {
        false
    }

    /// Whether the object can be invoked as a function.
    fn is_callable(&self) -> bool {
        false
    }

    /// Invoke the object as a function with the given `this` binding.
    fn call(&self, _this: &Value, _args: &[Value]) -> JsResult<Value> {
        Err(JsError::type_error(format!(
            "{} is not a function",
            self.class_name()
        )))
    }

    /// The host resource this object wraps, if any.
    fn wrapped(&self) -> Option<&dyn Any> {
        None
    }

    /// Retained size of the object's own fields and the values they hold.
    ///
    /// Objects that do not report their size contribute nothing.
    fn mem_usage(&self, _ctx: &mut dyn AccountingContext) -> Result<MemUsage, AccountingError> {
        Ok(MemUsage::ZERO)
    }

    /// Plain host representation of the object.
    fn export(&self) -> JsResult<Exported> {
        Ok(Exported::Map(Vec::new()))
    }

    /// Upcast for downcasting in `self_equals` implementations.
    fn as_any(&self) -> &dyn Any;
}

/// A shared reference to an object together with its identity.
#[derive(Clone)]
pub struct ObjectRef {
    id: ObjectId,
    inner: Rc<dyn Object>,
}

impl ObjectRef {
    /// Register a new object, assigning it a fresh identity.
    pub fn new<T: Object>(object: T) -> Self {
        ObjectRef {
            id: ObjectId::next(),
            inner: Rc::new(object),
        }
    }

    /// Identity of the referenced object.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Borrow the object capability.
    pub fn get(&self) -> &dyn Object {
        &*self.inner
    }

    /// Whether two references point at the same object.
    pub fn ptr_eq(&self, other: &ObjectRef) -> bool {
        self.id == other.id
    }

    /// Reference identity or the exotic self-equality hook.
    pub fn strict_equals(&self, other: &ObjectRef) -> bool {
        self.ptr_eq(other) || self.inner.self_equals(other.get())
    }

    /// Downcast to a concrete object type.
    pub fn downcast_ref<T: Object>(&self) -> Option<&T> {
        self.inner.as_any().downcast_ref::<T>()
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectRef")
            .field("id", &self.id)
            .field("class", &self.inner.class_name())
            .finish()
    }
}

/// Global prototypes the value layer needs when boxing primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrototypeKind {
    /// `Number.prototype`
    Number,
    /// `Boolean.prototype`
    Boolean,
    /// `String.prototype`
    String,
    /// `Symbol.prototype`
    Symbol,
}

impl PrototypeKind {
    /// Class name of wrapper objects created with this prototype.
    pub fn class_name(self) -> &'static str {
        match self {
            PrototypeKind::Number => "Number",
            PrototypeKind::Boolean => "Boolean",
            PrototypeKind::String => "String",
            PrototypeKind::Symbol => "Symbol",
        }
    }
}

/// The runtime capability.
pub trait Runtime {
    /// The global prototype object of the given kind.
    fn prototype(&self, kind: PrototypeKind) -> ObjectRef;

    /// Create a wrapper object holding `primitive`, with the given prototype.
    fn new_primitive_object(
        &self,
        primitive: Value,
        prototype: ObjectRef,
        class: &'static str,
    ) -> ObjectRef;

    /// Intern a string.
    fn intern(&self, text: &str) -> JsString {
        JsString::new(text)
    }

    /// Raise a TypeError.
    fn type_error(&self, message: String) -> JsError {
        JsError::type_error(message)
    }

    /// Raise a ReferenceError for an unresolved name.
    fn reference_error(&self, name: &str) -> JsError {
        JsError::reference_error(name)
    }
}
