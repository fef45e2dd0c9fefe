//! Object model and runtime doubles shared by the test suites.

#![allow(dead_code)]

use std::any::Any;
use std::cell::RefCell;

use js_value::{
    AccountingContext, AccountingError, Exported, JsError, JsResult, MemUsage, Object,
    ObjectRef, PrototypeKind, Runtime, Value, SIZE_EMPTY_STRUCT,
};

/// An ordinary object: a primitive-coercion result and a list of property
/// values walked by memory accounting.
pub struct PlainObject {
    primitive: JsResult<Value>,
    properties: RefCell<Vec<Value>>,
}

impl PlainObject {
    pub fn new(primitive: Value) -> Self {
        PlainObject {
            primitive: Ok(primitive),
            properties: RefCell::new(Vec::new()),
        }
    }

    /// An object whose primitive hook raises `error`.
    pub fn throwing(error: JsError) -> Self {
        PlainObject {
            primitive: Err(error),
            properties: RefCell::new(Vec::new()),
        }
    }

    pub fn push(&self, value: Value) {
        self.properties.borrow_mut().push(value);
    }
}

impl Object for PlainObject {
    fn to_primitive_number(&self) -> JsResult<Value> {
        self.primitive.clone()
    }

    fn to_primitive_string(&self) -> JsResult<Value> {
        self.primitive.clone()
    }

    fn mem_usage(&self, ctx: &mut dyn AccountingContext) -> Result<MemUsage, AccountingError> {
        let properties = self.properties.borrow().clone();
        let mut total = MemUsage::uniform(SIZE_EMPTY_STRUCT);
        for value in &properties {
            total += value.mem_usage(ctx)?;
        }
        Ok(total)
    }

    fn export(&self) -> JsResult<Exported> {
        let properties = self.properties.borrow();
        let mut entries = Vec::with_capacity(properties.len());
        for (index, value) in properties.iter().enumerate() {
            entries.push((index.to_string(), value.export()?));
        }
        Ok(Exported::Map(entries))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Wrap a [`PlainObject`] with the given primitive into a value.
pub fn plain(primitive: Value) -> Value {
    Value::Object(ObjectRef::new(PlainObject::new(primitive)))
}

/// A callable object that records every `this` binding and argument list
/// it is invoked with.
pub struct FunctionObject {
    result: Value,
    calls: RefCell<Vec<(Value, Vec<Value>)>>,
}

impl FunctionObject {
    pub fn returning(result: Value) -> Self {
        FunctionObject {
            result,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(Value, Vec<Value>)> {
        self.calls.borrow().clone()
    }
}

impl Object for FunctionObject {
    fn class_name(&self) -> &str {
        "Function"
    }

    fn to_primitive_number(&self) -> JsResult<Value> {
        Ok(Value::Float(f64::NAN))
    }

    fn to_primitive_string(&self) -> JsResult<Value> {
        Ok(Value::from("function () { [native code] }"))
    }

    fn is_callable(&self) -> bool {
        true
    }

    fn call(&self, this: &Value, args: &[Value]) -> JsResult<Value> {
        self.calls.borrow_mut().push((this.clone(), args.to_vec()));
        Ok(self.result.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A primitive wrapper (`new Number(1)` and friends). Two wrappers of the
/// same primitive are strictly equal through the self-equality hook.
pub struct BoxedPrimitive {
    pub primitive: Value,
    pub prototype: ObjectRef,
    pub class: &'static str,
}

impl Object for BoxedPrimitive {
    fn class_name(&self) -> &str {
        self.class
    }

    fn to_primitive_number(&self) -> JsResult<Value> {
        Ok(self.primitive.clone())
    }

    fn to_primitive_string(&self) -> JsResult<Value> {
        Ok(self.primitive.clone())
    }

    fn self_equals(&self, other: &dyn Object) -> bool {
        match other.as_any().downcast_ref::<BoxedPrimitive>() {
            Some(other) => self.primitive.same_value(&other.primitive).unwrap_or(false),
            None => false,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// An object wrapping a host byte buffer.
pub struct NativeBuffer {
    pub bytes: Vec<u8>,
}

impl Object for NativeBuffer {
    fn class_name(&self) -> &str {
        "ArrayBuffer"
    }

    fn to_primitive_number(&self) -> JsResult<Value> {
        Ok(Value::Float(f64::NAN))
    }

    fn to_primitive_string(&self) -> JsResult<Value> {
        Ok(Value::from("[object ArrayBuffer]"))
    }

    fn wrapped(&self) -> Option<&dyn Any> {
        Some(&self.bytes)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A runtime with one prototype object per primitive kind.
pub struct TestRuntime {
    number: ObjectRef,
    boolean: ObjectRef,
    string: ObjectRef,
    symbol: ObjectRef,
}

impl TestRuntime {
    pub fn new() -> Self {
        let proto = || ObjectRef::new(PlainObject::new(Value::Undefined));
        TestRuntime {
            number: proto(),
            boolean: proto(),
            string: proto(),
            symbol: proto(),
        }
    }
}

impl Runtime for TestRuntime {
    fn prototype(&self, kind: PrototypeKind) -> ObjectRef {
        match kind {
            PrototypeKind::Number => self.number.clone(),
            PrototypeKind::Boolean => self.boolean.clone(),
            PrototypeKind::String => self.string.clone(),
            PrototypeKind::Symbol => self.symbol.clone(),
        }
    }

    fn new_primitive_object(
        &self,
        primitive: Value,
        prototype: ObjectRef,
        class: &'static str,
    ) -> ObjectRef {
        ObjectRef::new(BoxedPrimitive {
            primitive,
            prototype,
            class,
        })
    }
}
