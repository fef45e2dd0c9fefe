//! Property slots.
//!
//! A [`PropertySlot`] is the descriptor the object model stores in its
//! property table for properties that need more than a bare value: data
//! properties with non-default attributes and accessor properties. It rides
//! in [`Value::PropertySlot`] but is never an ordinary value; the object
//! model unwraps it with [`PropertySlot::get`] before anything else sees it.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::{AccountingError, JsResult};
use crate::mem_usage::{AccountingContext, MemUsage};
use crate::object::{ObjectRef, Runtime};
use crate::value::Value;

/// Attribute flags of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PropertyFlags {
    /// `[[Writable]]`
    pub writable: bool,
    /// `[[Configurable]]`
    pub configurable: bool,
    /// `[[Enumerable]]`
    pub enumerable: bool,
}

impl PropertyFlags {
    /// Writable, configurable and enumerable.
    pub const ALL: PropertyFlags = PropertyFlags {
        writable: true,
        configurable: true,
        enumerable: true,
    };

    /// No attribute set.
    pub const NONE: PropertyFlags = PropertyFlags {
        writable: false,
        configurable: false,
        enumerable: false,
    };
}

#[derive(Default)]
struct SlotData {
    value: Option<Value>,
    flags: PropertyFlags,
    accessor: bool,
    getter: Option<ObjectRef>,
    setter: Option<ObjectRef>,
}

/// A property descriptor held by an object's property table.
///
/// Clones are handles to the same slot. Getter and setter calls happen
/// with no borrow of the slot held, so accessors may re-enter the object
/// model freely.
#[derive(Clone)]
pub struct PropertySlot(Rc<RefCell<SlotData>>);

impl PropertySlot {
    /// A data property holding `value`.
    pub fn data(value: Value, flags: PropertyFlags) -> Self {
        PropertySlot(Rc::new(RefCell::new(SlotData {
            value: Some(value),
            flags,
            ..SlotData::default()
        })))
    }

    /// An accessor property. The writable flag does not apply to accessors
    /// and is left unset.
    pub fn accessor(
        getter: Option<ObjectRef>,
        setter: Option<ObjectRef>,
        configurable: bool,
        enumerable: bool,
    ) -> Self {
        PropertySlot(Rc::new(RefCell::new(SlotData {
            value: None,
            flags: PropertyFlags {
                writable: false,
                configurable,
                enumerable,
            },
            accessor: true,
            getter,
            setter,
        })))
    }

    /// Read the property on behalf of `receiver`.
    ///
    /// Accessors call the getter with `receiver` as `this` (Undefined when
    /// there is no getter). Data properties return the stored value, or
    /// Undefined when unset.
    pub fn get(&self, receiver: &Value) -> JsResult<Value> {
        let getter = {
            let data = self.0.borrow();
            if !data.accessor {
                return Ok(data.value.clone().unwrap_or(Value::Undefined));
            }
            data.getter.clone()
        };
        match getter {
            Some(getter) => getter.get().call(receiver, &[]),
            None => Ok(Value::Undefined),
        }
    }

    /// Write the property on behalf of `receiver`.
    ///
    /// Accessors call the setter with `receiver` as `this` and `value` as
    /// the only argument, and do nothing without a setter. Data properties
    /// are overwritten unconditionally: checking [`is_writable`] is the
    /// caller's job.
    ///
    /// [`is_writable`]: PropertySlot::is_writable
    pub fn set(&self, receiver: &Value, value: Value) -> JsResult<()> {
        let setter = {
            let mut data = self.0.borrow_mut();
            if !data.accessor {
                data.value = Some(value);
                return Ok(());
            }
            data.setter.clone()
        };
        if let Some(setter) = setter {
            setter.get().call(receiver, &[value])?;
        }
        Ok(())
    }

    /// Writable flag set, or a setter present.
    pub fn is_writable(&self) -> bool {
        let data = self.0.borrow();
        data.flags.writable || data.setter.is_some()
    }

    /// Whether the slot is an accessor property.
    pub fn is_accessor(&self) -> bool {
        self.0.borrow().accessor
    }

    /// Current attribute flags.
    pub fn flags(&self) -> PropertyFlags {
        self.0.borrow().flags
    }

    /// Replace the attribute flags.
    pub fn set_flags(&self, flags: PropertyFlags) {
        self.0.borrow_mut().flags = flags;
    }

    /// The stored value of a data property, without invoking accessors.
    pub fn stored_value(&self) -> Option<Value> {
        self.0.borrow().value.clone()
    }

    /// The getter, if any.
    pub fn getter(&self) -> Option<ObjectRef> {
        self.0.borrow().getter.clone()
    }

    /// The setter, if any.
    pub fn setter(&self) -> Option<ObjectRef> {
        self.0.borrow().setter.clone()
    }

    /// Install or clear the getter, turning the slot into an accessor. The
    /// writable flag does not apply to accessors and is cleared.
    ///
    /// `Undefined` clears it; anything else must be a callable object, or a
    /// TypeError naming the value is raised and the slot is left untouched.
    pub fn set_getter(&self, getter: &Value, runtime: &dyn Runtime) -> JsResult<()> {
        let getter = accessor_function("Getter", getter, runtime)?;
        let mut data = self.0.borrow_mut();
        data.accessor = true;
        data.value = None;
        data.flags.writable = false;
        data.getter = getter;
        Ok(())
    }

    /// Install or clear the setter, turning the slot into an accessor.
    ///
    /// Same validation as [`set_getter`](PropertySlot::set_getter).
    pub fn set_setter(&self, setter: &Value, runtime: &dyn Runtime) -> JsResult<()> {
        let setter = accessor_function("Setter", setter, runtime)?;
        let mut data = self.0.borrow_mut();
        data.accessor = true;
        data.value = None;
        data.flags.writable = false;
        data.setter = setter;
        Ok(())
    }

    /// Whether two handles refer to the same slot.
    pub fn ptr_eq(&self, other: &PropertySlot) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Sum of the stored value, getter and setter contributions.
    pub fn mem_usage(&self, ctx: &mut dyn AccountingContext) -> Result<MemUsage, AccountingError> {
        let (value, getter, setter) = {
            let data = self.0.borrow();
            (data.value.clone(), data.getter.clone(), data.setter.clone())
        };
        let mut total = MemUsage::ZERO;
        if let Some(value) = value {
            total += value.mem_usage(ctx)?;
        }
        if let Some(getter) = getter {
            total += Value::Object(getter).mem_usage(ctx)?;
        }
        if let Some(setter) = setter {
            total += Value::Object(setter).mem_usage(ctx)?;
        }
        Ok(total)
    }
}

fn accessor_function(
    role: &str,
    candidate: &Value,
    runtime: &dyn Runtime,
) -> JsResult<Option<ObjectRef>> {
    match candidate {
        Value::Undefined => Ok(None),
        Value::Object(obj) if obj.get().is_callable() => Ok(Some(obj.clone())),
        other => Err(runtime.type_error(format!("{} must be a function: {}", role, other))),
    }
}

impl fmt::Debug for PropertySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.0.borrow();
        f.debug_struct("PropertySlot")
            .field("value", &data.value)
            .field("flags", &data.flags)
            .field("accessor", &data.accessor)
            .field("getter", &data.getter)
            .field("setter", &data.setter)
            .finish()
    }
}
