//! Unit tests for PropertySlot

use std::any::Any;

use js_value::{JsResult, Object, ObjectRef, PropertyFlags, PropertySlot, Value};

use crate::support::{plain, FunctionObject, TestRuntime};

fn function(result: Value) -> ObjectRef {
    ObjectRef::new(FunctionObject::returning(result))
}

fn calls_of(function: &ObjectRef) -> Vec<(Value, Vec<Value>)> {
    function.downcast_ref::<FunctionObject>().unwrap().calls()
}

#[cfg(test)]
mod data_slot_tests {
    use super::*;

    #[test]
    fn test_get_returns_stored_value() {
        let slot = PropertySlot::data(Value::Integer(7), PropertyFlags::ALL);
        assert!(matches!(slot.get(&Value::Undefined).unwrap(), Value::Integer(7)));
        assert!(!slot.is_accessor());
    }

    #[test]
    fn test_set_ignores_writable_flag() {
        let slot = PropertySlot::data(Value::Integer(1), PropertyFlags::NONE);
        assert!(!slot.is_writable());
        slot.set(&Value::Undefined, Value::Integer(2)).unwrap();
        assert!(matches!(slot.stored_value(), Some(Value::Integer(2))));
    }

    #[test]
    fn test_clones_share_the_slot() {
        let slot = PropertySlot::data(Value::Integer(1), PropertyFlags::ALL);
        let alias = slot.clone();
        alias.set(&Value::Undefined, Value::from("new")).unwrap();
        assert_eq!(
            slot.get(&Value::Undefined).unwrap().as_string().unwrap().as_str(),
            "new"
        );
        assert!(slot.ptr_eq(&alias));
    }

    #[test]
    fn test_flags_round_trip() {
        let slot = PropertySlot::data(Value::Null, PropertyFlags::ALL);
        assert!(slot.is_writable());
        let frozen = PropertyFlags {
            writable: false,
            ..PropertyFlags::ALL
        };
        slot.set_flags(frozen);
        assert_eq!(slot.flags(), frozen);
        assert!(!slot.is_writable());
    }
}

#[cfg(test)]
mod accessor_slot_tests {
    use super::*;

    #[test]
    fn test_getter_is_called_with_receiver() {
        let getter = function(Value::Integer(42));
        let slot = PropertySlot::accessor(Some(getter.clone()), None, true, true);
        let receiver = plain(Value::Undefined);

        let result = slot.get(&receiver).unwrap();
        assert!(matches!(result, Value::Integer(42)));

        let calls = calls_of(&getter);
        assert_eq!(calls.len(), 1);
        assert!(calls[0].0.strict_equals(&receiver).unwrap());
        assert!(calls[0].1.is_empty());
    }

    #[test]
    fn test_missing_getter_reads_undefined() {
        let slot = PropertySlot::accessor(None, None, true, true);
        assert!(matches!(slot.get(&Value::Null).unwrap(), Value::Undefined));
    }

    #[test]
    fn test_setter_receives_value() {
        let setter = function(Value::Undefined);
        let slot = PropertySlot::accessor(None, Some(setter.clone()), false, false);
        slot.set(&Value::Integer(1), Value::from("v")).unwrap();

        let calls = calls_of(&setter);
        assert_eq!(calls.len(), 1);
        assert!(matches!(calls[0].0, Value::Integer(1)));
        assert_eq!(calls[0].1.len(), 1);
        assert!(calls[0].1[0].strict_equals(&Value::from("v")).unwrap());
        assert!(slot.stored_value().is_none());
    }

    #[test]
    fn test_missing_setter_is_a_no_op() {
        let slot = PropertySlot::accessor(Some(function(Value::Integer(1))), None, true, true);
        slot.set(&Value::Undefined, Value::Integer(5)).unwrap();
        assert!(matches!(slot.get(&Value::Undefined).unwrap(), Value::Integer(1)));
    }

    #[test]
    fn test_setter_makes_slot_writable() {
        let slot = PropertySlot::accessor(None, Some(function(Value::Undefined)), true, true);
        assert!(!slot.flags().writable);
        assert!(slot.is_writable());
        assert!(!PropertySlot::accessor(None, None, true, true).is_writable());
    }
}

#[cfg(test)]
mod accessor_assignment_tests {
    use super::*;

    #[test]
    fn test_set_getter_converts_data_slot() {
        let runtime = TestRuntime::new();
        let slot = PropertySlot::data(Value::Integer(1), PropertyFlags::ALL);
        let getter = function(Value::from("computed"));
        slot.set_getter(&Value::Object(getter.clone()), &runtime).unwrap();

        assert!(slot.is_accessor());
        assert!(slot.stored_value().is_none());
        assert!(slot.getter().unwrap().ptr_eq(&getter));
        assert_eq!(
            slot.get(&Value::Undefined).unwrap().as_string().unwrap().as_str(),
            "computed"
        );
    }

    #[test]
    fn test_set_getter_clears_writable_flag() {
        let runtime = TestRuntime::new();
        let slot = PropertySlot::data(Value::Integer(1), PropertyFlags::ALL);
        slot.set_getter(&Value::Object(function(Value::Integer(9))), &runtime).unwrap();

        assert!(!slot.flags().writable);
        assert!(!slot.is_writable());
        slot.set(&Value::Undefined, Value::Integer(5)).unwrap();
        assert!(matches!(slot.get(&Value::Undefined).unwrap(), Value::Integer(9)));
    }

    #[test]
    fn test_cleared_setter_leaves_slot_read_only() {
        let runtime = TestRuntime::new();
        let slot = PropertySlot::data(Value::Integer(1), PropertyFlags::ALL);
        slot.set_setter(&Value::Object(function(Value::Undefined)), &runtime).unwrap();
        assert!(slot.is_writable());

        slot.set_setter(&Value::Undefined, &runtime).unwrap();
        assert!(slot.is_accessor());
        assert!(!slot.is_writable());
    }

    #[test]
    fn test_non_callable_getter_is_rejected() {
        let runtime = TestRuntime::new();
        let slot = PropertySlot::data(Value::Integer(1), PropertyFlags::ALL);
        let err = slot.set_getter(&Value::Integer(5), &runtime).unwrap_err();
        assert!(err.is_type_error());
        assert_eq!(err.message, "Getter must be a function: 5");
        assert!(!slot.is_accessor());
        assert!(matches!(slot.stored_value(), Some(Value::Integer(1))));
    }

    #[test]
    fn test_non_callable_setter_is_rejected() {
        let runtime = TestRuntime::new();
        let slot = PropertySlot::accessor(None, None, true, true);
        let err = slot.set_setter(&plain(Value::Null), &runtime).unwrap_err();
        assert_eq!(err.message, "Setter must be a function: [object Object]");
    }

    #[test]
    fn test_undefined_clears_accessor() {
        let runtime = TestRuntime::new();
        let slot = PropertySlot::accessor(None, Some(function(Value::Undefined)), true, true);
        slot.set_setter(&Value::Undefined, &runtime).unwrap();
        assert!(slot.setter().is_none());
        assert!(slot.is_accessor());
        assert!(!slot.is_writable());
    }
}

/// A getter that mutates the slot it is installed on.
struct FlagFlipper {
    slot: PropertySlot,
}

impl Object for FlagFlipper {
    fn to_primitive_number(&self) -> JsResult<Value> {
        Ok(Value::Float(f64::NAN))
    }

    fn to_primitive_string(&self) -> JsResult<Value> {
        Ok(Value::from(""))
    }

    fn is_callable(&self) -> bool {
        true
    }

    fn call(&self, _this: &Value, _args: &[Value]) -> JsResult<Value> {
        self.slot.set_flags(PropertyFlags::NONE);
        Ok(Value::Boolean(true))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod reentrancy_tests {
    use super::*;

    #[test]
    fn test_getter_may_touch_its_own_slot() {
        let runtime = TestRuntime::new();
        let slot = PropertySlot::accessor(None, None, true, true);
        let getter = ObjectRef::new(FlagFlipper { slot: slot.clone() });
        slot.set_getter(&Value::Object(getter), &runtime).unwrap();

        assert!(matches!(slot.get(&Value::Undefined).unwrap(), Value::Boolean(true)));
        assert_eq!(slot.flags(), PropertyFlags::NONE);
    }
}
