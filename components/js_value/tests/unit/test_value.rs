//! Unit tests for Value construction, inspection and export

use js_value::{
    float_to_value, int_to_value, Exported, JsString, ObjectRef, PropertyFlags, PropertySlot,
    Symbol, Value, ValueKind,
};

use crate::support::{plain, FunctionObject, PlainObject};

#[cfg(test)]
mod value_kind_tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        assert_eq!(Value::Integer(1).kind(), ValueKind::Integer);
        assert_eq!(Value::BigInteger(1 << 40).kind(), ValueKind::BigInteger);
        assert_eq!(Value::Float(0.5).kind(), ValueKind::Float);
        assert_eq!(Value::from("s").kind(), ValueKind::String);
        assert_eq!(Value::unresolved("x").kind(), ValueKind::Unresolved);
        let slot = PropertySlot::data(Value::Null, PropertyFlags::ALL);
        assert_eq!(Value::from(slot).kind(), ValueKind::PropertySlot);
    }

    #[test]
    fn test_predicates() {
        assert!(Value::Integer(0).is_number());
        assert!(Value::Float(f64::NAN).is_number());
        assert!(!Value::from("1").is_number());
        assert!(Value::Null.is_nullish());
        assert!(Value::Undefined.is_nullish());
        assert!(!Value::Boolean(false).is_nullish());
        assert!(plain(Value::Undefined).is_object());
    }

    #[test]
    fn test_accessors_do_not_coerce() {
        assert_eq!(Value::Integer(-3).as_int(), Some(-3));
        assert_eq!(Value::BigInteger(1 << 40).as_int(), Some(1 << 40));
        assert_eq!(Value::Float(3.0).as_int(), None);
        assert_eq!(Value::Float(3.0).as_float(), Some(3.0));
        assert_eq!(Value::from("x").as_string(), Some(&JsString::new("x")));
        assert!(Value::Integer(1).as_string().is_none());
        let sym = Symbol::new(None);
        assert_eq!(Value::from(sym.clone()).as_symbol(), Some(&sym));
    }
}

#[cfg(test)]
mod type_of_tests {
    use super::*;

    #[test]
    fn test_type_of_primitives() {
        assert_eq!(Value::Integer(1).type_of(), "number");
        assert_eq!(Value::Float(f64::INFINITY).type_of(), "number");
        assert_eq!(Value::from("").type_of(), "string");
        assert_eq!(Value::Symbol(Symbol::new(None)).type_of(), "symbol");
        assert_eq!(Value::Null.type_of(), "object");
    }

    #[test]
    fn test_type_of_objects() {
        assert_eq!(plain(Value::Undefined).type_of(), "object");
        let function = ObjectRef::new(FunctionObject::returning(Value::Undefined));
        assert_eq!(Value::Object(function).type_of(), "function");
    }
}

#[cfg(test)]
mod canonical_number_tests {
    use super::*;

    #[test]
    fn test_int_to_value_width() {
        assert!(matches!(int_to_value(i64::from(i32::MAX)), Value::Integer(i32::MAX)));
        assert!(matches!(
            int_to_value(i64::from(i32::MAX) + 1),
            Value::BigInteger(2_147_483_648)
        ));
        assert!(matches!(int_to_value(i64::MIN), Value::BigInteger(i64::MIN)));
    }

    #[test]
    fn test_float_to_value_keeps_integer_fast_path() {
        assert!(matches!(float_to_value(2.0), Value::Integer(2)));
        assert!(matches!(float_to_value(-7.0), Value::Integer(-7)));
        assert!(matches!(float_to_value(2.5), Value::Float(f) if f == 2.5));
        assert!(matches!(float_to_value(3e9), Value::Float(f) if f == 3e9));
    }

    #[test]
    fn test_float_to_value_preserves_negative_zero() {
        match float_to_value(-0.0) {
            Value::Float(f) => assert!(f == 0.0 && f.is_sign_negative()),
            other => panic!("expected Float(-0.0), got {:?}", other),
        }
    }
}

#[cfg(test)]
mod display_tests {
    use super::*;

    #[test]
    fn test_display_never_raises() {
        assert_eq!(Value::Float(1e21).to_string(), "1e+21");
        assert_eq!(Value::Symbol(Symbol::new(Some("k"))).to_string(), "Symbol(k)");
        assert_eq!(plain(Value::Undefined).to_string(), "[object Object]");
        assert_eq!(Value::unresolved("ghost").to_string(), "<unresolved ghost>");
        let slot = PropertySlot::data(Value::Integer(1), PropertyFlags::ALL);
        assert_eq!(Value::from(slot).to_string(), "");
    }
}

#[cfg(test)]
mod export_tests {
    use super::*;

    #[test]
    fn test_export_scalars() {
        assert_eq!(Value::Integer(3).export().unwrap(), Exported::Integer(3));
        assert_eq!(Value::BigInteger(1 << 40).export().unwrap(), Exported::Integer(1 << 40));
        assert_eq!(Value::Float(3.0).export().unwrap(), Exported::Float(3.0));
        assert_eq!(Value::Undefined.export().unwrap(), Exported::Null);
        assert_eq!(Value::Null.export().unwrap(), Exported::Null);
        assert_eq!(
            Value::from("text").export().unwrap(),
            Exported::String("text".to_string())
        );
    }

    #[test]
    fn test_export_symbol_uses_description() {
        let sym = Value::Symbol(Symbol::new(Some("desc")));
        assert_eq!(sym.export().unwrap(), Exported::String("desc".to_string()));
        let anonymous = Value::Symbol(Symbol::new(None));
        assert_eq!(anonymous.export().unwrap(), Exported::String(String::new()));
    }

    #[test]
    fn test_export_object_through_capability() {
        let object = PlainObject::new(Value::Undefined);
        object.push(Value::Integer(1));
        object.push(Value::from("two"));
        let value = Value::Object(ObjectRef::new(object));
        let exported = value.export().unwrap();
        assert_eq!(
            serde_json::to_string(&exported).unwrap(),
            r#"{"0":1,"1":"two"}"#
        );
    }

    #[test]
    fn test_export_non_finite_float_serialises_as_null() {
        let exported = Value::Float(f64::NAN).export().unwrap();
        assert_eq!(serde_json::to_string(&exported).unwrap(), "null");
    }

    #[test]
    fn test_export_unresolved_raises() {
        let err = Value::unresolved("nope").export().unwrap_err();
        assert!(err.is_reference_error());
    }

    #[test]
    #[should_panic(expected = "cannot export a property slot")]
    fn test_export_property_slot_aborts() {
        let slot = PropertySlot::data(Value::Integer(1), PropertyFlags::ALL);
        let _ = Value::from(slot).export();
    }
}
