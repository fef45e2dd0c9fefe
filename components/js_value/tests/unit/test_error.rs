//! Unit tests for JsError, ErrorKind and AccountingError

use js_value::{AccountingError, ErrorKind, JsError, Symbol, Value};

#[cfg(test)]
mod error_kind_tests {
    use super::*;

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::TypeError.to_string(), "TypeError");
        assert_eq!(ErrorKind::ReferenceError.to_string(), "ReferenceError");
    }

    #[test]
    fn test_error_kind_equality() {
        assert_eq!(ErrorKind::TypeError, ErrorKind::TypeError);
        assert_ne!(ErrorKind::TypeError, ErrorKind::ReferenceError);
    }
}

#[cfg(test)]
mod js_error_tests {
    use super::*;

    #[test]
    fn test_type_error_display() {
        let error = JsError::type_error("x is not a function");
        assert!(error.is_type_error());
        assert!(!error.is_reference_error());
        assert_eq!(error.to_string(), "TypeError: x is not a function");
    }

    #[test]
    fn test_reference_error_names_binding() {
        let error = JsError::reference_error("undeclared");
        assert_eq!(error.kind, ErrorKind::ReferenceError);
        assert_eq!(error.to_string(), "ReferenceError: undeclared is not defined");
    }

    #[test]
    fn test_new_with_kind() {
        let error = JsError::new(ErrorKind::TypeError, String::from("boom"));
        assert_eq!(error, JsError::type_error("boom"));
    }

    #[test]
    fn test_error_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&JsError::type_error("boom"));
    }

    #[test]
    fn test_errors_leave_value_untouched() {
        let symbol = Value::Symbol(Symbol::new(Some("tag")));
        let before = symbol.clone();
        assert!(symbol.to_number().is_err());
        assert!(symbol.same_value(&before).unwrap());
    }
}

#[cfg(test)]
mod accounting_error_tests {
    use super::*;

    #[test]
    fn test_depth_limit_display() {
        let error = AccountingError::DepthLimitExceeded { limit: 16 };
        assert_eq!(
            error.to_string(),
            "object graph exceeds the accounting depth limit of 16"
        );
    }

    #[test]
    fn test_native_lookup_display() {
        let error = AccountingError::NativeLookup("handle closed".to_string());
        assert_eq!(error.to_string(), "native size lookup failed: handle closed");
    }
}
